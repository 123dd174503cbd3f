// Wire types for the customer directory, detail lookup, and task service.
//
// The directory is a loosely-shaped document store: identifiers show up
// under several keys and as strings or numbers, address fields can be
// missing or null. Fields are decoded leniently so one odd record never
// fails the whole directory fetch.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ── Directory ────────────────────────────────────────────────────────

/// One entry of `GET <directory>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub customer_id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "lenient_opt_string")]
    pub document_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Absent and `null` both mean "no addresses".
    #[serde(default)]
    pub shipping_address: Option<Vec<AddressRecord>>,
    /// Catch-all for fields the workflow does not read.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl CustomerRecord {
    /// The identifier the detail endpoint is keyed by.
    ///
    /// Prefers `customer_id`, then `id`, then the document `_id`.
    pub fn identifier(&self) -> Option<&str> {
        self.customer_id
            .as_deref()
            .or(self.id.as_deref())
            .or(self.document_id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

/// A shipping address as stored in the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub line1: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub line2: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pincode: String,
}

// ── Detail lookup ────────────────────────────────────────────────────

/// Response of `GET <detail>/<id>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDetailRecord {
    #[serde(rename = "Fullname", default, deserialize_with = "lenient_opt_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub mobile: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

// ── Task ─────────────────────────────────────────────────────────────

/// Body of `POST <task>`. Field names match what the task service expects,
/// which mixes snake_case and camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub title: String,
    pub status: String,
    pub description: String,
    pub address: Vec<TaskLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    pub ac_units: Vec<AcUnit>,
    #[serde(rename = "servicingDate")]
    pub servicing_date: String,
    #[serde(rename = "taskType")]
    pub task_type: String,
    #[serde(rename = "customerComplaint")]
    pub customer_complaint: String,
    #[serde(rename = "issueObserved")]
    pub issue_observed: String,
    pub note: String,
    #[serde(rename = "complaintRaised")]
    pub complaint_raised: String,
    #[serde(rename = "assignedTechnicians")]
    pub assigned_technicians: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLocation {
    pub location: String,
}

/// Equipment line item attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcUnit {
    #[serde(rename = "type")]
    pub unit_type: String,
    pub capacity: String,
    pub quantity: u32,
}

// ── Lenient decoders ─────────────────────────────────────────────────

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Value>::deserialize(d)?.and_then(scalar_to_string))
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(lenient_opt_string(d)?.unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn customer_identifier_prefers_customer_id() {
        let rec: CustomerRecord = serde_json::from_value(json!({
            "_id": "66f0aa",
            "id": "C1",
            "customer_id": "CUST-9",
            "name": "Alice",
        }))
        .unwrap();
        assert_eq!(rec.identifier(), Some("CUST-9"));
    }

    #[test]
    fn numeric_ids_and_pincodes_decode_as_strings() {
        let rec: CustomerRecord = serde_json::from_value(json!({
            "id": 42,
            "name": "Bob",
            "shipping_address": [{ "line1": "x", "pincode": 560001, "city": null }],
        }))
        .unwrap();
        assert_eq!(rec.identifier(), Some("42"));
        let addr = &rec.shipping_address.unwrap()[0];
        assert_eq!(addr.pincode, "560001");
        assert_eq!(addr.city, "");
        assert_eq!(addr.line2, "");
    }

    #[test]
    fn null_shipping_address_is_none() {
        let rec: CustomerRecord =
            serde_json::from_value(json!({ "id": "C2", "name": "Cy", "shipping_address": null }))
                .unwrap();
        assert!(rec.shipping_address.is_none());
    }

    #[test]
    fn missing_identifier_is_none() {
        let rec: CustomerRecord = serde_json::from_value(json!({ "name": "Nobody", "id": "" })).unwrap();
        assert_eq!(rec.identifier(), None);
    }

    #[test]
    fn task_record_uses_service_field_names() {
        let task = TaskRecord {
            title: "Address Change".into(),
            status: String::new(),
            description: "d".into(),
            address: vec![TaskLocation { location: "Apt 2, LA, 90001".into() }],
            client_number: None,
            client_name: Some("Alice A".into()),
            ac_units: vec![AcUnit {
                unit_type: "Split AC".into(),
                capacity: "1.5 Ton".into(),
                quantity: 2,
            }],
            servicing_date: "2024-09-26T00:00:00.000Z".into(),
            task_type: "address".into(),
            customer_complaint: "c".into(),
            issue_observed: "i".into(),
            note: "n".into(),
            complaint_raised: "2024-01-01T00:00:00.000Z".into(),
            assigned_technicians: vec!["pranshi".into()],
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["servicingDate"], "2024-09-26T00:00:00.000Z");
        assert_eq!(value["taskType"], "address");
        assert_eq!(value["ac_units"][0]["type"], "Split AC");
        assert_eq!(value["assignedTechnicians"][0], "pranshi");
        assert_eq!(value["client_name"], "Alice A");
        assert!(value.get("client_number").is_none());
    }
}
