// ── Task construction ──
//
// A task record is the fixed template plus three per-submit inputs: the
// selected address, the customer's contact details, and the submit time.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use shipto_api::{AcUnit, TaskLocation, TaskRecord};

use crate::model::{Address, ContactDetails, CustomerId};

/// What the reducer hands the gateway when a submit passes its preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub address: Address,
}

/// Fixed fields of every task. Overridable from the `[task]` config section;
/// any field left out keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskTemplate {
    pub title: String,
    pub status: String,
    pub description: String,
    pub ac_units: Vec<AcUnit>,
    pub servicing_date: String,
    pub task_type: String,
    pub customer_complaint: String,
    pub issue_observed: String,
    pub note: String,
    pub assigned_technicians: Vec<String>,
}

impl Default for TaskTemplate {
    fn default() -> Self {
        Self {
            title: "Address Change".into(),
            status: String::new(),
            description: "customer location mapping".into(),
            ac_units: vec![
                AcUnit {
                    unit_type: "Split AC".into(),
                    capacity: "1.5 Ton".into(),
                    quantity: 2,
                },
                AcUnit {
                    unit_type: "Cassete AC".into(),
                    capacity: "2 Ton".into(),
                    quantity: 1,
                },
            ],
            servicing_date: "2024-09-26T00:00:00.000Z".into(),
            task_type: "address".into(),
            customer_complaint: "Any customer complaint here".into(),
            issue_observed: "Water Dripping from AC".into(),
            note: "Any additional notes here".into(),
            assigned_technicians: vec!["pranshi".into()],
        }
    }
}

impl TaskTemplate {
    /// Fill the template for one submission.
    pub fn render(
        &self,
        address: &Address,
        contact: &ContactDetails,
        raised_at: DateTime<Utc>,
    ) -> TaskRecord {
        TaskRecord {
            title: self.title.clone(),
            status: self.status.clone(),
            description: self.description.clone(),
            address: vec![TaskLocation {
                location: address.location(),
            }],
            client_number: contact.mobile.clone(),
            client_name: contact.full_name.clone(),
            ac_units: self.ac_units.clone(),
            servicing_date: self.servicing_date.clone(),
            task_type: self.task_type.clone(),
            customer_complaint: self.customer_complaint.clone(),
            issue_observed: self.issue_observed.clone(),
            note: self.note.clone(),
            complaint_raised: raised_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            assigned_technicians: self.assigned_technicians.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn address() -> Address {
        Address {
            line1: "1 Main St".into(),
            line2: "Apt 2".into(),
            state: "CA".into(),
            city: "LA".into(),
            pincode: "90001".into(),
        }
    }

    #[test]
    fn default_template_renders_full_task() {
        let contact = ContactDetails {
            full_name: Some("Alice A".into()),
            mobile: Some("555-1".into()),
        };
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();

        let task = TaskTemplate::default().render(&address(), &contact, at);

        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({
                "title": "Address Change",
                "status": "",
                "description": "customer location mapping",
                "address": [{ "location": "Apt 2, LA, 90001" }],
                "client_number": "555-1",
                "client_name": "Alice A",
                "ac_units": [
                    { "type": "Split AC", "capacity": "1.5 Ton", "quantity": 2 },
                    { "type": "Cassete AC", "capacity": "2 Ton", "quantity": 1 }
                ],
                "servicingDate": "2024-09-26T00:00:00.000Z",
                "taskType": "address",
                "customerComplaint": "Any customer complaint here",
                "issueObserved": "Water Dripping from AC",
                "note": "Any additional notes here",
                "complaintRaised": "2024-05-01T10:00:00.000Z",
                "assignedTechnicians": ["pranshi"]
            })
        );
    }

    #[test]
    fn missing_contact_fields_are_omitted() {
        let task = TaskTemplate::default().render(&address(), &ContactDetails::default(), Utc::now());
        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("client_name").is_none());
        assert!(value.get("client_number").is_none());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let template: TaskTemplate =
            serde_json::from_value(json!({ "title": "Relocation", "assigned_technicians": [] }))
                .unwrap();
        assert_eq!(template.title, "Relocation");
        assert!(template.assigned_technicians.is_empty());
        assert_eq!(template.task_type, "address");
        assert_eq!(template.ac_units.len(), 2);
    }
}
