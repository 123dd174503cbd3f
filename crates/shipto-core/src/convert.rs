// ── API-to-domain type conversions ──
//
// Bridges raw `shipto_api` records into `shipto_core::model` types. Records
// the workflow cannot use (no identifier) are dropped with a warning rather
// than failing the whole directory.

use shipto_api::{AddressRecord, CustomerDetailRecord, CustomerRecord};
use tracing::warn;

use crate::error::CoreError;
use crate::model::{Address, ContactDetails, Customer, CustomerId};

impl From<AddressRecord> for Address {
    fn from(rec: AddressRecord) -> Self {
        Self {
            line1: rec.line1,
            line2: rec.line2,
            state: rec.state,
            city: rec.city,
            pincode: rec.pincode,
        }
    }
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = CoreError;

    fn try_from(rec: CustomerRecord) -> Result<Self, Self::Error> {
        let id = rec
            .identifier()
            .map(CustomerId::from)
            .ok_or_else(|| CoreError::InvalidResponse {
                message: format!("customer '{}' has no identifier", rec.name),
            })?;
        let addresses = rec
            .shipping_address
            .unwrap_or_default()
            .into_iter()
            .map(Address::from)
            .collect();
        Ok(Customer::new(id, rec.name, addresses))
    }
}

impl From<CustomerDetailRecord> for ContactDetails {
    fn from(rec: CustomerDetailRecord) -> Self {
        Self {
            full_name: rec.full_name,
            mobile: rec.mobile,
        }
    }
}

/// Convert a fetched directory, keeping directory order.
pub fn customers_from_records(records: Vec<CustomerRecord>) -> Vec<Customer> {
    records
        .into_iter()
        .filter_map(|rec| match Customer::try_from(rec) {
            Ok(customer) => Some(customer),
            Err(e) => {
                warn!(error = %e, "skipping directory entry");
                None
            }
        })
        .collect()
}
