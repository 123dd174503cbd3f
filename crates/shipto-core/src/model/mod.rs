// ── Domain model ──
//
// Canonical types the workflow operates on. Wire records from shipto-api
// are converted into these in `crate::convert`.

pub mod contact;
pub mod customer;

pub use contact::ContactDetails;
pub use customer::{Address, AddressField, Customer, CustomerId};
