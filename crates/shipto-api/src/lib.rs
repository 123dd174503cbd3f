// shipto-api: Async Rust client for the customer directory and task service

pub mod directory;
pub mod error;
pub mod models;
mod response;
pub mod tasks;
pub mod transport;

pub use directory::DirectoryClient;
pub use error::Error;
pub use models::{AcUnit, AddressRecord, CustomerDetailRecord, CustomerRecord, TaskLocation, TaskRecord};
pub use tasks::TaskClient;
pub use transport::{TlsMode, TransportConfig};
