//! Screen implementations: the address form and its add-address modal.

pub mod address_editor;
pub mod address_form;

pub use address_editor::AddressEditorModal;
pub use address_form::AddressFormScreen;
