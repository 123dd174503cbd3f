// ── Add-address editor ──

use std::mem;

use crate::model::{Address, AddressField};

/// Modal draft holder. Save and cancel both close it and reset the draft.
#[derive(Debug, Clone, Default)]
pub struct AddressEditor {
    open: bool,
    draft: Address,
}

impl AddressEditor {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &Address {
        &self.draft
    }

    pub(crate) fn open(&mut self) {
        self.open = true;
    }

    /// Returns `false` when the editor is closed and nothing changed.
    pub(crate) fn set(&mut self, field: AddressField, value: String) -> bool {
        if !self.open {
            return false;
        }
        *self.draft.field_mut(field) = value;
        true
    }

    /// Close and hand out the draft.
    pub(crate) fn take(&mut self) -> Address {
        self.open = false;
        mem::take(&mut self.draft)
    }

    pub(crate) fn cancel(&mut self) {
        self.open = false;
        self.draft = Address::default();
    }
}
