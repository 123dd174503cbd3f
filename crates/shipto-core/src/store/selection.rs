// ── Address selection ──

use crate::model::{Customer, CustomerId};

/// Identifies the address list a selection was made against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionKey {
    pub customer: CustomerId,
    pub address_version: u64,
}

impl SelectionKey {
    pub fn of(customer: &Customer) -> Self {
        Self {
            customer: customer.id.clone(),
            address_version: customer.address_version(),
        }
    }
}

/// Single-select checkbox state.
///
/// The index is only readable through the key it was set under; once the
/// matched customer or its address list changes, it reads as `None`.
#[derive(Debug, Clone, Default)]
pub struct AddressSelection {
    current: Option<(SelectionKey, usize)>,
}

impl AddressSelection {
    pub fn index_for(&self, key: &SelectionKey) -> Option<usize> {
        self.current
            .as_ref()
            .filter(|(k, _)| k == key)
            .map(|(_, index)| *index)
    }

    pub(crate) fn select(&mut self, key: SelectionKey, index: usize) {
        self.current = Some((key, index));
    }

    pub(crate) fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Address;

    #[test]
    fn later_toggle_overwrites() {
        let c = Customer::new("C1", "Alice", vec![Address::default(), Address::default()]);
        let key = SelectionKey::of(&c);
        let mut sel = AddressSelection::default();

        sel.select(key.clone(), 0);
        sel.select(key.clone(), 1);

        assert_eq!(sel.index_for(&key), Some(1));
    }

    #[test]
    fn different_customer_reads_none() {
        let a = Customer::new("C1", "Alice", vec![Address::default()]);
        let b = Customer::new("C2", "Bob", vec![Address::default()]);
        let mut sel = AddressSelection::default();

        sel.select(SelectionKey::of(&a), 0);

        assert_eq!(sel.index_for(&SelectionKey::of(&b)), None);
    }

    #[test]
    fn append_makes_selection_stale() {
        let mut c = Customer::new("C1", "Alice", vec![Address::default()]);
        let mut sel = AddressSelection::default();
        sel.select(SelectionKey::of(&c), 0);

        c.push_address(Address::default());

        assert_eq!(sel.index_for(&SelectionKey::of(&c)), None);
    }
}
