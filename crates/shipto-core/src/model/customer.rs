// ── Customers and addresses ──

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Identifier the detail endpoint is keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for CustomerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A shipping address. No identity beyond its position in a customer's list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub state: String,
    pub city: String,
    pub pincode: String,
}

/// The editable fields of an [`Address`], in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum AddressField {
    #[strum(to_string = "Line 1")]
    Line1,
    #[strum(to_string = "Line 2")]
    Line2,
    State,
    City,
    Pincode,
}

impl AddressField {
    /// Next field, wrapping around.
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let pos = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }

    /// Previous field, wrapping around.
    pub fn prev(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let pos = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(pos + all.len() - 1) % all.len()]
    }
}

impl Address {
    /// Location string sent with a task: `"{line2}, {city}, {pincode}"`.
    pub fn location(&self) -> String {
        format!("{}, {}, {}", self.line2, self.city, self.pincode)
    }

    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::Line1 => &self.line1,
            AddressField::Line2 => &self.line2,
            AddressField::State => &self.state,
            AddressField::City => &self.city,
            AddressField::Pincode => &self.pincode,
        }
    }

    pub fn field_mut(&mut self, field: AddressField) -> &mut String {
        match field {
            AddressField::Line1 => &mut self.line1,
            AddressField::Line2 => &mut self.line2,
            AddressField::State => &mut self.state,
            AddressField::City => &mut self.city,
            AddressField::Pincode => &mut self.pincode,
        }
    }
}

/// A directory entry.
///
/// `address_version` starts at 0 and is bumped on every local append, so a
/// selection made against an older address list can be detected as stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub shipping_address: Vec<Address>,
    address_version: u64,
}

impl Customer {
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>, addresses: Vec<Address>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            shipping_address: addresses,
            address_version: 0,
        }
    }

    pub fn address_version(&self) -> u64 {
        self.address_version
    }

    /// Case-insensitive substring match on the name. `needle` must already
    /// be lowercase.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    pub(crate) fn push_address(&mut self, address: Address) {
        self.shipping_address.push(address);
        self.address_version += 1;
    }
}
