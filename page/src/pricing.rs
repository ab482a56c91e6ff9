//! Monthly/yearly billing preference behind the pricing toggle.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use crate::store::{KeyValueStore, keys, read_or_unset, write_or_warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Billing {
    #[default]
    Monthly,
    Yearly,
}

impl Billing {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// The toggle is checked for yearly billing.
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Yearly } else { Self::Monthly }
    }

    #[must_use]
    pub fn is_checked(self) -> bool {
        self == Self::Yearly
    }
}

/// Read the stored preference.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Option<Billing> {
    read_or_unset(store, keys::BILLING_PREFERENCE).and_then(|raw| Billing::parse(&raw))
}

/// Persist the preference.
pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, billing: Billing) {
    write_or_warn(store, keys::BILLING_PREFERENCE, billing.as_str());
}
