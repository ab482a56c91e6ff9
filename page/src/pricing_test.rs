use super::*;
use crate::store::MemoryStore;

#[test]
fn checked_toggle_means_yearly() {
    assert_eq!(Billing::from_checked(true), Billing::Yearly);
    assert_eq!(Billing::from_checked(false), Billing::Monthly);
    assert!(Billing::Yearly.is_checked());
    assert!(!Billing::Monthly.is_checked());
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Billing::parse("yearly"), Some(Billing::Yearly));
    assert_eq!(Billing::parse("monthly"), Some(Billing::Monthly));
    assert_eq!(Billing::parse("weekly"), None);
}

#[test]
fn save_writes_enumerated_value() {
    let mut store = MemoryStore::new();
    save(&mut store, Billing::Yearly);
    assert_eq!(store.get(keys::BILLING_PREFERENCE).unwrap().as_deref(), Some("yearly"));
    save(&mut store, Billing::Monthly);
    assert_eq!(load(&store), Some(Billing::Monthly));
}

#[test]
fn load_without_preference_is_none() {
    assert_eq!(load(&MemoryStore::new()), None);
}
