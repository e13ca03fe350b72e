//! Tests for typed IDs.

use std::str::FromStr;
use uuid::Uuid;

use super::{CategoryId, LocationId, UserId};

#[test]
fn test_new_ids_are_unique() {
    let a = UserId::new();
    let b = UserId::new();
    assert_ne!(a, b);
}

#[test]
fn test_from_uuid_round_trip() {
    let uuid = Uuid::new_v4();
    let id = LocationId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_display_and_parse() {
    let id = CategoryId::new();
    let parsed = CategoryId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(CategoryId::from_str("not-a-uuid").is_err());
}
