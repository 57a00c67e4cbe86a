use assert_matches::assert_matches;

use super::*;

fn customer() -> json::Value {
    json::json!({
        "name": "Customer 1",
        "billing": {
            "address": {
                "id": 12,
            },
        },
    })
}

#[test]
fn test_parse_rejects_empty_paths() {
    assert_matches!(Accessor::parse(""), Err(Error::InvalidPath(_)));
    assert_matches!(Accessor::parse("a..b"), Err(Error::InvalidPath(_)));
    assert_matches!(Accessor::parse(".a"), Err(Error::InvalidPath(_)));
    assert_matches!(Accessor::parse("a."), Err(Error::InvalidPath(_)));
}

#[test]
fn test_parse_rooted_requires_two_segments() {
    assert_matches!(Accessor::parse_rooted("name"), Err(Error::InvalidPath(_)));
    assert!(Accessor::parse_rooted("customer.name").is_ok());
}

#[test]
fn test_get_direct_property() {
    let accessor = Accessor::parse("name").unwrap();
    assert_eq!(accessor.get(&customer()), Some(&json::json!("Customer 1")));
}

#[test]
fn test_get_nested_property() {
    let accessor = Accessor::parse("billing.address.id").unwrap();
    assert_eq!(accessor.get(&customer()), Some(&json::json!(12)));
}

#[test]
fn test_get_rooted_path() {
    let accessor = Accessor::parse_rooted("customer.billing.address.id").unwrap();
    assert_eq!(accessor.get(&customer()), Some(&json::json!(12)));
}

#[test]
fn test_get_through_missing_or_null_host() {
    let accessor = Accessor::parse("billing.address.id").unwrap();
    assert_eq!(accessor.get(&json::json!({})), None);
    assert_eq!(accessor.get(&json::json!({"billing": null})), None);
    assert_eq!(accessor.get(&json::json!({"billing": "detached"})), None);
}

#[test]
fn test_get_null_leaf_is_absent() {
    let accessor = Accessor::parse("name").unwrap();
    assert_eq!(accessor.get(&json::json!({"name": null})), None);
}

#[test]
fn test_set_direct_property() {
    let mut value = json::json!({});
    let accessor = Accessor::parse("name").unwrap();
    assert!(accessor.set(&mut value, json::json!("Customer 2"), false));
    assert_eq!(value, json::json!({"name": "Customer 2"}));
}

#[test]
fn test_set_creates_missing_hosts() {
    let mut value = json::json!({});
    let accessor = Accessor::parse("billing.address.id").unwrap();
    assert!(accessor.set(&mut value, json::json!(7), true));
    assert_eq!(value, json::json!({"billing": {"address": {"id": 7}}}));
}

#[test]
fn test_set_replaces_null_hosts_when_creating() {
    let mut value = json::json!({"billing": null});
    let accessor = Accessor::parse("billing.address.id").unwrap();
    assert!(accessor.set(&mut value, json::json!(7), true));
    assert_eq!(value, json::json!({"billing": {"address": {"id": 7}}}));
}

#[test]
fn test_set_aborts_without_create_missing() {
    let mut value = json::json!({"billing": null});
    let accessor = Accessor::parse("billing.address.id").unwrap();
    assert!(!accessor.set(&mut value, json::json!(7), false));
    assert_eq!(value, json::json!({"billing": null}));
}

#[test]
fn test_set_aborts_on_non_object_host() {
    let mut value = json::json!({"billing": "detached"});
    let accessor = Accessor::parse("billing.address.id").unwrap();
    assert!(!accessor.set(&mut value, json::json!(7), true));
    assert_eq!(value, json::json!({"billing": "detached"}));
}

#[test]
fn test_set_overwrites_existing_value() {
    let mut value = customer();
    let accessor = Accessor::parse("billing.address.id").unwrap();
    assert!(accessor.set(&mut value, json::json!(99), false));
    assert_eq!(accessor.get(&value), Some(&json::json!(99)));
}
