use super::*;
use serde_json::json;

// =============================================================
// Id
// =============================================================

#[test]
fn id_accepts_string_and_integer() {
    let from_str: Id = serde_json::from_value(json!("t-1")).unwrap();
    let from_num: Id = serde_json::from_value(json!(42)).unwrap();
    assert_eq!(from_str.as_str(), "t-1");
    assert_eq!(from_num, Id::from(42));
    assert_eq!(from_num, Id::from("42"));
}

#[test]
fn id_serializes_as_string() {
    assert_eq!(serde_json::to_value(Id::from(7)).unwrap(), json!("7"));
}

#[test]
fn id_rejects_objects() {
    assert!(serde_json::from_value::<Id>(json!({ "id": 1 })).is_err());
}

// =============================================================
// UserRole
// =============================================================

#[test]
fn user_role_codes_match_wire_values() {
    assert_eq!(UserRole::Pending.code(), 0);
    assert_eq!(UserRole::Staff.code(), 2);
    assert_eq!(UserRole::Admin.code(), 4);
}

#[test]
fn role_query_omits_name_when_absent() {
    let body = serde_json::to_value(RoleQuery::role(UserRole::Pending)).unwrap();
    assert_eq!(body, json!({ "userrole": 0 }));
}

#[test]
fn role_query_carries_search_name() {
    let body = serde_json::to_value(RoleQuery::search(UserRole::Staff, "Jo")).unwrap();
    assert_eq!(body, json!({ "userrole": 2, "name": "Jo" }));
}

// =============================================================
// Tenant staff truthiness
// =============================================================

fn tenant_with_staff(staff: serde_json::Value) -> Tenant {
    serde_json::from_value(json!({
        "id": 1,
        "firstName": "Ada",
        "lastName": "Park",
        "phone": "5551234",
        "propertyName": "Elm",
        "staff": staff,
    }))
    .unwrap()
}

#[test]
fn tenant_without_staff_key_is_unstaffed() {
    let tenant: Tenant = serde_json::from_value(json!({ "id": 1 })).unwrap();
    assert!(!tenant.is_staffed());
    assert!(tenant.first_name.is_empty());
}

#[test]
fn tenant_null_or_empty_staff_is_unstaffed() {
    assert!(!tenant_with_staff(json!(null)).is_staffed());
    assert!(!tenant_with_staff(json!("")).is_staffed());
}

#[test]
fn tenant_single_staff_id_is_staffed() {
    let tenant = tenant_with_staff(json!(9));
    assert!(tenant.is_staffed());
    assert_eq!(tenant.assigned_staff_id(), Some(&Id::from(9)));
}

#[test]
fn tenant_falsy_scalar_staff_is_unstaffed() {
    assert!(!tenant_with_staff(json!(0)).is_staffed());
    assert!(!tenant_with_staff(json!(false)).is_staffed());
    assert_eq!(tenant_with_staff(json!(0)).assigned_staff_id(), None);
}

#[test]
fn tenant_truthy_scalar_staff_is_staffed() {
    assert!(tenant_with_staff(json!(true)).is_staffed());
    assert!(tenant_with_staff(json!("0")).is_staffed());
}

#[test]
fn tenant_single_staff_object_is_one_member() {
    let tenant = tenant_with_staff(json!({ "id": 5, "firstName": "Jo", "lastName": "Kim" }));
    assert!(tenant.is_staffed());
    assert_eq!(tenant.staff_members()[0].id, Id::from(5));
}

#[test]
fn tenant_unrecognized_staff_object_is_still_staffed() {
    assert!(tenant_with_staff(json!({ "name": 5 })).is_staffed());
    assert!(tenant_with_staff(json!([1, 2])).is_staffed());
}

#[test]
fn tenant_list_survives_every_staff_shape() {
    let list: TenantList = serde_json::from_value(json!({
        "tenants": [
            { "id": 1, "staff": 0 },
            { "id": 2, "staff": false },
            { "id": 3, "staff": true },
            { "id": 4, "staff": { "id": 5 } },
            { "id": 5, "staff": "" },
            { "id": 6, "staff": ["S1"] },
        ]
    }))
    .unwrap();
    let staffed: Vec<bool> = list.tenants.iter().map(Tenant::is_staffed).collect();
    assert_eq!(staffed, vec![false, false, true, true, false, true]);
}

#[test]
fn tenant_staff_list_is_staffed_even_when_empty() {
    assert!(tenant_with_staff(json!([])).is_staffed());
}

#[test]
fn tenant_staff_members_parse_as_users() {
    let tenant = tenant_with_staff(json!([{ "id": 3, "firstName": "Jo", "lastName": "Kim" }]));
    assert_eq!(tenant.staff_members().len(), 1);
    assert_eq!(tenant.staff_members()[0].display_name(), "Jo Kim");
    assert_eq!(tenant.assigned_staff_id(), None);
}

// =============================================================
// Property / choices / acks
// =============================================================

#[test]
fn property_accepts_numeric_zip_and_unit() {
    let property: Property = serde_json::from_value(json!({
        "name": "Elm",
        "address": "1 Elm St",
        "city": "Portland",
        "state": "OR",
        "zipcode": 97201,
        "unit": 4,
    }))
    .unwrap();
    assert_eq!(property.full_address(), "1 Elm St, Portland, OR, 97201");
    assert_eq!(property.unit, "4");
}

#[test]
fn staff_choices_use_full_name_description() {
    let users: Vec<User> = serde_json::from_value(json!([
        { "id": 1, "firstName": "Jo", "lastName": "Kim" },
        { "id": "u2", "firstName": "Sam", "lastName": "Lee" },
    ]))
    .unwrap();
    let choices = staff_choices(&users);
    assert_eq!(
        choices,
        vec![
            StaffChoice { key: Id::from(1), description: "Jo Kim".into() },
            StaffChoice { key: Id::from("u2"), description: "Sam Lee".into() },
        ]
    );
}

#[test]
fn assign_request_wraps_single_staff_id() {
    let staff = Id::from("S1");
    let body = serde_json::to_value(AssignStaffRequest { staff_ids: [&staff] }).unwrap();
    assert_eq!(body, json!({ "staffIDs": ["S1"] }));
}

#[test]
fn assign_ack_without_id_parses_as_none() {
    let ack: AssignStaffAck = serde_json::from_value(json!({ "firstName": "Ada" })).unwrap();
    assert_eq!(ack.id, None);
}

#[test]
fn delete_ack_recognizes_sentinel_only() {
    let ok: DeleteAck = serde_json::from_value(json!({ "Message": "User deleted" })).unwrap();
    let other: DeleteAck = serde_json::from_value(json!({ "Message": "user deleted" })).unwrap();
    let missing: DeleteAck = serde_json::from_value(json!({})).unwrap();
    assert!(ok.is_deleted());
    assert!(!other.is_deleted());
    assert!(!missing.is_deleted());
}

#[test]
fn widgets_tolerate_missing_modules() {
    let widgets: Widgets = serde_json::from_value(json!({ "reports": { "count": 3 } })).unwrap();
    assert!(widgets.opentickets.is_none());
    assert_eq!(widgets.reports, Some(json!({ "count": 3 })));
}
