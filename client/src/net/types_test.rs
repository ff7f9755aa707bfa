use super::*;

// =============================================================
// UnitData
// =============================================================

fn kwh_json() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": "kWh",
        "identifier": "kWh",
        "unitRepresent": "quantity",
        "secInRate": 3600,
        "typeOfUnit": "unit",
        "unitIndex": 0,
        "suffix": "",
        "displayable": "all",
        "preferredDisplay": true,
        "note": "OED created standard unit"
    })
}

#[test]
fn unit_data_deserializes_camel_case_fields() {
    let unit: UnitData = serde_json::from_value(kwh_json()).unwrap();
    assert_eq!(unit.id, 1);
    assert_eq!(unit.identifier, "kWh");
    assert_eq!(unit.unit_represent, UnitRepresentType::Quantity);
    assert_eq!(unit.sec_in_rate, 3600);
    assert_eq!(unit.type_of_unit, UnitType::Unit);
    assert_eq!(unit.unit_index, Some(0));
    assert_eq!(unit.displayable, DisplayableType::All);
    assert!(unit.preferred_display);
}

#[test]
fn unit_data_serializes_camel_case_fields() {
    let unit: UnitData = serde_json::from_value(kwh_json()).unwrap();
    let value = serde_json::to_value(&unit).unwrap();
    assert_eq!(value["secInRate"], 3600);
    assert_eq!(value["typeOfUnit"], "unit");
    assert_eq!(value["preferredDisplay"], true);
    assert!(value.get("sec_in_rate").is_none());
}

#[test]
fn unit_data_defaults_optional_fields() {
    let mut json = kwh_json();
    let obj = json.as_object_mut().unwrap();
    obj.remove("unitIndex");
    obj.remove("suffix");
    obj.remove("note");
    let unit: UnitData = serde_json::from_value(json).unwrap();
    assert_eq!(unit.unit_index, None);
    assert!(unit.suffix.is_empty());
    assert!(unit.note.is_empty());
}

#[test]
fn unit_data_accepts_integral_floats() {
    let mut json = kwh_json();
    json["secInRate"] = serde_json::json!(3600.0);
    let unit: UnitData = serde_json::from_value(json).unwrap();
    assert_eq!(unit.sec_in_rate, 3600);
}

#[test]
fn unit_data_rejects_fractional_and_out_of_range_numbers() {
    let mut json = kwh_json();
    json["secInRate"] = serde_json::json!(1.5);
    assert!(serde_json::from_value::<UnitData>(json).is_err());

    let mut json = kwh_json();
    json["id"] = serde_json::json!(i64::from(i32::MAX) + 1);
    assert!(serde_json::from_value::<UnitData>(json).is_err());
}

#[test]
fn unit_data_rejects_unknown_enum_tag() {
    let mut json = kwh_json();
    json["displayable"] = serde_json::json!("everyone");
    assert!(serde_json::from_value::<UnitData>(json).is_err());
}

#[test]
fn enum_tags_match_wire_names() {
    assert_eq!(UnitRepresentType::Flow.as_str(), "flow");
    assert_eq!(UnitType::Suffix.as_str(), "suffix");
    assert_eq!(DisplayableType::Admin.as_str(), "admin");
    assert_eq!(serde_json::to_value(UnitRepresentType::Unused).unwrap(), "unused");
}

#[test]
fn from_tag_inverts_as_str() {
    for kind in [UnitRepresentType::Quantity, UnitRepresentType::Flow, UnitRepresentType::Raw, UnitRepresentType::Unused] {
        assert_eq!(UnitRepresentType::from_tag(kind.as_str()), Some(kind));
    }
    for kind in [UnitType::Unit, UnitType::Meter, UnitType::Suffix] {
        assert_eq!(UnitType::from_tag(kind.as_str()), Some(kind));
    }
    for kind in [DisplayableType::None, DisplayableType::All, DisplayableType::Admin] {
        assert_eq!(DisplayableType::from_tag(kind.as_str()), Some(kind));
    }
}

#[test]
fn from_tag_rejects_unknown_and_cased_tags() {
    assert_eq!(UnitRepresentType::from_tag("Flow"), None);
    assert_eq!(UnitType::from_tag(""), None);
    assert_eq!(DisplayableType::from_tag("everyone"), None);
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_admin_role() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "name": "Ada",
        "email": "ada@example.com",
        "role": "admin"
    }))
    .unwrap();
    assert_eq!(user.role, UserRole::Admin);
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
}

#[test]
fn user_unknown_or_missing_role_is_observer() {
    let unknown: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "name": "Ada",
        "role": "superuser"
    }))
    .unwrap();
    assert_eq!(unknown.role, UserRole::Observer);

    let missing: User = serde_json::from_value(serde_json::json!({ "id": "u-2", "name": "Bob" })).unwrap();
    assert_eq!(missing.role, UserRole::Observer);
    assert_eq!(missing.email, None);
}
