use chrono::{Datelike, Utc};

use crate::auto::{
    normalize_vin, validate_vin, validate_year, MAX_COLOR_LEN, MAX_MAKE_LEN, MAX_MODEL_LEN, MAX_OWNER_LEN, MIN_YEAR,
};
use crate::errors::ModelError;
use crate::{Auto, AutosList, UpdateAuto};

#[test]
fn valid_auto_passes() {
    let auto = Auto::new("red", "Honda", "Civic", 2000, "XX89DM");
    assert!(auto.validate().is_ok());
}

#[test]
fn missing_fields_are_rejected() {
    let cases = [
        Auto::new("red", "Honda", "Civic", 2000, ""),
        Auto::new("red", "  ", "Civic", 2000, "XX89DM"),
        Auto::new("red", "Honda", "", 2000, "XX89DM"),
        Auto::new("", "Honda", "Civic", 2000, "XX89DM"),
    ];
    for auto in cases {
        assert!(matches!(auto.validate(), Err(ModelError::Validation(_))), "{auto:?}");
    }
}

#[test]
fn fields_longer_than_columns_are_rejected() {
    let long = |n: usize| "x".repeat(n);
    assert!(Auto::new(&long(MAX_COLOR_LEN), "Honda", "Civic", 2000, "XX89DM").validate().is_ok());
    assert!(Auto::new(&long(MAX_COLOR_LEN + 1), "Honda", "Civic", 2000, "XX89DM").validate().is_err());
    assert!(Auto::new("red", &long(MAX_MAKE_LEN + 1), "Civic", 2000, "XX89DM").validate().is_err());
    assert!(Auto::new("red", "Honda", &long(MAX_MODEL_LEN + 1), 2000, "XX89DM").validate().is_err());
    let owned = Auto::new("red", "Honda", "Civic", 2000, "XX89DM").with_owner(&long(MAX_OWNER_LEN + 1));
    assert!(matches!(owned.validate(), Err(ModelError::Validation(_))));

    assert!(UpdateAuto { color: Some(long(MAX_COLOR_LEN + 1)), owner: None }.validate().is_err());
    assert!(UpdateAuto { color: None, owner: Some(long(MAX_OWNER_LEN + 1)) }.validate().is_err());
    // multibyte characters count once each
    assert!(UpdateAuto { color: Some("é".repeat(MAX_COLOR_LEN)), owner: None }.validate().is_ok());
}

#[test]
fn vin_rules() {
    assert!(validate_vin("1HGCM82633A004352").is_ok());
    assert!(validate_vin("1HGCM82633A0043521").is_err());
    assert!(validate_vin("XX-89").is_err());
    assert_eq!(normalize_vin("  xx89dm "), "XX89DM");
}

#[test]
fn year_bounds() {
    let next = Utc::now().year() + 1;
    assert!(validate_year(MIN_YEAR).is_ok());
    assert!(validate_year(next).is_ok());
    assert!(validate_year(MIN_YEAR - 1).is_err());
    assert!(validate_year(next + 1).is_err());
}

#[test]
fn normalized_trims_and_drops_blank_owner() {
    let auto = Auto::new(" red ", "Honda ", " Civic", 2000, "xx89dm").with_owner("   ");
    let n = auto.normalized();
    assert_eq!(n.color, "red");
    assert_eq!(n.make, "Honda");
    assert_eq!(n.model, "Civic");
    assert_eq!(n.vin, "XX89DM");
    assert_eq!(n.owner, None);
}

#[test]
fn update_requires_a_field() {
    assert!(UpdateAuto::default().validate().is_err());
    assert!(UpdateAuto { color: Some(" ".into()), owner: None }.validate().is_err());
    assert!(UpdateAuto { color: None, owner: Some(String::new()) }.validate().is_ok());
    assert!(UpdateAuto::new("blue", "David").validate().is_ok());
}

#[test]
fn update_applies_only_present_fields() {
    let mut auto = Auto::new("red", "Honda", "Civic", 2000, "XX89DM").with_owner("Ann");
    UpdateAuto { color: Some(" blue ".into()), owner: None }.normalized().apply_to(&mut auto);
    assert_eq!((auto.color.as_str(), auto.owner.as_deref()), ("blue", Some("Ann")));

    UpdateAuto { color: None, owner: Some("  ".into()) }.normalized().apply_to(&mut auto);
    assert_eq!(auto.color, "blue");
    assert_eq!(auto.owner, None);
}

#[test]
fn autos_list_wire_shape() {
    let list = AutosList::new(vec![Auto::new("red", "Honda", "Civic", 2000, "XX89DM")]);
    let v = serde_json::to_value(&list).unwrap();
    assert_eq!(v["autosList"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(v["autosList"][0]["vin"], "XX89DM");
    assert!(v["autosList"][0]["owner"].is_null());
}

#[test]
fn auto_without_owner_deserializes() {
    let auto: Auto = serde_json::from_str(
        r#"{"color":"red","make":"Honda","model":"Civic","year":2000,"vin":"XX89DM"}"#,
    )
    .unwrap();
    assert_eq!(auto.owner, None);
    assert_eq!(auto.year, 2000);
}
