use crate::domain::model::{Behavior, Coordinates};
use crate::utils::error::{PlannerError, Result};
use serde_json::Value;

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Latitude is bounded by ±90 and longitude by ±180. NaN fails both.
pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    (-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude)
        && (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}

pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<Coordinates> {
    if !is_valid_coordinate(latitude, longitude) {
        return Err(PlannerError::InvalidCoordinates {
            latitude,
            longitude,
        });
    }
    Ok(Coordinates::new(latitude, longitude))
}

/// Fails with `MissingField` on the first field that is absent or `null`.
/// Present zero values (`0`, `""`, `[]`, `[0, 0]`) count as present.
pub fn require_fields(payload: &Value, fields: &[&str]) -> Result<()> {
    for field in fields {
        match payload.get(field) {
            None | Some(Value::Null) => {
                return Err(PlannerError::MissingField {
                    field: field.to_string(),
                })
            }
            Some(_) => {}
        }
    }
    Ok(())
}

pub fn validate_create_payload(payload: &Value, required_fields: &[&str]) -> Result<()> {
    require_fields(payload, required_fields)
}

pub fn is_valid_behavior(value: &str) -> bool {
    value.parse::<Behavior>().is_ok()
}

pub fn parse_behavior(value: &Value) -> Result<Behavior> {
    match value {
        Value::String(token) => token.parse(),
        other => Err(PlannerError::InvalidEnum {
            field: "behavior".to_string(),
            value: other.to_string(),
        }),
    }
}

pub fn expect_string<'a>(field_name: &str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| PlannerError::InvalidField {
        field: field_name.to_string(),
        reason: format!("expected a string, got {}", value),
    })
}

/// Reads a `[lat, lon]` pair. Anything that is not exactly two numbers is
/// reported with the value as sent.
pub fn parse_coordinates(value: &Value) -> Result<Coordinates> {
    let pair = value
        .as_array()
        .filter(|items| items.len() == 2)
        .and_then(|items| Some((items[0].as_f64()?, items[1].as_f64()?)));

    match pair {
        Some((latitude, longitude)) => validate_coordinates(latitude, longitude),
        None => Err(PlannerError::MalformedCoordinates {
            value: value.to_string(),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coordinate_bounds() {
        assert!(is_valid_coordinate(90.0, 180.0));
        assert!(is_valid_coordinate(-90.0, -180.0));
        assert!(!is_valid_coordinate(91.0, 0.0));
        assert!(!is_valid_coordinate(0.0, -181.0));
    }

    #[test]
    fn test_coordinate_bounds_are_not_swapped() {
        // 120 is a fine longitude but never a latitude
        assert!(is_valid_coordinate(0.0, 120.0));
        assert!(!is_valid_coordinate(120.0, 0.0));
        assert!(!is_valid_coordinate(f64::NAN, 0.0));
    }

    #[test]
    fn test_require_fields_accepts_zero_values() {
        let payload = json!({"name": "", "coordinates": [0, 0], "count": 0});
        assert!(require_fields(&payload, &["name", "coordinates", "count"]).is_ok());
    }

    #[test]
    fn test_require_fields_flags_absent_and_null() {
        let payload = json!({"name": "Lima", "coordinates": null});
        match require_fields(&payload, &["name", "coordinates"]) {
            Err(PlannerError::MissingField { field }) => assert_eq!(field, "coordinates"),
            other => panic!("expected MissingField, got {:?}", other),
        }

        match validate_create_payload(&json!({}), &["name"]) {
            Err(PlannerError::MissingField { field }) => assert_eq!(field, "name"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_behavior_validation() {
        assert!(is_valid_behavior("good"));
        assert!(is_valid_behavior("bad"));
        assert!(!is_valid_behavior("GOOD"));
        assert!(!is_valid_behavior("naughty"));
        assert!(matches!(
            parse_behavior(&json!(0)),
            Err(PlannerError::InvalidEnum { .. })
        ));
    }

    #[test]
    fn test_parse_coordinates() {
        let c = parse_coordinates(&json!([40.4, -3.7])).unwrap();
        assert_eq!(c, Coordinates::new(40.4, -3.7));

        assert!(parse_coordinates(&json!([0, 0])).is_ok());
        match parse_coordinates(&json!([40.4])) {
            Err(PlannerError::MalformedCoordinates { value }) => assert_eq!(value, "[40.4]"),
            other => panic!("expected MalformedCoordinates, got {:?}", other),
        }
        let err = parse_coordinates(&json!(["40", "3"])).unwrap_err();
        assert!(err.to_string().contains(r#"["40","3"]"#));
        assert!(!err.to_string().contains("NaN"));
        assert!(matches!(
            parse_coordinates(&json!([95, 0])),
            Err(PlannerError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("store.data_file", "./data.json").is_ok());
        assert!(validate_path("store.data_file", "").is_err());
    }
}
