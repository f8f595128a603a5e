//! Boolean type and shape predicates.
//!
//! These are the checks every variant is built on. None of them coerce:
//! `"1"` is not a number and `1` is not a string.
//!
//! Constraint floors follow a fixed rule: a missing or negative
//! `min_length`, or a missing `min`, falls back to `1` rather than to
//! "no floor". Pass `Some(0.0)` to accept empty strings. A NaN floor is
//! kept as is, so nothing reaches it.

use serde_json::Value;

use crate::arg::{json_strict_eq, Arg};

/// Floor used when a constraint is missing or out of range.
pub const DEFAULT_FLOOR: f64 = 1.0;

/// Effective minimum string length. Fractional floors are kept.
pub fn effective_min_length(min_length: Option<f64>) -> f64 {
    match min_length {
        Some(n) if n < 0.0 => DEFAULT_FLOOR,
        Some(n) => n,
        None => DEFAULT_FLOOR,
    }
}

/// Effective numeric minimum. Negative values are kept.
pub fn effective_min(min: Option<f64>) -> f64 {
    min.unwrap_or(DEFAULT_FLOOR)
}

/// A string of at least `min_length` characters.
///
/// Length is counted in UTF-16 code units, matching how string lengths are
/// reported to most JSON producers.
pub fn is_string(arg: &Arg, min_length: Option<f64>) -> bool {
    match arg {
        Arg::Json(Value::String(s)) => {
            s.encode_utf16().count() as f64 >= effective_min_length(min_length)
        }
        _ => false,
    }
}

/// A member of `values`, which must be an array.
pub fn is_enum(arg: &Arg, values: &Arg) -> bool {
    match values {
        Arg::Json(Value::Array(items)) => arg
            .as_json()
            .is_some_and(|v| items.iter().any(|item| json_strict_eq(v, item))),
        _ => false,
    }
}

/// A number no smaller than `min`. Infinities and NaN are numbers too.
pub fn is_number(arg: &Arg, min: Option<f64>) -> bool {
    match arg {
        Arg::Json(Value::Number(n)) => n
            .as_f64()
            .is_some_and(|n| n >= effective_min(min)),
        Arg::Float(n) => *n >= effective_min(min),
        _ => false,
    }
}

/// A non-null, non-array object. Opaque instances qualify.
pub fn is_object(arg: &Arg) -> bool {
    matches!(arg, Arg::Json(Value::Object(_)) | Arg::Instance(_))
}

/// An array.
pub fn is_array(arg: &Arg) -> bool {
    matches!(arg, Arg::Json(Value::Array(_)))
}

/// A boolean.
pub fn is_boolean(arg: &Arg) -> bool {
    matches!(arg, Arg::Json(Value::Bool(_)))
}

/// A callable: a function or a class reference.
pub fn is_function(arg: &Arg) -> bool {
    arg.is_callable()
}

/// An instance of the class `ty`. Fails when `ty` is not a class reference.
pub fn is_instance(arg: &Arg, ty: &Arg) -> bool {
    match (arg, ty) {
        (Arg::Instance(instance), Arg::Class(tag)) => instance.is_instance_of(tag),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Widget;
    struct Gadget;

    fn all_values() -> Vec<Arg> {
        vec![
            Arg::Undefined,
            Arg::from(json!(null)),
            Arg::from(true),
            Arg::from(0_i64),
            Arg::from(42.5_f64),
            Arg::from(f64::INFINITY),
            Arg::from(""),
            Arg::from("abc"),
            Arg::from(json!([])),
            Arg::from(json!({})),
            Arg::function(|_| Value::Null),
            Arg::class::<Widget>(),
            Arg::instance(Widget),
        ]
    }

    #[test]
    fn test_string_floor() {
        assert!(is_string(&Arg::from(""), Some(0.0)));
        assert!(!is_string(&Arg::from(""), Some(1.0)));
        assert!(!is_string(&Arg::from(""), None));
        assert!(is_string(&Arg::from("a"), None));
        assert!(!is_string(&Arg::from("ab"), Some(3.0)));
        assert!(is_string(&Arg::from("abc"), Some(3.0)));
    }

    #[test]
    fn test_string_fractional_floor() {
        assert!(!is_string(&Arg::from("a"), Some(1.5)));
        assert!(is_string(&Arg::from("ab"), Some(1.5)));
        assert!(!is_string(&Arg::from("abc"), Some(f64::NAN)));
    }

    #[test]
    fn test_string_negative_floor_resets_to_one() {
        assert!(!is_string(&Arg::from(""), Some(-5.0)));
        assert!(is_string(&Arg::from("x"), Some(-5.0)));
    }

    #[test]
    fn test_string_rejects_non_strings() {
        for arg in all_values() {
            if !matches!(arg, Arg::Json(Value::String(_))) {
                assert!(!is_string(&arg, Some(0.0)), "{arg:?}");
            }
        }
    }

    #[test]
    fn test_string_length_in_utf16_units() {
        assert!(is_string(&Arg::from("\u{1F600}"), Some(2.0)));
        assert!(!is_string(&Arg::from("\u{1F600}"), Some(3.0)));
    }

    #[test]
    fn test_number_floor() {
        assert!(is_number(&Arg::from(0_i64), Some(-1.0)));
        assert!(!is_number(&Arg::from(2_i64), Some(4.0)));
        assert!(!is_number(&Arg::from(0_i64), None));
        assert!(is_number(&Arg::from(1_i64), None));
        assert!(is_number(&Arg::from(-3.5_f64), Some(-10.0)));
    }

    #[test]
    fn test_number_nan_minimum_never_passes() {
        assert!(!is_number(&Arg::from(0_i64), Some(f64::NAN)));
        assert!(!is_number(&Arg::from(5_i64), Some(f64::NAN)));
        assert!(!is_number(&Arg::from(f64::INFINITY), Some(f64::NAN)));
    }

    #[test]
    fn test_number_non_finite() {
        assert!(is_number(&Arg::from(f64::INFINITY), None));
        assert!(!is_number(&Arg::from(f64::NEG_INFINITY), None));
        assert!(is_number(&Arg::from(f64::NEG_INFINITY), Some(f64::NEG_INFINITY)));
        assert!(!is_number(&Arg::from(f64::NAN), Some(f64::MIN)));
    }

    #[test]
    fn test_number_rejects_numeric_strings() {
        assert!(!is_number(&Arg::from("5"), Some(0.0)));
    }

    #[test]
    fn test_enum_requires_array() {
        let arg = Arg::from("a");
        assert!(is_enum(&arg, &Arg::from(json!(["a", "b"]))));
        assert!(!is_enum(&arg, &Arg::from(json!(["b", "c"]))));
        for values in all_values() {
            if !matches!(values, Arg::Json(Value::Array(_))) {
                assert!(!is_enum(&arg, &values), "{values:?}");
            }
        }
    }

    #[test]
    fn test_enum_is_strict() {
        let values = Arg::from(json!([1, "2", true]));
        assert!(is_enum(&Arg::from(1.0_f64), &values));
        assert!(!is_enum(&Arg::from("1"), &values));
        assert!(!is_enum(&Arg::from(2_i64), &values));
        assert!(!is_enum(&Arg::Undefined, &values));
    }

    #[test]
    fn test_object() {
        assert!(is_object(&Arg::from(json!({"a": 1}))));
        assert!(is_object(&Arg::instance(Widget)));
        assert!(!is_object(&Arg::from(json!([]))));
        assert!(!is_object(&Arg::from(json!(null))));
        assert!(!is_object(&Arg::function(|_| Value::Null)));
    }

    #[test]
    fn test_array_and_boolean() {
        assert!(is_array(&Arg::from(json!([1, 2]))));
        assert!(!is_array(&Arg::from(json!({}))));
        assert!(is_boolean(&Arg::from(false)));
        assert!(!is_boolean(&Arg::from(0_i64)));
    }

    #[test]
    fn test_function() {
        assert!(is_function(&Arg::function(|_| Value::Null)));
        assert!(is_function(&Arg::class::<Widget>()));
        assert!(!is_function(&Arg::instance(Widget)));
        assert!(!is_function(&Arg::from("fn")));
    }

    #[test]
    fn test_instance() {
        let widget = Arg::instance(Widget);
        assert!(is_instance(&widget, &Arg::class::<Widget>()));
        assert!(!is_instance(&widget, &Arg::class::<Gadget>()));
        for ty in all_values() {
            if !matches!(ty, Arg::Class(_)) {
                assert!(!is_instance(&widget, &ty), "{ty:?}");
            }
        }
    }
}
