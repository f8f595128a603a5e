//! Checks that fold the error argument into the call.
//!
//! Each function returns `Ok(true)` when the check passes. On failure it
//! raises the supplied error immediately: a message becomes an
//! [`ArgError`](crate::ArgError), an error value is raised unchanged. With
//! no error supplied a failed check returns `Ok(false)`.
//!
//! ```
//! use argcheck_core::{guard, Arg};
//!
//! assert!(!guard::check_boolean(&Arg::from(1_i64), ()).unwrap());
//! assert!(guard::check_boolean(&Arg::from(1_i64), "Invalid flag").is_err());
//! ```

use crate::arg::Arg;
use crate::error::{CheckError, ErrorSpec};
use crate::predicate;

fn handle(ok: bool, error: impl Into<ErrorSpec>) -> Result<bool, CheckError> {
    if ok {
        return Ok(true);
    }
    match error.into().resolve() {
        Some(error) => Err(error),
        None => Ok(false),
    }
}

/// String of at least `min_length` characters (default `1`).
pub fn check_string(
    arg: &Arg,
    min_length: Option<f64>,
    error: impl Into<ErrorSpec>,
) -> Result<bool, CheckError> {
    handle(predicate::is_string(arg, min_length), error)
}

/// Member of `values`.
pub fn check_enum(arg: &Arg, values: &Arg, error: impl Into<ErrorSpec>) -> Result<bool, CheckError> {
    handle(predicate::is_enum(arg, values), error)
}

/// Number no smaller than `min` (default `1`).
pub fn check_number(
    arg: &Arg,
    min: Option<f64>,
    error: impl Into<ErrorSpec>,
) -> Result<bool, CheckError> {
    handle(predicate::is_number(arg, min), error)
}

/// Non-array object.
pub fn check_object(arg: &Arg, error: impl Into<ErrorSpec>) -> Result<bool, CheckError> {
    handle(predicate::is_object(arg), error)
}

/// Array.
pub fn check_array(arg: &Arg, error: impl Into<ErrorSpec>) -> Result<bool, CheckError> {
    handle(predicate::is_array(arg), error)
}

/// Boolean.
pub fn check_boolean(arg: &Arg, error: impl Into<ErrorSpec>) -> Result<bool, CheckError> {
    handle(predicate::is_boolean(arg), error)
}

/// Callable.
pub fn check_function(arg: &Arg, error: impl Into<ErrorSpec>) -> Result<bool, CheckError> {
    handle(predicate::is_function(arg), error)
}

/// Instance of the class `ty`.
pub fn check_instance(arg: &Arg, ty: &Arg, error: impl Into<ErrorSpec>) -> Result<bool, CheckError> {
    handle(predicate::is_instance(arg, ty), error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;
    use serde_json::json;

    #[derive(Debug, thiserror::Error)]
    #[error("custom")]
    struct Custom;

    #[test]
    fn test_pass_returns_true_regardless_of_error() {
        assert!(check_string(&Arg::from("abc"), None, ()).unwrap());
        assert!(check_string(&Arg::from("abc"), None, "never raised").unwrap());
        assert!(check_array(&Arg::from(json!([])), CheckError::other(Custom)).unwrap());
    }

    #[test]
    fn test_fail_without_error_returns_false() {
        assert!(!check_string(&Arg::from(""), None, ()).unwrap());
        assert!(!check_number(&Arg::from(2_i64), Some(4.0), None::<&str>).unwrap());
        assert!(!check_enum(&Arg::from(1_i64), &Arg::from(json!({})), ()).unwrap());
    }

    #[test]
    fn test_fail_with_message_raises_arg_error() {
        let err = check_object(&Arg::from(json!([])), "Invalid options (arg #2)").unwrap_err();
        assert!(err.is_argument());
        assert_eq!(err.to_string(), "[ArgError] Invalid options (arg #2)");
    }

    #[test]
    fn test_fail_with_error_value_raises_it() {
        let err = check_function(&Arg::from("f"), CheckError::other(Custom)).unwrap_err();
        assert!(err.downcast_ref::<Custom>().is_some());

        let err = check_instance(&Arg::from("f"), &Arg::Undefined, SchemaError::new("shape"))
            .unwrap_err();
        assert!(err.is_schema());
    }

    #[test]
    fn test_boolean() {
        assert!(check_boolean(&Arg::from(false), ()).unwrap());
        assert!(!check_boolean(&Arg::from(json!(null)), ()).unwrap());
    }
}
