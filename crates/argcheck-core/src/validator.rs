//! Checks that return a [`CheckResult`].
//!
//! None of these raise. The caller decides later whether to raise (with
//! [`CheckResult::throw`]), to run a fallback (with
//! [`CheckResult::on_error`]), or to ignore the failure.
//!
//! ```
//! use argcheck_core::{validator, Arg};
//!
//! let name = Arg::from("");
//! let err = validator::check_string(&name, None)
//!     .throw("Invalid name specified (arg #1)")
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "[ArgError] Invalid name specified (arg #1)");
//! ```

use crate::arg::Arg;
use crate::predicate;
use crate::result::CheckResult;

fn outcome(ok: bool) -> CheckResult {
    CheckResult::new(!ok)
}

/// Check for a string of at least `min_length` characters (default `1`).
pub fn check_string(arg: &Arg, min_length: Option<f64>) -> CheckResult {
    outcome(predicate::is_string(arg, min_length))
}

/// Check that `arg` is one of `values`.
pub fn check_enum(arg: &Arg, values: &Arg) -> CheckResult {
    outcome(predicate::is_enum(arg, values))
}

/// Check for a number no smaller than `min` (default `1`).
pub fn check_number(arg: &Arg, min: Option<f64>) -> CheckResult {
    outcome(predicate::is_number(arg, min))
}

/// Check for a non-array object.
pub fn check_object(arg: &Arg) -> CheckResult {
    outcome(predicate::is_object(arg))
}

/// Check for an array.
pub fn check_array(arg: &Arg) -> CheckResult {
    outcome(predicate::is_array(arg))
}

/// Check for a boolean.
pub fn check_boolean(arg: &Arg) -> CheckResult {
    outcome(predicate::is_boolean(arg))
}

/// Check for a callable.
pub fn check_function(arg: &Arg) -> CheckResult {
    outcome(predicate::is_function(arg))
}

/// Check that `arg` is an instance of the class `ty`.
pub fn check_instance(arg: &Arg, ty: &Arg) -> CheckResult {
    outcome(predicate::is_instance(arg, ty))
}
