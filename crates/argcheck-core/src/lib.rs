//! # argcheck-core — Argument Checks
//!
//! Type and shape checks for dynamically typed function inputs, with three
//! ways of reporting a failure:
//!
//! - [`predicate`] — plain booleans (`is_string`, `is_number`, ...).
//! - [`validator`] — a [`CheckResult`] the caller inspects, raises later
//!   with [`CheckResult::throw`], or attaches a fallback to with
//!   [`CheckResult::on_error`].
//! - [`guard`] — an optional error argument folded into the call; a failed
//!   check raises it immediately.
//!
//! Inputs are carried as [`Arg`], a tagged union over JSON values,
//! callables, class references and opaque instances.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `argcheck-*` crates.
//! - Checks never coerce between runtime types.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod arg;
pub mod error;
pub mod guard;
pub mod predicate;
pub mod result;
pub mod validator;

pub use arg::{Arg, Function, Instance, TypeTag};
pub use error::{ArgError, CheckError, ErrorSpec, SchemaError};
pub use result::CheckResult;
