//! # Check Results
//!
//! A [`CheckResult`] records whether one check failed and defers the
//! decision of what to do about it to the caller. Several checks can be
//! run first and their results raised later, each with an error chosen at
//! the point of consumption.

use crate::arg::Arg;
use crate::error::{ArgError, CheckError, ErrorSpec};

/// Outcome of a single argument check.
///
/// # Invariants
///
/// - `has_errors` is fixed at construction.
/// - The default error is always an error value; a bare message or a
///   missing error falls back to a generic [`ArgError`].
#[derive(Debug, Clone)]
pub struct CheckResult {
    has_errors: bool,
    default_error: CheckError,
}

impl CheckResult {
    /// A result whose default error is a generic `ArgError`.
    pub fn new(has_errors: bool) -> Self {
        Self {
            has_errors,
            default_error: ArgError::default().into(),
        }
    }

    /// A result with a specific default error.
    ///
    /// Only an error value is kept. A message or an absent error is
    /// replaced by a generic `ArgError` with no custom message.
    pub fn with_default_error(has_errors: bool, error: impl Into<ErrorSpec>) -> Self {
        let default_error = match error.into() {
            ErrorSpec::Cause(error) => error,
            ErrorSpec::Absent | ErrorSpec::Message(_) => ArgError::default().into(),
        };
        Self {
            has_errors,
            default_error,
        }
    }

    /// Build a result from a dynamically typed flag.
    ///
    /// # Errors
    ///
    /// Returns an `ArgError` unless `flag` is a boolean.
    pub fn try_new(flag: &Arg, error: impl Into<ErrorSpec>) -> Result<Self, CheckError> {
        match flag.as_json().and_then(|v| v.as_bool()) {
            Some(has_errors) => Ok(Self::with_default_error(has_errors, error)),
            None => Err(ArgError::new("Invalid hasErrors specified (arg #1)").into()),
        }
    }

    /// Whether the check failed.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// The error raised when no override is supplied.
    pub fn default_error(&self) -> &CheckError {
        &self.default_error
    }

    /// Raise an error if the check failed.
    ///
    /// A message raises an `ArgError` with that message, an error value is
    /// raised as-is, and an absent error raises the default error. Does
    /// nothing when the check passed, whatever `error` is.
    pub fn throw(&self, error: impl Into<ErrorSpec>) -> Result<(), CheckError> {
        if !self.has_errors {
            return Ok(());
        }
        let error = error
            .into()
            .resolve()
            .unwrap_or_else(|| self.default_error.clone());
        tracing::trace!(error = %error, "argument check failed");
        Err(error)
    }

    /// Raise the default error if the check failed.
    pub fn into_result(self) -> Result<(), CheckError> {
        if self.has_errors {
            Err(self.default_error)
        } else {
            Ok(())
        }
    }

    /// Run `action` if the check failed.
    ///
    /// Intended for logging or assigning a fallback value before an error
    /// is raised. Returns `self` for chaining.
    pub fn on_error<F: FnOnce()>(&self, action: F) -> &Self {
        if self.has_errors {
            action();
        }
        self
    }

    /// Run a dynamic action if the check failed.
    ///
    /// Only an `Arg::Function` is invoked (with no arguments); any other
    /// argument is ignored.
    pub fn on_error_with(&self, action: &Arg) -> &Self {
        if self.has_errors {
            if let Arg::Function(f) = action {
                f.call(&[]);
            }
        }
        self
    }
}
