//! # Error Types
//!
//! Two failure kinds are raised by the checks in this workspace:
//!
//! - [`ArgError`] — malformed or invalid call-site input.
//! - [`SchemaError`] — a payload failed schema validation.
//!
//! [`CheckError`] is the value actually raised. Besides the two kinds above
//! it can carry any caller-supplied error, which is raised unchanged.
//! [`ErrorSpec`] is the optional error argument the checks accept: absent,
//! a bare message, or a ready-made error.

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

/// Message used when an `ArgError` is built without one.
pub const DEFAULT_ARG_MESSAGE: &str = "Invalid argument";

/// Message used when a `SchemaError` is built without one.
pub const DEFAULT_SCHEMA_MESSAGE: &str = "Schema validation failed";

/// Malformed or invalid argument.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("[ArgError] {}", .message.as_deref().unwrap_or(DEFAULT_ARG_MESSAGE))]
pub struct ArgError {
    message: Option<String>,
}

impl ArgError {
    /// An argument error with a custom message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// The custom message, if one was supplied.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// A payload did not conform to its schema.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("[SchemaError] {}", .message.as_deref().unwrap_or(DEFAULT_SCHEMA_MESSAGE))]
pub struct SchemaError {
    message: Option<String>,
}

impl SchemaError {
    /// A schema error with a custom message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// The custom message, if one was supplied.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// An error raised by a failed check.
#[derive(Error, Debug, Clone)]
pub enum CheckError {
    /// Generic argument error.
    #[error(transparent)]
    Argument(#[from] ArgError),

    /// Schema validation error.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A caller-supplied error, raised as-is.
    #[error(transparent)]
    Other(Arc<dyn StdError + Send + Sync>),
}

impl CheckError {
    /// Wrap an arbitrary error so it can be raised by a check.
    pub fn other<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Other(Arc::new(error))
    }

    /// True for the generic argument error kind.
    pub fn is_argument(&self) -> bool {
        matches!(self, Self::Argument(_))
    }

    /// True for the schema error kind.
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }

    /// Borrow a caller-supplied error as its concrete type.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            Self::Other(e) => e.downcast_ref::<E>(),
            _ => None,
        }
    }
}

/// The optional error argument accepted by the checks.
///
/// A `Message` becomes an [`ArgError`] carrying it; a `Cause` is raised
/// unchanged; `Absent` raises nothing.
#[derive(Debug, Clone, Default)]
pub enum ErrorSpec {
    /// No error supplied.
    #[default]
    Absent,
    /// Raise an `ArgError` with this message.
    Message(String),
    /// Raise this error.
    Cause(CheckError),
}

impl ErrorSpec {
    /// The error to raise, if any.
    pub fn resolve(self) -> Option<CheckError> {
        match self {
            Self::Absent => None,
            Self::Message(message) => Some(ArgError::new(message).into()),
            Self::Cause(error) => Some(error),
        }
    }
}

impl From<()> for ErrorSpec {
    fn from(_: ()) -> Self {
        Self::Absent
    }
}

impl<T: Into<ErrorSpec>> From<Option<T>> for ErrorSpec {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl From<&str> for ErrorSpec {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

impl From<String> for ErrorSpec {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl From<CheckError> for ErrorSpec {
    fn from(value: CheckError) -> Self {
        Self::Cause(value)
    }
}

impl From<ArgError> for ErrorSpec {
    fn from(value: ArgError) -> Self {
        Self::Cause(value.into())
    }
}

impl From<SchemaError> for ErrorSpec {
    fn from(value: SchemaError) -> Self {
        Self::Cause(value.into())
    }
}
