//! # Schema Checkers
//!
//! A [`SchemaChecker`] compiles a schema once and validates any number of
//! targets against it. A failed validation is reported as a
//! [`SchemaError`] whose message names the first violation:
//!
//! ```text
//! <prefix>. Details: [<path>: <detail>]
//! ```
//!
//! The path has its `/` separators replaced by `.`, and an empty path is
//! rendered as `<root>`. When the engine fails without reporting any
//! violation the message is just `<prefix>`.

use std::fmt;

use argcheck_core::error::DEFAULT_SCHEMA_MESSAGE;
use argcheck_core::{ArgError, CheckResult, SchemaError};
use serde_json::Value;
use thiserror::Error;

use crate::engine::{CompiledSchema, EngineError, JsonSchemaEngine, SchemaEngine, Violation};

/// A checker could not be created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckerError {
    /// The schema argument was not an object.
    #[error(transparent)]
    Argument(#[from] ArgError),

    /// The engine rejected the schema document.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Build the message for a failed validation from its first violation.
pub fn format_schema_message(prefix: &str, first: Option<&Violation>) -> String {
    match first {
        Some(violation) => {
            let path = if violation.instance_path.is_empty() {
                "<root>".to_string()
            } else {
                violation.instance_path.replace('/', ".")
            };
            format!("{prefix}. Details: [{path}: {}]", violation.message)
        }
        None => prefix.to_string(),
    }
}

/// A compiled schema bound to an error-message prefix.
///
/// `SchemaChecker` is `Send + Sync` and holds no per-call state; one
/// instance can be shared across threads behind an `Arc`.
pub struct SchemaChecker {
    validator: Box<dyn CompiledSchema>,
    message: String,
}

impl SchemaChecker {
    /// Compile `schema` with the default [`JsonSchemaEngine`].
    ///
    /// `message` prefixes every raised error and defaults to
    /// `"Schema validation failed"`.
    ///
    /// # Errors
    ///
    /// Returns `CheckerError::Argument` if `schema` is not an object, and
    /// `CheckerError::Engine` if the schema does not compile.
    pub fn new(schema: &Value, message: Option<&str>) -> Result<Self, CheckerError> {
        Self::with_engine(&JsonSchemaEngine::default(), schema, message)
    }

    /// Compile `schema` with a specific engine.
    ///
    /// # Errors
    ///
    /// Same as [`SchemaChecker::new`]; engine errors are returned unchanged.
    pub fn with_engine<E>(engine: &E, schema: &Value, message: Option<&str>) -> Result<Self, CheckerError>
    where
        E: SchemaEngine + ?Sized,
    {
        if !schema.is_object() {
            return Err(ArgError::new("Invalid schema specified (arg #1)").into());
        }
        let message = message.unwrap_or(DEFAULT_SCHEMA_MESSAGE).to_string();
        let validator = engine.compile(schema)?;
        tracing::debug!(prefix = %message, "schema compiled");
        Ok(Self { validator, message })
    }

    /// The error-message prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Validate `target`.
    ///
    /// Returns `Ok(true)` on success. On failure returns `Ok(false)`, or
    /// the schema error when `throw_on_failure` is set.
    pub fn check(&self, target: &Value, throw_on_failure: bool) -> Result<bool, SchemaError> {
        match self.validator.validate(target) {
            Ok(()) => Ok(true),
            Err(violations) => {
                let error = self.failure(&violations);
                if throw_on_failure {
                    Err(error)
                } else {
                    Ok(false)
                }
            }
        }
    }

    /// Validate `target`, deferring the raise to the returned result.
    ///
    /// The result's default error is the schema error for the first
    /// violation.
    pub fn check_result(&self, target: &Value) -> CheckResult {
        match self.validator.validate(target) {
            Ok(()) => CheckResult::new(false),
            Err(violations) => CheckResult::with_default_error(true, self.failure(&violations)),
        }
    }

    /// Every violation the engine reports for `target`, empty when valid.
    pub fn violations(&self, target: &Value) -> Vec<Violation> {
        self.validator.validate(target).err().unwrap_or_default()
    }

    fn failure(&self, violations: &[Violation]) -> SchemaError {
        let first = violations.first();
        tracing::debug!(
            path = first.map(|v| v.instance_path.as_str()).unwrap_or(""),
            count = violations.len(),
            "schema validation failed"
        );
        SchemaError::new(format_schema_message(&self.message, first))
    }
}

impl fmt::Debug for SchemaChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaChecker")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
