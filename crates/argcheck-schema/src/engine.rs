//! # Schema Engines
//!
//! The checker only needs two things from a schema engine: compile a schema
//! document once, then validate targets against the compiled form. These
//! traits are that seam, so any JSON Schema implementation can stand in for
//! the default [`JsonSchemaEngine`].
//!
//! ## Network Access
//!
//! The default engine never fetches remote `$ref` URIs. Any reference not
//! contained in the schema document itself resolves to the permissive
//! schema `{}`.

use std::fmt;

use jsonschema::{Draft, Retrieve, Uri, ValidationError, Validator};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// The engine rejected a schema document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid schema document: {reason}")]
pub struct EngineError {
    reason: String,
}

impl EngineError {
    /// An engine error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Why the schema was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// A single validation violation reported by an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// JSON Pointer path to the violating value in the target.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the violation.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    /// A violation at `instance_path` with no schema location.
    pub fn new(instance_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            instance_path: instance_path.into(),
            schema_path: String::new(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

impl From<ValidationError<'_>> for Violation {
    fn from(e: ValidationError<'_>) -> Self {
        Self {
            instance_path: e.instance_path.to_string(),
            schema_path: e.schema_path.to_string(),
            message: e.to_string(),
        }
    }
}

/// A compiled schema.
///
/// Implementations must be safe to call concurrently: a compiled schema is
/// read-only after compilation.
pub trait CompiledSchema: Send + Sync {
    /// Validate `target`. A failure carries every violation found, in the
    /// order the engine reports them. An engine may fail with no details.
    fn validate(&self, target: &Value) -> Result<(), Vec<Violation>>;
}

/// Compiles schema documents.
pub trait SchemaEngine {
    /// Compile `schema` into a reusable validator.
    ///
    /// # Errors
    ///
    /// Returns an `EngineError` if `schema` is not a valid schema document.
    fn compile(&self, schema: &Value) -> Result<Box<dyn CompiledSchema>, EngineError>;
}

/// Resolves every external reference to an empty schema.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        tracing::debug!(uri = uri.as_str(), "unresolved $ref treated as permissive schema");
        Ok(serde_json::json!({}))
    }
}

/// Schema engine backed by the `jsonschema` crate.
#[derive(Debug, Clone, Copy)]
pub struct JsonSchemaEngine {
    draft: Draft,
}

impl JsonSchemaEngine {
    /// An engine that validates with Draft 7 semantics.
    pub fn new() -> Self {
        Self {
            draft: Draft::Draft7,
        }
    }

    /// An engine that validates with the given draft.
    pub fn with_draft(draft: Draft) -> Self {
        Self { draft }
    }

    /// The draft this engine compiles for.
    pub fn draft(&self) -> Draft {
        self.draft
    }
}

impl Default for JsonSchemaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaEngine for JsonSchemaEngine {
    fn compile(&self, schema: &Value) -> Result<Box<dyn CompiledSchema>, EngineError> {
        let mut opts = jsonschema::options();
        opts.with_draft(self.draft);
        opts.with_retriever(OfflineRetriever);
        let validator = opts
            .build(schema)
            .map_err(|e| EngineError::new(e.to_string()))?;
        Ok(Box::new(JsonSchemaValidator(validator)))
    }
}

struct JsonSchemaValidator(Validator);

impl CompiledSchema for JsonSchemaValidator {
    fn validate(&self, target: &Value) -> Result<(), Vec<Violation>> {
        if self.0.is_valid(target) {
            return Ok(());
        }
        Err(self.0.iter_errors(target).map(Violation::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compile_and_validate() {
        let schema = json!({
            "type": "object",
            "properties": { "foo": { "type": "string" } },
            "required": ["foo"]
        });
        let compiled = JsonSchemaEngine::new().compile(&schema).unwrap();
        assert!(compiled.validate(&json!({"foo": "a"})).is_ok());

        let violations = compiled.validate(&json!({})).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].instance_path, "");
        assert!(violations[0].message.contains("foo"));
    }

    #[test]
    fn test_nested_instance_path() {
        let schema = json!({
            "type": "object",
            "properties": {
                "foo": {
                    "type": "object",
                    "properties": { "bar": { "type": "number" } }
                }
            }
        });
        let compiled = JsonSchemaEngine::new().compile(&schema).unwrap();
        let violations = compiled.validate(&json!({"foo": {"bar": "x"}})).unwrap_err();
        assert_eq!(violations[0].instance_path, "/foo/bar");
        assert!(violations[0].schema_path.ends_with("type"));
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let err = JsonSchemaEngine::new()
            .compile(&json!({"type": 12}))
            .err()
            .expect("schema with numeric type must not compile");
        assert!(!err.reason().is_empty());
        assert!(err.to_string().starts_with("invalid schema document"));
    }

    #[test]
    fn test_external_ref_does_not_fetch() {
        let schema = json!({
            "type": "object",
            "properties": {
                "remote": { "$ref": "https://example.invalid/schemas/thing.json" }
            }
        });
        let compiled = JsonSchemaEngine::new().compile(&schema).unwrap();
        assert!(compiled.validate(&json!({"remote": 42})).is_ok());
    }

    #[test]
    fn test_draft_selection() {
        let engine = JsonSchemaEngine::with_draft(Draft::Draft202012);
        assert_eq!(engine.draft(), Draft::Draft202012);
        assert_eq!(JsonSchemaEngine::default().draft(), Draft::Draft7);
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::new("/foo/bar", "\"x\" is not of type \"number\"");
        assert_eq!(v.to_string(), "/foo/bar: \"x\" is not of type \"number\"");
        let root = Violation::new("", "\"foo\" is a required property");
        assert!(root.to_string().starts_with("(root)"));
    }
}
