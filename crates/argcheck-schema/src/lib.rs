//! # argcheck-schema — Reusable Schema Checkers
//!
//! Compiles a JSON Schema once into a [`SchemaChecker`] and validates
//! payloads against it, reporting failures as
//! [`SchemaError`](argcheck_core::SchemaError)s that name the first
//! violation and its path.
//!
//! ```
//! use argcheck_schema::SchemaChecker;
//! use serde_json::json;
//!
//! let checker = SchemaChecker::new(
//!     &json!({
//!         "type": "object",
//!         "properties": { "foo": { "type": "string" }, "bar": { "type": "number" } },
//!         "required": ["foo", "bar"]
//!     }),
//!     Some("Invalid request"),
//! )
//! .unwrap();
//!
//! assert!(checker.check(&json!({"foo": "a", "bar": 1}), false).unwrap());
//! assert!(!checker.check(&json!({"foo": "a"}), false).unwrap());
//! assert!(checker.check(&json!({"foo": "a"}), true).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`engine`] — the schema-engine seam and the `jsonschema`-backed default.
//! - [`checker`] — the checker factory and its message format.
//!
//! ## Crate Policy
//!
//! - Depends only on `argcheck-core` internally.
//! - A schema is compiled exactly once per checker.
//! - Remote `$ref` URIs are never fetched.

pub mod checker;
pub mod engine;

pub use checker::{format_schema_message, CheckerError, SchemaChecker};
pub use engine::{CompiledSchema, EngineError, JsonSchemaEngine, SchemaEngine, Violation};
pub use jsonschema::Draft;
