//! Core types for the schema-mock generator.
//!
//! This crate provides the foundational types shared by the schema-mock
//! tooling:
//!
//! - [`TypeRef`] - Classification of a declared field type
//! - [`FieldSpec`] - A single field with its declared or inferable type
//! - [`TypeSchema`] - A named composite type (ordered list of fields)
//! - [`Registry`] - All type schemas known to one synthesis run
//! - [`MockValue`] - Synthesized output values
//! - [`SchemaSource`] - Loading seam for schema discovery
//!
//! # Architecture
//!
//! ```text
//! mock-core (this crate)
//!    │
//!    ├─── mock-generator  (depends on mock-core for schema/value types)
//!    │
//!    └─── schema-mock     (CLI; loads schemas and prints MockValue as JSON)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_core::{Registry, TypeRef};
//!
//! let registry = Registry::from_yaml(r#"
//! types:
//!   - name: Address
//!     fields:
//!       - name: city
//!         type: text
//!       - name: zip
//!         type: int
//! "#).unwrap();
//!
//! let address = registry.get("Address").unwrap();
//! assert_eq!(address.fields[0].resolved_type(), Some(TypeRef::Text));
//! ```

pub mod schema;
pub mod source;
pub mod value;

// Re-exports for convenience
pub use schema::{FieldSpec, Registry, SchemaError, TypeRef, TypeSchema};
pub use source::{FileSchemaSource, SchemaSource};
pub use value::MockValue;
