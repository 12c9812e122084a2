//! Recursive mock value synthesizer for the schema-mock tool.
//!
//! This crate provides the [`MockGenerator`] which walks a type schema
//! field by field and produces a random but type-conformant value tree,
//! recursing into composite types registered in the same
//! [`Registry`](mock_core::Registry).
//!
//! # Architecture
//!
//! ```text
//! Registry (mock-core)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  MockGenerator  │
//! │                 │
//! │  - registry     │
//! │  - rng (StdRng) │
//! │  - max_depth    │
//! └────────┬────────┘
//!          │
//!          ▼
//!    MockValue::Object { field → value | nested object | sentinel }
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_core::Registry;
//! use mock_generator::MockGenerator;
//!
//! let registry = Registry::from_yaml(r#"
//! types:
//!   - name: Person
//!     fields:
//!       - name: name
//!         type: text
//!       - name: age
//!         type: int
//! "#).unwrap();
//!
//! let mut generator = MockGenerator::new(registry);
//! let person = generator.synthesize_type("Person").unwrap();
//! assert!(person.as_object().unwrap().contains_key("age"));
//! ```
//!
//! # Dispatch
//!
//! Each field resolves to one of:
//!
//! - `int` - random 3-digit integer
//! - `float` - random value in `[0, 999]` with 2 decimals
//! - `text` - random 5-character string over `{a, b, c, d}`
//! - `bool` - fair coin flip
//! - a registered type name - nested object, synthesized recursively
//! - anything else - the `"<unsupported type: ...>"` sentinel
//!
//! Unknown type names never fail a run; a schema with one bad field
//! still yields values for every other field.

pub mod random;
pub mod synthesizer;

// Re-exports for convenience
pub use synthesizer::{
    GeneratorError, MockGenerator, DEFAULT_MAX_DEPTH, FLOAT_DECIMALS, FLOAT_MAX, FLOAT_MIN,
    INT_DIGITS, TEXT_ALPHABET, TEXT_LENGTH,
};
