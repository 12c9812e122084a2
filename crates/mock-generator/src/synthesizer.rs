//! Recursive mock value synthesizer.

use crate::random;
use indexmap::IndexMap;
use mock_core::{FieldSpec, MockValue, Registry, TypeRef};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Digit count for synthesized integers.
pub const INT_DIGITS: u32 = 3;

/// Lower bound for synthesized floats.
pub const FLOAT_MIN: f64 = 0.0;

/// Upper bound for synthesized floats.
pub const FLOAT_MAX: f64 = 999.0;

/// Fractional digits kept on synthesized floats.
pub const FLOAT_DECIMALS: u32 = 2;

/// Length of synthesized text values.
pub const TEXT_LENGTH: usize = 5;

/// Alphabet synthesized text values draw from.
pub const TEXT_ALPHABET: [char; 4] = ['a', 'b', 'c', 'd'];

/// Default nesting limit before synthesis fails.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Error type for synthesis operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Requested type is not in the registry
    #[error("Type not found: {0}")]
    TypeNotFound(String),

    /// Digit count outside the representable 1..=18 range
    #[error("Invalid digit count: {0} (expected 1..=18)")]
    InvalidDigitCount(u32),

    /// Inverted numeric range
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Lower bound that was requested
        min: f64,
        /// Upper bound that was requested
        max: f64,
    },

    /// Text generation was given no characters to draw from
    #[error("Alphabet must not be empty")]
    EmptyAlphabet,

    /// Schema nesting exceeded the configured limit, which means a type
    /// refers to itself directly or through other types
    #[error("Recursion limit exceeded at depth {depth} while synthesizing type '{type_name}'")]
    RecursionLimitExceeded {
        /// Depth at which the walk was cut off
        depth: usize,
        /// Type whose expansion hit the limit
        type_name: String,
    },
}

/// Recursive mock value generator.
///
/// Walks a type's fields in declaration order and synthesizes a value
/// for each: primitives via the [`random`] generators, registered
/// composite types by recursing, and anything unresolvable as the
/// unsupported-type sentinel. The output object's key order always
/// matches the schema's field order, so repeated runs are structurally
/// identical even though the values differ.
///
/// Each generator owns its RNG and holds the registry it was given, so
/// independent generators can run on separate threads without
/// coordination.
pub struct MockGenerator {
    /// Registry of composite types available for recursion
    registry: Registry,
    /// Entropy source; seedable for reproducible tests
    rng: StdRng,
    /// Nesting limit guarding against self-referential schemas
    max_depth: usize,
}

impl MockGenerator {
    /// Create a generator over the given registry, seeded from OS entropy.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            rng: StdRng::from_entropy(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Re-seed the generator for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Override the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Get a reference to the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Synthesize one instance of a registered type.
    pub fn synthesize_type(&mut self, type_name: &str) -> Result<MockValue, GeneratorError> {
        let schema = self
            .registry
            .get(type_name)
            .ok_or_else(|| GeneratorError::TypeNotFound(type_name.to_string()))?;

        synthesize_fields_at(&self.registry, &mut self.rng, &schema.fields, self.max_depth, 0)
    }

    /// Synthesize an object from a bare field list, without requiring the
    /// fields to belong to a registered type.
    pub fn synthesize_fields(&mut self, fields: &[FieldSpec]) -> Result<MockValue, GeneratorError> {
        synthesize_fields_at(&self.registry, &mut self.rng, fields, self.max_depth, 0)
    }

    /// Synthesize `count` instances of a registered type.
    pub fn synthesize_many(
        &mut self,
        type_name: &str,
        count: usize,
    ) -> Result<Vec<MockValue>, GeneratorError> {
        (0..count).map(|_| self.synthesize_type(type_name)).collect()
    }
}

/// Walk one field list at the given depth.
fn synthesize_fields_at<R: Rng>(
    registry: &Registry,
    rng: &mut R,
    fields: &[FieldSpec],
    max_depth: usize,
    depth: usize,
) -> Result<MockValue, GeneratorError> {
    let mut object = IndexMap::with_capacity(fields.len());

    for field in fields {
        let value = match field.resolved_type() {
            Some(TypeRef::Int) => MockValue::Int(random::random_digits_int(rng, INT_DIGITS)?),

            Some(TypeRef::Float) => {
                MockValue::Float(random::random_float(rng, FLOAT_MIN, FLOAT_MAX, FLOAT_DECIMALS)?)
            }

            Some(TypeRef::Text) => {
                MockValue::Text(random::random_text(rng, TEXT_LENGTH, &TEXT_ALPHABET)?)
            }

            Some(TypeRef::Bool) => MockValue::Bool(random::random_bool(rng)),

            Some(TypeRef::Named(type_name)) => match registry.get(&type_name) {
                Some(nested) => {
                    if depth + 1 >= max_depth {
                        return Err(GeneratorError::RecursionLimitExceeded {
                            depth: depth + 1,
                            type_name,
                        });
                    }
                    synthesize_fields_at(registry, rng, &nested.fields, max_depth, depth + 1)?
                }
                // Unknown type names degrade to a sentinel so one bad
                // field cannot abort the rest of the schema
                None => MockValue::Unsupported(type_name),
            },

            // Neither an annotation nor an inferable default
            None => MockValue::Unsupported("unknown".to_string()),
        };

        object.insert(field.name.clone(), value);
    }

    Ok(MockValue::Object(object))
}
