//! Schema definitions for mock synthesis.
//!
//! A schema document declares a set of named composite types. Each type
//! lists its fields in order, and each field carries either an explicit
//! type annotation or a default value whose kind can be inferred. The
//! [`Registry`] collects every type known to one synthesis run.
//!
//! # YAML Format
//!
//! ```yaml
//! types:
//!   - name: Address
//!     fields:
//!       - name: city
//!         type: text
//!       - name: zip
//!         type: int
//!   - name: Person
//!     fields:
//!       - name: name
//!         type: text
//!       - name: home
//!         type: Address
//!       - name: retired
//!         value: false
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading a schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

// ============================================================================
// Type References
// ============================================================================

/// Classification of a declared field type.
///
/// A declared type is either one of the four primitive kinds that
/// terminate recursion, or a name that refers to another composite type.
/// Classification happens once at parse time; whether a `Named` reference
/// actually resolves is decided against a [`Registry`] during synthesis.
///
/// Any string that is not a recognized primitive keyword classifies as
/// `Named` rather than failing to parse, so unknown type names flow
/// through to the synthesizer's fallback path instead of aborting the
/// schema load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Integer primitive
    Int,

    /// Floating-point primitive
    Float,

    /// Text primitive
    Text,

    /// Boolean primitive
    Bool,

    /// Reference to a composite type by name
    Named(String),
}

impl TypeRef {
    /// Classify a type identifier string.
    ///
    /// Accepts the common spellings of each primitive kind; everything
    /// else becomes a named reference.
    pub fn classify(identifier: &str) -> Self {
        match identifier {
            "int" | "integer" => Self::Int,
            "float" | "double" => Self::Float,
            "text" | "str" | "string" => Self::Text,
            "bool" | "boolean" => Self::Bool,
            _ => Self::Named(identifier.to_string()),
        }
    }

    /// The canonical identifier for this type reference.
    pub fn name(&self) -> &str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::Bool => "bool",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TypeRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TypeRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let identifier = String::deserialize(deserializer)?;
        Ok(Self::classify(&identifier))
    }
}

// ============================================================================
// Fields and Type Schemas
// ============================================================================

/// One field of a composite type.
///
/// The field's type is resolved in two steps: an explicit `type`
/// annotation wins; otherwise the kind of the `value` default is
/// inferred. A field with neither resolves to `None` and falls through
/// to the synthesizer's unsupported-type fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name
    pub name: String,

    /// Explicit type annotation
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<TypeRef>,

    /// Default value, used only to infer the type when no annotation exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_yaml::Value>,
}

impl FieldSpec {
    /// Create a field with an explicit type annotation.
    pub fn declared(name: impl Into<String>, declared_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            declared_type: Some(declared_type),
            value: None,
        }
    }

    /// Create a field whose type is inferred from a default value.
    pub fn with_default(name: impl Into<String>, value: serde_yaml::Value) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            value: Some(value),
        }
    }

    /// Resolve this field's type: explicit annotation first, kind of the
    /// default value second.
    pub fn resolved_type(&self) -> Option<TypeRef> {
        self.declared_type
            .clone()
            .or_else(|| self.value.as_ref().and_then(infer_kind))
    }
}

/// Infer a type reference from the kind of a default value.
///
/// Null defaults carry no type information and resolve to `None`.
/// Sequence and mapping defaults are not primitive kinds; they classify
/// as named references so the synthesizer reports them as unsupported.
fn infer_kind(value: &serde_yaml::Value) -> Option<TypeRef> {
    match value {
        serde_yaml::Value::Null => None,
        serde_yaml::Value::Bool(_) => Some(TypeRef::Bool),
        serde_yaml::Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Some(TypeRef::Int)
            } else {
                Some(TypeRef::Float)
            }
        }
        serde_yaml::Value::String(_) => Some(TypeRef::Text),
        serde_yaml::Value::Sequence(_) => Some(TypeRef::Named("sequence".to_string())),
        serde_yaml::Value::Mapping(_) => Some(TypeRef::Named("mapping".to_string())),
        serde_yaml::Value::Tagged(tagged) => infer_kind(&tagged.value),
    }
}

/// A named composite type: an ordered list of fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSchema {
    /// Type name, unique within a registry
    pub name: String,

    /// Field definitions, in declaration order
    pub fields: Vec<FieldSpec>,
}

impl TypeSchema {
    /// Create a new type schema.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all field names, in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// All type schemas known to one synthesis run, keyed by type name.
///
/// A registry is built fresh from whatever schemas the loader discovered
/// in a single source document and is read-only during synthesis. It is
/// always passed by parameter, never held globally, so independent
/// synthesis runs cannot observe each other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    /// Type definitions, in discovery order
    pub types: Vec<TypeSchema>,

    /// Cached type lookup (not serialized)
    #[serde(skip)]
    type_map: HashMap<String, usize>,
}

impl Registry {
    /// Create a new registry from a list of type schemas.
    pub fn new(types: Vec<TypeSchema>) -> Self {
        let mut registry = Self {
            types,
            type_map: HashMap::new(),
        };
        registry.build_type_map();
        registry
    }

    /// Load a registry from a YAML schema file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a registry from a YAML schema document.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut registry: Registry = serde_yaml::from_str(yaml)?;
        registry.build_type_map();
        Ok(registry)
    }

    /// Parse a registry from a JSON schema document.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let mut registry: Registry = serde_json::from_str(json)?;
        registry.build_type_map();
        Ok(registry)
    }

    /// Build the internal type lookup map.
    fn build_type_map(&mut self) {
        self.type_map = self
            .types
            .iter()
            .enumerate()
            .map(|(idx, schema)| (schema.name.clone(), idx))
            .collect();
    }

    /// Get a type schema by name.
    pub fn get(&self, name: &str) -> Option<&TypeSchema> {
        self.type_map.get(name).and_then(|&idx| self.types.get(idx))
    }

    /// Check whether a type name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Get all type names, in discovery order.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name.as_str()).collect()
    }

    /// Add a type schema to the registry.
    pub fn add_type(&mut self, schema: TypeSchema) {
        let idx = self.types.len();
        self.type_map.insert(schema.name.clone(), idx);
        self.types.push(schema);
    }
}

// ============================================================================
// Tests
// ============================================================================
