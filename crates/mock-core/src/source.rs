//! Schema discovery seam.
//!
//! The synthesizer never depends on how type schemas are discovered.
//! [`SchemaSource`] is the single capability the presentation layer
//! needs: turn an identifier into a set of type schemas. The shipped
//! implementation reads YAML or JSON documents from the filesystem;
//! other environments can plug in reflection or IDL-backed sources.

use crate::schema::{Registry, SchemaError, TypeSchema};
use std::fs;
use std::path::Path;

/// Capability to load type schemas from some external description.
pub trait SchemaSource {
    /// Load every type schema the identifier describes, in discovery order.
    fn load_schemas(&self, identifier: &str) -> Result<Vec<TypeSchema>, SchemaError>;
}

/// Schema source backed by the filesystem.
///
/// The identifier is a file path. Files with a `.json` extension parse
/// as JSON; everything else parses as YAML.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSchemaSource;

impl SchemaSource for FileSchemaSource {
    fn load_schemas(&self, identifier: &str) -> Result<Vec<TypeSchema>, SchemaError> {
        let content = fs::read_to_string(identifier)?;

        let is_json = Path::new(identifier)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let registry = if is_json {
            Registry::from_json(&content)?
        } else {
            Registry::from_yaml(&content)?
        };

        Ok(registry.types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_yaml_schema_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".yaml").unwrap();
        write!(
            file,
            r#"
types:
  - name: Tag
    fields:
      - name: label
        type: text
"#
        )
        .unwrap();

        let schemas = FileSchemaSource
            .load_schemas(file.path().to_str().unwrap())
            .unwrap();

        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0].name, "Tag");
    }

    #[test]
    fn test_load_json_schema_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(
            file,
            r#"{{"types": [{{"name": "Tag", "fields": [{{"name": "label", "type": "text"}}]}}]}}"#
        )
        .unwrap();

        let schemas = FileSchemaSource
            .load_schemas(file.path().to_str().unwrap())
            .unwrap();

        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0].field_names(), vec!["label"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = FileSchemaSource.load_schemas("/nonexistent/schema.yaml");
        assert!(matches!(result, Err(SchemaError::IoError(_))));
    }
}
