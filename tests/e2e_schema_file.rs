//! End-to-end test: schema file → registry → synthesized JSON.

use mock_core::{FileSchemaSource, Registry, SchemaSource};
use mock_generator::{MockGenerator, TEXT_ALPHABET};
use std::io::Write;

const PERSON_SCHEMA: &str = r#"
types:
  - name: Address
    fields:
      - name: city
        type: text
      - name: zip
        type: int

  - name: Person
    fields:
      - name: name
        type: text
      - name: age
        type: int
      - name: home
        type: Address
      - name: salary
        type: float
      - name: retired
        value: false
      - name: wallet
        type: currency
"#;

#[test]
fn test_yaml_file_to_synthesized_json() {
    let mut file = tempfile::NamedTempFile::with_suffix(".yaml").unwrap();
    write!(file, "{PERSON_SCHEMA}").unwrap();

    let schemas = FileSchemaSource
        .load_schemas(file.path().to_str().unwrap())
        .unwrap();
    assert_eq!(schemas.len(), 2);

    let registry = Registry::new(schemas);
    let mut generator = MockGenerator::new(registry).with_seed(42);

    let person = generator.synthesize_type("Person").unwrap();
    let fields = person.as_object().unwrap();

    let keys: Vec<&String> = fields.keys().collect();
    assert_eq!(
        keys,
        vec!["name", "age", "home", "salary", "retired", "wallet"]
    );

    // Primitive fields honor the fixed generation constants
    let name = fields["name"].as_str().unwrap();
    assert_eq!(name.len(), 5);
    assert!(name.chars().all(|c| TEXT_ALPHABET.contains(&c)));
    assert!((100..=999).contains(&fields["age"].as_i64().unwrap()));
    assert!((0.0..=999.0).contains(&fields["salary"].as_f64().unwrap()));

    // Type inferred from the schema's default value
    assert!(fields["retired"].as_bool().is_some());

    // Nested type came from the same registry
    let home = fields["home"].as_object().unwrap();
    assert_eq!(home.keys().collect::<Vec<_>>(), vec!["city", "zip"]);

    // Unknown type degraded to the sentinel rather than failing the run
    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["wallet"], "<unsupported type: currency>");

    // JSON output preserves schema field order
    let rendered = serde_json::to_string(&person).unwrap();
    let name_pos = rendered.find("\"name\"").unwrap();
    let age_pos = rendered.find("\"age\"").unwrap();
    let wallet_pos = rendered.find("\"wallet\"").unwrap();
    assert!(name_pos < age_pos && age_pos < wallet_pos);
}

#[test]
fn test_every_type_in_document_is_synthesizable() {
    let registry = Registry::from_yaml(PERSON_SCHEMA).unwrap();
    let names: Vec<String> = registry.type_names().iter().map(|s| s.to_string()).collect();

    let mut generator = MockGenerator::new(registry).with_seed(7);
    for name in &names {
        let value = generator.synthesize_type(name).unwrap();
        assert!(value.as_object().is_some(), "type {name} produced no object");
    }
}
