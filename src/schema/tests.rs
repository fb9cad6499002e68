//! Schema inference tests

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Classifier
// ============================================================================

#[test_case("2024-01-01", FieldType::Date(TemporalKind::Date) ; "iso date")]
#[test_case("31-12-2024", FieldType::Date(TemporalKind::Date) ; "day first date")]
#[test_case("10:30", FieldType::Date(TemporalKind::Time) ; "hour minute")]
#[test_case("10:30:00", FieldType::Date(TemporalKind::Time) ; "hour minute second")]
#[test_case("2024-01-01T10:00:00", FieldType::Date(TemporalKind::Datetime) ; "datetime")]
#[test_case("2024-01-01T10:00:00.123456Z", FieldType::Date(TemporalKind::Datetime) ; "datetime with zone suffix")]
#[test_case("31-12-2024T23:59:59", FieldType::Date(TemporalKind::Datetime) ; "day first datetime")]
#[test_case("true", FieldType::Boolean ; "boolean true")]
#[test_case("FALSE", FieldType::Boolean ; "boolean uppercase")]
#[test_case("0", FieldType::Boolean ; "boolean zero")]
#[test_case("1", FieldType::Boolean ; "boolean one")]
#[test_case("42", FieldType::Number(NumberKind::Int) ; "int")]
#[test_case("-7", FieldType::Number(NumberKind::Int) ; "negative int")]
#[test_case("3.14", FieldType::Number(NumberKind::Float) ; "float dot")]
#[test_case("3,14", FieldType::Number(NumberKind::Float) ; "float comma")]
#[test_case("hello", FieldType::String ; "plain string")]
#[test_case("", FieldType::String ; "empty string")]
#[test_case("12.34.56", FieldType::String ; "double separator")]
#[test_case("123:45", FieldType::String ; "not a time")]
fn classify_scalar(input: &str, expected: FieldType) {
    assert_eq!(classify(input), expected);
}

#[test]
fn classify_thousands_separator_as_float() {
    // Documented ambiguity: ',' is always a fractional marker, so a
    // thousands-grouped value reads as a float.
    assert_eq!(classify("1,000"), FieldType::Number(NumberKind::Float));
}

#[test]
fn classify_is_pattern_based_not_calendar_aware() {
    assert_eq!(classify("9999-99-99"), FieldType::Date(TemporalKind::Date));
}

#[test]
fn scalar_text_stringifies_native_scalars() {
    assert_eq!(scalar_text(&json!("x")), "x");
    assert_eq!(scalar_text(&json!(true)), "true");
    assert_eq!(scalar_text(&json!(42)), "42");
    assert_eq!(scalar_text(&json!(3.14)), "3.14");
    assert_eq!(scalar_text(&json!(null)), "null");
}

#[test]
fn classify_value_keeps_native_types() {
    assert_eq!(classify_value(&json!(true)), FieldType::Boolean);
    assert_eq!(classify_value(&json!(42)), FieldType::Number(NumberKind::Int));
    assert_eq!(
        classify_value(&json!(3.14)),
        FieldType::Number(NumberKind::Float)
    );
    // A native 1 stays a number; only the string "1" reads as a boolean.
    assert_eq!(classify_value(&json!(1)), FieldType::Number(NumberKind::Int));
    assert_eq!(classify_value(&json!("1")), FieldType::Boolean);
    assert_eq!(classify_value(&json!(null)), FieldType::String);
}

// ============================================================================
// Path resolver
// ============================================================================

#[test]
fn resolve_empty_path_returns_input() {
    let value = json!({"a": 1});
    assert_eq!(resolve(&value, ""), Some(&value));
}

#[test]
fn resolve_object_path() {
    let value = json!({"a": {"b": {"c": 5}}});
    assert_eq!(resolve(&value, "a.b.c"), Some(&json!(5)));
}

#[test]
fn resolve_unwraps_arrays_of_records() {
    let value = json!({"a": {"b": [{"c": 5}]}});
    assert_eq!(resolve(&value, "a.b.c"), Some(&json!(5)));
}

#[test]
fn resolve_numeric_segment_indexes_into_array() {
    let value = json!({"items": [{"name": "first"}, {"name": "second"}]});
    assert_eq!(resolve(&value, "items.1.name"), Some(&json!("second")));
}

#[test]
fn resolve_out_of_range_index_is_none() {
    let value = json!({"items": [1, 2]});
    assert_eq!(resolve(&value, "items.5"), None);
}

#[test]
fn resolve_missing_path_is_none() {
    let value = json!({"a": 1});
    assert_eq!(resolve(&value, "missing.path"), None);
}

#[test]
fn resolve_through_scalar_is_none() {
    let value = json!({"a": 1});
    assert_eq!(resolve(&value, "a.b"), None);
}

#[test]
fn resolve_top_level_array_descends_into_first_element() {
    let value = json!([{"id": 7}, {"id": 8}]);
    assert_eq!(resolve(&value, "id"), Some(&json!(7)));
}

#[test]
fn resolve_ignores_empty_segments() {
    let value = json!({"a": {"b": 1}});
    assert_eq!(resolve(&value, "a..b."), Some(&json!(1)));
}

#[test]
fn first_record_unwraps_nested_arrays() {
    let value = json!([[{"a": 1}]]);
    assert_eq!(first_record(&value), Some(&json!({"a": 1})));
    assert_eq!(first_record(&json!([])), None);
    assert_eq!(first_record(&json!({"a": 1})), Some(&json!({"a": 1})));
}

// ============================================================================
// Schema builder
// ============================================================================

#[test]
fn infer_empty_containers() {
    assert!(infer_schema(&json!({}), "").definitions.is_empty());
    assert!(infer_schema(&json!([]), "").definitions.is_empty());
    assert!(infer_schema(&json!(null), "").definitions.is_empty());
}

#[test]
fn infer_simple_object_preserves_order() {
    let schema = infer_schema(&json!({"a": 1, "b": "x"}), "");

    assert_eq!(
        schema.definitions,
        vec![
            Definition::new("a", FieldType::Number(NumberKind::Int)),
            Definition::new("b", FieldType::String),
        ]
    );
}

#[test]
fn infer_source_order_is_not_alphabetical() {
    let schema = infer_schema(&json!({"zebra": 1, "apple": 2}), "");

    let keys: Vec<&str> = schema.definitions.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, vec!["zebra", "apple"]);
}

#[test]
fn infer_nested_object() {
    let schema = infer_schema(&json!({"user": {"name": "John", "age": 30}}), "");

    assert_eq!(
        schema.definitions,
        vec![Definition::new(
            "user",
            FieldType::Object(vec![
                Definition::new("name", FieldType::String),
                Definition::new("age", FieldType::Number(NumberKind::Int)),
            ])
        )]
    );
}

#[test]
fn infer_array_of_records_property() {
    let schema = infer_schema(&json!({"items": [{"id": 1, "label": "x"}]}), "");

    assert_eq!(
        schema.definitions,
        vec![Definition::new(
            "items",
            FieldType::Array(vec![
                Definition::new("id", FieldType::Number(NumberKind::Int)),
                Definition::new("label", FieldType::String),
            ])
        )]
    );
}

#[test]
fn infer_array_of_scalars_uses_synthetic_key() {
    let schema = infer_schema(&json!({"tags": ["red", "green"]}), "");

    assert_eq!(
        schema.definitions,
        vec![Definition::new(
            "tags",
            FieldType::Array(vec![Definition::new("", FieldType::String)])
        )]
    );
}

#[test]
fn infer_array_of_arrays_nests() {
    let schema = infer_schema(&json!({"grid": [[1, 2], [3]]}), "");

    assert_eq!(
        schema.definitions,
        vec![Definition::new(
            "grid",
            FieldType::Array(vec![Definition::new(
                "",
                FieldType::Array(vec![Definition::new(
                    "",
                    FieldType::Number(NumberKind::Int)
                )])
            )])
        )]
    );
}

#[test]
fn infer_empty_array_property() {
    let schema = infer_schema(&json!({"items": []}), "");

    assert_eq!(
        schema.definitions,
        vec![Definition::new("items", FieldType::Array(Vec::new()))]
    );
}

#[test]
fn infer_samples_only_the_first_array_element() {
    // The second element's shape must not influence the result.
    let sampled = infer_schema(&json!([{"a": 1}, {"a": "ignored", "b": true}]), "");
    let single = infer_schema(&json!({"a": 1}), "");

    assert_eq!(
        sampled.definitions,
        vec![Definition::new(
            "",
            FieldType::Array(single.definitions.clone())
        )]
    );
}

#[test]
fn infer_bare_scalar_keys_by_its_own_text() {
    let schema = infer_schema(&json!("2024-01-01"), "");

    assert_eq!(
        schema.definitions,
        vec![Definition::new(
            "2024-01-01",
            FieldType::Date(TemporalKind::Date)
        )]
    );
}

#[test]
fn infer_null_property_classifies_as_string() {
    let schema = infer_schema(&json!({"middle_name": null}), "");

    assert_eq!(
        schema.definitions,
        vec![Definition::new("middle_name", FieldType::String)]
    );
}

#[test]
fn infer_derives_table_from_last_path_segment() {
    let schema = infer_schema(&json!({"a": 1}), "data.users");

    assert_eq!(schema.table, "users");
    assert_eq!(schema.path, "data.users");

    let root = infer_schema(&json!({"a": 1}), "");
    assert_eq!(root.table, "");
}

#[test]
fn infer_schema_opt_treats_absent_as_empty() {
    let schema = infer_schema_opt(None, "a.b");

    assert!(schema.is_empty());
    assert_eq!(schema.table, "b");
    assert_eq!(schema.path, "a.b");
}

#[test]
fn schema_wire_shape() {
    let schema = infer_schema(&json!({"n": 3.14, "s": "x", "o": {"k": 1}}), "root");
    let wire = serde_json::to_value(&schema).unwrap();

    assert_eq!(wire["table"], "root");
    assert_eq!(wire["path"], "root");
    assert_eq!(
        wire["definitions"][0],
        json!({"key": "n", "type": {"name": "number", "precision": "float"}})
    );
    // Leaf types without a refinement carry no precision on the wire.
    assert_eq!(wire["definitions"][1]["type"], json!({"name": "string"}));
    assert_eq!(wire["definitions"][2]["type"]["name"], "object");
    assert_eq!(
        wire["definitions"][2]["type"]["precision"],
        json!([{"key": "k", "type": {"name": "number", "precision": "int"}}])
    );
}

#[test]
fn schema_round_trips_through_serde() {
    let schema = infer_schema(
        &json!({"id": 1, "tags": ["a"], "meta": {"ts": "2024-01-01T10:00:00"}}),
        "data.events",
    );

    let text = serde_json::to_string(&schema).unwrap();
    let back: Schema = serde_json::from_str(&text).unwrap();
    assert_eq!(back, schema);
}

// ============================================================================
// Table mapper
// ============================================================================

#[test]
fn to_table_of_absent_schema_is_empty() {
    assert_eq!(
        to_table(None),
        TableSchema {
            name: String::new(),
            columns: Vec::new(),
        }
    );
}

#[test]
fn to_table_drops_nested_definitions() {
    let schema = infer_schema(&json!({"a": 1, "b": {"nested": 1}, "c": [1]}), "users");
    let table = to_table(Some(&schema));

    assert_eq!(table.name, "users");
    assert_eq!(table.columns, vec![ColumnSchema::new("a", "INT")]);
}

#[test]
fn to_table_maps_all_leaf_refinements() {
    let schema = infer_schema(
        &json!({
            "name": "Ada",
            "score": 9.5,
            "count": 42,
            "active": "true",
            "born": "1815-12-10",
            "at": "10:30",
            "seen": "2024-01-01T10:00:00"
        }),
        "people",
    );
    let table = to_table(Some(&schema));

    assert_eq!(
        table.columns,
        vec![
            ColumnSchema::new("name", "TEXT"),
            ColumnSchema::new("score", "FLOAT"),
            ColumnSchema::new("count", "INT"),
            ColumnSchema::new("active", "BOOLEAN"),
            ColumnSchema::new("born", "DATE"),
            ColumnSchema::new("at", "TIME"),
            ColumnSchema::new("seen", "TIMESTAMP"),
        ]
    );
}

#[test]
fn relational_type_fixed_table() {
    assert_eq!(relational_type("string"), Some("TEXT"));
    assert_eq!(relational_type("char"), Some("VARCHAR(255)"));
    assert_eq!(relational_type("int"), Some("INT"));
    assert_eq!(relational_type("float"), Some("FLOAT"));
    assert_eq!(relational_type("boolean"), Some("BOOLEAN"));
    assert_eq!(relational_type("date"), Some("DATE"));
    assert_eq!(relational_type("time"), Some("TIME"));
    assert_eq!(relational_type("datetime"), Some("TIMESTAMP"));
    assert_eq!(relational_type("object"), None);
}

#[test]
fn to_table_column_default_is_omitted_on_the_wire() {
    let schema = infer_schema(&json!({"a": 1}), "t");
    let wire = serde_json::to_value(to_table(Some(&schema))).unwrap();

    assert_eq!(wire, json!({"name": "t", "columns": [{"name": "a", "type": "INT"}]}));
}
