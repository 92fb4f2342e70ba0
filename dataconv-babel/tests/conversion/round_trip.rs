//! Round-trip properties across formats.

use dataconv_babel::formats::{JsonFormat, XmlFormat, YamlFormat};
use dataconv_babel::value::{scalar_text, Map};
use dataconv_babel::{Format, Value};
use proptest::prelude::*;
use serde_json::json;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-zA-Z0-9 .,!?&<>'\"-]{1,12}".prop_map(Value::String),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::Bool),
    ]
}

fn key() -> impl Strategy<Value = String> {
    "[a-w_][a-z0-9_]{0,6}"
}

fn node() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec((key(), inner), 1..4)
            .prop_map(|entries| Value::Object(entries.into_iter().collect()))
    })
}

fn document() -> impl Strategy<Value = Value> {
    prop::collection::vec((key(), node()), 0..5)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<String, Value>>()))
}

/// The value expected back after a trip through XML: every leaf as text.
fn stringified(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), stringified(v)))
                .collect(),
        ),
        other => Value::String(scalar_text(other, "").unwrap_or_default()),
    }
}

proptest! {
    #[test]
    fn json_through_xml_keeps_keys_and_leaves(value in document()) {
        let json = JsonFormat::default();
        let xml = XmlFormat::default();

        let source = json.serialize(&value).unwrap();
        let markup = xml.serialize(&json.parse(&source).unwrap()).unwrap();
        let back = json.parse(&json.serialize(&xml.parse(&markup).unwrap()).unwrap()).unwrap();

        prop_assert_eq!(back, stringified(&value));
    }
}

#[test]
fn json_save_then_load_is_identity() {
    let value = json!({
        "name": "demo",
        "items": [1, 2.5, "three", null, {"nested": [true, false]}],
        "empty": {},
        "list": []
    });
    let format = JsonFormat::default();
    assert_eq!(format.parse(&format.serialize(&value).unwrap()).unwrap(), value);
}

#[test]
fn yaml_save_then_load_is_identity() {
    let value = json!({
        "name": "demo",
        "looks_like_bool": "yes",
        "looks_like_number": "1.0",
        "multiline": "first\nsecond",
        "items": [1, -2, 2.5, "three", null, {"nested": [true, false]}],
        "empty": {}
    });
    let format = YamlFormat::default();
    assert_eq!(format.parse(&format.serialize(&value).unwrap()).unwrap(), value);
}

#[test]
fn top_level_sequences_and_scalars_survive_json_and_yaml() {
    let json = JsonFormat::default();
    let yaml = YamlFormat::default();
    let formats: [&dyn Format; 2] = [&json, &yaml];

    for value in [json!([1, {"a": "b"}]), json!("scalar"), json!(3)] {
        for format in formats {
            let text = format.serialize(&value).unwrap();
            assert_eq!(format.parse(&text).unwrap(), value, "format {}", format.name());
        }
    }
}
