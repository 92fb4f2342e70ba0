//! File-to-file conversions through the default Converter.

use crate::common::write_file;
use dataconv_babel::{convert, FormatError, Outcome};
use serde_json::json;
use std::fs;
use tempfile::tempdir;

#[test]
fn json_to_xml_and_back() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "in.json", r#"{"a": {"b": "1"}, "c": "2"}"#);
    let xml = dir.path().join("mid.xml");
    let back = dir.path().join("back.json");

    assert!(convert(&input, &xml).unwrap().is_converted());
    let markup = fs::read_to_string(&xml).unwrap();
    assert_eq!(
        markup,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root><a><b>1</b></a><c>2</c></root>"
    );

    assert!(convert(&xml, &back).unwrap().is_converted());
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&back).unwrap()).unwrap();
    assert_eq!(value, json!({"a": {"b": "1"}, "c": "2"}));
}

#[test]
fn yaml_to_json_keeps_types_and_order() {
    let dir = tempdir().unwrap();
    let input = write_file(
        dir.path(),
        "in.yml",
        "name: demo\nversion: 2\nratio: 0.5\nenabled: true\nmissing: null\ntags:\n  - a\n  - b\n",
    );
    let output = dir.path().join("out.json");

    assert!(convert(&input, &output).unwrap().is_converted());
    let text = fs::read_to_string(&output).unwrap();
    insta::assert_snapshot!(text, @r###"
    {
        "name": "demo",
        "version": 2,
        "ratio": 0.5,
        "enabled": true,
        "missing": null,
        "tags": [
            "a",
            "b"
        ]
    }
    "###);
}

#[test]
fn json_to_yaml() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "in.json", r#"{"server": {"host": "localhost", "port": 8080}, "debug": false}"#);
    let output = dir.path().join("out.yaml");

    assert!(convert(&input, &output).unwrap().is_converted());
    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text, "server:\n  host: localhost\n  port: 8080\ndebug: false\n");
}

#[test]
fn yaml_to_xml_stringifies_scalars() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "in.yaml", "port: 8080\nflag: true\nempty: null\n");
    let xml = dir.path().join("out.xml");
    let back = dir.path().join("back.yaml");

    assert!(convert(&input, &xml).unwrap().is_converted());
    assert!(fs::read_to_string(&xml)
        .unwrap()
        .ends_with("<root><port>8080</port><flag>true</flag><empty/></root>"));

    assert!(convert(&xml, &back).unwrap().is_converted());
    assert_eq!(
        fs::read_to_string(&back).unwrap(),
        "port: '8080'\nflag: 'true'\nempty: null\n"
    );
}

#[test]
fn yaml_merge_keys_reach_xml() {
    let dir = tempdir().unwrap();
    let input = write_file(
        dir.path(),
        "in.yaml",
        "defaults: &d\n  retries: 3\nservice:\n  <<: *d\n  name: api\n",
    );
    let xml = dir.path().join("out.xml");

    assert!(convert(&input, &xml).unwrap().is_converted());
    let markup = fs::read_to_string(&xml).unwrap();
    assert!(markup.contains("<service>"));
    assert!(markup.contains("<retries>3</retries><name>api</name>")
        || markup.contains("<name>api</name><retries>3</retries>"));
}

#[test]
fn output_is_overwritten() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "in.json", r#"{"a": 1}"#);
    let output = write_file(dir.path(), "out.yaml", "stale: content\nmore: lines\n");

    assert!(convert(&input, &output).unwrap().is_converted());
    assert_eq!(fs::read_to_string(&output).unwrap(), "a: 1\n");
}

#[test]
fn malformed_inputs_never_write_output() {
    let dir = tempdir().unwrap();
    let cases = [
        ("bad.json", r#"{"a": }"#, "json"),
        ("bad.yaml", "a: [1, 2\n", "yaml"),
        ("inf.yaml", "a: .inf\n", "yaml"),
        ("bad.xml", "<root><a></root>", "xml"),
    ];

    for (name, contents, expected) in cases {
        let input = write_file(dir.path(), name, contents);
        let output = dir.path().join(format!("{name}.out.json"));
        match convert(&input, &output).unwrap() {
            Outcome::LoadFailed(FormatError::Parse { format, .. }) => assert_eq!(format, expected),
            other => panic!("Expected parse failure for {name}, got {other:?}"),
        }
        assert!(!output.exists());
    }
}
