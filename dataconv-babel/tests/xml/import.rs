//! Loading XML documents into the common value.

use crate::common::fixture_path;
use dataconv_babel::formats::XmlFormat;
use dataconv_babel::Format;
use serde_json::json;

#[test]
fn duplicate_siblings_keep_last_value() {
    let value = XmlFormat::default()
        .load(&fixture_path("duplicates.xml"))
        .unwrap();
    assert_eq!(
        value,
        json!({
            "title": "Inventory",
            "item": "third",
            "shelf": {"slot": "b"}
        })
    );
}

#[test]
fn attributes_and_comments_are_dropped() {
    let value = XmlFormat::default()
        .load(&fixture_path("config.xml"))
        .unwrap();
    assert_eq!(
        value,
        json!({
            "server": {
                "host": "localhost",
                "port": "8080"
            },
            "debug": "false",
            "motd": null
        })
    );
}
