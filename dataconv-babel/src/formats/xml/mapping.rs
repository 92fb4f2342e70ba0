//! Mapping between the Markup Tree and the Common Value
//!
//! The mapping is partial and lossy in both directions:
//!
//! | Markup Tree                  | Common Value                  | Notes                                   |
//! |------------------------------|-------------------------------|-----------------------------------------|
//! | root element                 | top-level mapping             | root tag itself is dropped on load      |
//! | element with children        | mapping                       |                                         |
//! | leaf with text               | string                        | numbers and booleans come back as text  |
//! | leaf without text            | null                          | empty strings load back as null         |
//! | repeated sibling tags        | last sibling wins             | earlier siblings are discarded          |
//! | repeated sibling tags        | sequence (save only)          | under [`SequencePolicy::Repeat`]        |
//!
//! Attributes, mixed content and namespaces are never represented.

use super::tree::{is_valid_tag, Element};
use super::{SequencePolicy, XmlOptions};
use crate::error::FormatError;
use crate::value::{self, Map, Value};

/// Convert a markup node into a mapping keyed by its children's tags.
pub fn tree_to_value(element: &Element) -> Value {
    let mut map = Map::new();
    for child in &element.children {
        let value = if child.is_leaf() {
            child.text.clone().map(Value::String).unwrap_or(Value::Null)
        } else {
            tree_to_value(child)
        };
        if map.insert(child.tag.clone(), value).is_some() {
            tracing::debug!(tag = %child.tag, "duplicate sibling tag, keeping last value");
        }
    }
    Value::Object(map)
}

/// Build a markup tree under a fresh `root_tag` node from a top-level mapping.
pub fn value_to_tree(value: &Value, options: &XmlOptions) -> Result<Element, FormatError> {
    let Value::Object(map) = value else {
        return Err(FormatError::Serialization(format!(
            "XML output requires a top-level mapping, found {}",
            kind(value)
        )));
    };
    check_tag(&options.root_tag)?;

    let mut root = Element::new(options.root_tag.as_str());
    append_entries(&mut root, map, options)?;
    Ok(root)
}

fn append_entries(parent: &mut Element, map: &Map<String, Value>, options: &XmlOptions) -> Result<(), FormatError> {
    for (key, value) in map {
        check_tag(key)?;
        match value {
            Value::Array(items) => match options.sequences {
                SequencePolicy::Reject => {
                    return Err(FormatError::Serialization(format!(
                        "sequence under '{key}' cannot be represented in XML"
                    )));
                }
                SequencePolicy::Repeat => {
                    for item in items {
                        if item.is_array() {
                            return Err(FormatError::Serialization(format!(
                                "nested sequence under '{key}' cannot be represented in XML"
                            )));
                        }
                        parent.push(entry_element(key, item, options)?);
                    }
                }
            },
            _ => parent.push(entry_element(key, value, options)?),
        }
    }
    Ok(())
}

fn entry_element(key: &str, value: &Value, options: &XmlOptions) -> Result<Element, FormatError> {
    if let Value::Object(map) = value {
        let mut element = Element::new(key);
        append_entries(&mut element, map, options)?;
        return Ok(element);
    }

    let mut element = Element::new(key);
    element.text = value::scalar_text(value, &options.null_text).filter(|text| !text.is_empty());
    Ok(element)
}

fn check_tag(tag: &str) -> Result<(), FormatError> {
    if is_valid_tag(tag) {
        Ok(())
    } else {
        Err(FormatError::Serialization(format!(
            "'{tag}' is not a valid XML tag name"
        )))
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
