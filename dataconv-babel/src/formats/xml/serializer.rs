use super::tree::Element;
use super::XmlOptions;
use crate::error::FormatError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Serialize a Markup Tree to XML text.
///
/// Leaves without text (or with empty text) are written as empty elements.
pub fn serialize_tree(root: &Element, options: &XmlOptions) -> Result<String, FormatError> {
    let mut writer = if options.indent > 0 {
        Writer::new_with_indent(Vec::new(), b' ', options.indent)
    } else {
        Writer::new(Vec::new())
    };

    if options.declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(to_format_error)?;
        if options.indent == 0 {
            writer.get_mut().push(b'\n');
        }
    }
    write_element(&mut writer, root).map_err(to_format_error)?;

    String::from_utf8(writer.into_inner()).map_err(|e| FormatError::Serialization(e.to_string()))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), quick_xml::Error> {
    let tag = element.tag.as_str();
    if element.is_leaf() {
        match element.text.as_deref() {
            None | Some("") => writer.write_event(Event::Empty(BytesStart::new(tag)))?,
            Some(text) => {
                writer.write_event(Event::Start(BytesStart::new(tag)))?;
                writer.write_event(Event::Text(BytesText::new(text)))?;
                writer.write_event(Event::End(BytesEnd::new(tag)))?;
            }
        }
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn to_format_error(err: quick_xml::Error) -> FormatError {
    FormatError::Serialization(format!("XML writer error: {err}"))
}
