use super::tree::Element;
use crate::error::FormatError;
use roxmltree::Node;

/// Parse XML text into a Markup Tree rooted at the document element.
pub fn parse_to_tree(source: &str) -> Result<Element, FormatError> {
    let doc = roxmltree::Document::parse(source).map_err(|e| FormatError::parse("xml", e))?;
    Ok(build_element(doc.root_element()))
}

fn build_element(node: Node) -> Element {
    let children: Vec<Element> = node
        .children()
        .filter(|n| n.is_element())
        .map(build_element)
        .collect();

    // Mixed content is not represented: text is only kept on leaves.
    let text = if children.is_empty() {
        let mut texts = node.children().filter(|n| n.is_text()).filter_map(|n| n.text()).peekable();
        texts.peek().is_some().then(|| texts.collect::<String>())
    } else {
        None
    };

    Element {
        tag: node.tag_name().name().to_string(),
        text,
        children,
    }
}
