//! Markup Tree: the XML-native node model
//!
//! Only tags, text and element children are kept. Attributes, comments,
//! processing instructions and mixed content have no representation here.

/// A single markup node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    /// Text of a leaf node. `None` when no text was set.
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }
}

/// Whether `name` can be written as an XML tag.
///
/// Follows the XML 1.0 `Name` production without `:`, since prefixes would
/// need a namespace declaration.
pub fn is_valid_tag(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_name_start_char(c) => chars.all(is_name_char),
        _ => false,
    }
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tags() {
        assert!(is_valid_tag("root"));
        assert!(is_valid_tag("_private"));
        assert!(is_valid_tag("first-name.v2"));
        assert!(is_valid_tag("zażółć"));
        assert!(is_valid_tag("\u{3b1}\u{3b2}"));
        assert!(is_valid_tag("x\u{b7}y"));
    }

    #[test]
    fn test_invalid_tags() {
        assert!(!is_valid_tag(""));
        assert!(!is_valid_tag("1st"));
        assert!(!is_valid_tag("-x"));
        assert!(!is_valid_tag("has space"));
        assert!(!is_valid_tag("a<b"));
        assert!(!is_valid_tag("ns:tag"));
        assert!(!is_valid_tag("a\u{b2}"));
        assert!(!is_valid_tag("\u{aa}b"));
        assert!(!is_valid_tag("\u{b7}x"));
    }
}
