/// A node of a parsed HTML fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

/// A tagged container. Attributes are not kept, nothing downstream reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub children: Vec<Node>,
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element(Element {
            tag: tag.into(),
            children,
        })
    }

    /// Concatenated text of this node and all of its descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

impl Element {
    /// Case-insensitive tag comparison.
    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// Heading level for `h1`..`h6`, if this is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self.tag.as_bytes() {
            [h, level @ b'1'..=b'6'] if h.eq_ignore_ascii_case(&b'h') => Some(level - b'0'),
            _ => None,
        }
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => {
            for child in &element.children {
                collect_text(child, out);
            }
        }
    }
}
