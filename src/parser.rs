use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::node::Node;

/// Limits applied while turning parsed HTML into [`Node`]s
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub max_depth: usize,
    pub strip_tags: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Config::default().parse_options()
    }
}

/// Parse an HTML string (a fragment or a full document) and return the
/// children of its `<body>`.
pub fn parse(html: &str, options: &ParseOptions) -> Result<Vec<Node>> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);

    match find_body(&dom.document) {
        Some(body) => convert_children(&body, 1, options),
        None => Ok(Vec::new()),
    }
}

fn find_body(handle: &Handle) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if let NodeData::Element { name, .. } = &child.data {
            match &*name.local {
                "body" => return Some(child.clone()),
                "html" => return find_body(child),
                _ => {}
            }
        }
    }
    None
}

fn convert_children(handle: &Handle, depth: usize, options: &ParseOptions) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();
    for child in handle.children.borrow().iter() {
        if let Some(node) = convert(child, depth, options)? {
            nodes.push(node);
        }
    }
    Ok(nodes)
}

fn convert(handle: &Handle, depth: usize, options: &ParseOptions) -> Result<Option<Node>> {
    match &handle.data {
        NodeData::Text { contents } => Ok(Some(Node::text(contents.borrow().to_string()))),
        NodeData::Element { name, .. } => {
            let tag: &str = &name.local;
            if options
                .strip_tags
                .iter()
                .any(|stripped| stripped.eq_ignore_ascii_case(tag))
            {
                return Ok(None);
            }
            if depth > options.max_depth {
                return Err(Error::TooDeep {
                    limit: options.max_depth,
                });
            }
            let children = convert_children(handle, depth + 1, options)?;
            Ok(Some(Node::element(tag, children)))
        }
        // Comments, doctypes and processing instructions carry no text
        _ => Ok(None),
    }
}
