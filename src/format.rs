use crate::config::Config;
use crate::node::{Element, Node};

/// Knobs for the text emitter.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Prefix written before each list item
    pub bullet: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Config::default().format_options()
    }
}

/// Convert nodes to mail-body plain text using the default bullet.
pub fn format(nodes: &[Node]) -> String {
    format_with_options(nodes, &FormatOptions::default())
}

/// Convert nodes to mail-body plain text.
pub fn format_with_options(nodes: &[Node], options: &FormatOptions) -> String {
    let mut out = String::new();
    emit_nodes(nodes, options, &mut out);
    normalize(&out)
}

fn emit_nodes(nodes: &[Node], options: &FormatOptions, out: &mut String) {
    for node in nodes {
        emit_node(node, options, out);
    }
}

fn emit_node(node: &Node, options: &FormatOptions, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => emit_element(element, options, out),
    }
}

fn emit_element(element: &Element, options: &FormatOptions, out: &mut String) {
    let children = &element.children;

    if element.is("b") || element.is("strong") {
        wrap(children, "**", "**", options, out);
    } else if element.is("i") || element.is("em") {
        wrap(children, "*", "*", options, out);
    } else if element.is("u") {
        wrap(children, "_", "_", options, out);
    } else if element.is("p") || element.is("div") {
        out.push_str(&trimmed(children, options));
        out.push_str("\n\n");
    } else if element.is("br") {
        // Children of a line break are never emitted
        out.push('\n');
    } else if element.is("li") {
        out.push_str(&options.bullet);
        out.push_str(&trimmed(children, options));
        out.push('\n');
    } else if element.is("ul") || element.is("ol") {
        wrap(children, "\n", "\n", options, out);
    } else if element.heading_level().is_some() {
        out.push_str("\n**");
        out.push_str(&trimmed(children, options));
        out.push_str("**\n\n");
    } else {
        emit_nodes(children, options, out);
    }
}

fn wrap(children: &[Node], open: &str, close: &str, options: &FormatOptions, out: &mut String) {
    out.push_str(open);
    emit_nodes(children, options, out);
    out.push_str(close);
}

/// Children rendered into a scratch buffer, then trimmed.
fn trimmed(children: &[Node], options: &FormatOptions) -> String {
    let mut content = String::new();
    emit_nodes(children, options, &mut content);
    content.trim().to_string()
}

fn is_horizontal(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Whitespace clean-up over the assembled text. The step order matters:
/// blank lines are collapsed before runs of spaces are.
fn normalize(text: &str) -> String {
    let text = strip_trailing_horizontal(text);
    let text = collapse_blank_lines(&text);
    let text = text.trim();
    let mut text = collapse_horizontal(text);

    if !text.is_empty() && !text.ends_with("\n\n") {
        let kept = text.trim_end_matches('\n').len();
        text.truncate(kept);
    }
    text
}

/// Drop spaces and tabs that sit right before a newline.
fn strip_trailing_horizontal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = String::new();

    for ch in text.chars() {
        if is_horizontal(ch) {
            pending.push(ch);
            continue;
        }
        if ch != '\n' {
            out.push_str(&pending);
        }
        pending.clear();
        out.push(ch);
    }
    out.push_str(&pending);
    out
}

/// Any run of two or more newlines, possibly separated by spaces or tabs,
/// becomes exactly one blank line.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('\n') {
        out.push_str(&rest[..start]);
        let run = &rest[start..];

        let mut newlines = 0;
        let mut end = 0;
        for (i, ch) in run.char_indices() {
            if ch == '\n' {
                newlines += 1;
                end = i + 1;
            } else if !is_horizontal(ch) {
                break;
            }
        }

        if newlines >= 2 {
            out.push_str("\n\n");
            rest = &run[end..];
        } else {
            out.push('\n');
            rest = &run[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Squash every run of spaces and tabs into one space.
fn collapse_horizontal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for ch in text.chars() {
        if is_horizontal(ch) {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            in_run = false;
            out.push(ch);
        }
    }
    out
}
