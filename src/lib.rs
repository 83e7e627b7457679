mod config;
mod error;
mod format;
mod node;
mod parser;
mod session;
mod template;

pub use config::{Config, FormatConfig, ParseConfig, TemplatesConfig};
pub use error::{Error, Result};
pub use format::{FormatOptions, format, format_with_options};
pub use node::{Element, Node};
pub use parser::ParseOptions;
pub use session::Session;
pub use template::{Template, TemplateLibrary};

/// Parse HTML into a node tree.
pub fn parse(html: &str, options: &ParseOptions) -> Result<Vec<Node>> {
    parser::parse(html, options)
}

/// Convert HTML to mail-body plain text using default config.
pub fn html_to_text(html: &str) -> Result<String> {
    html_to_text_with_config(html, &Config::compiled_default())
}

/// Convert HTML to mail-body plain text with custom config.
pub fn html_to_text_with_config(html: &str, config: &Config) -> Result<String> {
    let nodes = parse(html, &config.parse_options())?;
    Ok(format_with_options(&nodes, &config.format_options()))
}
