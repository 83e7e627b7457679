use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};
use crate::format::FormatOptions;
use crate::parser::ParseOptions;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub parse: ParseConfig,
    pub format: FormatConfig,
    pub templates: TemplatesConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParseConfig {
    /// Deepest element nesting accepted before parsing gives up
    pub max_depth: usize,
    /// Elements dropped together with everything inside them
    pub strip_tags: Vec<String>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_depth: 256,
            strip_tags: vec!["script".to_string(), "style".to_string()],
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormatConfig {
    pub bullet: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            bullet: "• ".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TemplatesConfig {
    pub default_title: String,
    pub default_category: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            default_title: "Untitled Template".to_string(),
            default_category: "Uncategorized".to_string(),
        }
    }
}

impl Config {
    /// The config shipped in `default_config.toml`. build.rs checks that it parses.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file. Keys the file leaves out keep their
    /// defaults; a missing file means all defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let config: Config = toml::from_str(&content)?;
                config.validate()?;
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::compiled_default()),
            Err(e) => Err(e.into()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.parse.max_depth == 0 {
            return Err(Error::Config("parse.max_depth must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_depth: self.parse.max_depth,
            strip_tags: self.parse.strip_tags.clone(),
        }
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            bullet: self.format.bullet.clone(),
        }
    }
}
