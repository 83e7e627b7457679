//! Email template records and the library they are picked from.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::config::{Config, TemplatesConfig};
use crate::error::{Error, Result};

/// A stored email template. `body` holds the HTML as saved by the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub body: String,
}

/// Template record as it appears in a library file. Everything but the id is optional.
#[derive(Debug, Deserialize)]
struct RawTemplate {
    id: u64,
    title: Option<String>,
    category: Option<String>,
    body: Option<String>,
}

impl RawTemplate {
    fn into_template(self, defaults: &TemplatesConfig) -> Template {
        Template {
            id: self.id,
            title: non_blank(self.title).unwrap_or_else(|| defaults.default_title.clone()),
            category: non_blank(self.category)
                .unwrap_or_else(|| defaults.default_category.clone()),
            body: self.body.unwrap_or_default(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Template {
    /// Picker label, e.g. `Welcome (Onboarding)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.category)
    }

    pub fn has_content(&self) -> bool {
        !self.body.trim().is_empty()
    }

    /// The body converted to mail-ready plain text.
    pub fn plain_body(&self, config: &Config) -> Result<String> {
        crate::html_to_text_with_config(&self.body, config)
    }
}

/// All templates from one library file, ordered by title.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: Vec<Template>,
}

impl TemplateLibrary {
    pub fn new(mut templates: Vec<Template>) -> Self {
        templates.sort_by(|a, b| a.title.cmp(&b.title));
        Self { templates }
    }

    pub fn load(path: &Path, defaults: &TemplatesConfig) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content, defaults)
    }

    pub fn from_json(json: &str, defaults: &TemplatesConfig) -> Result<Self> {
        let raw: Vec<RawTemplate> = serde_json::from_str(json)?;
        let templates = raw
            .into_iter()
            .map(|t| t.into_template(defaults))
            .collect();
        Ok(Self::new(templates))
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.templates.iter().map(|t| t.category.as_str()).collect();
        set.into_iter().collect()
    }

    /// Templates in `category`, or every template when `None`.
    pub fn filter(&self, category: Option<&str>) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| category.is_none_or(|c| t.category == c))
            .collect()
    }

    pub fn get(&self, id: u64) -> Result<&Template> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or(Error::TemplateNotFound(id))
    }
}
