use crate::error::Result;
use crate::template::{Template, TemplateLibrary};

/// Picker state: which category is shown and which template is selected.
#[derive(Debug, Clone)]
pub struct Session {
    library: TemplateLibrary,
    category: Option<String>,
    selected: Option<u64>,
}

impl Session {
    pub fn new(library: TemplateLibrary) -> Self {
        Self {
            library,
            category: None,
            selected: None,
        }
    }

    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Change the category filter. Always clears the selection.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.selected = None;
    }

    /// Templates visible under the current filter.
    pub fn visible(&self) -> Vec<&Template> {
        self.library.filter(self.category())
    }

    /// Select a template by id. An unknown id leaves the selection as it was.
    pub fn select(&mut self, id: u64) -> Result<&Template> {
        let template = self.library.get(id)?;
        self.selected = Some(id);
        Ok(template)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Result<Option<&Template>> {
        self.selected.map(|id| self.library.get(id)).transpose()
    }
}
