//! Editor session state for the template workflow
//!
//! A session owns the current template text and the user's placeholder
//! values. Loading a different template clears the values; editing the
//! current text keeps them; an explicit reset restores the loaded body and
//! clears the values. The field list is derived from the text on demand.

use std::collections::HashMap;

use super::placeholder::{extract, substitute};

/// One editing session over a template and its placeholder values
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    /// Body as originally loaded, restored on reset
    loaded: String,
    /// Current (possibly edited) body
    content: String,
    values: HashMap<String, String>,
}

impl EditorSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a template body, clearing all values
    pub fn load_template(&mut self, content: &str) {
        self.loaded = content.to_string();
        self.content = content.to_string();
        self.values.clear();
    }

    /// Replace the body in place, keeping existing values
    ///
    /// Values for names no longer present in the text stay in the map but
    /// become inert.
    pub fn edit_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    /// The current template body
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Set (or overwrite) the value for a placeholder name
    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get the value for a placeholder name, if set
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|v| v.as_str())
    }

    /// Clear all values and restore the loaded template body
    pub fn reset(&mut self) {
        self.values.clear();
        self.content = self.loaded.clone();
    }

    /// Placeholder names of the current body, in first-occurrence order
    pub fn fields(&self) -> Vec<String> {
        extract(&self.content)
    }

    /// Fields with no value, or an empty value
    pub fn missing_fields(&self) -> Vec<String> {
        self.fields()
            .into_iter()
            .filter(|name| self.values.get(name).map_or(true, |v| v.is_empty()))
            .collect()
    }

    /// The body with all current values substituted
    pub fn preview(&self) -> String {
        substitute(&self.content, &self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_extracts_fields() {
        let mut session = EditorSession::new();
        session.load_template("नाम: {{नाम}}\nठेगाना: {{ठेगाना}}");
        assert_eq!(session.fields(), vec!["नाम", "ठेगाना"]);
    }

    #[test]
    fn test_load_clears_values() {
        let mut session = EditorSession::new();
        session.load_template("Hello {{name}}");
        session.set_value("name", "Ram");
        session.load_template("Bye {{name}}");
        assert_eq!(session.value("name"), None);
    }

    #[test]
    fn test_edit_keeps_values() {
        let mut session = EditorSession::new();
        session.load_template("Hello {{name}}");
        session.set_value("name", "Ram");
        session.edit_content("Greetings {{name}}, from {{office}}");
        assert_eq!(session.value("name"), Some("Ram"));
        assert_eq!(session.fields(), vec!["name", "office"]);
    }

    #[test]
    fn test_reset_restores_loaded_body() {
        let mut session = EditorSession::new();
        session.load_template("Hello {{name}}");
        session.edit_content("changed");
        session.set_value("name", "Ram");
        session.reset();
        assert_eq!(session.content(), "Hello {{name}}");
        assert_eq!(session.value("name"), None);
    }

    #[test]
    fn test_missing_fields() {
        let mut session = EditorSession::new();
        session.load_template("{{a}} {{b}} {{c}}");
        session.set_value("a", "filled");
        session.set_value("b", "");
        assert_eq!(session.missing_fields(), vec!["b", "c"]);
    }

    #[test]
    fn test_preview_substitutes_current_values() {
        let mut session = EditorSession::new();
        session.load_template("नाम: {{नाम}}");
        assert_eq!(session.preview(), "नाम: {{नाम}}");
        session.set_value("नाम", "राज कुमार");
        assert_eq!(session.preview(), "नाम: राज कुमार");
    }
}
