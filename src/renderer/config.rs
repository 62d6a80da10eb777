//! Configuration for PDF output

use std::path::PathBuf;

/// Font used for body text
///
/// The builtin Type1 faces carry WinAnsi encoding limits; Devanagari text
/// needs an external TTF for full fidelity.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfFont {
    Times,
    Helvetica,
    Courier,
    /// Path to a TTF/OTF file embedded into the document
    External(PathBuf),
}

/// Configuration options for PDF serialization
#[derive(Debug, Clone)]
pub struct PdfConfig {
    /// Document title stored in the PDF metadata
    pub title: String,

    /// Body font
    pub font: PdfFont,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            title: "document".to_string(),
            font: PdfFont::Times,
        }
    }
}

impl PdfConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body font
    pub fn with_font(mut self, font: PdfFont) -> Self {
        self.font = font;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PdfConfig::default();
        assert_eq!(config.title, "document");
        assert_eq!(config.font, PdfFont::Times);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PdfConfig::new()
            .with_title("निवेदन")
            .with_font(PdfFont::External(PathBuf::from("fonts/devanagari.ttf")));

        assert_eq!(config.title, "निवेदन");
        assert!(matches!(config.font, PdfFont::External(_)));
    }
}
