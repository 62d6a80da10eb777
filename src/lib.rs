//! kagajat - Nepali document templates with paginated PDF export
//!
//! This library powers the document-template editor of a citizen-services
//! portal: templates carry `{{name}}` placeholder tokens, user-supplied
//! values resolve them, and the finished text is laid out onto A4 pages and
//! serialized to PDF bytes.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use kagajat::{extract, substitute};
//!
//! let template = "Dear {{name}},";
//! assert_eq!(extract(template), vec!["name"]);
//!
//! let values = HashMap::from([("name".to_string(), "Ram".to_string())]);
//! let letter = substitute(template, &values);
//!
//! let pdf = kagajat::generate_pdf(&letter).unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

pub mod layout;
pub mod renderer;
pub mod template;

pub use layout::{paginate, wrap, DocumentLayout, LayoutError, Page, PageConfig, TextLine};
pub use renderer::{render_pdf, PdfConfig, PdfError, PdfFont};
pub use template::{extract, substitute, Catalog, CatalogError, EditorSession, TemplateEntry};

use std::path::Path;

use thiserror::Error;

/// Errors that can occur during the export pipeline
#[derive(Debug, Error)]
pub enum ExportError {
    /// Error during pagination
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Error during PDF serialization
    #[error("pdf error: {0}")]
    Pdf(#[from] PdfError),

    /// Error writing the output file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for the complete export pipeline
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Page geometry and text metrics
    pub page: PageConfig,
    /// PDF output configuration
    pub pdf: PdfConfig,
    /// Debug mode: dump the computed layout to stderr
    pub debug: bool,
}

impl ExportConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page configuration
    pub fn with_page(mut self, config: PageConfig) -> Self {
        self.page = config;
        self
    }

    /// Set the PDF configuration
    pub fn with_pdf(mut self, config: PdfConfig) -> Self {
        self.pdf = config;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Export text to PDF bytes with default configuration
///
/// This is the main entry point for the library. It paginates the content
/// and serializes the resulting layout.
pub fn generate_pdf(content: &str) -> Result<Vec<u8>, ExportError> {
    generate_pdf_with_config(content, &ExportConfig::default())
}

/// Export text to PDF bytes with custom configuration
pub fn generate_pdf_with_config(
    content: &str,
    config: &ExportConfig,
) -> Result<Vec<u8>, ExportError> {
    let layout = paginate(content, &config.page)?;

    if config.debug {
        layout.debug_dump();
    }

    let bytes = render_pdf(&layout, &config.pdf)?;
    Ok(bytes)
}

/// Export text to a PDF file at the given path
pub fn generate_pdf_file(
    content: &str,
    path: &Path,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    let bytes = generate_pdf_with_config(content, config)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
