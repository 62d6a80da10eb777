//! PDF serialization of a computed layout

use std::fs::File;
use std::path::PathBuf;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};
use thiserror::Error;

use super::config::{PdfConfig, PdfFont};
use crate::layout::DocumentLayout;

/// Errors that can occur during PDF serialization
#[derive(Debug, Error)]
pub enum PdfError {
    /// Error reading an external font file
    #[error("error reading font file {path}: {message}")]
    FontFile { path: PathBuf, message: String },

    /// Fault inside the PDF backend
    #[error("pdf backend error: {message}")]
    Backend { message: String },
}

impl PdfError {
    fn backend(e: impl ToString) -> Self {
        Self::Backend {
            message: e.to_string(),
        }
    }
}

/// Serialize a layout to PDF bytes.
///
/// Each layout page becomes one PDF page; lines are drawn at the positions
/// the engine computed. The layout's `y` grows downward from the top of the
/// page while the PDF origin sits at the bottom-left, so baselines are
/// flipped against the page height.
pub fn render_pdf(layout: &DocumentLayout, config: &PdfConfig) -> Result<Vec<u8>, PdfError> {
    let width = Mm(layout.page_width as f32);
    let height = Mm(layout.page_height as f32);

    let (doc, first_page, first_layer) = PdfDocument::new(&config.title, width, height, "text");
    let font = load_font(&doc, &config.font)?;

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(width, height, "text");
            doc.get_page(page_index).get_layer(layer_index)
        };

        for line in &page.lines {
            if line.text.is_empty() {
                continue;
            }
            let baseline = Mm((layout.page_height - line.y) as f32);
            layer.use_text(
                &line.text,
                layout.font_size as f32,
                Mm(line.x as f32),
                baseline,
                &font,
            );
        }
    }

    doc.save_to_bytes().map_err(PdfError::backend)
}

fn load_font(doc: &PdfDocumentReference, font: &PdfFont) -> Result<IndirectFontRef, PdfError> {
    let builtin = match font {
        PdfFont::Times => BuiltinFont::TimesRoman,
        PdfFont::Helvetica => BuiltinFont::Helvetica,
        PdfFont::Courier => BuiltinFont::Courier,
        PdfFont::External(path) => {
            let file = File::open(path).map_err(|e| PdfError::FontFile {
                path: path.clone(),
                message: e.to_string(),
            })?;
            return doc.add_external_font(file).map_err(PdfError::backend);
        }
    };
    doc.add_builtin_font(builtin).map_err(PdfError::backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{paginate, PageConfig};

    #[test]
    fn test_render_produces_pdf_header() {
        let layout = paginate("hello world", &PageConfig::default()).expect("Should paginate");
        let bytes = render_pdf(&layout, &PdfConfig::default()).expect("Should render");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_empty_layout() {
        let layout = paginate("", &PageConfig::default()).expect("Should paginate");
        let bytes = render_pdf(&layout, &PdfConfig::default()).expect("Should render");
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_missing_external_font_is_font_file_error() {
        let layout = paginate("x", &PageConfig::default()).expect("Should paginate");
        let config =
            PdfConfig::default().with_font(PdfFont::External(PathBuf::from("/no/such/font.ttf")));
        let result = render_pdf(&layout, &config);
        assert!(matches!(result, Err(PdfError::FontFile { .. })));
    }
}
