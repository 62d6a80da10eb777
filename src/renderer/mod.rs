//! PDF renderer for serializing layout results
//!
//! This module takes a DocumentLayout and produces the final PDF bytes.

pub mod config;
pub mod pdf;

pub use config::{PdfConfig, PdfFont};
pub use pdf::{render_pdf, PdfError};
