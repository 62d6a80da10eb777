//! Pagination engine for laying text out onto fixed-size pages
//!
//! This module takes resolved document text and computes a page-by-page
//! layout of positioned lines, ready for the PDF renderer.

pub mod config;
pub mod engine;
pub mod error;
pub mod types;
pub mod wrap;

pub use config::PageConfig;
pub use engine::paginate;
pub use error::LayoutError;
pub use types::{DocumentLayout, Page, TextLine};
pub use wrap::wrap;
