//! Template handling: placeholder scanning, the stock catalog, and the
//! editor session that ties them together.

pub mod catalog;
pub mod placeholder;
pub mod session;

pub use catalog::{Catalog, CatalogError, TemplateEntry};
pub use placeholder::{extract, substitute};
pub use session::EditorSession;
