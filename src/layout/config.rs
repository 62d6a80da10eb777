//! Configuration for the pagination engine

use super::error::LayoutError;

/// Page geometry and text metrics, in millimeters (font size in points)
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Page width
    pub page_width: f64,

    /// Page height
    pub page_height: f64,

    /// Uniform margin on all four sides
    pub margin: f64,

    /// Body font size in points
    pub font_size: f64,

    /// Vertical advance per text line
    pub line_height: f64,

    /// Extra vertical gap between paragraphs
    pub paragraph_gap: f64,
}

impl Default for PageConfig {
    /// A4 portrait with the editor's standard metrics
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 15.0,
            font_size: 12.0,
            line_height: 7.0,
            paragraph_gap: 2.0,
        }
    }
}

impl PageConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the uniform margin
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the body font size in points
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set the vertical advance per line
    pub fn with_line_height(mut self, height: f64) -> Self {
        self.line_height = height;
        self
    }

    /// Set the gap between paragraphs
    pub fn with_paragraph_gap(mut self, gap: f64) -> Self {
        self.paragraph_gap = gap;
        self
    }

    /// Usable text width between the left and right margins
    pub fn content_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    /// Reject geometry that cannot hold any text
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.page_width <= 0.0 || self.page_height <= 0.0 {
            return Err(LayoutError::invalid_geometry(
                "page dimensions must be positive",
            ));
        }
        if self.margin < 0.0 {
            return Err(LayoutError::invalid_geometry("margin must not be negative"));
        }
        if 2.0 * self.margin >= self.page_width {
            return Err(LayoutError::invalid_geometry(
                "margins leave no horizontal space for text",
            ));
        }
        if 2.0 * self.margin >= self.page_height {
            return Err(LayoutError::invalid_geometry(
                "margins leave no vertical space for text",
            ));
        }
        if self.font_size <= 0.0 {
            return Err(LayoutError::invalid_geometry("font size must be positive"));
        }
        if self.line_height <= 0.0 {
            return Err(LayoutError::invalid_geometry(
                "line height must be positive",
            ));
        }
        if self.paragraph_gap < 0.0 {
            return Err(LayoutError::invalid_geometry(
                "paragraph gap must not be negative",
            ));
        }
        Ok(())
    }
}
