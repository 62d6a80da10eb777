//! Error types for the pagination engine

use thiserror::Error;

/// Errors that can occur during pagination
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Page geometry that cannot hold any text
    #[error("invalid page geometry: {reason}")]
    InvalidGeometry { reason: String },
}

impl LayoutError {
    /// Create an invalid geometry error
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_geometry_display() {
        let err = LayoutError::invalid_geometry("margin swallows the page");
        assert!(err.to_string().contains("margin swallows the page"));
    }
}
