//! Core types produced by the pagination engine

/// A single laid-out text line
///
/// Coordinates are millimeters from the page's top-left corner; `y` is the
/// text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// One page of laid-out lines, top to bottom
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<TextLine>,
}

impl Page {
    /// Number of lines on this page
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// The complete laid-out document
///
/// Carries the page geometry and font size so the renderer can reproduce
/// the coordinate system the engine used.
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    pub pages: Vec<Page>,
    pub page_width: f64,
    pub page_height: f64,
    pub font_size: f64,
}

impl DocumentLayout {
    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of lines across all pages
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(Page::line_count).sum()
    }

    /// All lines in reading order
    pub fn lines(&self) -> impl Iterator<Item = &TextLine> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }

    /// Dump the layout to stderr for debugging
    pub fn debug_dump(&self) {
        eprintln!("=== Layout Debug ===");
        for (index, page) in self.pages.iter().enumerate() {
            eprintln!("page {} ({} lines)", index + 1, page.line_count());
            for line in &page.lines {
                eprintln!("  x={:5.1} y={:5.1} {:?}", line.x, line.y, line.text);
            }
        }
        eprintln!("====================");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_with_lines(counts: &[usize]) -> DocumentLayout {
        let pages = counts
            .iter()
            .map(|&n| Page {
                lines: (0..n)
                    .map(|i| TextLine {
                        text: format!("line {}", i),
                        x: 15.0,
                        y: 15.0 + i as f64 * 7.0,
                    })
                    .collect(),
            })
            .collect();
        DocumentLayout {
            pages,
            page_width: 210.0,
            page_height: 297.0,
            font_size: 12.0,
        }
    }

    #[test]
    fn test_counts() {
        let layout = layout_with_lines(&[3, 2]);
        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.line_count(), 5);
        assert_eq!(layout.lines().count(), 5);
    }
}
