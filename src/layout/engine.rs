//! Pagination engine: paragraphs in, positioned pages out

use super::config::PageConfig;
use super::error::LayoutError;
use super::types::{DocumentLayout, Page, TextLine};
use super::wrap::wrap;

/// Lay out text onto fixed-size pages.
///
/// The content is split on `'\n'` into paragraphs (blank lines stay as
/// empty paragraphs occupying one line height), each paragraph is wrapped
/// to the content width, and lines advance down the page by the configured
/// line height. A line whose cursor has passed `page height − margin`
/// starts a new page. After each paragraph the paragraph gap is added.
///
/// Always yields at least one page; empty input becomes one page holding a
/// single empty line.
pub fn paginate(content: &str, config: &PageConfig) -> Result<DocumentLayout, LayoutError> {
    config.validate()?;

    let max_width = config.content_width();
    let limit = config.page_height - config.margin;

    let mut pages = Vec::new();
    let mut current = Page::default();
    let mut y = config.margin;

    for paragraph in content.split('\n') {
        for text in wrap(paragraph, max_width, config.font_size) {
            if y > limit {
                pages.push(std::mem::take(&mut current));
                y = config.margin;
            }
            current.lines.push(TextLine {
                text,
                x: config.margin,
                y,
            });
            y += config.line_height;
        }
        y += config.paragraph_gap;
    }
    pages.push(current);

    Ok(DocumentLayout {
        pages,
        page_width: config.page_width,
        page_height: config.page_height,
        font_size: config.font_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_is_one_page_one_empty_line() {
        let layout = paginate("", &PageConfig::default()).expect("Should paginate");
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.line_count(), 1);
        assert_eq!(layout.pages[0].lines[0].text, "");
    }

    #[test]
    fn test_first_line_at_top_margin() {
        let layout = paginate("hello", &PageConfig::default()).expect("Should paginate");
        let line = &layout.pages[0].lines[0];
        assert_eq!(line.x, 15.0);
        assert_eq!(line.y, 15.0);
    }

    #[test]
    fn test_lines_advance_by_line_height() {
        let layout = paginate("a\nb", &PageConfig::default()).expect("Should paginate");
        let lines = &layout.pages[0].lines;
        assert_eq!(lines[0].y, 15.0);
        // one line height plus the paragraph gap after "a"
        assert_eq!(lines[1].y, 24.0);
    }

    #[test]
    fn test_blank_lines_kept_as_empty_lines() {
        let layout = paginate("a\n\nb", &PageConfig::default()).expect("Should paginate");
        let texts: Vec<&str> = layout.lines().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "", "b"]);
    }

    #[test]
    fn test_page_break_when_vertical_space_exhausted() {
        // Default geometry fits 39 lines per page (y = 15 + 7k <= 282).
        let content = vec!["x"; 40].join("\n");
        let config = PageConfig::default().with_paragraph_gap(0.0);
        let layout = paginate(&content, &config).expect("Should paginate");
        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.pages[0].line_count(), 39);
        assert_eq!(layout.pages[1].line_count(), 1);
        assert_eq!(layout.pages[1].lines[0].y, 15.0);
    }

    #[test]
    fn test_invalid_geometry_is_an_error() {
        let config = PageConfig::default().with_margin(150.0);
        assert!(matches!(
            paginate("x", &config),
            Err(LayoutError::InvalidGeometry { .. })
        ));
    }
}
