//! Line wrapping with estimated glyph widths
//!
//! Widths are per-character em-fraction estimates scaled by the font size,
//! not shaped glyph metrics. Breaks prefer space boundaries; a word wider
//! than the line is split at a `char` boundary with at least one character
//! of progress, so multi-byte sequences are never cut mid-character.

const PT_TO_MM: f64 = 0.352_778;

/// Wrap a single paragraph to the given width in millimeters.
///
/// Returns at least one line; an empty paragraph yields one empty line.
/// Joining the returned lines with single spaces reconstructs the
/// paragraph's characters (whitespace at wrap points excepted).
pub fn wrap(paragraph: &str, max_width: f64, font_size: f64) -> Vec<String> {
    if paragraph.is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in paragraph.split(' ') {
        let candidate = if current.is_empty() {
            text_width(word, font_size)
        } else {
            text_width(&current, font_size)
                + char_width(' ', font_size)
                + text_width(word, font_size)
        };

        if candidate <= max_width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        // The word alone may still be wider than the line.
        let mut rest = word;
        while text_width(rest, font_size) > max_width {
            let fit = max_fitting_chars(rest, max_width, font_size).max(1);
            let (head, tail) = split_at_char(rest, fit);
            lines.push(head.to_string());
            rest = tail;
        }
        current.push_str(rest);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Estimated width of a string in millimeters
pub fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().map(|ch| char_width(ch, font_size)).sum()
}

fn char_width(ch: char, font_size: f64) -> f64 {
    glyph_em_width(ch) * font_size * PT_TO_MM
}

/// Count of leading characters of `word` that fit within `max_width`
fn max_fitting_chars(word: &str, max_width: f64, font_size: f64) -> usize {
    let mut width = 0.0;
    let mut count = 0;
    for ch in word.chars() {
        width += char_width(ch, font_size);
        if width > max_width {
            break;
        }
        count += 1;
    }
    count
}

fn split_at_char(word: &str, chars: usize) -> (&str, &str) {
    match word.char_indices().nth(chars) {
        Some((byte, _)) => word.split_at(byte),
        None => (word, ""),
    }
}

fn glyph_em_width(ch: char) -> f64 {
    match ch {
        '\u{200b}' | '\u{200c}' | '\u{200d}' => 0.0,
        c if is_combining_mark(c) => 0.0,
        ' ' | '\u{00a0}' => 0.32,
        '\t' => 1.28,
        'i' | 'l' | 'I' | '|' | '!' => 0.24,
        '.' | ',' | ':' | ';' | '\'' | '"' | '`' => 0.23,
        '(' | ')' | '[' | ']' | '{' | '}' => 0.30,
        'f' | 't' | 'j' | 'r' => 0.34,
        'm' | 'w' | 'M' | 'W' | '@' | '%' | '&' | '#' => 0.74,
        c if c.is_ascii_digit() => 0.52,
        c if c.is_ascii_uppercase() => 0.64,
        c if c.is_ascii_lowercase() => 0.52,
        c if c.is_whitespace() => 0.32,
        c if c.is_ascii_punctuation() => 0.42,
        _ => 0.56,
    }
}

/// Marks that attach to a base character and carry no horizontal advance
fn is_combining_mark(ch: char) -> bool {
    matches!(ch,
        '\u{0300}'..='\u{036f}'
        | '\u{093c}'
        | '\u{094d}'
        | '\u{0951}'..='\u{0954}'
        | '\u{0962}'
        | '\u{0963}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_paragraph_is_one_empty_line() {
        assert_eq!(wrap("", 180.0, 12.0), vec![String::new()]);
    }

    #[test]
    fn test_short_text_stays_on_one_line() {
        assert_eq!(wrap("hello world", 180.0, 12.0), vec!["hello world"]);
    }

    #[test]
    fn test_breaks_at_spaces() {
        // Each "aa" is ~4.4mm at 12pt; two words plus a space exceed 6mm.
        assert_eq!(wrap("aa bb cc", 6.0, 12.0), vec!["aa", "bb", "cc"]);
    }

    #[test]
    fn test_rejoining_restores_characters() {
        let text = "one two three four five six seven eight";
        let lines = wrap(text, 20.0, 12.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_oversized_word_splits_at_char_boundary() {
        let word = "m".repeat(100);
        let lines = wrap(&word, 30.0, 12.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn test_devanagari_never_split_mid_char() {
        let word = "नेपालसरकारकार्यालय".repeat(8);
        let lines = wrap(&word, 25.0, 12.0);
        assert!(lines.len() > 1);
        // concat over valid &str lines implies every split was on a char
        // boundary; the characters must survive untouched
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn test_progress_on_impossibly_narrow_line() {
        // Narrower than any single glyph: one char per line, no infinite loop.
        let lines = wrap("mmm", 0.1, 12.0);
        assert_eq!(lines, vec!["m", "m", "m"]);
    }

    #[test]
    fn test_combining_marks_have_no_advance() {
        assert_eq!(
            text_width("क\u{094d}", 12.0),
            text_width("क", 12.0)
        );
    }
}
