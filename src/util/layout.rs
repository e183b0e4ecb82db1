//! Layout helpers
//!
//! Centering cards inside the body area and fitting long single-line
//! input into a fixed-width field.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

/// Rect of at most `width` x `height` centered in `area`
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use tardy_portal::util::layout::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Slice of `text` that fits in `width` terminal columns while keeping the
/// cursor visible. Returns the visible text and the cursor column within it.
///
/// Widths are display columns, so East Asian wide characters count as two.
/// The cursor cell is reserved first and the window grows leftwards from it.
///
/// # Examples
/// ```
/// use tardy_portal::util::layout::visible_window;
///
/// assert_eq!(visible_window("abcdef", 6, 4), ("def".to_string(), 3));
/// assert_eq!(visible_window("abc", 1, 10), ("abc".to_string(), 1));
/// assert_eq!(visible_window("日本語", 3, 5), ("本語".to_string(), 4));
/// ```
pub fn visible_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }

    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    // Cell under the cursor: the char there, or one blank column past the end
    let mut used = chars.get(cursor).map_or(1, |c| char_width(*c).max(1));
    let mut start = cursor;
    while start > 0 {
        let w = char_width(chars[start - 1]);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }

    let mut columns = 0;
    let visible: String = chars[start..]
        .iter()
        .take_while(|c| {
            columns += char_width(**c);
            columns <= width
        })
        .collect();
    let cursor_col = chars[start..cursor].iter().map(|c| char_width(*c)).sum();

    (visible, cursor_col)
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_centered_rect_respects_offset() {
        let area = Rect::new(10, 2, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(15, 5, 10, 4));
    }

    #[test]
    fn test_visible_window_short_text() {
        assert_eq!(visible_window("", 0, 5), (String::new(), 0));
        assert_eq!(visible_window("hi", 2, 5), ("hi".to_string(), 2));
    }

    #[test]
    fn test_visible_window_scrolls_with_cursor() {
        let text = "0123456789";
        assert_eq!(visible_window(text, 10, 5), ("6789".to_string(), 4));
        assert_eq!(visible_window(text, 7, 5), ("34567".to_string(), 4));
        assert_eq!(visible_window(text, 2, 5), ("01234".to_string(), 2));
    }

    #[test]
    fn test_visible_window_multibyte() {
        let text = "añ€";
        assert_eq!(visible_window(text, 3, 10), ("añ€".to_string(), 3));
        assert_eq!(visible_window(text, 1, 2), ("añ".to_string(), 1));
    }

    #[test]
    fn test_visible_window_wide_chars_keep_cursor_in_view() {
        // 60 double-width glyphs plus a final marker, cursor at the end
        let text = format!("{}終", "あ".repeat(60));
        let (visible, col) = visible_window(&text, 61, 44);

        assert!(visible.ends_with('終'));
        assert_eq!(visible.chars().count(), 21);
        assert_eq!(col, 42);
        assert!(col < 44);
    }

    #[test]
    fn test_visible_window_wide_char_under_cursor() {
        // Cursor on a wide glyph reserves both of its columns
        let text = "ab日cd";
        let (visible, col) = visible_window(text, 2, 3);
        assert_eq!(visible, "b日");
        assert_eq!(col, 1);
    }

    #[test]
    fn test_visible_window_huge_input() {
        let text = "x".repeat(100_000);
        let (visible, col) = visible_window(&text, 100_000, 30);
        assert_eq!(visible.chars().count(), 29);
        assert_eq!(col, 29);
    }

    #[test]
    fn test_visible_window_zero_width() {
        assert_eq!(visible_window("abc", 1, 0), (String::new(), 0));
    }
}
