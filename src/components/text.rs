//! Text helpers for list rendering
//!
//! Event titles carry accents and the occasional wide glyph, so widths are
//! measured in terminal columns rather than bytes or chars.

use ratatui::style::Style;
use ratatui::text::Span;
use regex::RegexBuilder;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Cut `text` to at most `max_width` columns, ending in an ellipsis when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

/// Pad with spaces up to `width` columns
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - current))
    }
}

/// Split `text` into spans, styling case-insensitive matches of `query`
pub fn highlight_matches(
    text: &str,
    query: &str,
    base: Style,
    highlight: Style,
) -> Vec<Span<'static>> {
    let query = query.trim();
    if query.is_empty() {
        return vec![Span::styled(text.to_string(), base)];
    }

    let re = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(_) => return vec![Span::styled(text.to_string(), base)],
    };

    let mut spans = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            spans.push(Span::styled(text[last..m.start()].to_string(), base));
        }
        spans.push(Span::styled(m.as_str().to_string(), highlight));
        last = m.end();
    }
    if last < text.len() {
        spans.push(Span::styled(text[last..].to_string(), base));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate_to_width("Tango", 10), "Tango");
        assert_eq!(truncate_to_width("Tango", 5), "Tango");
    }

    #[test]
    fn test_truncate_counts_columns() {
        assert_eq!(truncate_to_width("Música en el Parque", 8), "Música …");
        assert_eq!(truncate_to_width("Música en el Parque", 8).width(), 8);
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("Fé", 4), "Fé  ");
        assert_eq!(pad_to_width("Tango", 3), "Tango");
    }

    #[test]
    fn test_highlight_is_case_insensitive() {
        let base = Style::default();
        let hl = Style::default().fg(Color::Yellow);
        let spans = highlight_matches("Noche de Tango", "tango", base, hl);

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "Noche de ");
        assert_eq!(spans[1].content, "Tango");
        assert_eq!(spans[1].style, hl);
    }

    #[test]
    fn test_highlight_escapes_query() {
        let spans = highlight_matches("Rock (en vivo)", "(en", Style::default(), Style::default());
        let joined: String = spans.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(joined, "Rock (en vivo)");
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn test_highlight_empty_query() {
        let spans = highlight_matches("Jazz", "  ", Style::default(), Style::default());
        assert_eq!(spans.len(), 1);
    }
}
