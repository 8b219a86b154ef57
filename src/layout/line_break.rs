//! Line breaking algorithm

use crate::layout::font::FontMetrics;
use std::ops::Range;
use unicode_linebreak::{linebreaks, BreakOpportunity};
use unicode_segmentation::UnicodeSegmentation;

/// One wrapped line of a paragraph
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    /// Byte range within the source text, trailing whitespace excluded
    pub byte_range: Range<usize>,
    /// Advance width of the line
    pub width: f32,
}

impl WrappedLine {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.byte_range.clone()]
    }
}

/// Greedy line breaker over UAX #14 break opportunities
#[derive(Debug, Default)]
pub struct LineBreaker;

impl LineBreaker {
    pub fn new() -> Self {
        Self
    }

    /// Wrap `text` into lines no wider than `max_width`.
    ///
    /// `em` is the font size expressed in the same unit as `max_width`.
    /// Explicit newlines always break. A word wider than a whole line is
    /// split between grapheme clusters. Blank text yields no lines.
    pub fn wrap(
        &self,
        text: &str,
        metrics: &FontMetrics,
        em: f32,
        max_width: f32,
    ) -> Vec<WrappedLine> {
        let mut lines = Vec::new();
        if text.trim().is_empty() {
            return lines;
        }

        let mut line_start: usize = 0;
        let mut consumed: usize = 0;
        let mut width: f32 = 0.0;

        for (brk, opportunity) in linebreaks(text) {
            if brk == consumed {
                continue;
            }
            let segment = &text[consumed..brk];
            let visible = segment.trim_end();
            let visible_width = metrics.measure(visible, em);

            // Soft wrap before this segment
            if consumed > line_start && width + visible_width > max_width {
                lines.push(finish_line(text, line_start..consumed, metrics, em));
                line_start = consumed;
                width = 0.0;
            }

            if consumed == line_start && visible_width > max_width {
                // Emergency break inside an over-long word
                let mut run_start = consumed;
                let mut run_width: f32 = 0.0;
                for (offset, grapheme) in visible.grapheme_indices(true) {
                    let grapheme_width = metrics.measure(grapheme, em);
                    let at = consumed + offset;
                    if at > run_start && run_width + grapheme_width > max_width {
                        lines.push(WrappedLine {
                            byte_range: run_start..at,
                            width: run_width,
                        });
                        run_start = at;
                        run_width = 0.0;
                    }
                    run_width += grapheme_width;
                }
                line_start = run_start;
                width = run_width + metrics.measure(&segment[visible.len()..], em);
            } else {
                width += metrics.measure(segment, em);
            }

            consumed = brk;

            if opportunity == BreakOpportunity::Mandatory {
                lines.push(finish_line(text, line_start..consumed, metrics, em));
                line_start = consumed;
                width = 0.0;
            }
        }

        lines
    }
}

fn finish_line(text: &str, range: Range<usize>, metrics: &FontMetrics, em: f32) -> WrappedLine {
    let content = text[range.clone()].trim_end();
    WrappedLine {
        byte_range: range.start..range.start + content.len(),
        width: metrics.measure(content, em),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is 0.5 em, so at em = 10 each is 5 units wide
    fn fixed_metrics() -> FontMetrics {
        FontMetrics::new(vec![0.5; 95], 0.5)
    }

    fn wrap(text: &str, max_width: f32) -> Vec<String> {
        LineBreaker::new()
            .wrap(text, &fixed_metrics(), 10.0, max_width)
            .iter()
            .map(|line| line.text(text).to_string())
            .collect()
    }

    #[test]
    fn test_blank_text() {
        assert!(wrap("", 100.0).is_empty());
        assert!(wrap("   ", 100.0).is_empty());
    }

    #[test]
    fn test_single_line() {
        let lines = LineBreaker::new().wrap("Hello", &fixed_metrics(), 10.0, 100.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].byte_range, 0..5);
        assert_eq!(lines[0].width, 25.0);
    }

    #[test]
    fn test_line_wrap() {
        // 40 units = 8 characters per line
        assert_eq!(wrap("Hello World", 40.0), vec!["Hello", "World"]);
    }

    #[test]
    fn test_wrap_keeps_words_together() {
        assert_eq!(
            wrap("one two three four", 50.0),
            vec!["one two", "three four"]
        );
    }

    #[test]
    fn test_trailing_space_does_not_force_wrap() {
        // "Hello " is 30 wide but the visible part is 25
        assert_eq!(wrap("Hello there", 25.0), vec!["Hello", "there"]);
    }

    #[test]
    fn test_explicit_newline() {
        assert_eq!(wrap("Hello\nWorld", 1000.0), vec!["Hello", "World"]);
    }

    #[test]
    fn test_blank_line_inside_text() {
        assert_eq!(wrap("a\n\nb", 1000.0), vec!["a", "", "b"]);
    }

    #[test]
    fn test_long_word_is_split() {
        assert_eq!(wrap("abcdefghij", 20.0), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_long_word_after_short_word() {
        assert_eq!(wrap("to abcdefghij ok", 20.0), vec!["to", "abcd", "efgh", "ij", "ok"]);
    }

    #[test]
    fn test_hyphen_is_a_break_opportunity() {
        assert_eq!(wrap("full-stack", 30.0), vec!["full-", "stack"]);
    }

    #[test]
    fn test_lines_cover_all_words_in_order() {
        let text = "Lead a team of 5 developers in building a SaaS platform serving 100K+ active users";
        let joined = wrap(text, 60.0).join(" ");
        assert_eq!(joined, text);
    }
}
