//! Text preparation ahead of section splitting.

use std::borrow::Cow;

use crate::span::Span;

/// Decodes HTML entities (`&lt;`, `&#9829;`, `&nbsp;`, ...) into Unicode.
///
/// Diagrams embedded in HTML pages arrive with `<`, `>` and `&` escaped; the
/// arrow tokens and labels only make sense once those are restored.
pub fn decode_entities(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }
    Cow::Owned(htmlize::unescape(input).into_owned())
}

/// A non-empty source line with surrounding whitespace removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SourceLine<'a> {
    pub text: &'a str,
    pub span: Span,
}

/// Splits `input` into trimmed, non-empty lines, each with its byte span.
pub(crate) fn source_lines(input: &str) -> Vec<SourceLine<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;

    for raw in input.split_inclusive('\n') {
        let start_trimmed = raw.trim_start();
        let text = start_trimmed.trim_end();
        if !text.is_empty() {
            let start = offset + (raw.len() - start_trimmed.len());
            lines.push(SourceLine {
                text,
                span: Span::new(start..start + text.len()),
            });
        }
        offset += raw.len();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_entities_fast_path() {
        assert!(matches!(decode_entities("[A] -> [B]"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("[A] -&gt; [B]"), "[A] -> [B]");
        assert_eq!(decode_entities("a &amp; b"), "a & b");
        assert_eq!(decode_entities("&#9829;"), "\u{2665}");
    }

    #[test]
    fn test_source_lines_trim_and_spans() {
        let input = "  layout:\r\n\n\t[A] [B]  \n";
        let lines = source_lines(input);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "layout:");
        assert_eq!(&input[lines[0].span.start()..lines[0].span.end()], "layout:");
        assert_eq!(lines[1].text, "[A] [B]");
        assert_eq!(&input[lines[1].span.start()..lines[1].span.end()], "[A] [B]");
    }

    #[test]
    fn test_source_lines_without_trailing_newline() {
        let lines = source_lines("define:\nText");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "Text");
        assert_eq!(lines[1].span, Span::new(8..12));
    }
}
