//! Text normalization of downloaded license documents.
//!
//! License repositories commonly prefix the license body with a metadata
//! block terminated by a line of dashes. The normalizer cuts that preamble
//! off and removes leading indentation so the result can be used verbatim
//! as a file header. Every transform here is pure and idempotent.

use regex::Regex;
use std::sync::LazyLock;

/// Everything up to and including the last line made only of three or more
/// dashes, plus the blank or whitespace-only lines that follow it. Spaces
/// and tabs around the dashes are tolerated so an indented separator cannot
/// survive into the unindented output.
static PREAMBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A(?s:.*\n)?[ \t]*-{3,}[ \t]*(?:\r?\n|\z)(?:[ \t]*\r?\n)*")
        .expect("preamble pattern is valid")
});

/// Leading spaces and tabs of every line.
static INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]+").expect("indent pattern is valid"));

/// Remove the metadata preamble, if any.
///
/// Text without a dash line passes through unchanged.
pub fn strip_preamble(text: &str) -> String {
    PREAMBLE.replace(text, "").into_owned()
}

/// Remove leading spaces and tabs from every line, keeping line breaks.
pub fn unindent(text: &str) -> String {
    INDENT.replace_all(text, "").into_owned()
}

/// Strip the preamble, then unindent.
pub fn normalize(text: &str) -> String {
    unindent(&strip_preamble(text))
}

/// Break lines longer than `width` characters at whitespace.
///
/// Lines within the limit are left byte-for-byte intact. A single word
/// longer than `width` stays on a line of its own. Wrapped pieces reuse the
/// line ending of the line they came from.
pub fn wrap_long_lines(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        let (content, ending) = split_line_ending(line);

        if content.chars().count() <= width {
            out.push_str(line);
            continue;
        }

        let separator = if ending.is_empty() { "\n" } else { ending };
        let pieces = wrap_words(content, width);
        out.push_str(&pieces.join(separator));
        out.push_str(ending);
    }

    out
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

fn wrap_words(content: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in content.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_preamble_removes_metadata() {
        let text = "some-metadata\n---\nLine one.\nLine two.\n";

        assert_eq!(strip_preamble(text), "Line one.\nLine two.\n");
    }

    #[test]
    fn test_strip_preamble_no_leading_blank_lines() {
        let text = "title: MIT\n---\n\n\nCopyright [year] [fullname]\n";

        assert_eq!(strip_preamble(text), "Copyright [year] [fullname]\n");
    }

    #[test]
    fn test_strip_preamble_drops_whitespace_only_lines() {
        let text = "meta\n---\n  \n\t\r\n\n  Body\n";

        assert_eq!(strip_preamble(text), "  Body\n");
        assert_eq!(normalize("meta\n---\n  \nBody\n"), "Body\n");
    }

    #[test]
    fn test_strip_preamble_front_matter_block() {
        let text = "---\ntitle: BSD 2-Clause\nspdx-id: BSD-2-Clause\n---\n\nBSD 2-Clause License\n";

        assert_eq!(strip_preamble(text), "BSD 2-Clause License\n");
    }

    #[test]
    fn test_strip_preamble_longer_dash_line() {
        let text = "meta\n--------\nBody\n";

        assert_eq!(strip_preamble(text), "Body\n");
    }

    #[test]
    fn test_strip_preamble_crlf() {
        let text = "meta\r\n---\r\n\r\nBody\r\n";

        assert_eq!(strip_preamble(text), "Body\r\n");
    }

    #[test]
    fn test_strip_preamble_without_dash_line() {
        let text = "Copyright [year] [fullname]\n\nPermission is hereby granted\n";

        assert_eq!(strip_preamble(text), text);
    }

    #[test]
    fn test_strip_preamble_ignores_short_or_mixed_dash_lines() {
        let text = "--\nA - B\n--- x\n x---\nBody\n";

        assert_eq!(strip_preamble(text), text);
    }

    #[test]
    fn test_strip_preamble_indented_dash_line() {
        let text = "meta\n  ---  \n  Body\n";

        assert_eq!(strip_preamble(text), "  Body\n");
    }

    #[test]
    fn test_strip_preamble_dash_line_at_end() {
        assert_eq!(strip_preamble("meta\n---"), "");
    }

    #[test]
    fn test_unindent() {
        let text = "   Line one.\n\tLine two.\n \t  Line three.\n\n  \nLast";

        assert_eq!(unindent(text), "Line one.\nLine two.\nLine three.\n\n\nLast");
    }

    #[test]
    fn test_unindent_keeps_inner_whitespace() {
        let text = "  a  b\t c\n";

        assert_eq!(unindent(text), "a  b\t c\n");
    }

    #[test]
    fn test_normalize_document() {
        let text = "some-metadata\n---\n   Line one.\n   Line two.\n";

        assert_eq!(normalize(text), "Line one.\nLine two.\n");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "some-metadata\n---\n   Line one.\n   Line two.\n",
            "---\nkey: value\n---\n\n  Body\n  ---\n  more\n",
            "plain text\n",
            "",
        ];

        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {:?}", input);
            assert_eq!(strip_preamble(&strip_preamble(input)), strip_preamble(input));
            assert_eq!(unindent(&unindent(input)), unindent(input));
        }
    }

    #[test]
    fn test_wrap_long_lines_keeps_short_lines() {
        let text = "Short line.\n   indented but short\n";

        assert_eq!(wrap_long_lines(text, 76), text);
    }

    #[test]
    fn test_wrap_long_lines_breaks_at_whitespace() {
        let text = "one two three four five\nok\n";

        assert_eq!(wrap_long_lines(text, 9), "one two\nthree\nfour five\nok\n");
    }

    #[test]
    fn test_wrap_long_lines_long_word_kept_whole() {
        let text = "see https://example.org/a/very/long/url here";

        assert_eq!(
            wrap_long_lines(text, 10),
            "see\nhttps://example.org/a/very/long/url\nhere"
        );
    }

    #[test]
    fn test_wrap_long_lines_preserves_crlf() {
        let text = "aaa bbb ccc\r\n";

        assert_eq!(wrap_long_lines(text, 7), "aaa bbb\r\nccc\r\n");
    }
}
