//! Message text helpers.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// Characters that must be escaped in `MarkdownV2`.
///
/// See also: <https://core.telegram.org/bots/api#markdownv2-style>.
static ESCAPE_MARKDOWN_V2_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\*\[\]\(\)\~`>\#\+\-=\|\{\}\.!\\]").unwrap());

/// Escape the text for Telegram `MarkdownV2` markup.
#[must_use]
pub fn escape_markdown_v2(text: &str) -> Cow<'_, str> {
    ESCAPE_MARKDOWN_V2_REGEX.replace_all(text, r"\$0")
}

/// Escape the text for Telegram HTML markup.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for char_ in text.chars() {
        match char_ {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(char_),
        }
    }
    Cow::Owned(escaped)
}

/// Split the text into chunks of `limit` characters, only the last one may be shorter.
///
/// A text of `n` characters gives `⌈n / limit⌉` chunks. Joining the chunks gives back the
/// original text.
#[must_use]
pub fn split(text: &str, limit: usize) -> Vec<&str> {
    let limit = limit.max(1);
    let mut chunks = Vec::with_capacity(text.len().div_ceil(limit));
    let mut rest = text;
    while !rest.is_empty() {
        let cut = rest.char_indices().nth(limit).map_or(rest.len(), |(index, _)| index);
        let (chunk, tail) = rest.split_at(cut);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_markdown_v2_ok() {
        assert_eq!(escape_markdown_v2("Hello, world!"), r"Hello, world\!");
        assert_eq!(escape_markdown_v2("hello, world"), r"hello, world");
        assert_eq!(escape_markdown_v2(r"1.5 * (a_b)"), r"1\.5 \* \(a\_b\)");
        assert_eq!(escape_markdown_v2(r"C:\temp"), r"C:\\temp");
    }

    #[test]
    fn escape_html_ok() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&quot;&lt;/b&gt;",
        );
    }

    #[test]
    fn split_short_text_ok() {
        assert_eq!(split("Hello", 4096), ["Hello"]);
        assert!(split("", 4096).is_empty());
    }

    #[test]
    fn split_hard_ok() {
        let text = "a".repeat(9000);
        let chunks = split(&text, 4096);
        let lengths: Vec<_> = chunks.iter().map(|chunk| chunk.chars().count()).collect();
        assert_eq!(lengths, [4096, 4096, 808]);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn split_ignores_line_breaks_ok() {
        assert_eq!(split("abc\ndef\nghi", 9), ["abc\ndef\ng", "hi"]);

        let text = format!("{}\n{}", "a".repeat(100), "c".repeat(8899));
        let chunks = split(&text, 4096);
        let lengths: Vec<_> = chunks.iter().map(|chunk| chunk.chars().count()).collect();
        assert_eq!(lengths, [4096, 4096, 808]);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn split_counts_characters_ok() {
        let text = "привет, мир";
        let chunks = split(text, 4);
        assert!(chunks.iter().all(|chunk| chunk.chars().count() <= 4));
        assert_eq!(chunks.concat(), text);
    }
}
