//! Parsing for links, images, and automatic links.
//!
//! Implements:
//! - Inline links: `[text](url)` and `[text](url "title")`
//! - Inline images: `![alt](url)` and `![alt](url "title")`
//! - Automatic links: `<http://example.com>` and `<user@example.com>`
//! - Bare URLs: `https://example.com` in running text

use std::sync::LazyLock;

use regex::Regex;

use crate::item::{ItemKind, MarkDownItem};
use crate::rules::{InlineMatch, InlineRule, ParseContext};

static AUTOLINK_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]{1,31}:[^\s<>]*$").expect("autolink uri regex")
});

static AUTOLINK_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*$")
        .expect("autolink email regex")
});

/// Deepest bracket nesting in link text, and paren nesting in a destination.
/// Bounding both keeps every opener's scan short on unbalanced input.
const MAX_LINK_NESTING: usize = 32;

/// Outcome of scanning a bracketed link text.
enum Bracket {
    /// Byte offset of the matching `]`
    Closed(usize),
    /// No matching `]`, but some `]` was seen, or nesting ran too deep
    Unbalanced,
    /// No `]` at all after the opening bracket
    NoCloser,
}

/// Find the `]` matching the `[` just before `start`.
fn find_close_bracket(text: &str, start: usize) -> Bracket {
    let mut bracket_depth = 0;
    let mut escape_next = false;
    let mut saw_close = false;

    for (i, ch) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '[' => {
                bracket_depth += 1;
                if bracket_depth > MAX_LINK_NESTING {
                    return Bracket::Unbalanced;
                }
            }
            ']' => {
                if bracket_depth == 0 {
                    return Bracket::Closed(start + i);
                }
                saw_close = true;
                bracket_depth -= 1;
            }
            _ => {}
        }
    }

    if saw_close {
        Bracket::Unbalanced
    } else {
        Bracket::NoCloser
    }
}

fn is_escaped_punctuation(bytes: &[u8], pos: usize) -> bool {
    bytes[pos] == b'\\' && bytes.get(pos + 1).is_some_and(u8::is_ascii_punctuation)
}

/// Skip spaces and tabs with at most one line ending among them.
fn skip_link_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    let mut seen_newline = false;
    while let Some(&b) = bytes.get(pos) {
        match b {
            b' ' | b'\t' => {}
            b'\n' if !seen_newline => seen_newline = true,
            _ => break,
        }
        pos += 1;
    }
    pos
}

/// End of a bare destination starting at `start`: the first whitespace, or
/// the `)` that would unbalance its parens.
fn scan_bare_destination(bytes: &[u8], start: usize) -> Option<usize> {
    let mut paren_depth = 0;
    let mut pos = start;

    while let Some(&b) = bytes.get(pos) {
        if is_escaped_punctuation(bytes, pos) {
            pos += 2;
            continue;
        }
        match b {
            b'(' => {
                paren_depth += 1;
                if paren_depth > MAX_LINK_NESTING {
                    return None;
                }
            }
            b')' if paren_depth == 0 => break,
            b')' => paren_depth -= 1,
            _ if b.is_ascii_whitespace() || b.is_ascii_control() => break,
            _ => {}
        }
        pos += 1;
    }

    (paren_depth == 0).then_some(pos)
}

/// Offset of the `close` byte ending a title whose text starts at `start`.
/// Titles may span lines but not blank lines; `(...)` titles cannot nest.
fn scan_title(text: &str, start: usize, close: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = start;

    while let Some(&b) = bytes.get(pos) {
        if is_escaped_punctuation(bytes, pos) {
            pos += 2;
            continue;
        }
        if b == close {
            return Some(pos);
        }
        match b {
            b'(' if close == b')' => return None,
            b'\n' if text[pos + 1..].trim_start_matches([' ', '\t']).starts_with('\n') => {
                return None;
            }
            _ => {}
        }
        pos += 1;
    }
    None
}

/// A destination split into URL and optional title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub url: String,
    pub title: Option<String>,
}

/// Parse `url "title")` (or `<url> 'title')`) starting just after the `(`.
/// Returns the offset of the closing `)` and the destination.
fn scan_destination(text: &str, start: usize) -> Option<(usize, Destination)> {
    let bytes = text.as_bytes();
    let url_start = skip_link_whitespace(bytes, start);

    let (url, url_end) = if bytes.get(url_start) == Some(&b'<') {
        let inner = url_start + 1;
        let close = inner + text[inner..].find(['>', '<', '\n'])?;
        if bytes[close] != b'>' {
            return None;
        }
        (&text[inner..close], close + 1)
    } else {
        let end = scan_bare_destination(bytes, url_start)?;
        (&text[url_start..end], end)
    };

    let mut pos = skip_link_whitespace(bytes, url_end);
    let mut title = None;
    if pos > url_end
        && let Some(&quote) = bytes.get(pos)
        && matches!(quote, b'"' | b'\'' | b'(')
    {
        let close = if quote == b'(' { b')' } else { quote };
        let end = scan_title(text, pos + 1, close)?;
        title = Some(text[pos + 1..end].to_string());
        pos = skip_link_whitespace(bytes, end + 1);
    }

    if bytes.get(pos) != Some(&b')') {
        return None;
    }
    Some((
        pos,
        Destination {
            url: url.to_string(),
            title,
        },
    ))
}

/// A parsed `[text](dest)` span.
struct Span<'a> {
    len: usize,
    text: &'a str,
    destination: Destination,
}

/// Parse `[text](dest)` where `open` is the byte offset of `[`.
fn try_parse_bracketed(text: &str, open: usize) -> Result<Span<'_>, InlineMatch> {
    let close_bracket = match find_close_bracket(text, open + 1) {
        Bracket::Closed(pos) => pos,
        Bracket::Unbalanced => return Err(InlineMatch::NoMatch),
        Bracket::NoCloser => return Err(InlineMatch::Exhausted),
    };

    // Check for immediate ( after ]
    if !text[close_bracket + 1..].starts_with('(') {
        return Err(InlineMatch::NoMatch);
    }

    let (close_paren, destination) =
        scan_destination(text, close_bracket + 2).ok_or(InlineMatch::NoMatch)?;

    Ok(Span {
        len: close_paren + 1,
        text: &text[open + 1..close_bracket],
        destination,
    })
}

/// Try to parse an inline link `[text](url "title")`.
/// Returns (length, link text, destination).
pub fn try_parse_inline_link(text: &str) -> Option<(usize, &str, Destination)> {
    if !text.starts_with('[') {
        return None;
    }
    let span = try_parse_bracketed(text, 0).ok()?;
    Some((span.len, span.text, span.destination))
}

/// Try to parse an inline image `![alt](url "title")`.
/// Returns (length, alt text, destination).
pub fn try_parse_inline_image(text: &str) -> Option<(usize, &str, Destination)> {
    if !text.starts_with("![") {
        return None;
    }
    let span = try_parse_bracketed(text, 1).ok()?;
    Some((span.len, span.text, span.destination))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LinkRule;

impl InlineRule for LinkRule {
    fn name(&self) -> &str {
        "link"
    }

    fn can_start_with(&self, c: char) -> bool {
        c == '['
    }

    fn try_match(&self, text: &str, pos: usize) -> InlineMatch {
        match try_parse_bracketed(&text[pos..], 0) {
            Ok(span) => InlineMatch::Matched(span.len),
            Err(outcome) => outcome,
        }
    }

    fn extract(&self, matched: &str, cx: &dyn ParseContext) -> MarkDownItem {
        let Some((_, link_text, dest)) = try_parse_inline_link(matched) else {
            return MarkDownItem::plain_text(matched);
        };
        MarkDownItem::new(
            ItemKind::Link {
                url: dest.url,
                title: dest.title,
            },
            matched,
            link_text,
        )
        .with_children(cx.parse_inline(link_text))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ImageRule;

impl InlineRule for ImageRule {
    fn name(&self) -> &str {
        "image"
    }

    fn can_start_with(&self, c: char) -> bool {
        c == '!'
    }

    fn try_match(&self, text: &str, pos: usize) -> InlineMatch {
        if !text[pos..].starts_with("![") {
            return InlineMatch::NoMatch;
        }
        match try_parse_bracketed(&text[pos..], 1) {
            Ok(span) => InlineMatch::Matched(span.len),
            Err(outcome) => outcome,
        }
    }

    fn extract(&self, matched: &str, _cx: &dyn ParseContext) -> MarkDownItem {
        let Some((_, alt_text, dest)) = try_parse_inline_image(matched) else {
            return MarkDownItem::plain_text(matched);
        };
        MarkDownItem::new(
            ItemKind::Image {
                url: dest.url,
                alt_text: alt_text.to_string(),
                title: dest.title,
            },
            matched,
            alt_text,
        )
    }
}

/// Try to parse an automatic link starting at the current position.
///
/// Returns (length, url, is_email) if a valid automatic link is found.
pub fn try_parse_autolink(text: &str) -> Option<(usize, &str, bool)> {
    let rest = text.strip_prefix('<')?;

    // Find the closing >
    let close_pos = rest.find(['>', '<', '\n'])?;
    if rest.as_bytes()[close_pos] != b'>' {
        return None;
    }
    let content = &rest[..close_pos];

    if AUTOLINK_URI.is_match(content) {
        Some((close_pos + 2, content, false))
    } else if AUTOLINK_EMAIL.is_match(content) {
        Some((close_pos + 2, content, true))
    } else {
        None
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AutolinkRule;

impl InlineRule for AutolinkRule {
    fn name(&self) -> &str {
        "autolink"
    }

    fn can_start_with(&self, c: char) -> bool {
        c == '<'
    }

    fn try_match(&self, text: &str, pos: usize) -> InlineMatch {
        match try_parse_autolink(&text[pos..]) {
            Some((len, _, _)) => InlineMatch::Matched(len),
            None => InlineMatch::NoMatch,
        }
    }

    fn extract(&self, matched: &str, _cx: &dyn ParseContext) -> MarkDownItem {
        let Some((_, content, is_email)) = try_parse_autolink(matched) else {
            return MarkDownItem::plain_text(matched);
        };
        let url = if is_email {
            format!("mailto:{content}")
        } else {
            content.to_string()
        };
        MarkDownItem::new(ItemKind::Link { url, title: None }, matched, content)
            .with_children(vec![MarkDownItem::plain_text(content)])
    }
}

/// Length of a bare `http://` or `https://` URL at the start of `text`.
pub fn try_parse_bare_url(text: &str) -> Option<usize> {
    let scheme_len = if text.starts_with("https://") {
        8
    } else if text.starts_with("http://") {
        7
    } else {
        return None;
    };

    let mut end = text
        .find(|c: char| c.is_whitespace() || c == '<')
        .unwrap_or(text.len());

    // Trailing punctuation belongs to the sentence, not the URL. Only `(`
    // never gets stripped, so the open count stays fixed.
    let open_parens = text[..end].matches('(').count();
    let mut close_parens = text[..end].matches(')').count();
    while let Some(last) = text[..end].chars().next_back() {
        let strip = match last {
            '.' | ',' | ':' | ';' | '!' | '?' | '"' | '\'' | '*' | '_' | '~' => true,
            ')' if close_parens > open_parens => {
                close_parens -= 1;
                true
            }
            _ => false,
        };
        if !strip {
            break;
        }
        end -= last.len_utf8();
    }

    if end > scheme_len { Some(end) } else { None }
}

/// Bare URLs in running text (GitHub style).
#[derive(Debug, Default, Clone, Copy)]
pub struct BareUrlRule;

impl InlineRule for BareUrlRule {
    fn name(&self) -> &str {
        "bare_url"
    }

    fn can_start_with(&self, c: char) -> bool {
        c == 'h'
    }

    fn try_match(&self, text: &str, pos: usize) -> InlineMatch {
        if text[..pos]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric)
        {
            return InlineMatch::NoMatch;
        }
        match try_parse_bare_url(&text[pos..]) {
            Some(len) => InlineMatch::Matched(len),
            None => InlineMatch::NoMatch,
        }
    }

    fn extract(&self, matched: &str, _cx: &dyn ParseContext) -> MarkDownItem {
        MarkDownItem::new(
            ItemKind::Link {
                url: matched.to_string(),
                title: None,
            },
            matched,
            matched,
        )
        .with_children(vec![MarkDownItem::plain_text(matched)])
    }
}
