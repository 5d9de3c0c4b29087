/// Parsing for backslash escape sequences
///
/// A backslash followed by ASCII punctuation yields that character literally,
/// so escaped delimiters never open emphasis, links or code spans.
/// A backslash before a newline is left to the line break rule.
use crate::item::{ItemKind, MarkDownItem};
use crate::rules::{InlineMatch, InlineRule, ParseContext};

/// Check if a character can be escaped
fn is_escapable(ch: char) -> bool {
    ch.is_ascii_punctuation()
}

/// Try to parse a backslash escape sequence starting at the current position.
/// Returns (total_len, escaped_char) or None if not an escape.
pub fn try_parse_escape(text: &str) -> Option<(usize, char)> {
    let rest = text.strip_prefix('\\')?;
    let next_char = rest.chars().next()?;

    if !is_escapable(next_char) {
        return None;
    }

    Some((1 + next_char.len_utf8(), next_char))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EscapeRule;

impl InlineRule for EscapeRule {
    fn name(&self) -> &str {
        "escape"
    }

    fn can_start_with(&self, c: char) -> bool {
        c == '\\'
    }

    fn try_match(&self, text: &str, pos: usize) -> InlineMatch {
        match try_parse_escape(&text[pos..]) {
            Some((len, _)) => InlineMatch::Matched(len),
            None => InlineMatch::NoMatch,
        }
    }

    fn extract(&self, matched: &str, _cx: &dyn ParseContext) -> MarkDownItem {
        let content = &matched[1..];
        MarkDownItem::new(ItemKind::PlainText, matched, content)
    }
}
