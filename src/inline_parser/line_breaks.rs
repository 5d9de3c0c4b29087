/// Parsing for hard line breaks
///
/// Two or more trailing spaces or a trailing backslash before a newline force
/// a break. A bare newline is a soft break and stays in the surrounding text,
/// unless the rule is built with `every_newline`.
use crate::item::{ItemKind, MarkDownItem};
use crate::rules::{InlineMatch, InlineRule, ParseContext};

/// Try to parse a hard line break starting at the current position.
/// Returns the total length including the newline.
pub fn try_parse_hard_break(text: &str) -> Option<usize> {
    if let Some(rest) = text.strip_prefix('\\') {
        return rest.starts_with('\n').then_some(2);
    }

    let spaces = text.bytes().take_while(|&b| b == b' ').count();
    if spaces >= 2 && text[spaces..].starts_with('\n') {
        Some(spaces + 1)
    } else {
        None
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LineBreakRule {
    every_newline: bool,
}

impl LineBreakRule {
    pub const fn new(every_newline: bool) -> Self {
        Self { every_newline }
    }
}

impl InlineRule for LineBreakRule {
    fn name(&self) -> &str {
        "line_break"
    }

    fn can_start_with(&self, c: char) -> bool {
        c == ' ' || c == '\\' || (self.every_newline && c == '\n')
    }

    fn try_match(&self, text: &str, pos: usize) -> InlineMatch {
        let rest = &text[pos..];

        // Only a whole space run counts
        if rest.starts_with(' ') && text[..pos].ends_with(' ') {
            return InlineMatch::NoMatch;
        }

        if self.every_newline {
            // Swallow trailing spaces too, so they never reach the output
            let spaces = rest.bytes().take_while(|&b| b == b' ').count();
            if rest[spaces..].starts_with('\n') && !text[..pos].ends_with(' ') {
                return InlineMatch::Matched(spaces + 1);
            }
        }

        match try_parse_hard_break(rest) {
            Some(len) => InlineMatch::Matched(len),
            None => InlineMatch::NoMatch,
        }
    }

    fn extract(&self, matched: &str, _cx: &dyn ParseContext) -> MarkDownItem {
        MarkDownItem::new(ItemKind::LineBreak, matched, "")
    }
}
