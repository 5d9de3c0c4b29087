//! Delimiter-run emphasis: `**bold**`, `__bold__`, `*italic*`, `_italic_`
//! and `~~strikethrough~~`.
//!
//! Each rule owns a single delimiter. A span opens on a delimiter run of
//! exactly that length followed by non-whitespace, and closes on the next run
//! of exactly that length preceded by non-whitespace. Runs of other lengths
//! are skipped, which is what lets `*a **b** c*` nest bold inside italic.
//!
//! Underscores follow the intraword rule: `snake_case_name` is not emphasis.

use crate::item::{ItemKind, MarkDownItem};
use crate::rules::{InlineMatch, InlineRule, ParseContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    Bold,
    Italic,
    Strikethrough,
}

impl EmphasisKind {
    fn item_kind(self) -> ItemKind {
        match self {
            EmphasisKind::Bold => ItemKind::Bold,
            EmphasisKind::Italic => ItemKind::Italic,
            EmphasisKind::Strikethrough => ItemKind::Strikethrough,
        }
    }
}

/// Length of the run of `ch` starting at byte `pos`.
fn run_length(bytes: &[u8], pos: usize, ch: u8) -> usize {
    bytes[pos..].iter().take_while(|&&b| b == ch).count()
}

fn char_before(text: &str, pos: usize) -> Option<char> {
    text[..pos].chars().next_back()
}

fn char_after(text: &str, pos: usize) -> Option<char> {
    text[pos..].chars().next()
}

/// Emphasis rule for one delimiter string made of a single repeated ASCII char.
#[derive(Debug, Clone, Copy)]
pub struct DelimiterRule {
    name: &'static str,
    delimiter: &'static str,
    kind: EmphasisKind,
}

impl DelimiterRule {
    /// `delimiter` must be a non-empty run of one ASCII char.
    const fn new(name: &'static str, delimiter: &'static str, kind: EmphasisKind) -> Self {
        assert!(!delimiter.is_empty(), "empty emphasis delimiter");
        Self {
            name,
            delimiter,
            kind,
        }
    }

    pub const fn bold_asterisk() -> Self {
        Self::new("bold", "**", EmphasisKind::Bold)
    }

    pub const fn bold_underscore() -> Self {
        Self::new("bold_underscore", "__", EmphasisKind::Bold)
    }

    pub const fn italic_asterisk() -> Self {
        Self::new("italic", "*", EmphasisKind::Italic)
    }

    pub const fn italic_underscore() -> Self {
        Self::new("italic_underscore", "_", EmphasisKind::Italic)
    }

    pub const fn strikethrough() -> Self {
        Self::new("strikethrough", "~~", EmphasisKind::Strikethrough)
    }

    fn delim_byte(&self) -> u8 {
        self.delimiter.as_bytes()[0]
    }

    fn is_underscore(&self) -> bool {
        self.delim_byte() == b'_'
    }

    /// Can the run at `pos` open a span?
    fn can_open(&self, text: &str, pos: usize) -> bool {
        let len = self.delimiter.len();
        let before = char_before(text, pos);
        let after = char_after(text, pos + len);

        if after.is_none_or(char::is_whitespace) {
            return false;
        }
        if self.is_underscore() && before.is_some_and(char::is_alphanumeric) {
            return false;
        }
        true
    }

    /// Can the run at `pos` close a span? Depends only on the run itself.
    fn can_close(&self, text: &str, pos: usize) -> bool {
        let len = self.delimiter.len();
        let before = char_before(text, pos);
        let after = char_after(text, pos + len);

        if before.is_none_or(char::is_whitespace) {
            return false;
        }
        if self.is_underscore() && after.is_some_and(char::is_alphanumeric) {
            return false;
        }
        true
    }

    /// Find the first closing run at or after `from`.
    fn find_closer(&self, text: &str, from: usize) -> Option<usize> {
        let bytes = text.as_bytes();
        let ch = self.delim_byte();
        let len = self.delimiter.len();
        let mut pos = from;

        while pos < bytes.len() {
            let offset = bytes[pos..].iter().position(|&b| b == ch)?;
            let run_start = pos + offset;
            let run = run_length(bytes, run_start, ch);
            if run == len && self.can_close(text, run_start) {
                return Some(run_start);
            }
            pos = run_start + run;
        }
        None
    }
}

impl InlineRule for DelimiterRule {
    fn name(&self) -> &str {
        self.name
    }

    fn can_start_with(&self, c: char) -> bool {
        c as u32 == self.delim_byte() as u32
    }

    fn try_match(&self, text: &str, pos: usize) -> InlineMatch {
        let bytes = text.as_bytes();
        let ch = self.delim_byte();
        let len = self.delimiter.len();

        // Must be a whole run of exactly the delimiter length
        if pos > 0 && bytes[pos - 1] == ch {
            return InlineMatch::NoMatch;
        }
        if run_length(bytes, pos, ch) != len {
            return InlineMatch::NoMatch;
        }

        let content_start = pos + len;
        let Some(first) = char_after(text, content_start) else {
            return InlineMatch::Exhausted;
        };

        // Rejecting openers before scanning keeps runs that cannot open O(1)
        if !self.can_open(text, pos) {
            return InlineMatch::NoMatch;
        }

        // Closers are a property of the run alone, so when none follows the
        // first content character no later opener can match either
        let Some(closer) = self.find_closer(text, content_start + first.len_utf8()) else {
            return InlineMatch::Exhausted;
        };

        InlineMatch::Matched(closer + len - pos)
    }

    fn extract(&self, matched: &str, cx: &dyn ParseContext) -> MarkDownItem {
        let len = self.delimiter.len();
        let content = &matched[len..matched.len() - len];
        MarkDownItem::new(self.kind.item_kind(), matched, content)
            .with_children(cx.parse_inline(content))
    }
}
