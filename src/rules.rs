//! Grammar rule traits.
//!
//! A rule is a stateless matcher plus extractor for one Markdown construct.
//! Block rules work on whole lines, inline rules on the text content of a
//! block. Rules never parse nested content themselves: they receive a
//! [`ParseContext`] from the engine and call back into it.

use std::fmt;
use std::sync::Arc;

use crate::item::MarkDownItem;
use crate::tokenizer::Line;

/// Parsing capabilities the engine lends to rules during extraction.
pub trait ParseContext {
    /// Inline-parse `text` with the active inline rules.
    fn parse_inline(&self, text: &str) -> Vec<MarkDownItem>;

    /// Block-parse `text` with the active block rules.
    fn parse_blocks(&self, text: &str) -> Vec<MarkDownItem>;

    /// Whether a block rule that may interrupt a paragraph matches at `pos`.
    fn starts_block(&self, lines: &[Line<'_>], pos: usize) -> bool;
}

/// Result of a block extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockMatch {
    pub item: MarkDownItem,
    /// Number of lines consumed, starting at the matched line
    pub consumed: usize,
}

impl BlockMatch {
    pub fn new(item: MarkDownItem, consumed: usize) -> Self {
        Self { item, consumed }
    }
}

pub trait BlockRule: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Whether the construct starts at `lines[pos]`. May look ahead.
    fn matches(&self, lines: &[Line<'_>], pos: usize) -> bool;

    /// Consume the construct starting at `lines[pos]`.
    ///
    /// Only called after [`matches`](BlockRule::matches) returned `true`.
    fn extract(&self, lines: &[Line<'_>], pos: usize, cx: &dyn ParseContext) -> BlockMatch;

    /// Whether this construct may end a running paragraph.
    fn interrupts_paragraph(&self) -> bool {
        true
    }
}

/// Outcome of an inline match attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineMatch {
    /// The rule matches this many bytes starting at the position.
    Matched(usize),
    NoMatch,
    /// No match here, and none is possible later in the same text.
    Exhausted,
}

/// Matching state an inline rule keeps for one text.
///
/// The engine opens a scanner per rule for every text it inline-parses and
/// asks it for matches at increasing positions, so work done at one position
/// can be reused at the next.
pub trait InlineScanner {
    fn try_match(&mut self, pos: usize) -> InlineMatch;
}

pub trait InlineRule: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Cheap filter: can a match start with `c`?
    fn can_start_with(&self, _c: char) -> bool {
        true
    }

    /// Try to match at byte offset `pos` of `text`.
    ///
    /// The whole text is passed so rules can look behind `pos`.
    fn try_match(&self, text: &str, pos: usize) -> InlineMatch;

    /// Build the item for a matched span.
    fn extract(&self, matched: &str, cx: &dyn ParseContext) -> MarkDownItem;

    /// Open a scanner over `text`. With `None` the engine calls
    /// [`try_match`](InlineRule::try_match) at every candidate position.
    fn scanner<'t>(&'t self, _text: &'t str) -> Option<Box<dyn InlineScanner + 't>> {
        None
    }

    fn matches(&self, text: &str, pos: usize) -> bool {
        matches!(self.try_match(text, pos), InlineMatch::Matched(len) if len > 0)
    }
}

/// A rule of either phase.
#[derive(Debug, Clone)]
pub enum Rule {
    Block(Arc<dyn BlockRule>),
    Inline(Arc<dyn InlineRule>),
}

impl Rule {
    pub fn block(rule: impl BlockRule + 'static) -> Self {
        Rule::Block(Arc::new(rule))
    }

    pub fn inline(rule: impl InlineRule + 'static) -> Self {
        Rule::Inline(Arc::new(rule))
    }

    pub fn name(&self) -> &str {
        match self {
            Rule::Block(rule) => rule.name(),
            Rule::Inline(rule) => rule.name(),
        }
    }
}
