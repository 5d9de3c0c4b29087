//! Block phase: splits lines into block-level items.
//!
//! Rules are tried in order at each unconsumed non-blank line. The first
//! rule that matches consumes its lines; lines no rule claims become
//! paragraphs.

use std::sync::Arc;

use crate::item::MarkDownItem;
use crate::rules::{BlockRule, ParseContext};
use crate::tokenizer::Line;

mod blockquotes;
mod code_blocks;
mod headings;
mod horizontal_rules;
mod indented_code;
mod lists;
mod paragraphs;
mod tables;
mod utils;

pub use blockquotes::BlockquoteRule;
pub use code_blocks::FencedCodeBlockRule;
pub use headings::{AtxHeaderRule, SetextHeaderRule};
pub use horizontal_rules::HorizontalLineRule;
pub use indented_code::IndentedCodeBlockRule;
pub use lists::ListRule;
pub use tables::TableRule;

use paragraphs::parse_paragraph;

/// Run the block phase over `lines`.
pub(crate) fn parse_blocks(
    rules: &[Arc<dyn BlockRule>],
    lines: &[Line<'_>],
    cx: &dyn ParseContext,
) -> Vec<MarkDownItem> {
    let mut items = Vec::new();
    let mut pos = 0;

    while pos < lines.len() {
        if lines[pos].is_blank() {
            log::trace!("Skipping blank line {}", pos);
            pos += 1;
            continue;
        }

        let remaining = lines.len() - pos;
        let matched = rules.iter().find(|rule| rule.matches(lines, pos));

        let consumed = if let Some(rule) = matched {
            log::debug!("Block rule '{}' matched at line {}", rule.name(), pos);
            let block = rule.extract(lines, pos, cx);
            items.push(block.item);
            block.consumed
        } else {
            let (item, consumed) = parse_paragraph(lines, pos, cx);
            items.push(item);
            consumed
        };

        // Always make progress, never run past the end
        pos += consumed.clamp(1, remaining);
    }

    log::debug!("Block phase produced {} items", items.len());
    items
}

/// Whether a paragraph-interrupting rule matches at `lines[pos]`.
pub(crate) fn starts_block(rules: &[Arc<dyn BlockRule>], lines: &[Line<'_>], pos: usize) -> bool {
    pos < lines.len()
        && rules
            .iter()
            .any(|rule| rule.interrupts_paragraph() && rule.matches(lines, pos))
}
