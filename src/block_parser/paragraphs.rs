//! The implicit lowest-priority block: a run of text lines.
//!
//! Paragraphs are not part of any flavor's rule list. The engine falls back
//! to them for any non-blank line no block rule claims.

use crate::block_parser::utils::inline_item;
use crate::item::{ItemKind, MarkDownItem};
use crate::rules::ParseContext;
use crate::tokenizer::{Line, join_lines};

/// Parse a paragraph starting at `pos`. Returns the item and the number of
/// lines consumed (at least one).
pub(crate) fn parse_paragraph(
    lines: &[Line<'_>],
    pos: usize,
    cx: &dyn ParseContext,
) -> (MarkDownItem, usize) {
    log::debug!("Trying to parse paragraph at position {}", pos);

    let mut current_pos = pos + 1;
    while current_pos < lines.len() {
        let line = &lines[current_pos];
        if line.is_blank() || cx.starts_block(lines, current_pos) {
            break;
        }
        current_pos += 1;
    }

    let raw = join_lines(&lines[pos..current_pos]);
    let text = raw.trim();
    log::debug!("Parsed paragraph of {} lines", current_pos - pos);

    let item = inline_item(ItemKind::Paragraph, raw.clone(), text, cx);
    (item, current_pos - pos)
}
