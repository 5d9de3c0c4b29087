//! Indented code block parsing.
//!
//! A block of text indented four spaces (or one tab) is treated as verbatim text.
//! The initial (four space or one tab) indentation is not considered part of the
//! verbatim text and is removed in the output.
//!
//! Note: blank lines in the verbatim text need not begin with four spaces.

use crate::block_parser::utils::{leading_indent, strip_indent};
use crate::item::{ItemKind, MarkDownItem};
use crate::rules::{BlockMatch, BlockRule, ParseContext};
use crate::tokenizer::{Line, join_lines};

/// Check if a line is indented enough to be part of an indented code block.
/// Returns true if the line starts with 4+ spaces or 1+ tab.
pub(crate) fn is_indented_code_line(content: &str) -> bool {
    if content.trim().is_empty() {
        return false;
    }
    leading_indent(content).0 >= 4
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IndentedCodeBlockRule;

impl BlockRule for IndentedCodeBlockRule {
    fn name(&self) -> &str {
        "indented_code_block"
    }

    fn matches(&self, lines: &[Line<'_>], pos: usize) -> bool {
        is_indented_code_line(lines[pos].text)
    }

    fn extract(&self, lines: &[Line<'_>], pos: usize, _cx: &dyn ParseContext) -> BlockMatch {
        let mut end = pos;
        let mut current_pos = pos;

        while current_pos < lines.len() {
            let line = lines[current_pos].text;
            if is_indented_code_line(line) {
                current_pos += 1;
                end = current_pos;
            } else if line.trim().is_empty() {
                // Blank lines belong to the block only if more code follows
                current_pos += 1;
            } else {
                break;
            }
        }

        let content = lines[pos..end]
            .iter()
            .map(|line| strip_indent(line.text, 4))
            .collect::<Vec<_>>()
            .join("\n");

        log::debug!("Parsed indented code block of {} lines", end - pos);

        let item = MarkDownItem::new(
            ItemKind::CodeBlock { language: None },
            join_lines(&lines[pos..end]),
            content,
        );
        BlockMatch::new(item, end - pos)
    }

    fn interrupts_paragraph(&self) -> bool {
        false
    }
}
