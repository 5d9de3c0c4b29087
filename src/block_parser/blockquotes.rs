use crate::block_parser::utils::small_indent;
use crate::item::{ItemKind, MarkDownItem};
use crate::rules::{BlockMatch, BlockRule, ParseContext};
use crate::tokenizer::{Line, join_lines};

/// Content after a `>` marker (up to 3 spaces before it, one optional space after).
pub(crate) fn strip_blockquote_marker(line: &str) -> Option<&str> {
    let indent = small_indent(line)?;
    let stripped = line[indent..].strip_prefix('>')?;
    Some(stripped.strip_prefix(' ').unwrap_or(stripped))
}

/// Consecutive `>` lines. The stripped content is parsed as blocks, so quotes
/// can hold headers, lists, code and nested quotes.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockquoteRule;

impl BlockRule for BlockquoteRule {
    fn name(&self) -> &str {
        "blockquote"
    }

    fn matches(&self, lines: &[Line<'_>], pos: usize) -> bool {
        strip_blockquote_marker(lines[pos].text).is_some()
    }

    fn extract(&self, lines: &[Line<'_>], pos: usize, cx: &dyn ParseContext) -> BlockMatch {
        let mut inner = Vec::new();
        let mut current_pos = pos;

        while current_pos < lines.len() {
            match strip_blockquote_marker(lines[current_pos].text) {
                Some(content) => inner.push(content),
                None => break,
            }
            current_pos += 1;
        }

        let content = inner.join("\n");
        log::debug!(
            "Parsed blockquote of {} lines at position {}",
            current_pos - pos,
            pos
        );

        let children = cx.parse_blocks(&content);
        let item = MarkDownItem::new(
            ItemKind::Blockquote,
            join_lines(&lines[pos..current_pos]),
            content,
        )
        .with_children(children);
        BlockMatch::new(item, current_pos - pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_marker_and_one_space() {
        assert_eq!(strip_blockquote_marker("> quote"), Some("quote"));
        assert_eq!(strip_blockquote_marker(">  two"), Some(" two"));
        assert_eq!(strip_blockquote_marker("   >x"), Some("x"));
        assert_eq!(strip_blockquote_marker(">"), Some(""));
    }

    #[test]
    fn rejects_deep_indent_and_plain_lines() {
        assert_eq!(strip_blockquote_marker("    > code"), None);
        assert_eq!(strip_blockquote_marker("text > not quote"), None);
    }
}
