//! Ordered and unordered lists, nested by indentation.

use crate::block_parser::horizontal_rules::try_parse_horizontal_rule;
use crate::block_parser::utils::{leading_indent, small_indent};
use crate::item::{ItemKind, MarkDownItem};
use crate::parser::MAX_NESTING;
use crate::rules::{BlockMatch, BlockRule, ParseContext};
use crate::tokenizer::{Line, join_lines};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListMarker {
    Bullet(char),
    Ordered { number: u64, delimiter: char },
}

impl ListMarker {
    fn is_ordered(&self) -> bool {
        matches!(self, ListMarker::Ordered { .. })
    }
}

/// A list marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MarkerInfo {
    pub marker: ListMarker,
    /// Indentation before the marker, in columns
    pub indent_cols: usize,
    /// Byte offset where the item text starts
    pub content_start: usize,
}

fn is_marker_end(after_marker: &str) -> bool {
    after_marker.is_empty() || after_marker.starts_with(' ') || after_marker.starts_with('\t')
}

pub(crate) fn try_parse_list_marker(line: &str) -> Option<MarkerInfo> {
    let (indent_cols, indent_bytes) = leading_indent(line);
    let trimmed = &line[indent_bytes..];

    // Try bullet markers
    let marker = if let Some(ch) = trimmed.chars().next()
        && matches!(ch, '*' | '+' | '-')
    {
        (ListMarker::Bullet(ch), 1)
    } else {
        // Try decimal numbers: 1. or 1)
        let digit_count = trimmed.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digit_count == 0 || digit_count > 9 {
            return None;
        }
        let delimiter = match trimmed[digit_count..].chars().next() {
            Some(c @ ('.' | ')')) => c,
            _ => return None,
        };
        let number = trimmed[..digit_count].parse().ok()?;
        (ListMarker::Ordered { number, delimiter }, digit_count + 1)
    };

    let (marker, marker_len) = marker;
    let after_marker = &trimmed[marker_len..];
    if !is_marker_end(after_marker) {
        return None;
    }

    let spaces_after = after_marker.len() - after_marker.trim_start().len();
    Some(MarkerInfo {
        marker,
        indent_cols,
        content_start: indent_bytes + marker_len + spaces_after,
    })
}

pub(crate) fn markers_match(a: &ListMarker, b: &ListMarker) -> bool {
    match (a, b) {
        (ListMarker::Bullet(ch1), ListMarker::Bullet(ch2)) => ch1 == ch2,
        (
            ListMarker::Ordered { delimiter: d1, .. },
            ListMarker::Ordered { delimiter: d2, .. },
        ) => d1 == d2,
        _ => false,
    }
}

#[derive(Debug)]
struct ItemCtx<'a> {
    start: usize,
    text_lines: Vec<&'a str>,
    nested: Vec<MarkDownItem>,
}

impl<'a> ItemCtx<'a> {
    fn new(start: usize, first_text: &'a str) -> Self {
        Self {
            start,
            text_lines: vec![first_text.trim()],
            nested: Vec::new(),
        }
    }

    fn finish(self, lines: &[Line<'_>], end: usize, cx: &dyn ParseContext) -> MarkDownItem {
        let text = self.text_lines.join("\n");
        let text = text.trim();
        let mut children = cx.parse_inline(text);
        children.extend(self.nested);
        MarkDownItem::new(ItemKind::ListItem, join_lines(&lines[self.start..end]), text)
            .with_children(children)
    }
}

/// Parse one list level starting at `pos`. Returns the list item and the
/// number of lines consumed.
pub(crate) fn parse_list(
    lines: &[Line<'_>],
    pos: usize,
    depth: usize,
    cx: &dyn ParseContext,
) -> (MarkDownItem, usize) {
    let Some(first) = try_parse_list_marker(lines[pos].text) else {
        return (MarkDownItem::plain_text(lines[pos].text), 1);
    };
    let base_indent = first.indent_cols;

    log::debug!(
        "Parsing list at line {} (depth {}, marker {:?})",
        pos + 1,
        depth,
        first.marker
    );

    let mut items = Vec::new();
    let mut current = ItemCtx::new(pos, &lines[pos].text[first.content_start..]);
    let mut i = pos + 1;

    while i < lines.len() {
        let line = lines[i].text;
        if line.trim().is_empty() {
            break;
        }

        if try_parse_horizontal_rule(line).is_some() {
            break;
        }

        if let Some(info) = try_parse_list_marker(line)
            && (info.indent_cols < base_indent + 2 || depth + 1 < MAX_NESTING)
        {
            if info.indent_cols < base_indent {
                break;
            }
            if info.indent_cols < base_indent + 2 {
                if !markers_match(&first.marker, &info.marker) {
                    break;
                }
                let next = ItemCtx::new(i, &line[info.content_start..]);
                let finished = std::mem::replace(&mut current, next);
                items.push(finished.finish(lines, i, cx));
                i += 1;
                continue;
            }

            let (nested, consumed) = parse_list(lines, i, depth + 1, cx);
            current.nested.push(nested);
            i += consumed.max(1);
            continue;
        }

        // Continuation line: indented text always belongs to the item,
        // unindented text only if it does not start another block. Markers
        // nested past the depth limit land here too.
        let (indent_cols, _) = leading_indent(line);
        if indent_cols <= base_indent && cx.starts_block(lines, i) {
            break;
        }
        if !current.nested.is_empty() {
            break;
        }
        current.text_lines.push(line.trim());
        i += 1;
    }

    items.push(current.finish(lines, i, cx));

    let start = match first.marker {
        ListMarker::Ordered { number, .. } => Some(number),
        ListMarker::Bullet(_) => None,
    };
    let list = MarkDownItem::new(
        ItemKind::List {
            ordered: first.marker.is_ordered(),
            depth,
            start,
        },
        join_lines(&lines[pos..i]),
        "",
    )
    .with_children(items);

    (list, i - pos)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ListRule;

impl BlockRule for ListRule {
    fn name(&self) -> &str {
        "list"
    }

    fn matches(&self, lines: &[Line<'_>], pos: usize) -> bool {
        let line = lines[pos].text;
        small_indent(line).is_some() && try_parse_list_marker(line).is_some()
    }

    fn extract(&self, lines: &[Line<'_>], pos: usize, cx: &dyn ParseContext) -> BlockMatch {
        let (item, consumed) = parse_list(lines, pos, 0, cx);
        BlockMatch::new(item, consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bullet_markers() {
        let info = try_parse_list_marker("- item").unwrap();
        assert_eq!(info.marker, ListMarker::Bullet('-'));
        assert_eq!(info.content_start, 2);
        assert_eq!(info.indent_cols, 0);
    }

    #[test]
    fn parses_ordered_markers() {
        let info = try_parse_list_marker("  12) twelve").unwrap();
        assert_eq!(
            info.marker,
            ListMarker::Ordered {
                number: 12,
                delimiter: ')'
            }
        );
        assert_eq!(info.indent_cols, 2);
        assert_eq!(&"  12) twelve"[info.content_start..], "twelve");
    }

    #[test]
    fn marker_requires_space_or_end() {
        assert!(try_parse_list_marker("-item").is_none());
        assert!(try_parse_list_marker("**bold**").is_none());
        assert!(try_parse_list_marker("1.5 apples").is_none());
        assert!(try_parse_list_marker("-").is_some());
        assert!(try_parse_list_marker("3.").is_some());
    }

    #[test]
    fn markers_match_by_family() {
        assert!(markers_match(&ListMarker::Bullet('-'), &ListMarker::Bullet('-')));
        assert!(!markers_match(&ListMarker::Bullet('-'), &ListMarker::Bullet('*')));
        assert!(markers_match(
            &ListMarker::Ordered {
                number: 1,
                delimiter: '.'
            },
            &ListMarker::Ordered {
                number: 7,
                delimiter: '.'
            }
        ));
        assert!(!markers_match(
            &ListMarker::Bullet('-'),
            &ListMarker::Ordered {
                number: 1,
                delimiter: '.'
            }
        ));
    }
}
