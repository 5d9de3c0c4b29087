//! Shared utilities for block parsing.

use crate::item::MarkDownItem;
use crate::rules::ParseContext;

/// Number of leading spaces, or `None` if the line is indented by a tab or
/// four or more spaces.
pub(crate) fn small_indent(line: &str) -> Option<usize> {
    let spaces = line.bytes().take_while(|&b| b == b' ').count();
    if spaces > 3 || line[spaces..].starts_with('\t') {
        None
    } else {
        Some(spaces)
    }
}

fn tab_advance(col: usize) -> usize {
    let tab_stop = 4;
    col + (tab_stop - (col % tab_stop))
}

/// Leading indentation as (columns, bytes), expanding tabs to 4-column stops.
pub(crate) fn leading_indent(line: &str) -> (usize, usize) {
    let mut cols = 0usize;
    let mut bytes = 0usize;
    for b in line.bytes() {
        match b {
            b' ' => {
                cols += 1;
                bytes += 1;
            }
            b'\t' => {
                cols = tab_advance(cols);
                bytes += 1;
            }
            _ => break,
        }
    }
    (cols, bytes)
}

/// Remove up to `cols` columns of leading indentation.
pub(crate) fn strip_indent(line: &str, cols: usize) -> &str {
    let mut col = 0usize;
    for (i, b) in line.bytes().enumerate() {
        if col >= cols {
            return &line[i..];
        }
        match b {
            b' ' => col += 1,
            b'\t' => col = tab_advance(col),
            _ => return &line[i..],
        }
    }
    ""
}

/// Count a run of `fence_char` at the start of `line` if it forms a fence (3+).
pub(crate) fn get_fence_count(line: &str, fence_char: char) -> Option<usize> {
    let count = line.chars().take_while(|&c| c == fence_char).count();
    if count >= 3 { Some(count) } else { None }
}

/// Inline-parse `text` into a text-bearing item.
pub(crate) fn inline_item(
    kind: crate::item::ItemKind,
    raw: String,
    text: &str,
    cx: &dyn ParseContext,
) -> MarkDownItem {
    MarkDownItem::new(kind, raw, text).with_children(cx.parse_inline(text))
}
