//! Pipe tables (GitHub style).
//!
//! ```text
//! | Name | Size |
//! |:-----|-----:|
//! | a    |    1 |
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::block_parser::utils::small_indent;
use crate::item::{Alignment, ItemKind, MarkDownItem};
use crate::rules::{BlockMatch, BlockRule, ParseContext};
use crate::tokenizer::{Line, join_lines};

static SEPARATOR_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(:?)-+(:?)\s*$").expect("separator cell regex"));

/// Split a table row into cell texts, honoring `\|` escapes.
pub(crate) fn split_row(line: &str) -> Vec<&str> {
    let mut row = line.trim();
    row = row.strip_prefix('|').unwrap_or(row);
    if row.ends_with('|') && !row.ends_with("\\|") {
        row = &row[..row.len() - 1];
    }

    let mut cells = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, ch) in row.char_indices() {
        match ch {
            '\\' if !escaped => {
                escaped = true;
                continue;
            }
            '|' if !escaped => {
                cells.push(row[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
        escaped = false;
    }
    cells.push(row[start..].trim());
    cells
}

/// Parse a separator row into column alignments.
pub(crate) fn try_parse_separator(line: &str) -> Option<Vec<Alignment>> {
    small_indent(line)?;
    if !line.contains('-') {
        return None;
    }

    split_row(line)
        .into_iter()
        .map(|cell| {
            let caps = SEPARATOR_CELL.captures(cell)?;
            let left = !caps[1].is_empty();
            let right = !caps[2].is_empty();
            Some(match (left, right) {
                (true, true) => Alignment::Center,
                (true, false) => Alignment::Left,
                (false, true) => Alignment::Right,
                (false, false) => Alignment::Default,
            })
        })
        .collect()
}

fn is_row_candidate(line: &str) -> bool {
    small_indent(line).is_some() && line.contains('|')
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TableRule;

impl TableRule {
    fn row(
        line: &str,
        header: bool,
        alignments: &[Alignment],
        cx: &dyn ParseContext,
    ) -> MarkDownItem {
        let texts = split_row(line);
        let cells = alignments
            .iter()
            .enumerate()
            .map(|(i, &alignment)| {
                let text = texts.get(i).copied().unwrap_or("");
                MarkDownItem::new(ItemKind::TableCell { header, alignment }, text, text)
                    .with_children(cx.parse_inline(text))
            })
            .collect();
        MarkDownItem::new(ItemKind::TableRow { header }, line, line.trim()).with_children(cells)
    }
}

impl BlockRule for TableRule {
    fn name(&self) -> &str {
        "table"
    }

    fn matches(&self, lines: &[Line<'_>], pos: usize) -> bool {
        let header = lines[pos].text;
        if !is_row_candidate(header) {
            return false;
        }
        let Some(next) = lines.get(pos + 1) else {
            return false;
        };
        match try_parse_separator(next.text) {
            Some(alignments) => alignments.len() == split_row(header).len(),
            None => false,
        }
    }

    fn extract(&self, lines: &[Line<'_>], pos: usize, cx: &dyn ParseContext) -> BlockMatch {
        let alignments = try_parse_separator(lines[pos + 1].text).unwrap_or_default();

        let mut rows = vec![Self::row(lines[pos].text, true, &alignments, cx)];
        let mut current_pos = pos + 2;
        while current_pos < lines.len() {
            let line = lines[current_pos].text;
            if line.trim().is_empty() || !is_row_candidate(line) {
                break;
            }
            rows.push(Self::row(line, false, &alignments, cx));
            current_pos += 1;
        }

        log::debug!(
            "Parsed table with {} columns and {} rows",
            alignments.len(),
            rows.len()
        );

        let item = MarkDownItem::new(ItemKind::Table, join_lines(&lines[pos..current_pos]), "")
            .with_children(rows);
        BlockMatch::new(item, current_pos - pos)
    }
}
