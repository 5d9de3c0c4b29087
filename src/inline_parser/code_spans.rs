/// Parsing for inline code spans (`code`)
use std::collections::HashMap;

use crate::item::{ItemKind, MarkDownItem};
use crate::rules::{InlineMatch, InlineRule, InlineScanner, ParseContext};

/// Try to parse a code span starting at the current position.
/// Returns (total_len, content, backtick_count) if successful.
pub fn try_parse_code_span(text: &str) -> Option<(usize, &str, usize)> {
    // Count opening backticks
    let opening_backticks = text.bytes().take_while(|&b| b == b'`').count();
    if opening_backticks == 0 {
        return None;
    }

    let rest = &text[opening_backticks..];

    // Look for matching closing backticks
    let mut pos = 0;
    while pos < rest.len() {
        if rest[pos..].starts_with('`') {
            let closing_backticks = rest[pos..].bytes().take_while(|&b| b == b'`').count();

            if closing_backticks == opening_backticks {
                // Found matching close
                let code_content = &rest[..pos];
                let total_len = opening_backticks + pos + closing_backticks;
                return Some((total_len, code_content, opening_backticks));
            }
            // Skip these backticks and continue searching
            pos += closing_backticks;
        } else {
            // Move to next character (handle UTF-8 properly)
            pos += rest[pos..].chars().next()?.len_utf8();
        }
    }

    // No matching close found
    None
}

/// Strip one space from each side when both are present and the content is
/// not all spaces, so `` ` `` `` can hold a lone backtick.
fn strip_code_padding(content: &str) -> &str {
    if content.len() >= 2
        && content.starts_with(' ')
        && content.ends_with(' ')
        && !content.trim().is_empty()
    {
        &content[1..content.len() - 1]
    } else {
        content
    }
}

/// A maximal run of backticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BacktickRun {
    start: usize,
    len: usize,
    /// Index of the next run with the same length
    closer: Option<usize>,
}

/// Every backtick run in `text`, each linked to the run that would close it.
fn backtick_runs(text: &str) -> Vec<BacktickRun> {
    let bytes = text.as_bytes();
    let mut runs = Vec::new();
    let mut pos = 0;
    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'`') {
        let start = pos + offset;
        let len = bytes[start..].iter().take_while(|&&b| b == b'`').count();
        runs.push(BacktickRun {
            start,
            len,
            closer: None,
        });
        pos = start + len;
    }

    let mut next_by_len: HashMap<usize, usize> = HashMap::new();
    for idx in (0..runs.len()).rev() {
        runs[idx].closer = next_by_len.insert(runs[idx].len, idx);
    }
    runs
}

/// Backtick runs of one text plus the index of the last run with a closer.
struct RunTable {
    runs: Vec<BacktickRun>,
    last_closable: Option<usize>,
}

impl RunTable {
    fn new(text: &str) -> Self {
        let runs = backtick_runs(text);
        let last_closable = runs.iter().rposition(|run| run.closer.is_some());
        Self {
            runs,
            last_closable,
        }
    }
}

/// Code span matching over one text. Runs are found once, on first use.
struct CodeSpanScanner<'t> {
    text: &'t str,
    table: Option<RunTable>,
}

impl InlineScanner for CodeSpanScanner<'_> {
    fn try_match(&mut self, pos: usize) -> InlineMatch {
        let text = self.text;
        let table = self.table.get_or_insert_with(|| RunTable::new(text));

        // Only the start of a run can open a span
        let Ok(idx) = table.runs.binary_search_by_key(&pos, |run| run.start) else {
            return InlineMatch::NoMatch;
        };
        match table.runs[idx].closer {
            Some(closer) => {
                let close = &table.runs[closer];
                InlineMatch::Matched(close.start + close.len - pos)
            }
            None if table.last_closable.is_some_and(|last| last > idx) => InlineMatch::NoMatch,
            None => InlineMatch::Exhausted,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InlineCodeRule;

impl InlineRule for InlineCodeRule {
    fn name(&self) -> &str {
        "inline_code"
    }

    fn can_start_with(&self, c: char) -> bool {
        c == '`'
    }

    fn try_match(&self, text: &str, pos: usize) -> InlineMatch {
        // Only a whole backtick run can open a span
        if text[..pos].ends_with('`') {
            return InlineMatch::NoMatch;
        }
        match try_parse_code_span(&text[pos..]) {
            Some((len, _, _)) => InlineMatch::Matched(len),
            None => {
                let run = text[pos..].bytes().take_while(|&b| b == b'`').count();
                if text[pos + run..].contains('`') {
                    InlineMatch::NoMatch
                } else {
                    InlineMatch::Exhausted
                }
            }
        }
    }

    fn scanner<'t>(&'t self, text: &'t str) -> Option<Box<dyn InlineScanner + 't>> {
        Some(Box::new(CodeSpanScanner { text, table: None }))
    }

    fn extract(&self, matched: &str, _cx: &dyn ParseContext) -> MarkDownItem {
        let content = try_parse_code_span(matched)
            .map(|(_, content, _)| strip_code_padding(content))
            .unwrap_or(matched);
        MarkDownItem::new(ItemKind::InlineCode, matched, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_code_span() {
        let result = try_parse_code_span("`code`");
        assert_eq!(result, Some((6, "code", 1)));
    }

    #[test]
    fn test_parse_code_span_with_backticks() {
        let result = try_parse_code_span("`` `backtick` ``");
        assert_eq!(result, Some((16, " `backtick` ", 2)));
    }

    #[test]
    fn test_parse_code_span_no_close() {
        assert_eq!(try_parse_code_span("`no close"), None);
    }

    #[test]
    fn test_parse_code_span_mismatched_close() {
        assert_eq!(try_parse_code_span("`single``"), None);
    }

    #[test]
    fn test_code_span_with_trailing_text() {
        assert_eq!(try_parse_code_span("`code` and more"), Some((6, "code", 1)));
    }

    #[test]
    fn padding_is_stripped_once() {
        assert_eq!(strip_code_padding(" `backtick` "), "`backtick`");
        assert_eq!(strip_code_padding("  "), "  ");
        assert_eq!(strip_code_padding(" a"), " a");
    }

    #[test]
    fn unclosed_run_exhausts_when_no_backticks_follow() {
        let rule = InlineCodeRule;
        assert_eq!(rule.try_match("`open", 0), InlineMatch::Exhausted);
        assert_eq!(rule.try_match("`open ``", 0), InlineMatch::NoMatch);
        assert_eq!(rule.try_match("a `b` c", 2), InlineMatch::Matched(3));
    }

    #[test]
    fn runs_link_to_the_next_run_of_equal_length() {
        let runs = backtick_runs("`` ` x ` ``");
        let shape: Vec<_> = runs.iter().map(|run| (run.start, run.len, run.closer)).collect();
        assert_eq!(
            shape,
            [(0, 2, Some(3)), (3, 1, Some(2)), (7, 1, None), (9, 2, None)]
        );
    }

    #[test]
    fn scanner_agrees_with_direct_matching() {
        let rule = InlineCodeRule;
        for text in ["`` ` x `", "a `b` c ``d`` `", "```", "x ``` `` ` y", "``a```b``"] {
            let mut scanner = rule.scanner(text).unwrap();
            for pos in text.match_indices('`').map(|(pos, _)| pos) {
                let direct = rule.try_match(text, pos);
                let scanned = scanner.try_match(pos);
                match direct {
                    InlineMatch::Matched(_) => assert_eq!(scanned, direct, "{text:?} at {pos}"),
                    _ => assert!(
                        !matches!(scanned, InlineMatch::Matched(_)),
                        "{text:?} at {pos}"
                    ),
                }
            }
        }
    }

    #[test]
    fn scanner_skips_a_closerless_opener_but_not_later_spans() {
        let text = "`` ` x `";
        let mut scanner = InlineCodeRule.scanner(text).unwrap();
        assert_eq!(scanner.try_match(0), InlineMatch::NoMatch);
        assert_eq!(scanner.try_match(3), InlineMatch::Matched(5));
    }

    #[test]
    fn scanner_exhausts_after_the_last_closable_run() {
        let text = "`a` `` ```";
        let mut scanner = InlineCodeRule.scanner(text).unwrap();
        assert_eq!(scanner.try_match(0), InlineMatch::Matched(3));
        assert_eq!(scanner.try_match(4), InlineMatch::Exhausted);
    }
}
