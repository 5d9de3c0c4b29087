//! Horizontal rule parsing utilities.

use crate::block_parser::utils::small_indent;
use crate::item::{ItemKind, MarkDownItem};
use crate::rules::{BlockMatch, BlockRule, ParseContext};
use crate::tokenizer::Line;

/// Try to parse a horizontal rule from a line.
///
/// A horizontal rule is 3 or more `*`, `-`, or `_` characters,
/// optionally separated by spaces.
pub(crate) fn try_parse_horizontal_rule(line: &str) -> Option<char> {
    small_indent(line)?;
    let trimmed = line.trim();

    // Must have at least 3 characters
    if trimmed.len() < 3 {
        return None;
    }

    // Determine which character is being used
    let rule_char = trimmed.chars().next()?;
    if !matches!(rule_char, '*' | '-' | '_') {
        return None;
    }

    // Check that the line only contains the rule character and spaces
    let mut count = 0;
    for ch in trimmed.chars() {
        match ch {
            c if c == rule_char => count += 1,
            ' ' | '\t' => continue,
            _ => return None,
        }
    }

    // Must have at least 3 of the rule character
    if count >= 3 { Some(rule_char) } else { None }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HorizontalLineRule;

impl BlockRule for HorizontalLineRule {
    fn name(&self) -> &str {
        "horizontal_line"
    }

    fn matches(&self, lines: &[Line<'_>], pos: usize) -> bool {
        try_parse_horizontal_rule(lines[pos].text).is_some()
    }

    fn extract(&self, lines: &[Line<'_>], pos: usize, _cx: &dyn ParseContext) -> BlockMatch {
        let line = lines[pos].text;
        BlockMatch::new(
            MarkDownItem::new(ItemKind::HorizontalLine, line, line.trim()),
            1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asterisk_rule() {
        assert_eq!(try_parse_horizontal_rule("***"), Some('*'));
        assert_eq!(try_parse_horizontal_rule("* * *"), Some('*'));
        assert_eq!(try_parse_horizontal_rule("*  *  *"), Some('*'));
        assert_eq!(try_parse_horizontal_rule("****"), Some('*'));
    }

    #[test]
    fn test_dash_rule() {
        assert_eq!(try_parse_horizontal_rule("---"), Some('-'));
        assert_eq!(try_parse_horizontal_rule("- - -"), Some('-'));
        assert_eq!(try_parse_horizontal_rule("---------------"), Some('-'));
    }

    #[test]
    fn test_underscore_rule() {
        assert_eq!(try_parse_horizontal_rule("___"), Some('_'));
        assert_eq!(try_parse_horizontal_rule("_ _ _"), Some('_'));
    }

    #[test]
    fn test_not_a_rule() {
        assert_eq!(try_parse_horizontal_rule("--"), None);
        assert_eq!(try_parse_horizontal_rule("-*-"), None);
        assert_eq!(try_parse_horizontal_rule("- item"), None);
        assert_eq!(try_parse_horizontal_rule("    ---"), None);
    }
}
