//! ATX (`# Title`) and setext (`Title` / `=====`) header parsing.

use crate::block_parser::utils::{inline_item, small_indent};
use crate::item::ItemKind;
use crate::rules::{BlockMatch, BlockRule, ParseContext};
use crate::tokenizer::{Line, join_lines};

/// Try to parse an ATX heading from content, returns heading level (1-6) if found.
pub(crate) fn try_parse_atx_heading(content: &str) -> Option<usize> {
    // Check leading spaces (max 3)
    let leading_spaces = small_indent(content)?;
    let trimmed = &content[leading_spaces..];

    // Must start with 1-6 # characters
    let hash_count = trimmed.chars().take_while(|&c| c == '#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }

    // After hashes, must be end of line, space, or tab
    let after_hashes = &trimmed[hash_count..];
    if !after_hashes.is_empty() && !after_hashes.starts_with(' ') && !after_hashes.starts_with('\t')
    {
        return None;
    }

    Some(hash_count)
}

/// Heading text after the marker, with surrounding whitespace and an optional
/// closing `#` sequence removed.
pub(crate) fn atx_heading_content(line: &str, level: usize) -> &str {
    let after_marker = line.trim_start()[level..].trim();

    let without_hashes = after_marker.trim_end_matches('#');
    if without_hashes.is_empty() {
        // Heading consisting only of hashes, e.g. `# ###`
        return "";
    }
    if without_hashes.len() < after_marker.len() && without_hashes.ends_with([' ', '\t']) {
        return without_hashes.trim_end();
    }
    after_marker
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AtxHeaderRule;

impl BlockRule for AtxHeaderRule {
    fn name(&self) -> &str {
        "atx_header"
    }

    fn matches(&self, lines: &[Line<'_>], pos: usize) -> bool {
        try_parse_atx_heading(lines[pos].text).is_some()
    }

    fn extract(&self, lines: &[Line<'_>], pos: usize, cx: &dyn ParseContext) -> BlockMatch {
        let line = lines[pos].text;
        let level = try_parse_atx_heading(line).unwrap_or(1);
        let text = atx_heading_content(line, level);

        log::debug!("Parsed ATX heading level {} at line {}", level, pos + 1);

        let item = inline_item(
            ItemKind::Header { level: level as u8 },
            line.to_string(),
            text,
            cx,
        );
        BlockMatch::new(item, 1)
    }
}

/// Level of a setext underline: 1 for `===`, 2 for `---`.
pub(crate) fn try_parse_setext_underline(line: &str) -> Option<u8> {
    let indent = small_indent(line)?;
    let trimmed = line[indent..].trim_end();
    if trimmed.len() < 2 {
        return None;
    }
    if trimmed.bytes().all(|b| b == b'=') {
        Some(1)
    } else if trimmed.bytes().all(|b| b == b'-') {
        Some(2)
    } else {
        None
    }
}

/// A single text line underlined by `=` or `-`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SetextHeaderRule;

impl BlockRule for SetextHeaderRule {
    fn name(&self) -> &str {
        "setext_header"
    }

    fn matches(&self, lines: &[Line<'_>], pos: usize) -> bool {
        let line = lines[pos].text;
        !line.trim().is_empty()
            && small_indent(line).is_some()
            && lines
                .get(pos + 1)
                .is_some_and(|next| try_parse_setext_underline(next.text).is_some())
    }

    fn extract(&self, lines: &[Line<'_>], pos: usize, cx: &dyn ParseContext) -> BlockMatch {
        let level = try_parse_setext_underline(lines[pos + 1].text).unwrap_or(1);
        let text = lines[pos].text.trim();

        log::debug!("Parsed setext heading level {} at line {}", level, pos + 1);

        let item = inline_item(
            ItemKind::Header { level },
            join_lines(&lines[pos..pos + 2]),
            text,
            cx,
        );
        BlockMatch::new(item, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_heading() {
        assert_eq!(try_parse_atx_heading("# Heading"), Some(1));
    }

    #[test]
    fn test_level_3_heading() {
        assert_eq!(try_parse_atx_heading("### Level 3"), Some(3));
    }

    #[test]
    fn test_heading_with_leading_spaces() {
        assert_eq!(try_parse_atx_heading("   # Heading"), Some(1));
    }

    #[test]
    fn test_four_spaces_not_heading() {
        assert_eq!(try_parse_atx_heading("    # Not heading"), None);
    }

    #[test]
    fn test_no_space_after_hash() {
        assert_eq!(try_parse_atx_heading("#NoSpace"), None);
    }

    #[test]
    fn test_empty_heading() {
        assert_eq!(try_parse_atx_heading("# "), Some(1));
        assert_eq!(atx_heading_content("# ", 1), "");
    }

    #[test]
    fn test_level_7_invalid() {
        assert_eq!(try_parse_atx_heading("####### Too many"), None);
    }

    #[test]
    fn content_drops_trailing_whitespace_and_closing_hashes() {
        assert_eq!(atx_heading_content("# Title   ", 1), "Title");
        assert_eq!(atx_heading_content("## Title ##", 2), "Title");
        assert_eq!(atx_heading_content("# C#", 1), "C#");
        assert_eq!(atx_heading_content("# ###", 1), "");
    }

    #[test]
    fn setext_underlines() {
        assert_eq!(try_parse_setext_underline("==="), Some(1));
        assert_eq!(try_parse_setext_underline("---  "), Some(2));
        assert_eq!(try_parse_setext_underline("-"), None);
        assert_eq!(try_parse_setext_underline("=-="), None);
        assert_eq!(try_parse_setext_underline("    ==="), None);
    }
}
