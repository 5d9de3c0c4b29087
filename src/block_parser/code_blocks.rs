use crate::block_parser::utils::{get_fence_count, small_indent, strip_indent};
use crate::item::{ItemKind, MarkDownItem};
use crate::rules::{BlockMatch, BlockRule, ParseContext};
use crate::tokenizer::{Line, join_lines};

/// Opening fence: (fence char, fence length, indent, info string).
fn try_parse_fence_open(line: &str) -> Option<(char, usize, usize, &str)> {
    let indent = small_indent(line)?;
    let trimmed = &line[indent..];

    let (fence_char, fence_count) = if let Some(count) = get_fence_count(trimmed, '`') {
        ('`', count)
    } else if let Some(count) = get_fence_count(trimmed, '~') {
        ('~', count)
    } else {
        return None;
    };

    let info_string = trimmed[fence_count..].trim();

    // Backtick fences cannot carry backticks in the info string
    if fence_char == '`' && info_string.contains('`') {
        return None;
    }

    Some((fence_char, fence_count, indent, info_string))
}

fn is_closing_fence(line: &str, fence_char: char, fence_count: usize) -> bool {
    let Some(indent) = small_indent(line) else {
        return false;
    };
    let trimmed = &line[indent..];
    match get_fence_count(trimmed, fence_char) {
        Some(closing_count) if closing_count >= fence_count => {
            trimmed[closing_count..].trim().is_empty()
        }
        _ => false,
    }
}

/// Fenced code blocks delimited by ``` or ~~~.
///
/// An unterminated fence runs to the end of the document.
#[derive(Debug, Default, Clone, Copy)]
pub struct FencedCodeBlockRule;

impl BlockRule for FencedCodeBlockRule {
    fn name(&self) -> &str {
        "fenced_code_block"
    }

    fn matches(&self, lines: &[Line<'_>], pos: usize) -> bool {
        try_parse_fence_open(lines[pos].text).is_some()
    }

    fn extract(&self, lines: &[Line<'_>], pos: usize, _cx: &dyn ParseContext) -> BlockMatch {
        log::debug!("Trying to parse fenced code block at position {}", pos);

        let Some((fence_char, fence_count, indent, info_string)) =
            try_parse_fence_open(lines[pos].text)
        else {
            return BlockMatch::new(MarkDownItem::plain_text(lines[pos].text), 1);
        };

        let mut current_pos = pos + 1;
        let mut content_lines = Vec::new();
        let mut found_closing = false;

        while current_pos < lines.len() {
            let line = lines[current_pos].text;
            if is_closing_fence(line, fence_char, fence_count) {
                found_closing = true;
                break;
            }
            // Content keeps its indentation relative to the opening fence
            content_lines.push(strip_indent(line, indent));
            current_pos += 1;
        }

        if found_closing {
            current_pos += 1;
        }

        let language = info_string
            .split_whitespace()
            .next()
            .map(|s| s.to_string());

        let item = MarkDownItem::new(
            ItemKind::CodeBlock { language },
            join_lines(&lines[pos..current_pos]),
            content_lines.join("\n"),
        );

        log::debug!("Parsed fenced code block, found_closing: {}", found_closing);
        BlockMatch::new(item, current_pos - pos)
    }
}
