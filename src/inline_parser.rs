//! Inline phase: splits the text of a block into inline items.

use std::sync::Arc;

use crate::item::MarkDownItem;
use crate::rules::{InlineMatch, InlineRule, ParseContext};

mod code_spans;
mod emphasis;
mod escapes;
mod line_breaks;
mod links;


pub use code_spans::InlineCodeRule;
pub use emphasis::{DelimiterRule, EmphasisKind};
pub use escapes::EscapeRule;
pub use line_breaks::LineBreakRule;
pub use links::{AutolinkRule, BareUrlRule, ImageRule, LinkRule};

/// Parse inline elements from text content.
///
/// Scans left to right. At each position the first rule that matches wins;
/// characters no rule claims are collected into plain text runs. A rule that
/// reports [`InlineMatch::Exhausted`] is not tried again in this text.
pub(crate) fn parse_inline(
    rules: &[Arc<dyn InlineRule>],
    text: &str,
    cx: &dyn ParseContext,
) -> Vec<MarkDownItem> {
    log::trace!(
        "Parsing inline text: {:?} ({} bytes)",
        text.chars().take(40).collect::<String>(),
        text.len()
    );

    let mut items = Vec::new();
    let mut scanners: Vec<_> = rules.iter().map(|rule| rule.scanner(text)).collect();
    let mut exhausted = vec![false; rules.len()];
    let mut plain_start = 0;
    let mut pos = 0;

    while let Some(ch) = text[pos..].chars().next() {
        let mut matched = None;

        for (idx, rule) in rules.iter().enumerate() {
            if exhausted[idx] || !rule.can_start_with(ch) {
                continue;
            }
            let outcome = match &mut scanners[idx] {
                Some(scanner) => scanner.try_match(pos),
                None => rule.try_match(text, pos),
            };
            match outcome {
                // Zero-length or misaligned matches count as no match
                InlineMatch::Matched(len)
                    if len > 0 && pos + len <= text.len() && text.is_char_boundary(pos + len) =>
                {
                    log::debug!("Matched {} at pos {} ({} bytes)", rule.name(), pos, len);
                    matched = Some((rule, len));
                    break;
                }
                InlineMatch::Exhausted => {
                    log::trace!("Rule {} exhausted at pos {}", rule.name(), pos);
                    exhausted[idx] = true;
                }
                _ => {}
            }
        }

        match matched {
            Some((rule, len)) => {
                if plain_start < pos {
                    items.push(MarkDownItem::plain_text(&text[plain_start..pos]));
                }
                items.push(rule.extract(&text[pos..pos + len], cx));
                pos += len;
                plain_start = pos;
            }
            None => pos += ch.len_utf8(),
        }
    }

    if plain_start < text.len() {
        items.push(MarkDownItem::plain_text(&text[plain_start..]));
    }

    items
}
