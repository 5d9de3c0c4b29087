use crate::block_parser::tests::helpers::{assert_block_kinds, parse_blocks};
use crate::item::ItemKind;

#[test]
fn atx_levels() {
    for level in 1..=6u8 {
        let input = format!("{} Heading", "#".repeat(level as usize));
        let items = parse_blocks(&input);
        assert_eq!(items[0].kind, ItemKind::Header { level });
        assert_eq!(items[0].content, "Heading");
    }
}

#[test]
fn seven_hashes_is_paragraph() {
    assert_block_kinds("####### Heading", &["paragraph"]);
}

#[test]
fn hash_without_space_is_paragraph() {
    assert_block_kinds("#hashtag", &["paragraph"]);
}

#[test]
fn trailing_whitespace_and_closing_hashes_trimmed() {
    let items = parse_blocks("## Title ##   ");
    assert_eq!(items[0].content, "Title");
    assert_eq!(items[0].raw, "## Title ##   ");
}

#[test]
fn heading_inline_content() {
    let items = parse_blocks("# Hello *world*");
    let kinds: Vec<_> = items[0].children.iter().map(|i| i.kind.name()).collect();
    assert_eq!(kinds, ["plain_text", "italic"]);
}

#[test]
fn setext_headings() {
    let items = parse_blocks("Title\n=====\n\nSub\n---");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].kind, ItemKind::Header { level: 1 });
    assert_eq!(items[0].content, "Title");
    assert_eq!(items[1].kind, ItemKind::Header { level: 2 });
    assert_eq!(items[1].content, "Sub");
}

#[test]
fn heading_interrupts_paragraph() {
    assert_block_kinds("text\n# Heading\nmore", &["paragraph", "header", "paragraph"]);
}
