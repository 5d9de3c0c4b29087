use crate::block_parser::tests::helpers::{assert_block_kinds, get_text, parse_blocks};
use crate::item::ItemKind;

#[test]
fn fenced_code_with_language() {
    let items = parse_blocks("```rust\nfn main() {}\n```\n");
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].kind,
        ItemKind::CodeBlock {
            language: Some("rust".to_string())
        }
    );
    assert_eq!(items[0].content, "fn main() {}");
}

#[test]
fn tilde_fence_keeps_markdown_literal() {
    let items = parse_blocks("~~~\n# not a header\n- nor a list\n~~~");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].content, "# not a header\n- nor a list");
    assert!(items[0].children.is_empty());
}

#[test]
fn unterminated_fence_absorbs_rest() {
    let items = parse_blocks("```\ncode\n\n# still code");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].content, "code\n\n# still code");
}

#[test]
fn fence_interrupts_paragraph() {
    assert_block_kinds("text\n```\nx\n```", &["paragraph", "code_block"]);
}

#[test]
fn indented_code_block() {
    let input = "    let x = 1;\n\n    let y = 2;\n\ntext";
    assert_block_kinds(input, &["code_block", "paragraph"]);
    assert_eq!(
        get_text(&parse_blocks(input), "code_block").as_deref(),
        Some("let x = 1;\n\nlet y = 2;")
    );
}

#[test]
fn indented_code_does_not_interrupt_paragraph() {
    assert_block_kinds("text\n    more text", &["paragraph"]);
}
