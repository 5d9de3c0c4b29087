use crate::block_parser::tests::helpers::{assert_block_kinds, parse_blocks};

#[test]
fn blankline_between_paragraphs() {
    assert_block_kinds("Paragraph 1\n\nParagraph 2\n", &["paragraph", "paragraph"]);
}

#[test]
fn multiple_blanklines_between_paragraphs() {
    assert_block_kinds(
        "Paragraph 1\n\n\n\nParagraph 2\n",
        &["paragraph", "paragraph"],
    );
}

#[test]
fn blankline_before_paragraph() {
    assert_block_kinds("\nParagraph 1\n", &["paragraph"]);
}

#[test]
fn whitespace_only_lines_are_blank() {
    assert_block_kinds("a\n   \t\nb", &["paragraph", "paragraph"]);
}

#[test]
fn crlf_and_cr_terminators() {
    let items = parse_blocks("one\r\ntwo\r\n\r\nthree\rfour");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].content, "one\ntwo");
    assert_eq!(items[1].content, "three\nfour");
}

#[test]
fn blank_line_ends_list() {
    assert_block_kinds("- a\n\n- b", &["list", "list"]);
}
