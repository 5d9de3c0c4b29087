use crate::item::MarkDownItem;
use crate::parser::MarkyMark;

pub fn parse_blocks(input: &str) -> Vec<MarkDownItem> {
    MarkyMark::default().parse_markdown(input)
}

/// First item named `kind` in depth-first order.
pub fn find_first<'a>(items: &'a [MarkDownItem], kind: &str) -> Option<&'a MarkDownItem> {
    find_all(items, kind).into_iter().next()
}

pub fn find_all<'a>(items: &'a [MarkDownItem], kind: &str) -> Vec<&'a MarkDownItem> {
    let mut found = Vec::new();
    for item in items {
        item.walk(&mut |node| {
            if node.kind.name() == kind {
                found.push(node);
            }
        });
    }
    found
}

pub fn assert_block_kinds(input: &str, expected: &[&str]) {
    let items = parse_blocks(input);
    let actual: Vec<_> = items.iter().map(|n| n.kind.name()).collect();
    assert_eq!(
        actual, expected,
        "Block kinds did not match for input:\n{}",
        input
    );
}

/// Get content of first item matching the kind
pub fn get_text(items: &[MarkDownItem], kind: &str) -> Option<String> {
    find_first(items, kind).map(|n| n.content.clone())
}

/// Count direct children of a specific kind
pub fn count_children(item: &MarkDownItem, kind: &str) -> usize {
    item.children
        .iter()
        .filter(|n| n.kind.name() == kind)
        .count()
}
