//! Indented structural dump of an item tree.
//!
//! One line per item: kind name, kind attributes, then the content quoted.
//!
//! ```text
//! header level=1 "Title"
//! list ordered=false depth=0
//!   list_item "a"
//!     plain_text "a"
//! ```

use std::fmt::Write;

use crate::item::{ItemKind, MarkDownItem};
use crate::render::Renderer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineStyling {
    /// Spaces per nesting level
    pub indent_width: usize,
    /// Append each item's content
    pub show_content: bool,
}

impl Default for OutlineStyling {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_content: true,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OutlineRenderer;

impl Renderer for OutlineRenderer {
    type Styling = OutlineStyling;
    type Output = String;

    fn render(&self, items: &[MarkDownItem], styling: &OutlineStyling) -> String {
        let mut out = String::new();
        for item in items {
            render_item(&mut out, item, 0, styling);
        }
        out
    }
}

fn render_item(out: &mut String, item: &MarkDownItem, level: usize, styling: &OutlineStyling) {
    let _ = write!(
        out,
        "{:indent$}{}",
        "",
        item.kind.name(),
        indent = level * styling.indent_width
    );
    write_attributes(out, &item.kind);
    if styling.show_content && !item.content.is_empty() {
        let _ = write!(out, " {:?}", item.content);
    }
    out.push('\n');

    for child in &item.children {
        render_item(out, child, level + 1, styling);
    }
}

fn write_attributes(out: &mut String, kind: &ItemKind) {
    let _ = match kind {
        ItemKind::Header { level } => write!(out, " level={level}"),
        ItemKind::List {
            ordered,
            depth,
            start,
        } => {
            let _ = write!(out, " ordered={ordered} depth={depth}");
            match start {
                Some(start) => write!(out, " start={start}"),
                None => Ok(()),
            }
        }
        ItemKind::CodeBlock {
            language: Some(language),
        } => write!(out, " language={language}"),
        ItemKind::TableRow { header: true } => write!(out, " header"),
        ItemKind::TableCell { header, alignment } => {
            let _ = write!(out, " align={alignment:?}");
            if *header {
                write!(out, " header")
            } else {
                Ok(())
            }
        }
        ItemKind::Link { url, title } | ItemKind::Image { url, title, .. } => {
            let _ = write!(out, " url={url:?}");
            match title {
                Some(title) => write!(out, " title={title:?}"),
                None => Ok(()),
            }
        }
        _ => Ok(()),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::MarkyMark;

    fn outline(input: &str) -> String {
        let items = MarkyMark::default().parse_markdown(input);
        OutlineRenderer.render(&items, &OutlineStyling::default())
    }

    #[test]
    fn header_and_list() {
        assert_eq!(
            outline("# Title\n\n- a"),
            "header level=1 \"Title\"\n  plain_text \"Title\"\n\
             list ordered=false depth=0\n  list_item \"a\"\n    plain_text \"a\"\n"
        );
    }

    #[test]
    fn link_attributes() {
        assert_eq!(
            outline("[x](u 't')"),
            "paragraph \"[x](u 't')\"\n  link url=\"u\" title=\"t\" \"x\"\n    plain_text \"x\"\n"
        );
    }

    #[test]
    fn content_can_be_hidden() {
        let items = MarkyMark::default().parse_markdown("```rust\nlet x;\n```");
        let styling = OutlineStyling {
            indent_width: 4,
            show_content: false,
        };
        assert_eq!(
            OutlineRenderer.render(&items, &styling),
            "code_block language=rust\n"
        );
    }
}
