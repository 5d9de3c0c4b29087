//! HTML renderer for parsed items.
use std::fmt::Write;

use crate::item::{Alignment, ItemKind, MarkDownItem};
use crate::render::Renderer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlStyling {
    /// Prefix for the class of a code block with a language, e.g. `language-rust`
    pub code_class_prefix: String,
    /// `target` attribute for links, e.g. `_blank`
    pub link_target: Option<String>,
}

impl Default for HtmlStyling {
    fn default() -> Self {
        Self {
            code_class_prefix: "language-".to_string(),
            link_target: None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer
    }
}

impl Renderer for HtmlRenderer {
    type Styling = HtmlStyling;
    type Output = String;

    fn render(&self, items: &[MarkDownItem], styling: &HtmlStyling) -> String {
        let mut out = String::new();
        render_items(&mut out, items, styling);
        out
    }
}

fn render_items(out: &mut String, items: &[MarkDownItem], styling: &HtmlStyling) {
    for item in items {
        render_item(out, item, styling);
    }
}

fn render_item(out: &mut String, item: &MarkDownItem, styling: &HtmlStyling) {
    match &item.kind {
        ItemKind::Paragraph => {
            out.push_str("<p>");
            render_items(out, &item.children, styling);
            out.push_str("</p>\n");
        }
        ItemKind::Header { level } => {
            let _ = write!(out, "<h{level}>");
            render_items(out, &item.children, styling);
            let _ = writeln!(out, "</h{level}>");
        }
        ItemKind::List { ordered, start, .. } => {
            let tag = if *ordered { "ol" } else { "ul" };
            match start {
                Some(start) if *ordered && *start != 1 => {
                    let _ = writeln!(out, "<ol start=\"{start}\">");
                }
                _ => {
                    let _ = writeln!(out, "<{tag}>");
                }
            }
            render_items(out, &item.children, styling);
            let _ = writeln!(out, "</{tag}>");
        }
        ItemKind::ListItem => {
            out.push_str("<li>");
            for child in &item.children {
                // Nested blocks start on their own line
                if child.is_block() && !out.ends_with('\n') {
                    out.push('\n');
                }
                render_item(out, child, styling);
            }
            out.push_str("</li>\n");
        }
        ItemKind::Blockquote => {
            out.push_str("<blockquote>\n");
            render_items(out, &item.children, styling);
            out.push_str("</blockquote>\n");
        }
        ItemKind::CodeBlock { language } => {
            match language {
                Some(language) => {
                    let _ = write!(
                        out,
                        "<pre><code class=\"{}{}\">",
                        escape_html(&styling.code_class_prefix),
                        escape_html(language)
                    );
                }
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&escape_html(&item.content));
            if !item.content.is_empty() {
                out.push('\n');
            }
            out.push_str("</code></pre>\n");
        }
        ItemKind::HorizontalLine => out.push_str("<hr />\n"),
        ItemKind::Table => render_table(out, item, styling),
        ItemKind::TableRow { .. } => {
            out.push_str("<tr>\n");
            render_items(out, &item.children, styling);
            out.push_str("</tr>\n");
        }
        ItemKind::TableCell { header, alignment } => {
            let tag = if *header { "th" } else { "td" };
            match alignment_name(*alignment) {
                Some(align) => {
                    let _ = write!(out, "<{tag} align=\"{align}\">");
                }
                None => {
                    let _ = write!(out, "<{tag}>");
                }
            }
            render_items(out, &item.children, styling);
            let _ = writeln!(out, "</{tag}>");
        }
        ItemKind::PlainText => out.push_str(&escape_html(&item.content)),
        ItemKind::Bold => wrap(out, "strong", item, styling),
        ItemKind::Italic => wrap(out, "em", item, styling),
        ItemKind::Strikethrough => wrap(out, "del", item, styling),
        ItemKind::InlineCode => {
            let _ = write!(out, "<code>{}</code>", escape_html(&item.content));
        }
        ItemKind::Link { url, title } => {
            let _ = write!(out, "<a href=\"{}\"", escape_html(url));
            if let Some(title) = title {
                let _ = write!(out, " title=\"{}\"", escape_html(title));
            }
            if let Some(target) = &styling.link_target {
                let _ = write!(out, " target=\"{}\"", escape_html(target));
            }
            out.push('>');
            render_items(out, &item.children, styling);
            out.push_str("</a>");
        }
        ItemKind::Image {
            url,
            alt_text,
            title,
        } => {
            let _ = write!(
                out,
                "<img src=\"{}\" alt=\"{}\"",
                escape_html(url),
                escape_html(alt_text)
            );
            if let Some(title) = title {
                let _ = write!(out, " title=\"{}\"", escape_html(title));
            }
            out.push_str(" />");
        }
        ItemKind::LineBreak => out.push_str("<br />\n"),
        ItemKind::Custom { tag } => {
            let _ = write!(out, "<span class=\"{}\">", escape_html(tag));
            if item.children.is_empty() {
                out.push_str(&escape_html(&item.content));
            } else {
                render_items(out, &item.children, styling);
            }
            out.push_str("</span>");
        }
    }
}

fn wrap(out: &mut String, tag: &str, item: &MarkDownItem, styling: &HtmlStyling) {
    let _ = write!(out, "<{tag}>");
    render_items(out, &item.children, styling);
    let _ = write!(out, "</{tag}>");
}

fn render_table(out: &mut String, item: &MarkDownItem, styling: &HtmlStyling) {
    let (head, body): (Vec<_>, Vec<_>) = item
        .children
        .iter()
        .partition(|row| matches!(row.kind, ItemKind::TableRow { header: true }));

    out.push_str("<table>\n");
    if !head.is_empty() {
        out.push_str("<thead>\n");
        for row in head {
            render_item(out, row, styling);
        }
        out.push_str("</thead>\n");
    }
    if !body.is_empty() {
        out.push_str("<tbody>\n");
        for row in body {
            render_item(out, row, styling);
        }
        out.push_str("</tbody>\n");
    }
    out.push_str("</table>\n");
}

fn alignment_name(alignment: Alignment) -> Option<&'static str> {
    match alignment {
        Alignment::Default => None,
        Alignment::Left => Some("left"),
        Alignment::Center => Some("center"),
        Alignment::Right => Some("right"),
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
