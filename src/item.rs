//! The parsed document model.
//!
//! A parse produces an ordered sequence of [`MarkDownItem`]s. Each item carries
//! its semantic [`ItemKind`], the raw source it was matched from, the derived
//! text content and any nested items.

use serde::Serialize;

/// Column alignment for table cells, taken from the separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Default,
    Left,
    Center,
    Right,
}

/// Semantic tag of a [`MarkDownItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    // Blocks
    Paragraph,
    Header {
        level: u8,
    },
    List {
        ordered: bool,
        /// Nesting depth, 0 for a top-level list
        depth: usize,
        /// First number of an ordered list
        #[serde(skip_serializing_if = "Option::is_none")]
        start: Option<u64>,
    },
    ListItem,
    Blockquote,
    CodeBlock {
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    HorizontalLine,
    Table,
    TableRow {
        header: bool,
    },
    TableCell {
        header: bool,
        alignment: Alignment,
    },

    // Inlines
    PlainText,
    Bold,
    Italic,
    Strikethrough,
    InlineCode,
    Link {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    Image {
        url: String,
        alt_text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    LineBreak,

    /// Output of a consumer-supplied rule.
    Custom {
        tag: String,
    },
}

impl ItemKind {
    /// Whether this kind is produced by the block phase.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            ItemKind::Paragraph
                | ItemKind::Header { .. }
                | ItemKind::List { .. }
                | ItemKind::ListItem
                | ItemKind::Blockquote
                | ItemKind::CodeBlock { .. }
                | ItemKind::HorizontalLine
                | ItemKind::Table
                | ItemKind::TableRow { .. }
                | ItemKind::TableCell { .. }
        )
    }

    /// Short lowercase name, used by the outline renderer and in logs.
    pub fn name(&self) -> &str {
        match self {
            ItemKind::Paragraph => "paragraph",
            ItemKind::Header { .. } => "header",
            ItemKind::List { .. } => "list",
            ItemKind::ListItem => "list_item",
            ItemKind::Blockquote => "blockquote",
            ItemKind::CodeBlock { .. } => "code_block",
            ItemKind::HorizontalLine => "horizontal_line",
            ItemKind::Table => "table",
            ItemKind::TableRow { .. } => "table_row",
            ItemKind::TableCell { .. } => "table_cell",
            ItemKind::PlainText => "plain_text",
            ItemKind::Bold => "bold",
            ItemKind::Italic => "italic",
            ItemKind::Strikethrough => "strikethrough",
            ItemKind::InlineCode => "inline_code",
            ItemKind::Link { .. } => "link",
            ItemKind::Image { .. } => "image",
            ItemKind::LineBreak => "line_break",
            ItemKind::Custom { tag } => tag,
        }
    }
}

/// One semantic node of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkDownItem {
    pub kind: ItemKind,
    /// Source text the item was matched from, line endings normalized to `\n`
    pub raw: String,
    /// Derived text: header text without markers, code without fences, link text, ...
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MarkDownItem>,
}

impl MarkDownItem {
    pub fn new(kind: ItemKind, raw: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
            content: content.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<MarkDownItem>) -> Self {
        self.children = children;
        self
    }

    /// A plain text run whose raw text and content are the same.
    pub fn plain_text(text: &str) -> Self {
        Self::new(ItemKind::PlainText, text, text)
    }

    pub fn is_block(&self) -> bool {
        self.kind.is_block()
    }

    /// Visit this item and all descendants in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a MarkDownItem)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Concatenated text of all leaf descendants, without markup.
    pub fn text(&self) -> String {
        if self.children.is_empty() {
            return match self.kind {
                ItemKind::LineBreak => "\n".to_string(),
                ItemKind::Image { ref alt_text, .. } => alt_text.clone(),
                _ => self.content.clone(),
            };
        }
        self.children.iter().map(MarkDownItem::text).collect()
    }
}
