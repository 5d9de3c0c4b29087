pub mod block_parser;
pub mod config;
pub mod flavor;
pub mod inline_parser;
pub mod item;
pub mod parser;
pub mod render;
pub mod rules;
pub mod tokenizer;

pub use config::Config;
pub use config::ConfigBuilder;
pub use config::Dialect;
pub use flavor::Flavor;
pub use item::{Alignment, ItemKind, MarkDownItem};
pub use parser::{MarkyMark, MarkyMarkBuilder};
pub use render::{HtmlRenderer, HtmlStyling, Renderer};
pub use rules::{
    BlockMatch, BlockRule, InlineMatch, InlineRule, InlineScanner, ParseContext, Rule,
};

/// Parses a Markdown document into a sequence of items.
///
/// # Examples
///
/// ```rust
/// use markymark::{ItemKind, parse};
///
/// let items = parse("# Heading\n\nParagraph text.", None);
/// assert_eq!(items[0].kind, ItemKind::Header { level: 1 });
/// ```
///
/// # Arguments
///
/// * `input` - The Markdown text to parse
/// * `config` - Optional configuration (defaults to the standard flavor)
pub fn parse(input: &str, config: Option<Config>) -> Vec<MarkDownItem> {
    let config = config.unwrap_or_default();
    MarkyMark::from_config(&config).parse_markdown(input)
}

/// Parses a Markdown document and renders it as HTML with default styling.
pub fn to_html(input: &str, config: Option<Config>) -> String {
    HtmlRenderer.render(&parse(input, config), &HtmlStyling::default())
}
