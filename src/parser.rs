//! The parser engine.
//!
//! [`MarkyMark`] owns a [`Flavor`] plus any rules a consumer registers on top
//! of it. Parsing runs the block phase over the tokenized lines; block rules
//! call back into the engine to inline-parse their text or to block-parse
//! nested content.

use std::sync::Arc;

use crate::block_parser;
use crate::config::Config;
use crate::flavor::Flavor;
use crate::inline_parser;
use crate::item::{ItemKind, MarkDownItem};
use crate::rules::{BlockRule, InlineRule, ParseContext, Rule};
use crate::tokenizer::{Line, tokenize};

/// Nesting beyond this depth is kept as plain text instead of recursing.
pub(crate) const MAX_NESTING: usize = 128;

#[cfg(debug_assertions)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone)]
pub struct MarkyMark {
    flavor: Flavor,
    /// Consumer rules in registration order
    extra_rules: Vec<Rule>,
    // Active rule lists: consumer rules first, then the flavor's
    block_rules: Vec<Arc<dyn BlockRule>>,
    inline_rules: Vec<Arc<dyn InlineRule>>,
}

impl Default for MarkyMark {
    fn default() -> Self {
        Self::new(Flavor::default())
    }
}

impl MarkyMark {
    pub fn new(flavor: Flavor) -> Self {
        let mut engine = Self {
            flavor,
            extra_rules: Vec::new(),
            block_rules: Vec::new(),
            inline_rules: Vec::new(),
        };
        engine.rebuild();
        engine
    }

    pub fn builder() -> MarkyMarkBuilder {
        MarkyMarkBuilder::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Flavor::from_extensions(
            config.flavor.name(),
            &config.extensions,
        ))
    }

    pub fn flavor(&self) -> &Flavor {
        &self.flavor
    }

    /// Register a rule. It takes precedence over the flavor's rules of the
    /// same phase, and over consumer rules registered after it.
    pub fn add_rule(&mut self, rule: Rule) {
        log::debug!("Registering rule '{}'", rule.name());
        self.extra_rules.push(rule);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.block_rules.clear();
        self.inline_rules.clear();

        for rule in &self.extra_rules {
            match rule {
                Rule::Block(rule) => self.block_rules.push(Arc::clone(rule)),
                Rule::Inline(rule) => self.inline_rules.push(Arc::clone(rule)),
            }
        }
        self.block_rules
            .extend(self.flavor.block_rules().iter().cloned());
        self.inline_rules
            .extend(self.flavor.inline_rules().iter().cloned());
    }

    /// Parse a document into its top-level items.
    ///
    /// Never fails: text no rule recognizes comes back as paragraphs and
    /// plain text.
    pub fn parse_markdown(&self, text: &str) -> Vec<MarkDownItem> {
        #[cfg(debug_assertions)]
        {
            init_logger();
        }

        let lines = tokenize(text);
        log::debug!(
            "Parsing {} lines with flavor '{}'",
            lines.len(),
            self.flavor.name()
        );
        Scope::root(self).blocks(&lines)
    }
}

/// Parse context for one nesting level.
struct Scope<'a> {
    engine: &'a MarkyMark,
    depth: usize,
}

impl<'a> Scope<'a> {
    fn root(engine: &'a MarkyMark) -> Self {
        Self { engine, depth: 0 }
    }

    fn nested(&self) -> Self {
        Self {
            engine: self.engine,
            depth: self.depth + 1,
        }
    }

    fn blocks(&self, lines: &[Line<'_>]) -> Vec<MarkDownItem> {
        block_parser::parse_blocks(&self.engine.block_rules, lines, self)
    }
}

impl ParseContext for Scope<'_> {
    fn parse_inline(&self, text: &str) -> Vec<MarkDownItem> {
        if text.is_empty() {
            return Vec::new();
        }
        if self.depth >= MAX_NESTING {
            log::warn!("Nesting limit reached, keeping inline text as is");
            return vec![MarkDownItem::plain_text(text)];
        }
        inline_parser::parse_inline(&self.engine.inline_rules, text, &self.nested())
    }

    fn parse_blocks(&self, text: &str) -> Vec<MarkDownItem> {
        if self.depth >= MAX_NESTING {
            log::warn!("Nesting limit reached, keeping block text as is");
            let item = MarkDownItem::new(ItemKind::Paragraph, text, text.trim())
                .with_children(vec![MarkDownItem::plain_text(text.trim())]);
            return vec![item];
        }
        let lines = tokenize(text);
        self.nested().blocks(&lines)
    }

    fn starts_block(&self, lines: &[Line<'_>], pos: usize) -> bool {
        block_parser::starts_block(&self.engine.block_rules, lines, pos)
    }
}

#[derive(Debug, Default)]
pub struct MarkyMarkBuilder {
    flavor: Option<Flavor>,
    rules: Vec<Rule>,
}

impl MarkyMarkBuilder {
    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = Some(flavor);
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn build(self) -> MarkyMark {
        let mut engine = MarkyMark::new(self.flavor.unwrap_or_default());
        engine.extra_rules = self.rules;
        engine.rebuild();
        engine
    }
}
