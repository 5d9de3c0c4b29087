//! Flavors: named, ordered rule sets.
//!
//! Order is precedence. Within a phase the first rule that matches wins, so
//! longer or more specific constructs come before the ones they contain
//! (`**` before `*`, images before links, fences before paragraphs).

use std::sync::Arc;

use crate::block_parser::{
    AtxHeaderRule, BlockquoteRule, FencedCodeBlockRule, HorizontalLineRule, IndentedCodeBlockRule,
    ListRule, SetextHeaderRule, TableRule,
};
use crate::config::{Dialect, Extensions};
use crate::inline_parser::{
    AutolinkRule, BareUrlRule, DelimiterRule, EscapeRule, ImageRule, InlineCodeRule, LineBreakRule,
    LinkRule,
};
use crate::rules::{BlockRule, InlineRule, Rule};

#[derive(Debug, Clone)]
pub struct Flavor {
    name: String,
    block_rules: Vec<Arc<dyn BlockRule>>,
    inline_rules: Vec<Arc<dyn InlineRule>>,
}

impl Default for Flavor {
    fn default() -> Self {
        Self::standard()
    }
}

impl Flavor {
    /// A flavor with no rules. Every line becomes paragraph text.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            block_rules: Vec::new(),
            inline_rules: Vec::new(),
        }
    }

    pub fn standard() -> Self {
        Self::for_dialect(Dialect::Standard)
    }

    pub fn gfm() -> Self {
        Self::for_dialect(Dialect::Gfm)
    }

    pub fn commonmark() -> Self {
        Self::for_dialect(Dialect::CommonMark)
    }

    pub fn for_dialect(dialect: Dialect) -> Self {
        Self::from_extensions(dialect.name(), &Extensions::for_dialect(dialect))
    }

    /// Build a flavor from per-rule switches.
    pub fn from_extensions(name: impl Into<String>, ext: &Extensions) -> Self {
        let mut flavor = Self::empty(name);

        // ===== Block rules =====
        if ext.fenced_code {
            flavor.add_rule(Rule::block(FencedCodeBlockRule));
        }
        if ext.atx_headers {
            flavor.add_rule(Rule::block(AtxHeaderRule));
        }
        // Before lists, so `- - -` and `* * *` are lines and not items
        if ext.horizontal_lines {
            flavor.add_rule(Rule::block(HorizontalLineRule));
        }
        if ext.blockquotes {
            flavor.add_rule(Rule::block(BlockquoteRule));
        }
        if ext.lists {
            flavor.add_rule(Rule::block(ListRule));
        }
        if ext.tables {
            flavor.add_rule(Rule::block(TableRule));
        }
        if ext.setext_headers {
            flavor.add_rule(Rule::block(SetextHeaderRule));
        }
        if ext.indented_code {
            flavor.add_rule(Rule::block(IndentedCodeBlockRule));
        }

        // ===== Inline rules =====
        if ext.escapes {
            flavor.add_rule(Rule::inline(EscapeRule));
        }
        if ext.inline_code {
            flavor.add_rule(Rule::inline(InlineCodeRule));
        }
        if ext.images {
            flavor.add_rule(Rule::inline(ImageRule));
        }
        if ext.links {
            flavor.add_rule(Rule::inline(LinkRule));
        }
        if ext.autolinks {
            flavor.add_rule(Rule::inline(AutolinkRule));
        }
        if ext.bare_urls {
            flavor.add_rule(Rule::inline(BareUrlRule));
        }
        if ext.emphasis {
            flavor.add_rule(Rule::inline(DelimiterRule::bold_asterisk()));
            flavor.add_rule(Rule::inline(DelimiterRule::bold_underscore()));
            flavor.add_rule(Rule::inline(DelimiterRule::italic_asterisk()));
            flavor.add_rule(Rule::inline(DelimiterRule::italic_underscore()));
        }
        if ext.strikethrough {
            flavor.add_rule(Rule::inline(DelimiterRule::strikethrough()));
        }
        if ext.line_breaks || ext.hard_line_breaks {
            flavor.add_rule(Rule::inline(LineBreakRule::new(ext.hard_line_breaks)));
        }

        log::debug!(
            "Built flavor '{}' with {} block and {} inline rules",
            flavor.name,
            flavor.block_rules.len(),
            flavor.inline_rules.len()
        );
        flavor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a rule at the lowest precedence of its phase.
    pub fn add_rule(&mut self, rule: Rule) {
        match rule {
            Rule::Block(rule) => self.block_rules.push(rule),
            Rule::Inline(rule) => self.inline_rules.push(rule),
        }
    }

    pub fn block_rules(&self) -> &[Arc<dyn BlockRule>] {
        &self.block_rules
    }

    pub fn inline_rules(&self) -> &[Arc<dyn InlineRule>] {
        &self.inline_rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline_names(flavor: &Flavor) -> Vec<&str> {
        flavor.inline_rules().iter().map(|r| r.name()).collect()
    }

    fn block_names(flavor: &Flavor) -> Vec<&str> {
        flavor.block_rules().iter().map(|r| r.name()).collect()
    }

    #[test]
    fn standard_rule_order() {
        let flavor = Flavor::standard();
        assert_eq!(flavor.name(), "standard");
        assert_eq!(
            block_names(&flavor),
            [
                "fenced_code_block",
                "atx_header",
                "horizontal_line",
                "blockquote",
                "list",
                "table",
                "setext_header",
                "indented_code_block",
            ]
        );
        assert_eq!(
            inline_names(&flavor),
            [
                "escape",
                "inline_code",
                "image",
                "link",
                "autolink",
                "bold",
                "bold_underscore",
                "italic",
                "italic_underscore",
                "strikethrough",
                "line_break",
            ]
        );
    }

    #[test]
    fn gfm_adds_bare_urls() {
        assert!(inline_names(&Flavor::gfm()).contains(&"bare_url"));
        assert!(!inline_names(&Flavor::standard()).contains(&"bare_url"));
    }

    #[test]
    fn commonmark_drops_tables_and_strikethrough() {
        let flavor = Flavor::commonmark();
        assert!(!block_names(&flavor).contains(&"table"));
        assert!(!inline_names(&flavor).contains(&"strikethrough"));
    }

    #[test]
    fn add_rule_appends() {
        let mut flavor = Flavor::empty("tiny");
        flavor.add_rule(Rule::inline(EscapeRule));
        flavor.add_rule(Rule::inline(InlineCodeRule));
        flavor.add_rule(Rule::block(ListRule));
        assert_eq!(inline_names(&flavor), ["escape", "inline_code"]);
        assert_eq!(block_names(&flavor), ["list"]);
    }
}
