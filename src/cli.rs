use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "markymark")]
#[command(author, version)]
#[command(about = "A flavor-aware Markdown parser")]
#[command(
    long_about = "MarkyMark parses Markdown into a tree of semantic items using an ordered, \
    pluggable set of block and inline rules. Flavors (standard, gfm, commonmark) decide which \
    rules are active and in which order they are tried."
)]
#[command(after_help = "\
EXAMPLES:

    # Show the item tree of a file
    markymark parse document.md

    # Parse from stdin as JSON
    cat document.md | markymark parse --json

    # Render HTML with GitHub flavor
    markymark html --flavor gfm document.md

    # Use custom config
    markymark html --config custom.toml document.md

CONFIGURATION:

MarkyMark looks for configuration files in this order:
  1. Explicit --config path
  2. markymark.toml or .markymark.toml in current/parent directories
  3. ~/.config/markymark/config.toml (XDG)
  4. Built-in defaults

Example .markymark.toml:

    flavor = \"gfm\"

    [extensions]
    tables = false
    hard-line-breaks = true")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, markymark will \
        search for .markymark.toml or markymark.toml in the input's directory and its parents, \
        then fall back to ~/.config/markymark/config.toml."
    )]
    pub config: Option<PathBuf>,

    /// Dialect override
    #[arg(long, global = true, value_enum)]
    #[arg(help = "Markdown flavor to parse with (overrides the config file)")]
    pub flavor: Option<FlavorArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FlavorArg {
    #[value(alias = "contentful")]
    Standard,
    Gfm,
    Commonmark,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse and display the item tree
    #[command(
        long_about = "Parse a document and display the resulting item tree, one item per line \
        indented by nesting depth, or as JSON with --json."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Parse a file and show the outline
    markymark parse document.md

    # Parse from stdin
    echo '# Heading' | markymark parse

    # Machine-readable output
    markymark parse --json document.md")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Print the items as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render a document as HTML
    #[command(after_help = "\
EXAMPLES:

    # Render to stdout
    markymark html document.md

    # Open links in a new tab
    markymark html --link-target _blank document.md")]
    Html {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Prefix for code block language classes
        #[arg(long, default_value = "language-")]
        code_class_prefix: String,

        /// `target` attribute added to every link
        #[arg(long)]
        link_target: Option<String>,
    },
}
