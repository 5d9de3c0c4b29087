use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The Markdown dialect to parse.
/// Each dialect has a different set of default extensions enabled.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// Every built-in rule except bare URL autolinking. Also accepted as
    /// `contentful`, the name of the rich-text flavor it mirrors.
    #[default]
    #[serde(alias = "contentful")]
    Standard,
    /// GitHub Flavored Markdown (standard + bare URLs)
    Gfm,
    /// CommonMark core (no tables, no strikethrough)
    #[serde(alias = "commonmark")]
    CommonMark,
}

impl Dialect {
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Standard => "standard",
            Dialect::Gfm => "gfm",
            Dialect::CommonMark => "commonmark",
        }
    }
}

/// Per-rule switches. Each field enables one built-in rule (or a group of
/// closely related rules).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extensions {
    // ===== Block-level =====
    /// ``` and ~~~ fenced code blocks
    pub fenced_code: bool,
    /// `# Header` style headers
    pub atx_headers: bool,
    /// Headers underlined with `===` or `---`
    pub setext_headers: bool,
    pub horizontal_lines: bool,
    pub blockquotes: bool,
    pub lists: bool,
    /// Pipe tables
    pub tables: bool,
    /// Code indented by four spaces or a tab
    pub indented_code: bool,

    // ===== Inline =====
    /// Backslash escapes of ASCII punctuation
    pub escapes: bool,
    pub inline_code: bool,
    pub images: bool,
    pub links: bool,
    /// `<https://...>` and `<user@host>`
    pub autolinks: bool,
    /// `https://...` in running text
    pub bare_urls: bool,
    /// Bold and italic with `*` and `_`
    pub emphasis: bool,
    /// `~~struck~~`
    pub strikethrough: bool,
    /// Two trailing spaces or a backslash before a newline
    pub line_breaks: bool,
    /// Treat every newline inside a paragraph as a hard break
    pub hard_line_breaks: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self::for_dialect(Dialect::default())
    }
}

impl Extensions {
    /// Get the default extension set for a given dialect.
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Standard => Self::standard_defaults(),
            Dialect::Gfm => Self::gfm_defaults(),
            Dialect::CommonMark => Self::commonmark_defaults(),
        }
    }

    fn standard_defaults() -> Self {
        Self {
            fenced_code: true,
            atx_headers: true,
            setext_headers: true,
            horizontal_lines: true,
            blockquotes: true,
            lists: true,
            tables: true,
            indented_code: true,

            escapes: true,
            inline_code: true,
            images: true,
            links: true,
            autolinks: true,
            bare_urls: false,
            emphasis: true,
            strikethrough: true,
            line_breaks: true,
            hard_line_breaks: false,
        }
    }

    fn gfm_defaults() -> Self {
        let mut ext = Self::standard_defaults();
        ext.bare_urls = true;
        ext
    }

    fn commonmark_defaults() -> Self {
        let mut ext = Self::standard_defaults();
        ext.tables = false;
        ext.strikethrough = false;
        ext
    }
}

/// `[extensions]` table as written in a config file. Unset keys keep the
/// dialect's default.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct ExtensionOverrides {
    fenced_code: Option<bool>,
    atx_headers: Option<bool>,
    setext_headers: Option<bool>,
    horizontal_lines: Option<bool>,
    blockquotes: Option<bool>,
    lists: Option<bool>,
    tables: Option<bool>,
    indented_code: Option<bool>,
    escapes: Option<bool>,
    inline_code: Option<bool>,
    images: Option<bool>,
    links: Option<bool>,
    autolinks: Option<bool>,
    bare_urls: Option<bool>,
    emphasis: Option<bool>,
    strikethrough: Option<bool>,
    line_breaks: Option<bool>,
    hard_line_breaks: Option<bool>,
}

impl ExtensionOverrides {
    fn apply(self, ext: &mut Extensions) {
        let fields = [
            (self.fenced_code, &mut ext.fenced_code),
            (self.atx_headers, &mut ext.atx_headers),
            (self.setext_headers, &mut ext.setext_headers),
            (self.horizontal_lines, &mut ext.horizontal_lines),
            (self.blockquotes, &mut ext.blockquotes),
            (self.lists, &mut ext.lists),
            (self.tables, &mut ext.tables),
            (self.indented_code, &mut ext.indented_code),
            (self.escapes, &mut ext.escapes),
            (self.inline_code, &mut ext.inline_code),
            (self.images, &mut ext.images),
            (self.links, &mut ext.links),
            (self.autolinks, &mut ext.autolinks),
            (self.bare_urls, &mut ext.bare_urls),
            (self.emphasis, &mut ext.emphasis),
            (self.strikethrough, &mut ext.strikethrough),
            (self.line_breaks, &mut ext.line_breaks),
            (self.hard_line_breaks, &mut ext.hard_line_breaks),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    flavor: Dialect,
    extensions: ExtensionOverrides,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        let mut extensions = Extensions::for_dialect(raw.flavor);
        raw.extensions.apply(&mut extensions);
        Config {
            flavor: raw.flavor,
            extensions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawConfig")]
pub struct Config {
    pub flavor: Dialect,
    pub extensions: Extensions,
}

impl Default for Config {
    fn default() -> Self {
        let flavor = Dialect::default();
        Self {
            flavor,
            extensions: Extensions::for_dialect(flavor),
        }
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Switch dialect, resetting extensions to that dialect's defaults.
    pub fn flavor(mut self, flavor: Dialect) -> Self {
        self.config.flavor = flavor;
        self.config.extensions = Extensions::for_dialect(flavor);
        self
    }

    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.config.extensions = extensions;
        self
    }

    pub fn tables(mut self, enabled: bool) -> Self {
        self.config.extensions.tables = enabled;
        self
    }

    pub fn strikethrough(mut self, enabled: bool) -> Self {
        self.config.extensions.strikethrough = enabled;
        self
    }

    pub fn bare_urls(mut self, enabled: bool) -> Self {
        self.config.extensions.bare_urls = enabled;
        self
    }

    pub fn hard_line_breaks(mut self, enabled: bool) -> Self {
        self.config.extensions.hard_line_breaks = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".markymark.toml", "markymark.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("markymark").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("markymark")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .markymark.toml, markymark.toml
/// 3) XDG: $XDG_CONFIG_HOME/markymark/config.toml or ~/.config/markymark/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring {}: {e}", p.display()),
        }
    }

    if let Some(p) = xdg_config_path() {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring {}: {e}", p.display()),
        }
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
