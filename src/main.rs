use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use markymark::config::{Config, Dialect, Extensions};
use markymark::render::{HtmlRenderer, HtmlStyling, OutlineRenderer, OutlineStyling, Renderer};
use markymark::{MarkDownItem, MarkyMark};

mod cli;
use cli::{Cli, Commands, FlavorArg};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(cli: &Cli, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (mut cfg, cfg_path) = markymark::config::load(cli.config.as_deref(), &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    if let Some(flavor) = cli.flavor {
        let dialect = match flavor {
            FlavorArg::Standard => Dialect::Standard,
            FlavorArg::Gfm => Dialect::Gfm,
            FlavorArg::Commonmark => Dialect::CommonMark,
        };
        log::debug!("Flavor overridden on the command line: {}", dialect.name());
        cfg.flavor = dialect;
        cfg.extensions = Extensions::for_dialect(dialect);
    }

    Ok(cfg)
}

fn parse_input(cli: &Cli, file: &Option<PathBuf>) -> io::Result<Vec<MarkDownItem>> {
    let cfg = load_config(cli, file)?;
    let input = read_all(file.as_ref())?;
    Ok(MarkyMark::from_config(&cfg).parse_markdown(&input))
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse { file, json } => {
            let items = parse_input(&cli, file)?;
            if *json {
                let out = serde_json::to_string_pretty(&items).map_err(io::Error::other)?;
                println!("{out}");
            } else {
                print!(
                    "{}",
                    OutlineRenderer.render(&items, &OutlineStyling::default())
                );
            }
            Ok(())
        }
        Commands::Html {
            file,
            code_class_prefix,
            link_target,
        } => {
            let items = parse_input(&cli, file)?;
            let styling = HtmlStyling {
                code_class_prefix: code_class_prefix.clone(),
                link_target: link_target.clone(),
            };
            print!("{}", HtmlRenderer.render(&items, &styling));
            Ok(())
        }
    }
}
