use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use markdown_textblocks_config::Config;
use markdown_textblocks_engine::{Pipeline, TextBlock, without_separators};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::Arc,
};

/// Split Markdown notes into prose and math text blocks.
#[derive(Debug, Parser)]
#[command(name = "markdown-textblocks", version, about)]
struct Cli {
    /// Markdown file to read (default: stdin until a line reading END)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Configuration file (default: ~/.config/markdown-textblocks/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Leave out the empty separator blocks around math
    #[arg(long)]
    drop_separators: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One block per line
    Text,
    /// JSON array of blocks
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("Arguments: {cli:?}");

    let config = load_config(cli.config.as_ref())?;
    let pipeline = Pipeline::new(Arc::new(config.rule_set()?));

    let input = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => read_until_end(io::stdin().lock())?,
    };

    let blocks = pipeline.process(&input);
    let blocks: Vec<&TextBlock> = if cli.drop_separators {
        without_separators(&blocks).collect()
    } else {
        blocks.iter().collect()
    };

    let mut out = io::stdout().lock();
    match cli.format {
        OutputFormat::Text => {
            for block in blocks {
                writeln!(out, "{block:?}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &blocks)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        log::info!("Config path: {}", Config::config_path().display());
        return Ok(Config::load()?.unwrap_or_default());
    };

    let path = Config::expand_path(path).unwrap_or_else(|| path.clone());
    match Config::load_from_path(&path)? {
        Some(config) => Ok(config),
        None => bail!("Config file not found: {}", path.display()),
    }
}

/// Collects lines until one reads `END` (any case, surrounding whitespace
/// ignored) or the input runs out. The sentinel line is not included.
fn read_until_end<R: BufRead>(reader: R) -> Result<String> {
    let mut text = String::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().eq_ignore_ascii_case("end") {
            break;
        }
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}
