use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use unist_find_all_after::config::Config;
use unist_find_all_after::document::parser::DocumentFormat;
use unist_find_all_after::document::tree::UnistTree;
use unist_find_all_after::file::loader::{load_tree_file, load_tree_from_stdin};
use unist_find_all_after::file::writer::{render_nodes, write_output};
use unist_find_all_after::query::{find_all_after, Position, Test};

/// find-all-after - list the siblings after a node in a unist tree
#[derive(Parser)]
#[command(name = "find-all-after")]
#[command(version)]
#[command(about = "Find all siblings after a child in a unist tree", long_about = None)]
struct Cli {
    /// unist tree as JSON or YAML, optionally gzipped (omit to read stdin)
    file: Option<PathBuf>,

    /// Child-index path from the root to the parent, e.g. `0.2` (default: the root)
    #[arg(short, long, default_value = "")]
    parent: String,

    /// Index of the child to start after (the child itself is excluded)
    #[arg(short, long, allow_hyphen_values = true)]
    after: String,

    /// Test siblings must pass: a type name, or JSON (object, array, null).
    /// Repeat to keep siblings passing any of them
    #[arg(short, long = "test", allow_hyphen_values = true)]
    tests: Vec<String>,

    /// Output format: json or yaml (default from config)
    #[arg(short, long)]
    format: Option<String>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Write results to this file instead of stdout (`.gz` compresses)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config is read before logging exists, so its failure is reported after init
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_logging(cli.verbose, &config.log_level);
    if let Some(err) = config_error {
        warn!("Ignoring config file: {:#}", err);
    }

    let tree = load_input(cli.file.as_deref(), io::stdin().is_terminal())?;

    let parent = tree.parent_at(&cli.parent)?;
    let position = Position::parse(&cli.after)?;
    let test = Test::parse_all(cli.tests.as_slice())?;

    let found = find_all_after(parent, position, test)?;
    info!("Found {} matching siblings", found.len());

    let format: DocumentFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output_format)
        .parse()?;
    let pretty = config.pretty && !cli.compact;
    let rendered = render_nodes(&found, format, pretty)?;

    match &cli.output {
        Some(path) => write_output(path, &rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Loads the tree from `file`, or from stdin when it is piped.
fn load_input(file: Option<&Path>, stdin_is_terminal: bool) -> Result<UnistTree> {
    match file {
        Some(path) => load_tree_file(path),
        None if stdin_is_terminal => {
            anyhow::bail!("No input: pass a FILE or pipe a unist tree on stdin (see --help)")
        }
        None => load_tree_from_stdin(),
    }
}

fn init_logging(verbose: u8, default_level: &str) {
    let level = match verbose {
        0 => default_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
