//! `luna` CLI — convert, reformat, and inspect div/p/b/img markup.
//!
//! ## Usage
//!
//! ```sh
//! # Convert markup to Luna notation (stdin → stdout)
//! echo '<div><img /></div>' | luna convert
//!
//! # Convert from file to file
//! luna convert -i page.html -o page.luna
//!
//! # Re-indent markup, one tag per line
//! luna format -i page.html
//!
//! # Strip all formatting whitespace
//! luna format --compress -i page.html
//!
//! # Show the tag tree, or dump it as JSON
//! luna tree -i page.html
//! luna tree --json -i page.html
//!
//! # Show structure statistics
//! luna stats -i page.html
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use luna_core::{Forest, ParseOptions, MAX_INPUT_LEN};
use std::io::{self, Read};

/// Deepest tree `tree --json` will hand to serde_json, whose serializer recurses
/// once per level.
const JSON_MAX_DEPTH: usize = 512;

#[derive(Parser)]
#[command(
    name = "luna",
    version,
    about = "Convert div/p/b/img markup into Luna call notation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Reject inputs larger than this many bytes (0 disables the limit)
    #[arg(long, global = true, default_value_t = MAX_INPUT_LEN)]
    max_len: usize,

    /// Reject markup nested deeper than this many containers
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert markup to Luna call notation
    Convert {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Re-emit markup with one tag per line, indented by depth
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Drop all newlines and indentation
        #[arg(long)]
        compress: bool,
    },
    /// Print the tag tree
    Tree {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print the parsed forest as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Show structure statistics (node counts, depth, sizes)
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = parse_options(cli.max_len, cli.max_depth);
    debug!("parse options: {options:?}");

    match cli.command {
        Commands::Convert { input, output } => {
            let forest = read_forest(input.as_deref(), &options)?;
            write_output(output.as_deref(), &luna_core::render_target(&forest))?;
        }
        Commands::Format {
            input,
            output,
            compress,
        } => {
            let forest = read_forest(input.as_deref(), &options)?;
            let formatted = luna_core::render_outline(&forest, compress);
            write_output(output.as_deref(), &formatted)?;
        }
        Commands::Tree {
            input,
            output,
            json,
        } => {
            let forest = read_forest(input.as_deref(), &options)?;
            let rendered = if json {
                let depth = forest.max_depth();
                if depth > JSON_MAX_DEPTH {
                    anyhow::bail!(
                        "Tree is {} levels deep; --json supports at most {}",
                        depth,
                        JSON_MAX_DEPTH
                    );
                }
                serde_json::to_string_pretty(&forest).context("Failed to serialize tree")?
            } else {
                luna_core::render_pretty(&forest)
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Stats { input } => {
            let html = read_input(input.as_deref())?;
            let forest = parse_markup(&html, &options)?;
            let luna = luna_core::render_target(&forest);
            println!("Roots:       {}", forest.len());
            println!("Nodes:       {}", forest.node_count());
            println!("Containers:  {}", forest.container_count());
            println!("Images:      {}", forest.leaf_count());
            println!("Max depth:   {}", forest.max_depth());
            println!("HTML size:   {} bytes", html.len());
            println!("Luna size:   {} bytes", luna.len());
        }
    }

    Ok(())
}

/// Install the `env_logger` backend. `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Build parse limits from the global flags. `--max-len 0` disables the size limit.
fn parse_options(max_len: usize, max_depth: Option<usize>) -> ParseOptions {
    let mut options = ParseOptions::new();
    if max_len > 0 {
        options = options.max_input_len(max_len);
    }
    if let Some(depth) = max_depth {
        options = options.max_depth(depth);
    }
    options
}

fn read_forest(path: Option<&str>, options: &ParseOptions) -> Result<Forest> {
    let html = read_input(path)?;
    parse_markup(&html, options)
}

fn parse_markup(html: &str, options: &ParseOptions) -> Result<Forest> {
    luna_core::parse_with(html, options).context("Failed to parse markup")
}

/// Read markup from `path`, or from stdin when no path is given.
fn read_input(path: Option<&str>) -> Result<String> {
    let Some(path) = path else {
        let mut html = String::new();
        io::stdin()
            .read_to_string(&mut html)
            .context("Failed to read markup from stdin")?;
        return Ok(html);
    };
    std::fs::read_to_string(path).with_context(|| format!("Failed to read markup from {path}"))
}

/// Write rendered output to `path`, or to stdout when no path is given.
fn write_output(path: Option<&str>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write output to {path}")),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}
