use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use cst_inspector::pool::with_inspector;
use cst_inspector::projector::project;
use cst_inspector::ts::JsParser;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cst-inspector")]
#[command(about = "Inspect JavaScript concrete syntax trees", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse source code and print the projected syntax tree
    Parse {
        /// Source file to parse (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Run a pattern query and print the projected captures
    Query {
        /// Source file to query (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Tree-sitter query pattern (S-expression syntax)
        #[arg(short = 'q', long)]
        pattern: String,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Resolve the navigation path between two node addresses
    Relationship {
        /// Source file to inspect (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Byte offset that re-locates the source node
        #[arg(short, long)]
        source_key: usize,

        /// Byte offset that re-locates the target node
        #[arg(short, long)]
        target_key: usize,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, pretty } => cmd_parse(file.as_deref(), pretty),

        Commands::Query {
            file,
            pattern,
            pretty,
        } => cmd_query(file.as_deref(), &pattern, pretty),

        Commands::Relationship {
            file,
            source_key,
            target_key,
            pretty,
        } => cmd_relationship(file.as_deref(), source_key, target_key, pretty),
    }
}

/// Read source text from a file, or stdin when no file is given.
fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read source from stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_parse(file: Option<&Path>, pretty: bool) -> Result<()> {
    let source = read_source(file)?;

    let mut parser = JsParser::new()?;
    let parsed = parser.parse_with_source(&source)?;

    if parsed.has_errors() {
        eprintln!(
            "{}",
            format!(
                "warning: input contains {} syntax error node(s); they appear in the tree as ERROR",
                parsed.error_nodes().len()
            )
            .yellow()
        );
    }

    let tree = project(parsed.root_node(), &source);
    print_json(&tree, pretty)
}

fn cmd_query(file: Option<&Path>, pattern: &str, pretty: bool) -> Result<()> {
    let source = read_source(file)?;

    let matches = with_inspector(|inspector| inspector.query(&source, pattern))??;

    eprintln!("{}", format!("{} capture(s)", matches.len()).green());
    print_json(&serde_json::json!({ "matches": matches }), pretty)
}

fn cmd_relationship(
    file: Option<&Path>,
    source_key: usize,
    target_key: usize,
    pretty: bool,
) -> Result<()> {
    let source = read_source(file)?;

    let relationship =
        with_inspector(|inspector| inspector.relationship(&source, source_key, target_key))??;

    if !relationship.reachable {
        eprintln!(
            "{}",
            "warning: target is not reachable below the source node's parent; path is partial"
                .yellow()
        );
    }

    print_json(&relationship, pretty)
}
