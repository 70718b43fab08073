//! Sprig CLI
//!
//! Loads a markup file, parses it and prints the element tree for inspection.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser as _;
use log::LevelFilter;
use owo_colors::OwoColorize;
use simple_logger::SimpleLogger;
use sprig_common::source;
use sprig_common::warning::clear_warnings;
use sprig_parser::{DEFAULT_MAX_DEPTH, Document, Parser, ParserOptions, print_tree};

/// Sprig - parse simplified tag markup into an element tree
#[derive(clap::Parser, Debug)]
#[command(name = "sprig")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Parse ./index.html
    sprig

    # Parse a file and print the tree as JSON
    sprig --json page.html

    # Parse inline markup
    sprig --html '<a href="/">home</a>'
"#)]
struct Cli {
    /// Markup file to parse
    #[arg(value_name = "FILE", default_value = "index.html")]
    file: PathBuf,

    /// Parse this markup instead of reading FILE
    #[arg(long, value_name = "MARKUP")]
    html: Option<String>,

    /// Print the tree as JSON instead of the indented listing
    #[arg(long)]
    json: bool,

    /// Reject input whose elements nest deeper than this
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print whatever was parsed before an error
    #[arg(long)]
    keep_partial: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("{} could not install logger: {e}", "warning:".yellow());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (origin, input) = match &cli.html {
        Some(markup) => ("inline markup".to_owned(), markup.clone()),
        None => (cli.file.display().to_string(), source::load(&cli.file)?),
    };

    clear_warnings();
    log::info!("parsing {origin}");
    let options = ParserOptions::default().with_max_depth(cli.max_depth);
    let (document, error) = Parser::with_options(&input, options).run_with_partial();

    if let Some(error) = error {
        if cli.keep_partial {
            emit(cli, &document)?;
        }
        return Err(error).with_context(|| format!("failed to parse {origin}"));
    }

    if let Some(open) = document.unclosed()
        && let Some(element) = document.tree().element(open)
    {
        log::warn!("<{}> is still open at end of input", element.name);
    }
    emit(cli, &document)
}

fn emit(cli: &Cli, document: &Document) -> Result<()> {
    if cli.json {
        let snapshot = document
            .tree()
            .snapshot(document.root())
            .context("parsed tree has no root")?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_tree(document.tree(), document.root());
    }
    Ok(())
}
