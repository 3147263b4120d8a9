use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hearth_cli::cli::{execute, CliCommand, ListOptions};
use hearth_core::query::{SortColumn, SortDirection};
use hearth_core::tracing_setup::{init_tracing, LogTarget};
use hearth_core::{open_repository, SourceConfig};

#[derive(Parser)]
#[command(name = "hearth")]
#[command(about = "Query the HEARTH threat-hunting collection as JSON")]
#[command(version)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, short, global = true)]
    pretty: bool,

    /// Path to JSON config file (owner, repo, directories, token, ...)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Read hunts from a local checkout instead of GitHub
    #[arg(long, value_name = "DIR", global = true)]
    local: Option<PathBuf>,

    /// Debug-level logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct ListArgs {
    /// Only hunts carrying this tag (without the leading #)
    #[arg(long, short)]
    tag: Option<String>,

    /// Sort by id, hypothesis, tactic, submitter or source
    #[arg(long, short)]
    sort: Option<SortColumn>,

    /// Reverse the sort order
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Include each hunt's markdown body
    #[arg(long)]
    content: bool,
}

impl From<ListArgs> for ListOptions {
    fn from(args: ListArgs) -> Self {
        ListOptions {
            tag: args.tag.map(|t| t.trim_start_matches('#').to_string()),
            sort: args.sort,
            direction: if args.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
            with_content: args.content,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List every hunt
    List(ListArgs),

    /// Search hypotheses, notes, tags and content (case-insensitive)
    Search {
        query: String,
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show one hunt with its full content
    Show {
        /// Hunt id, e.g. H001
        id: String,
    },

    /// List tags with the number of hunts carrying each
    Tags,
}

impl From<Commands> for CliCommand {
    fn from(command: Commands) -> Self {
        match command {
            Commands::List(args) => CliCommand::List(args.into()),
            Commands::Search { query, list } => CliCommand::Search {
                query,
                options: list.into(),
            },
            Commands::Show { id } => CliCommand::Show { id },
            Commands::Tags => CliCommand::Tags,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(LogTarget::resolve(None, LogTarget::Stderr), cli.verbose)?;

    let config = SourceConfig::resolve(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let repository = open_repository(config, cli.local.as_deref())
        .context("Failed to set up hunt source")?;

    let response = execute(repository.as_ref(), cli.command.into()).await;
    println!("{}", response.to_json(cli.pretty)?);

    if response.is_error() {
        std::process::exit(1);
    }
    Ok(())
}
