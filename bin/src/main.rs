//! gexhist CLI - Fetch signed GEXBot history URLs.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod args;
mod commands;
mod display;

use args::SelectionArgs;

#[derive(Parser)]
#[command(name = "gexhist")]
#[command(about = "Fetch signed GEXBot history URLs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the history endpoint for every selected combination
    Query {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Maximum concurrent requests (1 queries strictly in order)
        #[arg(long, default_value = "1")]
        concurrency: usize,

        /// Per-request timeout in seconds. Unbounded if omitted.
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Show the combinations and URLs a query would request, without sending anything
    Plan {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// List known tickers and the categories of each group
    Catalog {
        /// Only show this group (state-gex, state-greeks-zero, state-greeks-one, classic, orderflow)
        #[arg(short, long)]
        group: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    display::init_logging(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Query {
            selection,
            concurrency,
            timeout,
        } => commands::query::query(selection.resolve()?, concurrency, timeout).await,
        Commands::Plan { selection } => commands::plan::plan(&selection.resolve()?),
        Commands::Catalog { group } => commands::catalog::catalog(group.as_deref()),
    }
}
