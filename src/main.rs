use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use xchg::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for xchg::AppCommand {
    fn from(cmd: Commands) -> xchg::AppCommand {
        match cmd {
            Commands::Convert { from, to, amount } => {
                xchg::AppCommand::Convert { from, to, amount }
            }
            Commands::Check { code } => xchg::AppCommand::Check { code },
            Commands::Query { from, to, amount } => xchg::AppCommand::Query { from, to, amount },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount from one currency to another
    Convert {
        /// Currency code on hand, e.g. USD
        from: String,
        /// Currency code to convert to, e.g. EUR
        to: String,
        /// Amount of the source currency
        amount: f64,
    },
    /// Check whether a currency code is recognized
    Check {
        /// Currency code to verify
        code: String,
    },
    /// Print the raw exchange service response
    Query {
        from: String,
        to: String,
        amount: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => xchg::cli::setup::setup(),
        Some(cmd) => xchg::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
