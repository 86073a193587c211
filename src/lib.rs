pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::providers::ExchangeServiceProvider;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        from: String,
        to: String,
        amount: f64,
    },
    Check {
        code: String,
    },
    Query {
        from: String,
        to: String,
        amount: f64,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency exchange starting...");

    let config = AppConfig::load_or_default(config_path)?;
    debug!("Loaded config: {config:#?}");

    let service = ExchangeServiceProvider::from_config(&config.exchange_service());

    match command {
        AppCommand::Convert { from, to, amount } => {
            cli::convert::run(&service, &from, &to, amount).await
        }
        AppCommand::Check { code } => cli::check::run(&service, &code, &config.probe).await,
        AppCommand::Query { from, to, amount } => {
            cli::query::run(&service, &from, &to, amount).await
        }
    }
}
