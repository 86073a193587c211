use super::ui;
use crate::core::config::ProbeConfig;
use crate::core::{ExchangeQuery, is_currency};
use anyhow::Result;

pub fn format_check(code: &str, recognized: bool) -> String {
    if recognized {
        format!(
            "{} is a {}",
            ui::style_text(code, ui::StyleType::Title),
            ui::style_text("recognized currency", ui::StyleType::Success)
        )
    } else {
        format!(
            "{} is {}",
            ui::style_text(code, ui::StyleType::Title),
            ui::style_text("not a recognized currency", ui::StyleType::Error)
        )
    }
}

/// Checks whether the exchange service knows `code` and prints the verdict.
pub async fn run(service: &dyn ExchangeQuery, code: &str, probe: &ProbeConfig) -> Result<()> {
    let spinner = ui::new_spinner(&format!("Checking {code}..."));
    let result = is_currency(service, code, probe).await;
    spinner.finish_and_clear();

    println!("{}", format_check(code, result?));
    Ok(())
}
