use super::ui;
use crate::core::{ExchangeQuery, has_error};
use anyhow::Result;
use tracing::warn;

/// Prints the raw response body for a conversion query.
pub async fn run(service: &dyn ExchangeQuery, from: &str, to: &str, amount: f64) -> Result<()> {
    let body = service.query_website(from, to, amount).await?;

    match has_error(&body) {
        Ok(true) => println!("{}", ui::style_text(body.trim(), ui::StyleType::Error)),
        Ok(false) => println!("{}", body.trim()),
        Err(e) => {
            warn!(error = %e, "Response does not match the expected shape");
            println!("{}", ui::style_text(body.trim(), ui::StyleType::Subtle));
        }
    }
    Ok(())
}
