use super::ui;
use crate::core::{Conversion, ExchangeQuery, convert};
use anyhow::Result;
use comfy_table::Cell;
use tracing::debug;

impl Conversion {
    pub fn display_as_table(&self, from: &str, to: &str) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("From"),
            ui::header_cell("To"),
            ui::header_cell(&format!("Amount ({to})")),
        ]);
        table.add_row(vec![
            Cell::new(&self.source),
            Cell::new(&self.target),
            ui::amount_cell(&self.amount),
        ]);

        let mut output = format!(
            "Conversion: {}\n\n",
            ui::style_text(&format!("{from} -> {to}"), ui::StyleType::Title)
        );
        output.push_str(&table.to_string());
        output
    }
}

/// Converts `amount` units of `from` into `to` and prints the result.
pub async fn run(service: &dyn ExchangeQuery, from: &str, to: &str, amount: f64) -> Result<()> {
    let spinner = ui::new_spinner(&format!("Converting {amount} {from} to {to}..."));
    let result = convert(service, from, to, amount).await;
    spinner.finish_and_clear();

    let conversion = result?;
    let value = conversion.amount_value()?;
    debug!(value, "Converted amount");
    println!("{}", conversion.display_as_table(from, to));
    Ok(())
}
