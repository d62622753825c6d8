//! Category catalog listing command.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use questa_core::bank::QuestionBank;

use crate::state::AppState;

/// List the configured quiz categories in a table.
pub async fn list_categories(state: &AppState, json: bool) -> Result<()> {
    let summaries = state.bank.categories().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!();
        println!(
            "  {} No categories configured. Add catalog entries to {}",
            style("i").blue().bold(),
            style(format!("{}/config.toml", state.data_dir.display())).yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Label").fg(Color::White),
        Cell::new("Bank file").fg(Color::White),
    ]);

    for summary in &summaries {
        let file = state
            .config
            .catalog_entry(&summary.id)
            .map(|entry| entry.file.clone())
            .unwrap_or_default();

        table.add_row(vec![
            Cell::new(&summary.id).fg(Color::Cyan),
            Cell::new(&summary.label),
            Cell::new(file).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} categor{}",
        style(summaries.len()).bold(),
        if summaries.len() == 1 { "y" } else { "ies" }
    );
    println!();

    Ok(())
}
