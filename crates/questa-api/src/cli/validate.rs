//! Bank validation command.

use anyhow::Result;
use console::style;

use questa_core::bank::QuestionBank;
use questa_types::bank::Category;
use questa_types::error::BankError;

use crate::state::AppState;

/// Check that bank documents parse and pass structural validation.
///
/// Validates a single category when one is named, otherwise the whole
/// catalog. Returns an error (non-zero exit) when any bank fails.
pub async fn validate_banks(
    state: &AppState,
    category: Option<&str>,
    json: bool,
) -> Result<()> {
    let targets: Vec<String> = match category {
        Some(id) => vec![id.to_string()],
        None => state
            .config
            .catalog
            .iter()
            .map(|entry| entry.id.clone())
            .collect(),
    };

    let mut results: Vec<(String, Result<Category, BankError>)> = Vec::new();
    for id in targets {
        let result = state.bank.load(&id).await;
        results.push((id, result));
    }
    let failed = results.iter().filter(|(_, result)| result.is_err()).count();

    if json {
        let report: Vec<serde_json::Value> = results
            .iter()
            .map(|(id, result)| match result {
                Ok(category) => serde_json::json!({
                    "id": id,
                    "valid": true,
                    "scales": category.scales.len(),
                    "questions": category.total_questions(),
                }),
                Err(e) => serde_json::json!({
                    "id": id,
                    "valid": false,
                    "error": e.to_string(),
                }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        for (id, result) in &results {
            match result {
                Ok(category) => println!(
                    "  {} {}  {} scales, {} questions",
                    style("✓").green(),
                    style(id).cyan(),
                    category.scales.len(),
                    category.total_questions()
                ),
                Err(BankError::NotFound(_)) => println!(
                    "  {} {}  not in the catalog",
                    style("✗").red(),
                    style(id).cyan()
                ),
                Err(BankError::Malformed { reason, .. }) => println!(
                    "  {} {}  {}",
                    style("✗").red(),
                    style(id).cyan(),
                    reason
                ),
            }
        }
        println!();
        if failed == 0 {
            println!("  {} All banks valid", style("✓").green().bold());
            println!();
        }
    }

    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} bank{} failed validation",
            results.len(),
            if results.len() == 1 { "" } else { "s" }
        );
    }
    Ok(())
}
