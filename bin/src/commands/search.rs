//! Search command implementation.

use anyhow::{Context, Result};
use hltv_lib::prelude::*;

use crate::args::SearchTarget;

/// Print the identifiers matching `term`.
pub(crate) async fn search(target: SearchTarget, term: &str, config: ClientConfig) -> Result<()> {
    let client = HltvClient::new(config).context("Cannot build HTTP client")?;
    let hits = client
        .search_hits(target.into(), term)
        .await
        .with_context(|| format!("Search for '{term}' failed"))?;

    if hits.is_empty() {
        println!("Nothing found.");
        return Ok(());
    }

    println!("{:<10} {:<30}", "ID", "NAME");
    println!("{}", "-".repeat(40));

    for hit in &hits {
        println!("{:<10} {:<30}", hit.id, hit.name.as_deref().unwrap_or("-"));
    }

    println!("\nTotal: {} matches", hits.len());
    Ok(())
}
