//! Single match command.

use anyhow::{Context, Result};
use hltv_lib::prelude::*;

use crate::args::OutputArgs;
use crate::commands::cancel_on_ctrl_c;
use crate::display::{spinner, write_output};

/// Fetch one match, optionally with its round economy.
pub(crate) async fn single_match(
    id: u64,
    economy: bool,
    output: &OutputArgs,
    config: ClientConfig,
    quiet: bool,
) -> Result<()> {
    let client = HltvClient::new(config).context("Cannot build HTTP client")?;

    let progress = spinner(quiet, format!("Fetching match {id}"));
    let table = if economy {
        let cancel = CancellationToken::new();
        cancel_on_ctrl_c(cancel.clone());
        get_economy_by_match_id(&client, id, &cancel).await
    } else {
        get_match_stats_by_id(&client, id).await
    }
    .with_context(|| format!("Failed to fetch match {id}"))?;
    progress.finish_with_message(format!("{} maps", table.len()));

    write_output(&table, output.output.as_deref(), output.format)
}
