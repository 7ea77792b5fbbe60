//! Listing commands: results, matches, economy and rounds.
//!
//! Each command pages through the results listing under the given filters and
//! writes one fixed-schema table.

use anyhow::{Context, Result};
use hltv_lib::prelude::*;
use std::fmt;

use crate::args::ListArgs;
use crate::commands::cancel_on_ctrl_c;
use crate::display::{spinner, write_output};

/// Which table a listing command produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dataset {
    Results,
    Matches,
    Economy,
    Rounds,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Results => "results",
            Self::Matches => "match statistics",
            Self::Economy => "match economy",
            Self::Rounds => "rounds",
        })
    }
}

/// Collect a dataset and write it out.
pub(crate) async fn list(
    dataset: Dataset,
    args: &ListArgs,
    config: ClientConfig,
    quiet: bool,
) -> Result<()> {
    let client = HltvClient::new(config).context("Cannot build HTTP client")?;
    let cancel = CancellationToken::new();
    cancel_on_ctrl_c(cancel.clone());

    let options = args.page.options(cancel.clone());
    let query = args.filter.query();

    let progress = spinner(quiet, format!("Fetching {dataset}"));
    let table = match dataset {
        Dataset::Results => get_results(&client, query, &options).await,
        Dataset::Matches => get_matches_stats(&client, query, &options).await,
        Dataset::Economy => get_matches_with_economy(&client, query, &options).await,
        Dataset::Rounds => get_rounds(&client, query, &options).await,
    };
    let table = match table {
        Ok(table) => table,
        Err(err) => {
            progress.abandon_with_message(format!("Failed to fetch {dataset}"));
            return Err(err).with_context(|| format!("Failed to fetch {dataset}"));
        }
    };

    let finish_msg = if cancel.is_cancelled() {
        format!("Interrupted after {} rows", table.len())
    } else {
        format!("Fetched {} rows", table.len())
    };
    progress.finish_with_message(finish_msg);

    write_output(&table, args.output.output.as_deref(), args.output.format)?;

    if !quiet && let Some(path) = &args.output.output {
        eprintln!("Output written to: {}", path.display());
    }

    Ok(())
}
