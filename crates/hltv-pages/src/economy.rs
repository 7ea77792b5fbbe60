//! Map economy parser.

use hltv_types::{Economy, RoundEconomy, Winner};
use scraper::{ElementRef, Html};
use tracing::debug;

use crate::error::{PageError, Result};
use crate::select::{attr, number, selector};

const VALUE_PREFIX: &str = "Equipment value:";

/// Parses the economy page of one played map.
///
/// The page lists one block per team and half: first half for team 1 and team 2,
/// then second half for team 1 and team 2. A round is won by team 1 when team 2's
/// cell is marked as lost.
///
/// # Errors
///
/// Returns an error if fewer than two team blocks are present or an equipment
/// value cannot be read.
pub fn parse_economy_page(html: &str) -> Result<Economy> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let block_sel = selector(".team-categories")?;
    let cell_sel = selector(".equipment-category-td")?;
    let blocks: Vec<Vec<ElementRef<'_>>> = root
        .select(&block_sel)
        .map(|block| block.select(&cell_sel).collect())
        .collect();

    if blocks.len() < 2 {
        return Err(PageError::MissingElement {
            context: "team economy blocks",
        });
    }

    let team_1: Vec<_> = blocks.iter().step_by(2).flatten().collect();
    let team_2: Vec<_> = blocks.iter().skip(1).step_by(2).flatten().collect();

    let lost_sel = selector(".lost")?;
    let rounds = team_1
        .iter()
        .zip(&team_2)
        .map(|(cell_1, cell_2)| {
            let winner = if cell_2.select(&lost_sel).next().is_some() {
                Winner::Team1
            } else {
                Winner::Team2
            };
            Ok(RoundEconomy::new(
                equipment_value(cell_1)?,
                equipment_value(cell_2)?,
                winner,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(rounds = rounds.len(), "parsed economy page");
    Ok(Economy::new(rounds))
}

fn equipment_value(cell: &ElementRef<'_>) -> Result<u32> {
    let title = attr(cell, "title", "equipment value title")?;
    let value = title
        .trim()
        .strip_prefix(VALUE_PREFIX)
        .ok_or_else(|| PageError::invalid("equipment value", title))?;
    number(value, "equipment value")
}
