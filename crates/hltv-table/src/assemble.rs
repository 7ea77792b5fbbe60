//! Flattening of parsed records into fixed-schema tables.

use hltv_types::{MapRecord, MatchRecord, ResultRecord, RoundEconomy, format_date};

use crate::cell::Cell;
use crate::schema::Schema;
use crate::table::Table;

/// One row per listed result.
#[must_use]
pub fn results_table(records: &[ResultRecord]) -> Table {
    let mut table = Table::new(Schema::results());
    for record in records {
        table.push_trusted(vec![
            record.match_id.into(),
            format_date(record.date).into(),
            record.event.as_str().into(),
            record.team_1.as_str().into(),
            record.team_2.as_str().into(),
            record.map.as_str().into(),
            record.score_1.into(),
            record.score_2.into(),
            record.stars.into(),
        ]);
    }
    table
}

/// One row per played map. A match played on N maps expands to N rows.
#[must_use]
pub fn matches_table(records: &[MatchRecord]) -> Table {
    let mut table = Table::new(Schema::matches());
    for (record, map) in played_maps(records) {
        table.push_trusted(match_row(record, map));
    }
    table
}

/// One row per played map with every round slot as positional columns.
///
/// Slots past the last played round, and every slot of a map without economy,
/// are null.
#[must_use]
pub fn economy_table(records: &[MatchRecord]) -> Table {
    let mut table = Table::new(Schema::economy());
    for (record, map) in played_maps(records) {
        let mut row = match_row(record, map);
        match &map.economy {
            Some(economy) => {
                for slot in economy.slots() {
                    row.extend(slot_cells(slot));
                }
            }
            None => row.extend(std::iter::repeat_n(Cell::Null, 3 * hltv_types::ROUND_SLOTS)),
        }
        table.push_trusted(row);
    }
    table
}

/// One row per played round of every map that carries economy.
#[must_use]
pub fn rounds_table(records: &[MatchRecord]) -> Table {
    let mut table = Table::new(Schema::rounds());
    for (record, map) in played_maps(records) {
        let Some(economy) = &map.economy else {
            continue;
        };
        for (index, round) in economy.rounds().iter().enumerate() {
            table.push_trusted(vec![
                record.match_id.into(),
                map.map_stats_id.into(),
                map.map.as_str().into(),
                Cell::Int(index as i64 + 1),
                round.team_1_value.into(),
                round.team_2_value.into(),
                round.winner.as_number().into(),
            ]);
        }
    }
    table
}

fn played_maps(records: &[MatchRecord]) -> impl Iterator<Item = (&MatchRecord, &MapRecord)> {
    records
        .iter()
        .flat_map(|record| record.maps.iter().map(move |map| (record, map)))
}

fn match_row(record: &MatchRecord, map: &MapRecord) -> Vec<Cell> {
    vec![
        record.match_id.into(),
        format_date(record.date).into(),
        record.event_id.into(),
        record.team_1.name.as_str().into(),
        record.team_2.name.as_str().into(),
        record.team_1.id.into(),
        record.team_2.id.into(),
        map.map.as_str().into(),
        map.map_stats_id.into(),
        map.team_1_ct.into(),
        map.team_2_t.into(),
        map.team_1_t.into(),
        map.team_2_ct.into(),
        map.starting_side.ct_team().into(),
    ]
}

fn slot_cells(slot: Option<&RoundEconomy>) -> [Cell; 3] {
    slot.map_or([Cell::Null, Cell::Null, Cell::Null], |round| {
        [
            round.team_1_value.into(),
            round.team_2_value.into(),
            round.winner.as_number().into(),
        ]
    })
}
