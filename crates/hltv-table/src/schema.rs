//! Column schemas, fixed ahead of time rather than inferred from data.

use hltv_types::ROUND_SLOTS;

use crate::cell::ColumnType;

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Value type.
    pub kind: ColumnType,
}

impl Column {
    /// Creates an integer column.
    #[must_use]
    pub fn int(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnType::Int,
        }
    }

    /// Creates a text column.
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnType::Text,
        }
    }
}

/// An ordered list of columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Creates a schema from columns.
    #[must_use]
    pub const fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Returns the columns.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the position of a column.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Returns the column names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Schema of the results listing.
    #[must_use]
    pub fn results() -> Self {
        Self::new(vec![
            Column::int("match_id"),
            Column::text("date"),
            Column::text("event"),
            Column::text("team_1"),
            Column::text("team_2"),
            Column::text("map"),
            Column::int("score_1"),
            Column::int("score_2"),
            Column::int("stars"),
        ])
    }

    /// Schema of match statistics, one row per played map.
    #[must_use]
    pub fn matches() -> Self {
        Self::new(match_columns())
    }

    /// Match statistics followed by [`ROUND_SLOTS`] positional round columns.
    #[must_use]
    pub fn economy() -> Self {
        let mut columns = match_columns();
        for round in 1..=ROUND_SLOTS {
            columns.extend(round_columns(round));
        }
        Self::new(columns)
    }

    /// Schema of the round table, one row per played round.
    #[must_use]
    pub fn rounds() -> Self {
        Self::new(vec![
            Column::int("match_id"),
            Column::int("map_stats_id"),
            Column::text("map"),
            Column::int("round"),
            Column::int("team_1_value"),
            Column::int("team_2_value"),
            Column::int("winner"),
        ])
    }
}

fn match_columns() -> Vec<Column> {
    vec![
        Column::int("match_id"),
        Column::text("date"),
        Column::int("event_id"),
        Column::text("team_1"),
        Column::text("team_2"),
        Column::int("team_1_id"),
        Column::int("team_2_id"),
        Column::text("map"),
        Column::int("map_stats_id"),
        Column::int("team_1_ct"),
        Column::int("team_2_t"),
        Column::int("team_1_t"),
        Column::int("team_2_ct"),
        Column::int("starting_ct"),
    ]
}

/// The three columns of one round slot, e.g. `7_team_1_value, 7_team_2_value, 7_winner`.
#[must_use]
pub fn round_columns(round: usize) -> [Column; 3] {
    [
        Column::int(format!("{round}_team_1_value")),
        Column::int(format!("{round}_team_2_value")),
        Column::int(format!("{round}_winner")),
    ]
}
