//! In-memory table.

use hltv_types::HltvError;
use thiserror::Error;

use crate::cell::{Cell, ColumnType};
use crate::schema::Schema;

/// Errors raised when a row does not match the schema.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The row has the wrong number of cells.
    #[error("Row has {got} cells, schema has {expected} columns")]
    RowLength {
        /// Number of columns in the schema.
        expected: usize,
        /// Number of cells in the row.
        got: usize,
    },

    /// A cell does not fit its column type.
    #[error("Column {column} expects {} values", .expected.as_str())]
    TypeMismatch {
        /// Column name.
        column: String,
        /// Column type.
        expected: ColumnType,
    },
}

impl From<TableError> for HltvError {
    fn from(err: TableError) -> Self {
        Self::Format(err.to_string())
    }
}

/// Rows of cells under a fixed schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    schema: Schema,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new(schema: Schema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    /// Appends a row after checking it against the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the row length or a cell type does not match.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), TableError> {
        if row.len() != self.schema.len() {
            return Err(TableError::RowLength {
                expected: self.schema.len(),
                got: row.len(),
            });
        }
        if let Some(column) = self
            .schema
            .columns()
            .iter()
            .zip(&row)
            .find_map(|(column, cell)| (!cell.fits(column.kind)).then_some(column))
        {
            return Err(TableError::TypeMismatch {
                column: column.name.clone(),
                expected: column.kind,
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Appends a row built by this crate against one of its own schemas.
    pub(crate) fn push_trusted(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.schema.len());
        self.rows.push(row);
    }

    /// Returns the schema.
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the cell at `row` in column `name`.
    #[must_use]
    pub fn get(&self, row: usize, name: &str) -> Option<&Cell> {
        let index = self.schema.index_of(name)?;
        self.rows.get(row).and_then(|r| r.get(index))
    }

    /// Iterates over one column, top to bottom.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a Cell> + use<'a>> {
        let index = self.schema.index_of(name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }
}
