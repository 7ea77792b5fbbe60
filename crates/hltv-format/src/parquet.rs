//! Apache Parquet output format.

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use hltv_table::{Cell, ColumnType, Table};
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::io::Write;
use std::sync::Arc;

use crate::{FormatError, Formatter};

/// Parquet formatter.
///
/// Every column is nullable; integer columns map to `Int64` and text columns
/// to `Utf8`.
#[derive(Debug, Clone)]
pub struct ParquetFormatter {
    /// Row group size (number of rows per group).
    row_group_size: usize,
    /// Compression codec.
    compression: Compression,
}

impl Default for ParquetFormatter {
    fn default() -> Self {
        Self {
            row_group_size: 100_000,
            compression: Compression::SNAPPY,
        }
    }
}

impl ParquetFormatter {
    /// Creates a new Parquet formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row group size.
    #[must_use]
    pub const fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Sets the compression codec.
    #[must_use]
    pub const fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    fn arrow_schema(table: &Table) -> Schema {
        Schema::new(
            table
                .schema()
                .columns()
                .iter()
                .map(|column| {
                    let data_type = match column.kind {
                        ColumnType::Int => DataType::Int64,
                        ColumnType::Text => DataType::Utf8,
                    };
                    Field::new(column.name.as_str(), data_type, true)
                })
                .collect::<Vec<_>>(),
        )
    }

    fn rows_to_batch(
        table: &Table,
        schema: &Arc<Schema>,
        rows: &[Vec<Cell>],
    ) -> Result<RecordBatch, FormatError> {
        let arrays: Vec<ArrayRef> = table
            .schema()
            .columns()
            .iter()
            .enumerate()
            .map(|(i, column)| -> ArrayRef {
                match column.kind {
                    ColumnType::Int => {
                        let values: Vec<Option<i64>> = rows.iter().map(|r| r[i].as_int()).collect();
                        Arc::new(Int64Array::from(values))
                    }
                    ColumnType::Text => {
                        let values: Vec<Option<&str>> =
                            rows.iter().map(|r| r[i].as_text()).collect();
                        Arc::new(StringArray::from(values))
                    }
                }
            })
            .collect();

        RecordBatch::try_new(Arc::clone(schema), arrays)
            .map_err(|e| FormatError::Parquet(e.to_string()))
    }
}

impl Formatter for ParquetFormatter {
    fn write_table<W: Write + Send>(&self, table: &Table, writer: W) -> Result<(), FormatError> {
        let schema = Arc::new(Self::arrow_schema(table));
        let props = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build();

        let mut arrow_writer = ArrowWriter::try_new(writer, Arc::clone(&schema), Some(props))
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        // Write in batches
        for chunk in table.rows().chunks(self.row_group_size.max(1)) {
            let batch = Self::rows_to_batch(table, &schema, chunk)?;
            arrow_writer
                .write(&batch)
                .map_err(|e| FormatError::Parquet(e.to_string()))?;
        }

        arrow_writer
            .close()
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        Ok(())
    }

    fn extension(&self) -> &str {
        "parquet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Array;
    use hltv_table::{Column, Schema as TableSchema};
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use std::io::{Cursor, Seek, SeekFrom};

    fn sample() -> Table {
        let mut table = Table::new(TableSchema::new(vec![
            Column::int("match_id"),
            Column::text("map"),
            Column::int("1_winner"),
        ]));
        table
            .push_row(vec![Cell::Int(2_350_368), Cell::from("nuke"), Cell::Int(2)])
            .unwrap();
        table
            .push_row(vec![Cell::Int(2_350_369), Cell::Null, Cell::Null])
            .unwrap();
        table
    }

    #[test]
    fn test_parquet_magic() {
        let mut output = Cursor::new(Vec::new());
        ParquetFormatter::new()
            .write_table(&sample(), &mut output)
            .unwrap();

        let data = output.into_inner();
        assert!(data.len() > 4);
        assert_eq!(&data[0..4], b"PAR1");
    }

    #[test]
    fn test_schema_is_nullable_and_typed() {
        let schema = ParquetFormatter::arrow_schema(&sample());
        assert_eq!(schema.fields().len(), 3);
        let winner = schema.field_with_name("1_winner").unwrap();
        assert_eq!(winner.data_type(), &DataType::Int64);
        assert!(winner.is_nullable());
        assert_eq!(schema.field_with_name("map").unwrap().data_type(), &DataType::Utf8);
    }

    #[test]
    fn test_nulls_survive_a_read_back() {
        let mut file = tempfile::tempfile().unwrap();
        ParquetFormatter::new()
            .write_table(&sample(), &mut file)
            .unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();

        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .unwrap()
            .build()
            .unwrap();
        let batches: Vec<RecordBatch> = reader.map(Result::unwrap).collect();
        assert_eq!(batches.len(), 1);

        let batch = &batches[0];
        assert_eq!(batch.num_rows(), 2);
        assert!(!batch.column(1).is_null(0));
        assert!(batch.column(1).is_null(1));
        assert!(batch.column(2).is_null(1));
        assert!(!batch.column(0).is_null(1));
    }
}
