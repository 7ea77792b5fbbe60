//! CSV output format.

use hltv_table::{Cell, Table};
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Nulls are written as empty fields. Fields containing the delimiter, a quote
/// or a line break are quoted, with inner quotes doubled.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    fn escape(&self, field: &str) -> String {
        let needs_quotes = field
            .chars()
            .any(|c| c == self.delimiter || matches!(c, '"' | '\n' | '\r'));
        if needs_quotes {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn write_line<'a, W, I>(&self, writer: &mut W, fields: I) -> Result<(), FormatError>
    where
        W: Write,
        I: IntoIterator<Item = &'a str>,
    {
        let mut delimiter = [0u8; 4];
        let delimiter = self.delimiter.encode_utf8(&mut delimiter);
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                writer.write_all(delimiter.as_bytes())?;
            }
            writer.write_all(self.escape(field).as_bytes())?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for CsvFormatter {
    fn write_table<W: Write + Send>(&self, table: &Table, mut writer: W) -> Result<(), FormatError> {
        if self.include_header {
            self.write_line(&mut writer, table.schema().names())?;
        }

        for row in table.rows() {
            let fields: Vec<String> = row.iter().map(Cell::to_string).collect();
            self.write_line(&mut writer, fields.iter().map(String::as_str))?;
        }

        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hltv_table::{Column, Schema};
    use std::io::Cursor;

    fn sample() -> Table {
        let mut table = Table::new(Schema::new(vec![
            Column::int("match_id"),
            Column::text("event"),
            Column::int("stars"),
        ]));
        table
            .push_row(vec![Cell::Int(2_350_368), Cell::from("IEM Cologne, 2021"), Cell::Null])
            .unwrap();
        table
            .push_row(vec![Cell::Int(2_350_370), Cell::from("say \"gg\""), Cell::Int(1)])
            .unwrap();
        table
    }

    fn render(formatter: &CsvFormatter, table: &Table) -> String {
        let mut output = Cursor::new(Vec::new());
        formatter.write_table(table, &mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_csv_quotes_and_nulls() {
        let csv = render(&CsvFormatter::new(), &sample());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "match_id,event,stars");
        assert_eq!(lines[1], "2350368,\"IEM Cologne, 2021\",");
        assert_eq!(lines[2], "2350370,\"say \"\"gg\"\"\",1");
    }

    #[test]
    fn test_tsv_leaves_commas_alone() {
        let formatter = CsvFormatter::tsv();
        let tsv = render(&formatter, &sample());

        assert_eq!(tsv.lines().nth(1), Some("2350368\tIEM Cologne, 2021\t"));
        assert_eq!(formatter.extension(), "tsv");
    }

    #[test]
    fn test_csv_no_header() {
        let csv = render(&CsvFormatter::new().with_header(false), &sample());
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.starts_with("2350368"));
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let table = Table::new(Schema::results());
        let csv = render(&CsvFormatter::new(), &table);
        assert_eq!(csv.lines().count(), 1);
        assert!(csv.starts_with("match_id,date,"));
    }
}
