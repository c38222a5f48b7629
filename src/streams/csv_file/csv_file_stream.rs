use crate::core::rows::Row;
use crate::streams::{RowStream, StreamError};
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Row stream over comma-separated numeric data with a header line.
///
/// The header supplies the field names; every following cell must parse as
/// an `f64`. Rows with a different width than the header are rejected by the
/// CSV reader. An empty input has no fields and no rows.
pub struct CsvFileStream {
    reader: Reader<Box<dyn Read>>,
    fields: Vec<String>,
    record: StringRecord,
}

impl CsvFileStream {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StreamError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read + 'static>(source: R) -> Result<Self, StreamError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(Box::new(source) as Box<dyn Read>);
        let fields = reader.headers()?.iter().map(str::to_string).collect();

        Ok(Self {
            reader,
            fields,
            record: StringRecord::new(),
        })
    }

    fn parse_record(&self) -> Result<Row, StreamError> {
        let line = self.record.position().map_or(0, |p| p.line());
        let mut row = Row::new();
        for (field, cell) in self.fields.iter().zip(self.record.iter()) {
            let value = cell.parse::<f64>().map_err(|_| StreamError::Parse {
                line,
                field: field.clone(),
                value: cell.to_string(),
            })?;
            row.insert(field.as_str(), value);
        }
        Ok(row)
    }
}

impl RowStream for CsvFileStream {
    fn fields(&self) -> &[String] {
        &self.fields
    }

    fn next_row(&mut self) -> Result<Option<Row>, StreamError> {
        if !self.reader.read_record(&mut self.record)? {
            return Ok(None);
        }
        self.parse_record().map(Some)
    }
}
