use crate::core::rows::Row;
use crate::streams::{RowStream, StreamError};
use std::collections::BTreeSet;

pub struct VecRowStream {
    fields: Vec<String>,
    rows: Vec<Row>,
    idx: usize,
}

impl VecRowStream {
    pub fn new(rows: Vec<Row>) -> Self {
        let fields: BTreeSet<String> = rows
            .iter()
            .flat_map(|r| r.iter().map(|(k, _)| k.to_string()))
            .collect();
        Self {
            fields: fields.into_iter().collect(),
            rows,
            idx: 0,
        }
    }
}

impl RowStream for VecRowStream {
    fn fields(&self) -> &[String] {
        &self.fields
    }

    fn next_row(&mut self) -> Result<Option<Row>, StreamError> {
        let Some(row) = self.rows.get(self.idx) else {
            return Ok(None);
        };
        self.idx += 1;
        Ok(Some(row.clone()))
    }
}
