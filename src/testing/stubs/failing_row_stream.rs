use crate::core::rows::Row;
use crate::streams::{RowStream, StreamError};
use crate::testing::VecRowStream;

/// Yields the first `fail_after` rows of `rows`, then a parse error.
pub struct FailingRowStream {
    inner: VecRowStream,
    remaining: usize,
}

impl FailingRowStream {
    pub fn new(rows: Vec<Row>, fail_after: usize) -> Self {
        Self {
            inner: VecRowStream::new(rows),
            remaining: fail_after,
        }
    }
}

impl RowStream for FailingRowStream {
    fn fields(&self) -> &[String] {
        self.inner.fields()
    }

    fn next_row(&mut self) -> Result<Option<Row>, StreamError> {
        if self.remaining == 0 {
            return Err(StreamError::Parse {
                line: 0,
                field: "user_us".into(),
                value: "garbage".into(),
            });
        }
        self.remaining -= 1;
        self.inner.next_row()
    }
}
