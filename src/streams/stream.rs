use crate::core::rows::Row;
use crate::streams::StreamError;

/// Pull-based source of numeric [`Row`]s.
///
/// Implementations may be backed by files or by generators. Streams are read
/// once, front to back; there is no restart.
pub trait RowStream {
    /// Field names, in source order, shared by every row of the stream.
    fn fields(&self) -> &[String];

    /// Produces the next row.
    ///
    /// End of stream is `Ok(None)`, which is distinct from a failure. A
    /// malformed record is returned as an error and the caller is expected to
    /// abandon the stream; implementations do not skip bad rows.
    fn next_row(&mut self) -> Result<Option<Row>, StreamError>;
}
