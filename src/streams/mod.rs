pub mod csv_file;
mod error;
pub mod generators;
pub mod stream;

pub use csv_file::CsvFileStream;
pub use error::StreamError;
pub use generators::AdditiveGenerator;
pub use stream::RowStream;
