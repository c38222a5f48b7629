mod csv_file_stream;

pub use csv_file_stream::CsvFileStream;
