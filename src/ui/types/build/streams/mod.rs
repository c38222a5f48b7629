use crate::streams::{AdditiveGenerator, CsvFileStream, RowStream};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::StreamChoice;

mod additive_generator;
mod csv_file;

pub fn build_stream(choice: StreamChoice) -> Result<Box<dyn RowStream>, BuildError> {
    match choice {
        StreamChoice::CsvFile(p) => {
            let s = CsvFileStream::try_from(p)?;
            Ok(Box::new(s))
        }
        StreamChoice::AdditiveGenerator(p) => {
            let s = AdditiveGenerator::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}
