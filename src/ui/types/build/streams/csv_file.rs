use crate::streams::CsvFileStream;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::CsvParameters;

impl TryFrom<CsvParameters> for CsvFileStream {
    type Error = BuildError;

    fn try_from(p: CsvParameters) -> Result<Self, Self::Error> {
        Ok(CsvFileStream::new(&p.path)?)
    }
}
