use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("line {line}: field '{field}' is not a number: '{value}'")]
    Parse {
        line: u64,
        field: String,
        value: String,
    },
}
