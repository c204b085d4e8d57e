use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum OutputError {
    IoError(io::Error),
    CsvError(csv::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::IoError(e) => write!(f, "I/O error: {}", e),
            OutputError::CsvError(e) => write!(f, "CSV writing error: {}", e),
        }
    }
}

impl Error for OutputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            OutputError::IoError(e) => Some(e),
            OutputError::CsvError(e) => Some(e),
        }
    }
}

// Implement `From<T>` conversions for automatic error mapping
impl From<io::Error> for OutputError {
    fn from(err: io::Error) -> Self {
        OutputError::IoError(err)
    }
}

impl From<csv::Error> for OutputError {
    fn from(err: csv::Error) -> Self {
        OutputError::CsvError(err)
    }
}
