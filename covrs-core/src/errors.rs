use thiserror::Error;

#[derive(Error, Debug)]
pub enum CovrsError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Invalid chromosome sizes line: {0}")]
    ChromSizesParseError(String),

    #[error("Unsupported input file type: {0}")]
    UnsupportedFileType(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
