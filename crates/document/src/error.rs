use folio_writer::WriterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Writer error: {0}")]
    Writer(#[from] WriterError),

    #[error("Compression failed: {0}")]
    Compression(#[from] std::io::Error),

    #[error("Unknown image: /Im{0}")]
    UnknownImage(usize),

    #[error("Invalid image: {0}")]
    InvalidImage(String),
}
