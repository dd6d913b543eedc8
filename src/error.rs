use folio_document::DocumentError;
use folio_writer::WriterError;
use thiserror::Error;

/// Errors surfaced by the manifest loader and the CLI.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Manifest parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid manifest: {0}")]
    Manifest(String),

    #[error("Writing failed: {0}")]
    Writer(#[from] WriterError),

    #[error("Document authoring failed: {0}")]
    Document(#[from] DocumentError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
