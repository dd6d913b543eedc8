use folio_objects::ObjectError;
use folio_types::Alias;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Unresolved reference '{alias}': no object was registered under this alias")]
    UnresolvedReference { alias: Alias },

    #[error("Object error: {0}")]
    Object(#[from] ObjectError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
