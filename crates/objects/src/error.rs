use folio_types::ObjectNumber;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    #[error("Object {object} has an unresolved value under /{key}")]
    UnresolvedValue {
        object: ObjectNumber,
        key: String,
    },

    #[error("Stream object {object} must not carry a /{key} entry")]
    ReservedStreamKey {
        object: ObjectNumber,
        key: String,
    },
}
