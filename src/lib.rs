//! Folio writes PDF documents from an in-memory object graph.
//!
//! The work is split across the workspace crates, re-exported here:
//! - [`types`]: object numbers, aliases and the unresolved value tree
//! - [`objects`]: objects, stream objects and their byte encoding
//! - [`writer`]: the registry, reference resolution and the terminal finalize pass
//! - [`document`]: pages, text, lines and images in millimetre coordinates
//!
//! This crate adds the JSON [`manifest`] format used by the `folio` binary.

pub mod error;
pub mod manifest;
pub mod sample;

pub use folio_document as document;
pub use folio_objects as objects;
pub use folio_types as types;
pub use folio_writer as writer;

pub use error::FolioError;
pub use folio_document::{PdfDocument, PdfFont};
pub use folio_types::{DictValue, Dictionary, StreamEncoding};
pub use folio_writer::{EmissionMode, PdfWriter, WriterConfig};
pub use manifest::Manifest;
