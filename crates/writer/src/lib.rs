//! The document object-graph writer.
//!
//! Callers register objects with a [`PdfWriter`], optionally under an alias, and
//! refer to each other through [`folio_types::DictValue::Reference`]. Nothing is
//! resolved until [`PdfWriter::finalize`], so an object may reference one that is
//! created later. Finalize then:
//! - resolves every dictionary in one pass ([`resolver`])
//! - encodes each object to its own buffer and folds the buffer lengths into
//!   byte offsets ([`layout`])
//! - writes header, objects, cross-reference table and trailer ([`xref`])

pub mod config;
mod error;
pub mod layout;
pub mod registry;
pub mod resolver;
mod writer;
pub mod xref;

pub use config::{EmissionMode, TrailerTimestamp, WriterConfig};
pub use error::WriterError;
pub use registry::Registry;
pub use writer::PdfWriter;
