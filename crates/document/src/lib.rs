//! A small page-oriented authoring layer over [`folio_writer::PdfWriter`].
//!
//! [`PdfDocument`] registers the boilerplate objects every document needs
//! (catalog, page tree, resources, fonts), then collects text and graphics
//! operators per page in millimetre coordinates. Content streams are
//! Flate-compressed and handed to the writer when a page is closed.

pub mod codec;
pub mod content;
mod document;
mod error;
pub mod standard;
pub mod units;

pub use content::{ImageId, JpegImage, PdfFont};
pub use document::{DocumentConfig, PdfDocument};
pub use error::DocumentError;
