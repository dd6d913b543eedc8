//! Indirect objects and their byte-level encoding.
//!
//! This crate provides the two object shapes a document body is made of:
//! - [`PdfObject`], a numbered dictionary still holding unresolved values
//! - [`ResolvedObject`], the same object after every reference has been turned
//!   into indirect-reference syntax, which is the only form that can be encoded
//!
//! Stream objects are the same types with an attached [`StreamPayload`].

mod error;
mod object;
mod resolved;

pub use error::ObjectError;
pub use object::{PdfObject, ResolvedObject, StreamPayload};
pub use resolved::ResolvedDictionary;
