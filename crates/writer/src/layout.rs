//! Byte layout of the document body.
//!
//! Layout runs in two phases. [`encode_all`] turns every resolved object into
//! its own immutable buffer; each buffer depends only on its object, so this
//! phase may run in parallel. [`LayoutTracker`] then walks the buffers in
//! object-number order and assigns prefix-sum offsets, which is inherently
//! sequential.

use folio_objects::ResolvedObject;

/// Encodes every object to the exact bytes it will occupy in the output.
#[cfg(not(feature = "parallel-encode"))]
pub fn encode_all(objects: &[ResolvedObject]) -> Vec<Vec<u8>> {
    objects.iter().map(ResolvedObject::encode).collect()
}

/// Encodes every object to the exact bytes it will occupy in the output.
#[cfg(feature = "parallel-encode")]
pub fn encode_all(objects: &[ResolvedObject]) -> Vec<Vec<u8>> {
    use rayon::prelude::*;
    objects.par_iter().map(ResolvedObject::encode).collect()
}

/// A running byte cursor over the output.
#[derive(Debug, Clone, Copy)]
pub struct LayoutTracker {
    cursor: u64,
}

impl LayoutTracker {
    /// Starts the cursor just past the header.
    pub fn new(header_len: usize) -> Self {
        Self {
            cursor: header_len as u64,
        }
    }

    /// Records `object` at the current cursor and advances past `encoded_len` bytes.
    pub fn place(&mut self, object: &mut ResolvedObject, encoded_len: usize) {
        object.set_byte_offset(self.cursor);
        self.cursor += encoded_len as u64;
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }
}

/// Assigns byte offsets to `objects` from their `encoded` buffers, in order.
///
/// Returns the offset immediately after the last object, where the
/// cross-reference table starts.
pub fn assign_offsets(
    header_len: usize,
    objects: &mut [ResolvedObject],
    encoded: &[Vec<u8>],
) -> u64 {
    debug_assert_eq!(objects.len(), encoded.len());
    let mut tracker = LayoutTracker::new(header_len);
    for (object, bytes) in objects.iter_mut().zip(encoded) {
        tracker.place(object, bytes.len());
    }
    tracker.cursor()
}
