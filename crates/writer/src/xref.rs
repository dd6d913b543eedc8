//! Cross-reference table and trailer.

use folio_objects::ResolvedObject;
use folio_types::ObjectNumber;
use folio_types::constants::{FREE_ENTRY, GENERATION};
use std::fmt::Write as _;

/// Builds the classic `xref` section: one subsection starting at object 0 with
/// the free-list head followed by one in-use entry per object.
///
/// Every entry is exactly 20 bytes. An object that was never placed by the
/// layout pass is written with offset 0 and logged; the file stays readable
/// sequentially but that object can't be found by random access.
pub fn cross_reference_table(objects: &[ResolvedObject]) -> String {
    let mut xref = String::with_capacity(32 + (objects.len() + 1) * 20);
    let _ = writeln!(xref, "xref");
    let _ = writeln!(xref, "0 {}", objects.len() + 1);
    let _ = writeln!(xref, "{}", FREE_ENTRY);
    for object in objects {
        let offset = object.byte_offset().unwrap_or_else(|| {
            log::warn!(
                "Object {} has no byte offset; writing 0 into the xref table",
                object.number()
            );
            0
        });
        let _ = writeln!(xref, "{:010} {:05} n ", offset, GENERATION);
    }
    xref
}

/// The document trailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trailer {
    /// Number of xref entries, including the free entry for object 0.
    pub size: usize,
    pub root: ObjectNumber,
    /// The two halves of the `/ID` array.
    pub id: (i64, i64),
    /// Byte offset of the `xref` keyword.
    pub xref_offset: u64,
}

impl Trailer {
    pub fn render(&self) -> String {
        format!(
            "trailer\n<<\n/Size {}/Root {}/ID [({})({})]\n>>\nstartxref\n{}\n%%EOF",
            self.size,
            self.root.reference(),
            self.id.0,
            self.id.1,
            self.xref_offset
        )
    }
}
