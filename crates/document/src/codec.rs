//! Flate compression for content and font streams.

use flate2::Compression;
use flate2::write::ZlibEncoder;
use std::io::{self, Write};

/// zlib-compresses `data` at `level` (0–9), the format `/FlateDecode` expects.
pub fn deflate(data: &[u8], level: u32) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level.min(9)));
    encoder.write_all(data)?;
    encoder.finish()
}
