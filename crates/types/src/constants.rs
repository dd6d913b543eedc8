use serde::{Deserialize, Serialize};
use std::fmt;

/// Generation number used for every object; this writer never produces updates.
pub const GENERATION: u16 = 0;

/// Cross-reference entry for object 0, the head of the free list.
pub const FREE_ENTRY: &str = "0000000000 65535 f ";

/// Comment line of high-bit bytes following the version line, signalling binary content.
pub const BINARY_MARKER: [u8; 4] = [0xE2, 0xE3, 0xCF, 0xD3];

pub const DEFAULT_VERSION: &str = "1.4";

/// Builds the fixed header: `%PDF-<version>\n%âãÏÓ\n`.
pub fn header_bytes(version: &str) -> Vec<u8> {
    let mut header = Vec::with_capacity(16);
    header.extend_from_slice(format!("%PDF-{}\n%", version).as_bytes());
    header.extend_from_slice(&BINARY_MARKER);
    header.push(b'\n');
    header
}

/// Filter applied to the payload of a stream object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamEncoding {
    /// zlib/deflate compressed data.
    Flate,
    /// JPEG baseline image data.
    Dct,
}

impl StreamEncoding {
    /// The filter name as written in a stream dictionary.
    pub fn filter_name(self) -> &'static str {
        match self {
            StreamEncoding::Flate => "/FlateDecode",
            StreamEncoding::Dct => "/DCTDecode",
        }
    }
}

impl fmt::Display for StreamEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.filter_name())
    }
}
