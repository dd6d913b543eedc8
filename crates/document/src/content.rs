//! Content stream operators for a single page.
//!
//! Coordinates are millimetres with the origin at the bottom-left corner of
//! the page; every operator converts them with [`crate::units::pt`].

use crate::standard::{FIRST_CHAR, LAST_CHAR};
use crate::units::{format_number, pt};
use std::fmt::Write as _;

/// The two fonts registered in every document's resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PdfFont {
    Regular,
    Bold,
}

impl PdfFont {
    /// Resource name used by the `Tf` operator, e.g. `F1`.
    pub fn resource_name(self) -> &'static str {
        match self {
            PdfFont::Regular => "F1",
            PdfFont::Bold => "F2",
        }
    }

    pub(crate) fn alias(self) -> &'static str {
        match self {
            PdfFont::Regular => "FONT_REGULAR",
            PdfFont::Bold => "FONT_BOLD",
        }
    }

    pub(crate) fn descriptor_alias(self) -> &'static str {
        match self {
            PdfFont::Regular => "FONT_REGULAR_DESCRIPTOR",
            PdfFont::Bold => "FONT_BOLD_DESCRIPTOR",
        }
    }

    pub(crate) fn file_alias(self) -> &'static str {
        match self {
            PdfFont::Regular => "FONT_REGULAR_FILE",
            PdfFont::Bold => "FONT_BOLD_FILE",
        }
    }
}

/// Handle to an image registered with a document; drawn as `/Im<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub(crate) usize);

impl ImageId {
    /// Ids are 1-based in registration order.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn resource_name(self) -> String {
        format!("Im{}", self.0)
    }

    pub(crate) fn alias(self) -> String {
        format!("IMAGE_{}", self.0)
    }
}

/// A baseline JPEG, embedded as-is with `/DCTDecode`.
#[derive(Debug, Clone)]
pub struct JpegImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl JpegImage {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }
}

/// Windows-1252 assignments for codes 0x80..=0x9F; `None` marks unassigned codes.
const WINANSI_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

/// The `/WinAnsiEncoding` code of `ch`, if it has one.
pub fn winansi_code(ch: char) -> Option<u8> {
    let code = u32::from(ch);
    match code {
        0x20..=0x7E | 0xA0..=0xFF => u8::try_from(code).ok(),
        0x00..=0x1F | 0x7F..=0x9F => None,
        _ => WINANSI_HIGH
            .iter()
            .position(|entry| *entry == Some(ch))
            .and_then(|index| u8::try_from(0x80 + index).ok()),
    }
}

/// Encodes `text` for a hex string shown with one of the standard fonts.
///
/// Characters are mapped through `/WinAnsiEncoding`. Those without a code,
/// or whose code lies outside the fonts' `FirstChar..=LastChar` width table,
/// are replaced with `?`.
pub fn hex_text(text: &str) -> String {
    let mut hex = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        let code = match winansi_code(ch) {
            Some(code) if (FIRST_CHAR..=LAST_CHAR).contains(&code) => code,
            _ => {
                log::warn!(
                    "Character {:?} has no glyph in the standard fonts, replacing with '?'",
                    ch
                );
                b'?'
            }
        };
        let _ = write!(hex, "{:02x}", code);
    }
    hex
}

/// Operators inside the page's `BT … ET` text object.
#[derive(Debug, Default, Clone)]
pub struct TextContent {
    ops: String,
}

impl TextContent {
    pub fn show_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = write!(
            self.ops,
            "1 0 0 1 {} {} Tm <{}> Tj ",
            pt(x),
            pt(y),
            hex_text(text)
        );
    }

    pub fn set_font(&mut self, font: PdfFont, points: f64) {
        let name = font.resource_name();
        let size = format_number(points);
        let _ = write!(self.ops, "/{} {} Tf {} TL ", name, size, size);
    }

    /// The complete text object, opened with the document's default font.
    pub fn finish(self, default_font_size: f64, leading: f64) -> String {
        format!(
            "BT /{} {} Tf {} TL {}ET",
            PdfFont::Regular.resource_name(),
            format_number(default_font_size),
            format_number(leading),
            self.ops
        )
    }
}

/// Path and image operators, wrapped in a saved graphics state.
#[derive(Debug, Default, Clone)]
pub struct GraphicsContent {
    ops: String,
}

impl GraphicsContent {
    pub fn line(&mut self, from_x: f64, from_y: f64, to_x: f64, to_y: f64) {
        let _ = write!(
            self.ops,
            "{} {} m {} {} l S ",
            pt(from_x),
            pt(from_y),
            pt(to_x),
            pt(to_y)
        );
    }

    pub fn image(&mut self, image: ImageId, x: f64, y: f64, width: f64, height: f64) {
        let _ = write!(
            self.ops,
            "q {} 0 0 {} {} {} cm /{} Do Q ",
            pt(width),
            pt(height),
            pt(x),
            pt(y),
            image.resource_name()
        );
    }

    pub fn finish(self) -> String {
        format!("q {}Q", self.ops)
    }
}
