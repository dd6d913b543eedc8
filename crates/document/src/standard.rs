//! Boilerplate objects registered at the start of every document.
//!
//! Registration order fixes their object numbers: the catalog is always
//! object 1 and the page tree object 2.

use crate::content::PdfFont;
use folio_types::{DictValue, Dictionary};
use folio_writer::PdfWriter;

pub const CATALOG: &str = "CATALOG";
pub const PAGES: &str = "PAGES";
pub const OUTPUT_INTENT: &str = "OUTPUT_INTENT";
pub const STRUCT_TREE_ROOT: &str = "STRUCT_TREE_ROOT";
pub const RESOURCES: &str = "RESOURCES";

/// First and last character codes covered by the fonts' `Widths` arrays.
pub(crate) const FIRST_CHAR: u8 = 32;
pub(crate) const LAST_CHAR: u8 = 125;

/// Glyph widths of Source Sans 3 Regular for codes 32..=125.
const REGULAR_WIDTHS: [u16; 94] = [
    200, 289, 426, 497, 497, 824, 609, 249, 303, 303, 418, 497, 249, 311, 249, 350, 497, 497, 497,
    497, 497, 497, 497, 497, 497, 497, 249, 249, 497, 497, 497, 425, 847, 544, 588, 571, 615, 527,
    494, 617, 652, 263, 480, 579, 486, 727, 647, 664, 566, 664, 569, 534, 536, 645, 515, 786, 513,
    476, 539, 303, 350, 303, 497, 500, 542, 504, 553, 456, 555, 496, 292, 504, 544, 246, 247, 495,
    255, 829, 547, 542, 555, 555, 347, 419, 338, 544, 467, 719, 446, 467, 425, 303, 241, 303,
];

/// Glyph widths of Source Sans 3 Bold for codes 32..=125.
const BOLD_WIDTHS: [u16; 94] = [
    200, 340, 537, 528, 528, 857, 667, 300, 344, 344, 457, 528, 300, 332, 300, 339, 528, 528, 528,
    528, 528, 528, 528, 528, 528, 528, 300, 300, 528, 528, 528, 463, 902, 573, 605, 582, 635, 548,
    524, 638, 674, 301, 509, 614, 518, 762, 665, 684, 596, 684, 613, 556, 556, 665, 556, 813, 567,
    525, 541, 344, 339, 344, 528, 500, 555, 527, 573, 467, 573, 518, 341, 534, 571, 276, 278, 548,
    286, 857, 572, 555, 573, 573, 398, 443, 383, 568, 523, 776, 514, 521, 460, 344, 268, 344,
];

fn widths_array(widths: &[u16]) -> String {
    let mut out = String::from("[ ");
    for width in widths {
        out.push_str(itoa::Buffer::new().format(*width));
        out.push(' ');
    }
    out.push(']');
    out
}

fn font_name(font: PdfFont) -> &'static str {
    match font {
        PdfFont::Regular => "/SourceSans3-Regular",
        PdfFont::Bold => "/SourceSans3-Bold",
    }
}

fn font_dictionary(font: PdfFont) -> Dictionary {
    let widths = match font {
        PdfFont::Regular => &REGULAR_WIDTHS,
        PdfFont::Bold => &BOLD_WIDTHS,
    };
    let descriptor = DictValue::reference(font.descriptor_alias());
    Dictionary::new()
        .with("Type", "/Font")
        .with("Subtype", "/TrueType")
        .with("FontDescriptor", descriptor)
        .with("Name", format!("/{}", font.resource_name()))
        .with("BaseFont", font_name(font))
        .with("Encoding", "/WinAnsiEncoding")
        .with("FirstChar", FIRST_CHAR.to_string())
        .with("LastChar", LAST_CHAR.to_string())
        .with("Widths", widths_array(widths))
}

fn font_descriptor(font: PdfFont) -> Dictionary {
    Dictionary::new()
        .with("Type", "/FontDescriptor")
        .with("FontName", font_name(font))
        .with("Subtype", "/TrueType")
        // Nonsymbolic
        .with("Flags", "32")
}

/// Registers catalog, page tree, output intent, structure tree root,
/// resources, and the regular and bold fonts with their descriptors.
pub fn register(writer: &mut PdfWriter) {
    let mut fonts = Dictionary::new();
    for font in [PdfFont::Regular, PdfFont::Bold] {
        fonts.insert(font.resource_name(), DictValue::reference(font.alias()));
    }
    writer.create_object(
        Dictionary::new()
            .with("Type", "/Catalog")
            .with("Pages", DictValue::reference(PAGES))
            .with("PageLayout", "/SinglePage")
            .with("MarkInfo", "<< /Marked true >>")
            .with("OutputIntents", vec![DictValue::reference(OUTPUT_INTENT)])
            .with("StructTreeRoot", DictValue::reference(STRUCT_TREE_ROOT)),
        Some(CATALOG),
    );
    writer.create_object(
        Dictionary::new()
            .with("Type", "/Pages")
            .with("Kids", DictValue::List(Vec::new()))
            .with("Count", "0"),
        Some(PAGES),
    );
    writer.create_object(
        Dictionary::new()
            .with("Type", "/OutputIntent")
            .with("S", "/GTS_PDFA1")
            .with("OutputConditionIdentifier", "(sRGB)")
            .with("Info", "(sRGB)"),
        Some(OUTPUT_INTENT),
    );
    writer.create_object(
        Dictionary::new().with("Type", "/StructTreeRoot").with("K", "[ null ]"),
        Some(STRUCT_TREE_ROOT),
    );
    writer.create_object(
        Dictionary::new()
            .with("ProcSet", "[ /PDF /Text /ImageC ]")
            .with("XObject", Dictionary::new())
            .with("Font", fonts),
        Some(RESOURCES),
    );
    for font in [PdfFont::Regular, PdfFont::Bold] {
        writer.create_object(font_dictionary(font), Some(font.alias()));
        writer.create_object(font_descriptor(font), Some(font.descriptor_alias()));
    }
}
