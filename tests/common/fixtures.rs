#![allow(dead_code)]

use super::FIXED_TIMESTAMP;
use folio::document::DocumentConfig;
use folio::{DictValue, Dictionary, PdfDocument, PdfWriter, WriterConfig};
use serde_json::{Value, json};

pub fn fixed_config() -> WriterConfig {
    WriterConfig::default().with_fixed_timestamp(FIXED_TIMESTAMP)
}

/// A writer holding a catalog and an empty page tree.
pub fn minimal_writer() -> PdfWriter {
    let mut writer = PdfWriter::with_config(fixed_config());
    writer.create_object(
        Dictionary::new()
            .with("Type", "/Catalog")
            .with("Pages", DictValue::reference("PAGES")),
        Some("CATALOG"),
    );
    writer.create_object(
        Dictionary::new()
            .with("Type", "/Pages")
            .with("Kids", DictValue::List(Vec::new()))
            .with("Count", "0"),
        Some("PAGES"),
    );
    writer
}

/// Adds a page under `PAGES` without contents, registered before or after
/// its parent depending on call order.
pub fn add_bare_page(writer: &mut PdfWriter, alias: &str) {
    writer.create_object(
        Dictionary::new()
            .with("Type", "/Page")
            .with("Parent", DictValue::reference("PAGES"))
            .with("MediaBox", "[ 0 0 595 842 ]"),
        Some(alias),
    );
    let pages = writer.dictionary_mut("PAGES").expect("PAGES is registered");
    if let Some(kids) = pages.get_mut("Kids").and_then(DictValue::as_list_mut) {
        kids.push(DictValue::reference(alias));
    }
    let count = match pages.get("Kids") {
        Some(DictValue::List(kids)) => kids.len(),
        _ => 0,
    };
    pages.insert("Count", count.to_string());
}

pub fn fixed_document() -> PdfDocument {
    PdfDocument::with_config(DocumentConfig::default(), fixed_config()).expect("document setup")
}

/// A manifest for a one-page document whose page references its content
/// stream before the stream is declared.
pub fn one_page_manifest(text: &str) -> Value {
    json!({
        "config": { "timestamp": FIXED_TIMESTAMP },
        "objects": [
            { "alias": "CATALOG", "dict": { "Type": "/Catalog", "Pages": { "ref": "PAGES" } } },
            { "alias": "PAGES", "dict": {
                "Type": "/Pages",
                "Kids": [{ "ref": "PAGE_1" }],
                "Count": 1
            } },
            { "alias": "PAGE_1", "dict": {
                "Type": "/Page",
                "Parent": { "ref": "PAGES" },
                "MediaBox": "[ 0 0 595 842 ]",
                "Contents": { "ref": "CONTENT_1" }
            } },
            { "alias": "CONTENT_1", "dict": {}, "stream": { "text": text, "encoding": "flate" } }
        ]
    })
}

/// A baseline JPEG header followed by EOI; enough for an XObject round trip.
pub fn tiny_jpeg() -> Vec<u8> {
    vec![
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0xFF, 0xD9,
    ]
}
