#![allow(dead_code)]

use flate2::read::ZlibDecoder;
use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};
use std::io::Read;

/// Decompresses `content`, or returns it unchanged if it isn't zlib data.
pub fn inflate(content: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    match ZlibDecoder::new(content).read_to_end(&mut out) {
        Ok(_) => out,
        Err(_) => content.to_vec(),
    }
}

/// Concatenated, decompressed content streams of a 1-based page.
pub fn page_content(doc: &LopdfDocument, page_num: u32) -> String {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return String::new();
    };
    let mut content = String::new();
    for id in doc.get_page_contents(*page_id) {
        if let Ok(stream) = doc.get_object(id).and_then(Object::as_stream) {
            content.push_str(&String::from_utf8_lossy(&inflate(&stream.content)));
            content.push('\n');
        }
    }
    content
}

pub fn catalog_id(doc: &LopdfDocument) -> Option<ObjectId> {
    doc.trailer.get(b"Root").ok()?.as_reference().ok()
}

pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_object(*page_id).ok()?.as_dict().ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
    let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
    Some((width, height))
}

fn has_type(dict: &Dictionary, expected: &[u8]) -> bool {
    dict.get(b"Type")
        .and_then(Object::as_name)
        .is_ok_and(|name| name == expected)
}

/// `BaseFont` names of every font dictionary in the file.
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts: Vec<String> = doc
        .objects
        .values()
        .filter_map(|object| object.as_dict().ok())
        .filter(|dict| has_type(dict, b"Font"))
        .filter_map(|dict| dict.get(b"BaseFont").and_then(Object::as_name).ok())
        .map(|name| String::from_utf8_lossy(name).to_string())
        .collect();
    fonts.sort();
    fonts
}

/// Hex string operand `Tj` expects for Latin-1 `text`.
pub fn hex(text: &str) -> String {
    text.chars()
        .map(|ch| format!("{:02x}", ch as u32))
        .collect()
}

/// Assert that a page's decompressed content contains `$text` as a hex string
#[macro_export]
macro_rules! assert_page_shows_text {
    ($pdf:expr, $page:expr, $text:expr) => {
        let content = $pdf.page_content($page);
        let needle = format!("<{}> Tj", $crate::common::pdf_assertions::hex($text));
        assert!(
            content.contains(&needle),
            "page {} should show '{}', but its content was:\n{}",
            $page,
            $text,
            content
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}
