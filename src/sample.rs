//! A short demonstration document built with the authoring layer.

use folio_document::{DocumentConfig, DocumentError, PdfDocument, PdfFont};
use folio_writer::WriterConfig;

const INTRODUCTION: [&str; 3] = [
    "Objects are registered by alias and resolved on finalize.",
    "Forward references are fine: this page points at its content streams",
    "before they exist.",
];

const ENCODING_NOTE: &str =
    "Text is encoded as WinAnsi; characters beyond the width table print as ?.";

/// Two A4 pages with headings, body text and a rule under each heading.
pub fn sample_document(writer_config: WriterConfig) -> Result<PdfDocument, DocumentError> {
    let mut document = PdfDocument::with_config(DocumentConfig::default(), writer_config)?;

    document.change_font(PdfFont::Bold, 24.0);
    document.place_text("Folio", 20.0, 270.0);
    document.place_line(20.0, 265.0, 190.0, 265.0);
    document.change_font(PdfFont::Regular, 12.0);
    for (line, text) in INTRODUCTION.iter().enumerate() {
        document.place_text(text, 20.0, 250.0 - 7.0 * line as f64);
    }

    document.add_page()?;
    document.change_font(PdfFont::Bold, 18.0);
    document.place_text("Second page", 20.0, 270.0);
    document.place_line(20.0, 265.0, 190.0, 265.0);
    document.change_font(PdfFont::Regular, 12.0);
    document.place_text(ENCODING_NOTE, 20.0, 250.0);

    Ok(document)
}
