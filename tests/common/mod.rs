pub mod fixtures;
pub mod pdf_assertions;

use folio::{FolioError, Manifest, PdfDocument, PdfWriter};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Trailer timestamp used by every fixture, so output is reproducible.
pub const FIXED_TIMESTAMP: i64 = 1700000000000;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Parse raw bytes with lopdf; fails if the xref table or trailer is malformed.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Decompressed content streams of a 1-based page, concatenated.
    pub fn page_content(&self, page_num: u32) -> String {
        pdf_assertions::page_content(&self.doc, page_num)
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Finalize a writer and parse the result.
#[allow(dead_code)]
pub fn finalize_writer(writer: PdfWriter) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    GeneratedPdf::from_bytes(writer.finalize_to_vec()?)
}

/// Create a document and parse the result.
#[allow(dead_code)]
pub fn create_document(document: PdfDocument) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    GeneratedPdf::from_bytes(document.create_to_vec()?)
}

/// Render a manifest given as JSON text and parse the result.
#[allow(dead_code)]
pub fn render_manifest(json: &str) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = Manifest::from_json(json)?.render()?;
    GeneratedPdf::from_bytes(bytes)
}

/// Render a manifest without parsing, for error cases.
#[allow(dead_code)]
pub fn render_manifest_bytes(json: &str) -> Result<Vec<u8>, FolioError> {
    Manifest::from_json(json)?.render()
}
