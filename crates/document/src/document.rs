use crate::codec::deflate;
use crate::content::{GraphicsContent, ImageId, JpegImage, PdfFont, TextContent};
use crate::error::DocumentError;
use crate::standard::{self, PAGES, RESOURCES};
use crate::units::pt;
use folio_types::{DictValue, Dictionary, StreamEncoding};
use folio_writer::{PdfWriter, WriterConfig};
use std::io::Write;

/// Page geometry and text defaults for a [`PdfDocument`].
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentConfig {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    /// Size of the regular font each text object starts with.
    pub font_size: f64,
    pub leading: f64,
    /// zlib level for content and font streams.
    pub compression_level: u32,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        // A4 portrait
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            font_size: 24.0,
            leading: 5.0,
            compression_level: 6,
        }
    }
}

/// A document under construction. Always has at least one open page.
///
/// Drawing operations target the most recently added page. Content is only
/// committed to the writer when the page is closed by [`PdfDocument::add_page`]
/// or [`PdfDocument::create`].
#[derive(Debug)]
pub struct PdfDocument {
    writer: PdfWriter,
    config: DocumentConfig,
    page_count: usize,
    image_count: usize,
    text: TextContent,
    graphics: GraphicsContent,
}

impl PdfDocument {
    pub fn new() -> Result<Self, DocumentError> {
        Self::with_config(DocumentConfig::default(), WriterConfig::default())
    }

    pub fn with_config(
        config: DocumentConfig,
        writer_config: WriterConfig,
    ) -> Result<Self, DocumentError> {
        let mut writer = PdfWriter::with_config(writer_config);
        standard::register(&mut writer);

        let mut document = Self {
            writer,
            config,
            page_count: 0,
            image_count: 0,
            text: TextContent::default(),
            graphics: GraphicsContent::default(),
        };
        document.add_page()?;
        Ok(document)
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// The underlying writer, for objects this layer doesn't model.
    pub fn writer(&mut self) -> &mut PdfWriter {
        &mut self.writer
    }

    /// Closes the current page and opens a new, empty one.
    pub fn add_page(&mut self) -> Result<(), DocumentError> {
        if self.page_count > 0 {
            self.close_page()?;
        }
        self.page_count += 1;
        let n = self.page_count;
        let page_alias = format!("PAGE_{}", n);

        let (width, height) = (self.config.page_width_mm, self.config.page_height_mm);
        let media_box = format!("[ 0 0 {} {} ]", pt(width), pt(height));
        let contents = vec![
            DictValue::reference(format!("TEXT_{}", n)),
            DictValue::reference(format!("GRAPHICS_{}", n)),
        ];
        self.writer.create_object(
            Dictionary::new()
                .with("Type", "/Page")
                .with("Parent", DictValue::reference(PAGES))
                .with("MediaBox", media_box)
                .with("Resources", DictValue::reference(RESOURCES))
                .with("Contents", contents),
            Some(&page_alias),
        );

        let pages = self.writer.dictionary_mut(PAGES)?;
        match pages.get_mut("Kids").and_then(DictValue::as_list_mut) {
            Some(kids) => kids.push(DictValue::reference(page_alias)),
            None => {
                pages.insert("Kids", vec![DictValue::reference(page_alias)]);
            }
        }
        pages.insert("Count", n.to_string());

        log::debug!("Opened page {}", n);
        Ok(())
    }

    /// Shows `text` with its baseline origin at (`x`, `y`) millimetres.
    pub fn place_text(&mut self, text: &str, x: f64, y: f64) {
        self.text.show_text(text, x, y);
    }

    /// Switches font and leading for all following text on this page.
    pub fn change_font(&mut self, font: PdfFont, points: f64) {
        self.text.set_font(font, points);
    }

    pub fn place_line(&mut self, from_x: f64, from_y: f64, to_x: f64, to_y: f64) {
        self.graphics.line(from_x, from_y, to_x, to_y);
    }

    /// Draws a registered image scaled to `width` × `height` millimetres.
    pub fn place_image(
        &mut self,
        image: ImageId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), DocumentError> {
        if image.0 == 0 || image.0 > self.image_count {
            return Err(DocumentError::UnknownImage(image.0));
        }
        self.graphics.image(image, x, y, width, height);
        Ok(())
    }

    /// Embeds a JPEG as an image XObject and adds it to the shared resources.
    pub fn register_image(&mut self, image: JpegImage) -> Result<ImageId, DocumentError> {
        if image.width == 0 || image.height == 0 {
            return Err(DocumentError::InvalidImage(format!(
                "image dimensions must be non-zero, got {}x{}",
                image.width, image.height
            )));
        }
        // SOI marker
        if !image.data.starts_with(&[0xFF, 0xD8]) {
            return Err(DocumentError::InvalidImage(
                "data is not a JPEG stream".to_string(),
            ));
        }

        let id = ImageId(self.image_count + 1);
        let alias = id.alias();
        self.writer.create_stream_object(
            Dictionary::new()
                .with("Type", "/XObject")
                .with("Subtype", "/Image")
                .with("Width", image.width.to_string())
                .with("Height", image.height.to_string())
                .with("ColorSpace", "/DeviceRGB")
                .with("BitsPerComponent", "8"),
            image.data,
            StreamEncoding::Dct,
            Some(&alias),
        )?;

        let name = id.resource_name();
        let reference = DictValue::reference(alias);
        let resources = self.writer.dictionary_mut(RESOURCES)?;
        match resources.get_mut("XObject").and_then(DictValue::as_dict_mut) {
            Some(xobjects) => {
                xobjects.insert(name.as_str(), reference);
            }
            None => {
                resources.insert("XObject", Dictionary::new().with(name.as_str(), reference));
            }
        }

        self.image_count += 1;
        log::debug!(
            "Registered image /{} ({}x{})",
            name,
            image.width,
            image.height
        );
        Ok(id)
    }

    /// Embeds a TrueType program for `font` and links it from the font descriptor.
    pub fn embed_font_program(
        &mut self,
        font: PdfFont,
        program: &[u8],
    ) -> Result<(), DocumentError> {
        let compressed = deflate(program, self.config.compression_level)?;
        self.writer.create_stream_object(
            Dictionary::new().with("Length1", program.len().to_string()),
            compressed,
            StreamEncoding::Flate,
            Some(font.file_alias()),
        )?;
        self.writer
            .dictionary_mut(font.descriptor_alias())?
            .insert("FontFile2", DictValue::reference(font.file_alias()));
        Ok(())
    }

    /// Closes the last page and writes the finished document to `sink`.
    pub fn create<W: Write>(mut self, sink: W) -> Result<W, DocumentError> {
        self.close_page()?;
        log::info!(
            "Writing document with {} page(s), {} object(s)",
            self.page_count,
            self.writer.object_count()
        );
        Ok(self.writer.finalize(sink)?)
    }

    pub fn create_to_vec(self) -> Result<Vec<u8>, DocumentError> {
        self.create(Vec::new())
    }

    fn close_page(&mut self) -> Result<(), DocumentError> {
        let n = self.page_count;
        let (font_size, leading) = (self.config.font_size, self.config.leading);
        let text = std::mem::take(&mut self.text).finish(font_size, leading);
        let graphics = std::mem::take(&mut self.graphics).finish();

        let streams = [
            (format!("TEXT_{}", n), text),
            (format!("GRAPHICS_{}", n), graphics),
        ];
        for (alias, content) in streams {
            let compressed = deflate(content.as_bytes(), self.config.compression_level)?;
            let encoding = StreamEncoding::Flate;
            self.writer
                .create_stream_object(Dictionary::new(), compressed, encoding, Some(&alias))?;
        }
        log::trace!("Closed page {}", n);
        Ok(())
    }
}
