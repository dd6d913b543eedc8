use crate::config::{EmissionMode, WriterConfig};
use crate::error::WriterError;
use crate::layout;
use crate::registry::Registry;
use crate::resolver::Resolver;
use crate::xref::{self, Trailer};
use folio_objects::{PdfObject, ResolvedDictionary, ResolvedObject};
use folio_types::constants::header_bytes;
use folio_types::{DictValue, Dictionary, ObjectNumber, StreamEncoding};
use std::io::Write;

/// Builds a document body object by object and writes it out in one terminal pass.
///
/// Objects may reference aliases that are bound later; references are only
/// resolved by [`PdfWriter::finalize`], which consumes the writer.
#[derive(Debug, Default)]
pub struct PdfWriter {
    config: WriterConfig,
    registry: Registry,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WriterConfig) -> Self {
        Self {
            config,
            registry: Registry::new(),
        }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    pub fn create_object(&mut self, dict: Dictionary, alias: Option<&str>) -> ObjectNumber {
        self.registry.create_object(dict, alias)
    }

    /// Creates an object whose payload is already encoded with `encoding`.
    /// `/Filter` and `/Length` are added to `dict` and must not be supplied.
    pub fn create_stream_object(
        &mut self,
        dict: Dictionary,
        data: Vec<u8>,
        encoding: StreamEncoding,
        alias: Option<&str>,
    ) -> Result<ObjectNumber, WriterError> {
        self.registry
            .create_stream_object(dict, data, encoding, alias)
    }

    pub fn object_by_alias(&self, alias: &str) -> Result<&PdfObject, WriterError> {
        self.registry.object_by_alias(alias)
    }

    pub fn object_by_alias_mut(&mut self, alias: &str) -> Result<&mut PdfObject, WriterError> {
        self.registry.object_by_alias_mut(alias)
    }

    /// Shorthand for the dictionary of the object bound to `alias`.
    pub fn dictionary_mut(&mut self, alias: &str) -> Result<&mut Dictionary, WriterError> {
        Ok(self.registry.object_by_alias_mut(alias)?.dictionary_mut())
    }

    pub fn resolve_value(&self, value: &DictValue) -> Result<String, WriterError> {
        Resolver::new(&self.registry).resolve_value(value)
    }

    pub fn resolve_dictionary(&self, dict: &Dictionary) -> Result<ResolvedDictionary, WriterError> {
        Resolver::new(&self.registry).resolve_dictionary(dict)
    }

    pub fn object_count(&self) -> usize {
        self.registry.len()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolves, lays out and writes the whole document to `sink`, returning it.
    ///
    /// Every alias is resolved before the first byte is written, so an unknown
    /// alias never produces partial output. With [`EmissionMode::Buffered`] the
    /// sink receives a single write; with [`EmissionMode::Streaming`] a sink
    /// error midway leaves a truncated document behind.
    pub fn finalize<W: Write>(self, mut sink: W) -> Result<W, WriterError> {
        let Self { config, registry } = self;

        let header = header_bytes(&config.version);
        let root = registry.number_of(&config.root_alias)?;
        let dictionaries = Resolver::new(&registry).resolve_all()?;
        let mut objects: Vec<ResolvedObject> = registry
            .into_objects()
            .into_iter()
            .zip(dictionaries)
            .map(|(object, dict)| object.into_resolved(dict))
            .collect();

        let encoded = layout::encode_all(&objects);
        let xref_offset = layout::assign_offsets(header.len(), &mut objects, &encoded);

        let xref = xref::cross_reference_table(&objects);
        let trailer = Trailer {
            size: objects.len() + 1,
            root,
            id: (config.timestamp.value(), config.timestamp.value()),
            xref_offset,
        }
        .render();

        log::debug!(
            "Finalizing {} objects, xref at byte {}, {:?} emission",
            objects.len(),
            xref_offset,
            config.emission
        );

        match config.emission {
            EmissionMode::Buffered => {
                let total = xref_offset as usize + xref.len() + trailer.len();
                let mut document = Vec::with_capacity(total);
                document.extend_from_slice(&header);
                for bytes in &encoded {
                    document.extend_from_slice(bytes);
                }
                document.extend_from_slice(xref.as_bytes());
                document.extend_from_slice(trailer.as_bytes());
                sink.write_all(&document)?;
            }
            EmissionMode::Streaming => {
                sink.write_all(&header)?;
                for bytes in &encoded {
                    sink.write_all(bytes)?;
                }
                sink.write_all(xref.as_bytes())?;
                sink.write_all(trailer.as_bytes())?;
            }
        }
        sink.flush()?;
        Ok(sink)
    }

    /// Finalizes into a fresh in-memory buffer.
    pub fn finalize_to_vec(self) -> Result<Vec<u8>, WriterError> {
        self.finalize(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn fixed_writer() -> PdfWriter {
        PdfWriter::with_config(WriterConfig::default().with_fixed_timestamp(1700000000000))
    }

    fn catalog_and_pages(writer: &mut PdfWriter) {
        writer.create_object(
            Dictionary::new()
                .with("Type", "/Catalog")
                .with("Pages", DictValue::reference("PAGES")),
            Some("CATALOG"),
        );
        writer.create_object(
            Dictionary::new()
                .with("Type", "/Pages")
                .with("Kids", DictValue::List(vec![]))
                .with("Count", "0"),
            Some("PAGES"),
        );
    }

    #[test]
    fn test_catalog_head_resolves_forward_reference() {
        let mut writer = fixed_writer();
        catalog_and_pages(&mut writer);

        let catalog = writer.object_by_alias("CATALOG").unwrap();
        let dict = writer.resolve_dictionary(catalog.dictionary()).unwrap();
        assert_eq!(dict.get("Pages"), Some("2 0 R"));

        let head = catalog.clone().into_resolved(dict).encode_head();
        assert_eq!(head, b"1 0 obj\n<<\n/Type /Catalog/Pages 2 0 R\n>>\n");
    }

    #[test]
    fn test_finalize_writes_the_exact_document() {
        let mut writer = fixed_writer();
        catalog_and_pages(&mut writer);

        let bytes = writer.finalize_to_vec().unwrap();

        let obj1 = "1 0 obj\n<<\n/Type /Catalog/Pages 2 0 R\n>>\nendobj\n";
        let obj2 = "2 0 obj\n<<\n/Type /Pages/Kids [ ]/Count 0\n>>\nendobj\n";
        let off1 = 15;
        let off2 = off1 + obj1.len();
        let xref_at = off2 + obj2.len();

        let mut expected = header_bytes("1.4");
        expected.extend_from_slice(obj1.as_bytes());
        expected.extend_from_slice(obj2.as_bytes());
        expected.extend_from_slice(
            format!(
                "xref\n0 3\n0000000000 65535 f \n{:010} 00000 n \n{:010} 00000 n \n",
                off1, off2
            )
            .as_bytes(),
        );
        expected.extend_from_slice(
            b"trailer\n<<\n/Size 3/Root 1 0 R/ID [(1700000000000)(1700000000000)]\n>>\n",
        );
        expected.extend_from_slice(format!("startxref\n{}\n%%EOF", xref_at).as_bytes());
        assert_eq!(
            String::from_utf8_lossy(&bytes),
            String::from_utf8_lossy(&expected)
        );
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_offsets_point_at_object_headers() {
        let mut writer = fixed_writer();
        catalog_and_pages(&mut writer);
        let data = b"BT ET".to_vec();
        let encoding = StreamEncoding::Flate;
        writer
            .create_stream_object(Dictionary::new(), data, encoding, Some("TEXT"))
            .unwrap();
        let bytes = writer.finalize_to_vec().unwrap();
        let header_len = header_bytes("1.4").len();
        // Everything after the binary header line is ASCII here.
        let body = std::str::from_utf8(&bytes[header_len..]).unwrap();
        let at = |offset: usize| body.get(offset - header_len..).unwrap_or_default();

        let xref_at: usize = body.lines().rev().nth(1).unwrap().parse().unwrap();
        assert!(at(xref_at).starts_with("xref\n0 4\n"));
        for (i, line) in at(xref_at).lines().skip(3).take(3).enumerate() {
            let offset: usize = line[..10].parse().unwrap();
            assert!(at(offset).starts_with(&format!("{} 0 obj\n", i + 1)));
        }
    }

    #[test]
    fn test_streaming_and_buffered_emit_identical_bytes() {
        let build = |emission| {
            let config = WriterConfig::default()
                .with_fixed_timestamp(42)
                .with_emission(emission);
            let mut writer = PdfWriter::with_config(config);
            catalog_and_pages(&mut writer);
            let data = vec![0xFF, 0x00, 0x7F];
            writer
                .create_stream_object(Dictionary::new(), data, StreamEncoding::Dct, None)
                .unwrap();
            writer.finalize_to_vec().unwrap()
        };
        assert_eq!(
            build(EmissionMode::Buffered),
            build(EmissionMode::Streaming)
        );
    }

    #[test]
    fn test_unresolved_alias_aborts_before_writing() {
        let mut writer = fixed_writer();
        catalog_and_pages(&mut writer);
        let parent = DictValue::reference("NOPE");
        writer.create_object(Dictionary::new().with("Parent", parent), None);

        let mut sink = Vec::new();
        let err = writer.finalize(&mut sink).unwrap_err();
        let WriterError::UnresolvedReference { alias } = &err else {
            panic!("expected unresolved reference, got {:?}", err);
        };
        assert_eq!(alias.as_str(), "NOPE");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_missing_root_alias_is_an_unresolved_reference() {
        let mut writer = PdfWriter::with_config(WriterConfig::default().with_root_alias("ROOT"));
        writer.create_object(Dictionary::new(), Some("CATALOG"));

        match writer.finalize_to_vec() {
            Err(WriterError::UnresolvedReference { alias }) => {
                assert_eq!(alias.as_str(), "ROOT")
            }
            other => panic!("expected unresolved root, got {:?}", other.map(|b| b.len())),
        }
    }

    #[test]
    fn test_mutations_before_finalize_are_written() {
        let mut writer = fixed_writer();
        catalog_and_pages(&mut writer);
        writer.create_object(Dictionary::new().with("Type", "/Page"), Some("PAGE_1"));

        let pages = writer.dictionary_mut("PAGES").unwrap();
        if let Some(kids) = pages.get_mut("Kids").and_then(DictValue::as_list_mut) {
            kids.push(DictValue::reference("PAGE_1"));
        }
        pages.insert("Count", "1");

        let bytes = writer.finalize_to_vec().unwrap();
        let text = String::from_utf8_lossy(&bytes);
        let pages = "2 0 obj\n<<\n/Type /Pages/Kids [ 3 0 R ]/Count 1\n>>\nendobj\n";
        assert!(text.contains(pages));
    }

    #[derive(Debug)]
    struct FailingSink {
        writes: usize,
        fail_after: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.writes == self.fail_after {
                return Err(io::Error::other("disk full"));
            }
            self.writes += 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_errors_propagate() {
        let emission = EmissionMode::Streaming;
        let mut writer = PdfWriter::with_config(WriterConfig::default().with_emission(emission));
        catalog_and_pages(&mut writer);
        let sink = FailingSink {
            writes: 0,
            fail_after: 2,
        };
        let err = writer.finalize(sink).unwrap_err();
        assert!(matches!(err, WriterError::Io(_)));
    }
}
