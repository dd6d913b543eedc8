//! JSON manifests describing a document object by object.
//!
//! ```json
//! {
//!   "config": { "timestamp": 1700000000000 },
//!   "objects": [
//!     { "alias": "CATALOG", "dict": { "Type": "/Catalog", "Pages": { "ref": "PAGES" } } },
//!     { "alias": "PAGES", "dict": { "Type": "/Pages", "Kids": [], "Count": 0 } },
//!     { "dict": {}, "stream": { "text": "BT ET", "encoding": "flate" } }
//!   ]
//! }
//! ```
//!
//! Dictionary values map onto [`DictValue`]: strings are literals, an object
//! with a single `"ref"` key is a reference, arrays are lists and any other
//! object is a nested dictionary. Numbers, booleans and `null` are written as
//! their JSON text. Key order is preserved.

use crate::error::FolioError;
use folio_document::codec::deflate;
use folio_types::{DictValue, Dictionary, StreamEncoding};
use folio_writer::{EmissionMode, PdfWriter, WriterConfig};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

const REFERENCE_KEY: &str = "ref";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub config: ManifestConfig,
    pub objects: Vec<ManifestObject>,
}

/// Writer settings; anything left out keeps the [`WriterConfig`] default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestConfig {
    pub version: Option<String>,
    pub root: Option<String>,
    /// Fixed trailer timestamp in milliseconds.
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub streaming: bool,
    /// zlib level for `flate` streams.
    pub compression_level: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestObject {
    pub alias: Option<String>,
    #[serde(default)]
    pub dict: Map<String, Value>,
    pub stream: Option<ManifestStream>,
}

/// A stream payload given as exactly one of `data` (byte array), `text` or `hex`.
///
/// `flate` payloads are compressed on load; `dct` payloads are embedded as given.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestStream {
    pub data: Option<Vec<u8>>,
    pub text: Option<String>,
    pub hex: Option<String>,
    pub encoding: StreamEncoding,
}

impl ManifestStream {
    fn payload(&self) -> Result<Vec<u8>, FolioError> {
        match (&self.data, &self.text, &self.hex) {
            (Some(data), None, None) => Ok(data.clone()),
            (None, Some(text), None) => Ok(text.as_bytes().to_vec()),
            (None, None, Some(hex)) => decode_hex(hex),
            _ => Err(FolioError::Manifest(
                "stream needs exactly one of \"data\", \"text\" or \"hex\"".to_string(),
            )),
        }
    }
}

fn decode_hex(hex: &str) -> Result<Vec<u8>, FolioError> {
    let digits: Vec<u8> = hex.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(FolioError::Manifest(
            "hex payload has an odd number of digits".to_string(),
        ));
    }
    digits
        .chunks(2)
        .map(|pair| {
            let digits = String::from_utf8_lossy(pair);
            let invalid = || FolioError::Manifest(format!("invalid hex digits {:?}", digits));
            u8::from_str_radix(&digits, 16).map_err(|_| invalid())
        })
        .collect()
}

/// Converts one JSON value into an unresolved dictionary value.
pub fn dict_value(value: &Value) -> DictValue {
    match value {
        Value::String(text) => DictValue::Literal(text.clone()),
        Value::Number(number) => DictValue::Literal(number.to_string()),
        Value::Bool(flag) => DictValue::Literal(flag.to_string()),
        Value::Null => DictValue::literal("null"),
        Value::Array(items) => DictValue::List(items.iter().map(dict_value).collect()),
        Value::Object(map) => match reference_target(map) {
            Some(alias) => DictValue::reference(alias),
            None => DictValue::Dict(dictionary(map)),
        },
    }
}

fn reference_target(map: &Map<String, Value>) -> Option<&str> {
    if map.len() != 1 {
        return None;
    }
    map.get(REFERENCE_KEY).and_then(Value::as_str)
}

pub fn dictionary(map: &Map<String, Value>) -> Dictionary {
    map.iter()
        .map(|(key, value)| (key.as_str(), dict_value(value)))
        .collect()
}

impl Manifest {
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FolioError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn writer_config(&self) -> WriterConfig {
        let mut config = WriterConfig::default();
        if let Some(version) = &self.config.version {
            config = config.with_version(version.as_str());
        }
        if let Some(root) = &self.config.root {
            config = config.with_root_alias(root.as_str());
        }
        if let Some(timestamp) = self.config.timestamp {
            config = config.with_fixed_timestamp(timestamp);
        }
        if self.config.streaming {
            config = config.with_emission(EmissionMode::Streaming);
        }
        config
    }

    /// Registers every object, in manifest order, with a fresh writer.
    pub fn build(&self) -> Result<PdfWriter, FolioError> {
        let mut writer = PdfWriter::with_config(self.writer_config());
        let level = self.config.compression_level.unwrap_or(6);

        for object in &self.objects {
            let dict = dictionary(&object.dict);
            let alias = object.alias.as_deref();
            match &object.stream {
                None => {
                    writer.create_object(dict, alias);
                }
                Some(stream) => {
                    let payload = stream.payload()?;
                    let data = match stream.encoding {
                        StreamEncoding::Flate => deflate(&payload, level)?,
                        StreamEncoding::Dct => payload,
                    };
                    writer.create_stream_object(dict, data, stream.encoding, alias)?;
                }
            }
        }
        log::debug!("Loaded {} objects from manifest", writer.object_count());
        Ok(writer)
    }

    /// Builds and finalizes the manifest into a byte buffer.
    pub fn render(&self) -> Result<Vec<u8>, FolioError> {
        Ok(self.build()?.finalize_to_vec()?)
    }
}
