use crate::error::ObjectError;
use crate::resolved::ResolvedDictionary;
use folio_types::constants::GENERATION;
use folio_types::{DictValue, Dictionary, ObjectNumber, StreamEncoding};

const FILTER_KEY: &str = "Filter";
const LENGTH_KEY: &str = "Length";

/// Raw bytes attached to a stream object, already encoded with `encoding`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamPayload {
    pub data: Vec<u8>,
    pub encoding: StreamEncoding,
}

/// An indirect object as registered with the writer, before reference resolution.
#[derive(Debug, Clone)]
pub struct PdfObject {
    number: ObjectNumber,
    dict: Dictionary,
    stream: Option<StreamPayload>,
}

impl PdfObject {
    pub fn new(number: ObjectNumber, dict: Dictionary) -> Self {
        Self {
            number,
            dict,
            stream: None,
        }
    }

    /// Creates a stream object, appending `/Filter` and `/Length` to `dict`.
    ///
    /// `/Length` is the byte length of `data` as given, i.e. after compression.
    pub fn new_stream(
        number: ObjectNumber,
        mut dict: Dictionary,
        data: Vec<u8>,
        encoding: StreamEncoding,
    ) -> Result<Self, ObjectError> {
        for key in [FILTER_KEY, LENGTH_KEY] {
            if dict.contains_key(key) {
                return Err(ObjectError::ReservedStreamKey {
                    object: number,
                    key: key.to_string(),
                });
            }
        }
        dict.insert(FILTER_KEY, encoding.filter_name());
        dict.insert(LENGTH_KEY, data.len().to_string());

        Ok(Self {
            number,
            dict,
            stream: Some(StreamPayload { data, encoding }),
        })
    }

    pub fn number(&self) -> ObjectNumber {
        self.number
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    pub fn dictionary_mut(&mut self) -> &mut Dictionary {
        &mut self.dict
    }

    pub fn stream(&self) -> Option<&StreamPayload> {
        self.stream.as_ref()
    }

    pub fn is_stream(&self) -> bool {
        self.stream.is_some()
    }

    /// Pairs this object's identity and payload with a dictionary resolved elsewhere.
    pub fn into_resolved(self, dict: ResolvedDictionary) -> ResolvedObject {
        ResolvedObject {
            number: self.number,
            dict,
            stream: self.stream,
            byte_offset: None,
        }
    }

    /// Converts an object whose dictionary holds only literals, failing on the
    /// first reference, list or nested dictionary.
    pub fn into_literal_resolved(self) -> Result<ResolvedObject, ObjectError> {
        let mut dict = ResolvedDictionary::new();
        for (key, value) in self.dict {
            match value {
                DictValue::Literal(text) => dict.insert(key, text),
                _ => {
                    return Err(ObjectError::UnresolvedValue {
                        object: self.number,
                        key,
                    });
                }
            }
        }
        Ok(ResolvedObject {
            number: self.number,
            dict,
            stream: self.stream,
            byte_offset: None,
        })
    }
}

/// An object ready to be written: every dictionary value is final syntax.
#[derive(Debug, Clone)]
pub struct ResolvedObject {
    number: ObjectNumber,
    dict: ResolvedDictionary,
    stream: Option<StreamPayload>,
    byte_offset: Option<u64>,
}

impl ResolvedObject {
    pub fn number(&self) -> ObjectNumber {
        self.number
    }

    pub fn dictionary(&self) -> &ResolvedDictionary {
        &self.dict
    }

    pub fn stream(&self) -> Option<&StreamPayload> {
        self.stream.as_ref()
    }

    /// `<n> 0 obj`, the dictionary, and for streams the `stream` keyword.
    pub fn encode_head(&self) -> Vec<u8> {
        let mut head = format!("{} {} obj\n<<\n", self.number, GENERATION);
        for (key, value) in self.dict.iter() {
            head.push('/');
            head.push_str(key);
            head.push(' ');
            head.push_str(value);
        }
        head.push_str("\n>>\n");
        if self.stream.is_some() {
            head.push_str("stream\n");
        }
        head.into_bytes()
    }

    pub fn encode_tail(&self) -> &'static [u8] {
        if self.stream.is_some() {
            b"\nendstream\nendobj\n"
        } else {
            b"endobj\n"
        }
    }

    /// The exact bytes this object occupies in the output.
    pub fn encode(&self) -> Vec<u8> {
        let head = self.encode_head();
        let tail = self.encode_tail();
        let payload = self.stream.as_ref().map_or(&[][..], |s| s.data.as_slice());

        let mut bytes = Vec::with_capacity(head.len() + payload.len() + tail.len());
        bytes.extend_from_slice(&head);
        bytes.extend_from_slice(payload);
        bytes.extend_from_slice(tail);
        bytes
    }

    /// Where this object starts in the output, once layout has run.
    pub fn byte_offset(&self) -> Option<u64> {
        self.byte_offset
    }

    /// Records the object's start offset. The first assignment wins.
    pub fn set_byte_offset(&mut self, offset: u64) {
        match self.byte_offset {
            Some(existing) if existing != offset => log::warn!(
                "Object {} already placed at byte {}, ignoring new offset {}",
                self.number,
                existing,
                offset
            ),
            Some(_) => {}
            None => self.byte_offset = Some(offset),
        }
    }
}
