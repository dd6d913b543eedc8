//! The object arena and alias table.

use crate::error::WriterError;
use folio_objects::PdfObject;
use folio_types::{Alias, Dictionary, ObjectNumber, StreamEncoding};
use std::collections::HashMap;

/// Owns every registered object in object-number order.
///
/// Object `n` always lives at index `n - 1`; objects are never removed, so
/// numbers stay dense. Aliases map to numbers, never to pointers.
#[derive(Debug, Default)]
pub struct Registry {
    objects: Vec<PdfObject>,
    aliases: HashMap<Alias, ObjectNumber>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_number(&self) -> ObjectNumber {
        ObjectNumber::from_index(self.objects.len())
    }

    pub fn create_object(&mut self, dict: Dictionary, alias: Option<&str>) -> ObjectNumber {
        let number = self.next_number();
        self.objects.push(PdfObject::new(number, dict));
        if let Some(alias) = alias {
            self.bind(alias, number);
        }
        log::debug!(
            "Created object {} (alias: {})",
            number,
            alias.unwrap_or("-")
        );
        number
    }

    /// Registers a stream object. `dict` must not already contain `/Filter` or `/Length`.
    pub fn create_stream_object(
        &mut self,
        dict: Dictionary,
        data: Vec<u8>,
        encoding: StreamEncoding,
        alias: Option<&str>,
    ) -> Result<ObjectNumber, WriterError> {
        let number = self.next_number();
        let size = data.len();
        let object = PdfObject::new_stream(number, dict, data, encoding)?;
        self.objects.push(object);
        if let Some(alias) = alias {
            self.bind(alias, number);
        }
        log::debug!(
            "Created stream object {} ({} bytes, {}, alias: {})",
            number,
            size,
            encoding,
            alias.unwrap_or("-")
        );
        Ok(number)
    }

    /// Points `alias` at `number`, returning the object it was bound to before.
    fn bind(&mut self, alias: &str, number: ObjectNumber) -> Option<ObjectNumber> {
        let previous = self.aliases.insert(Alias::from(alias), number);
        if let Some(previous) = previous {
            log::warn!(
                "Alias '{}' rebound from object {} to object {}",
                alias,
                previous,
                number
            );
        }
        previous
    }

    pub fn number_of(&self, alias: &str) -> Result<ObjectNumber, WriterError> {
        self.aliases
            .get(alias)
            .copied()
            .ok_or_else(|| WriterError::UnresolvedReference {
                alias: Alias::from(alias),
            })
    }

    pub fn object_by_alias(&self, alias: &str) -> Result<&PdfObject, WriterError> {
        let number = self.number_of(alias)?;
        Ok(&self.objects[number.index()])
    }

    pub fn object_by_alias_mut(&mut self, alias: &str) -> Result<&mut PdfObject, WriterError> {
        let number = self.number_of(alias)?;
        Ok(&mut self.objects[number.index()])
    }

    pub fn object(&self, number: ObjectNumber) -> Option<&PdfObject> {
        self.objects.get(number.index())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PdfObject> {
        self.objects.iter()
    }

    pub fn into_objects(self) -> Vec<PdfObject> {
        self.objects
    }
}
