//! Turns [`DictValue`] trees into final PDF syntax.

use crate::error::WriterError;
use crate::registry::Registry;
use folio_objects::ResolvedDictionary;
use folio_types::{Alias, DictValue, Dictionary};

/// Resolves values against the aliases bound in a [`Registry`].
///
/// Resolution is a plain structural fold: literals are kept, references become
/// `<n> 0 R`, lists and dictionaries are resolved element by element.
pub struct Resolver<'a> {
    registry: &'a Registry,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    pub fn resolve_value(&self, value: &DictValue) -> Result<String, WriterError> {
        match value {
            DictValue::Literal(text) => Ok(text.clone()),
            DictValue::Reference(alias) => self.resolve_reference(alias),
            DictValue::List(items) => self.resolve_list(items),
            DictValue::Dict(dict) => self.resolve_nested(dict),
        }
    }

    pub fn resolve_reference(&self, alias: &Alias) -> Result<String, WriterError> {
        Ok(self.registry.number_of(alias.as_str())?.reference())
    }

    /// `[ a b c ]`; each element is followed by one space.
    pub fn resolve_list(&self, items: &[DictValue]) -> Result<String, WriterError> {
        let mut out = String::from("[ ");
        for item in items {
            out.push_str(&self.resolve_value(item)?);
            out.push(' ');
        }
        out.push(']');
        Ok(out)
    }

    /// `<< /k1 v1 /k2 v2 >>` in insertion order.
    pub fn resolve_nested(&self, dict: &Dictionary) -> Result<String, WriterError> {
        let mut out = String::from("<< ");
        for (key, value) in dict.iter() {
            out.push('/');
            out.push_str(key);
            out.push(' ');
            out.push_str(&self.resolve_value(value)?);
            out.push(' ');
        }
        out.push_str(">>");
        Ok(out)
    }

    /// Resolves the top level of an object dictionary, keeping the entry order.
    pub fn resolve_dictionary(&self, dict: &Dictionary) -> Result<ResolvedDictionary, WriterError> {
        let mut resolved = ResolvedDictionary::new();
        for (key, value) in dict.iter() {
            resolved.insert(key, self.resolve_value(value)?);
        }
        Ok(resolved)
    }

    /// Resolves the dictionary of every registered object, in object-number order.
    /// Must run after the last object is created.
    pub fn resolve_all(&self) -> Result<Vec<ResolvedDictionary>, WriterError> {
        self.registry
            .iter()
            .map(|obj| self.resolve_dictionary(obj.dictionary()))
            .collect()
    }
}
