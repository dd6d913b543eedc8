//! The unresolved dictionary value tree.
//!
//! Values are built by callers while objects are still being registered, so a
//! value may point at an object that does not exist yet. Nothing in this module
//! knows about object numbers; turning a [`DictValue`] into PDF syntax is the
//! job of the writer's resolver.

use crate::ids::Alias;
use indexmap::IndexMap;

/// A single dictionary value before reference resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictValue {
    /// Text written verbatim, e.g. `/Catalog`, `12`, `[ 0 0 595 842 ]`.
    Literal(String),
    /// A symbolic reference to another object.
    Reference(Alias),
    /// An array whose elements are resolved individually.
    List(Vec<DictValue>),
    /// A nested direct dictionary.
    Dict(Dictionary),
}

impl DictValue {
    pub fn literal(text: impl Into<String>) -> Self {
        DictValue::Literal(text.into())
    }

    pub fn reference(alias: impl Into<Alias>) -> Self {
        DictValue::Reference(alias.into())
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<DictValue>> {
        match self {
            DictValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut Dictionary> {
        match self {
            DictValue::Dict(dict) => Some(dict),
            _ => None,
        }
    }
}

impl From<&str> for DictValue {
    fn from(s: &str) -> Self {
        DictValue::Literal(s.to_string())
    }
}

impl From<String> for DictValue {
    fn from(s: String) -> Self {
        DictValue::Literal(s)
    }
}

impl From<Alias> for DictValue {
    fn from(alias: Alias) -> Self {
        DictValue::Reference(alias)
    }
}

impl From<Vec<DictValue>> for DictValue {
    fn from(items: Vec<DictValue>) -> Self {
        DictValue::List(items)
    }
}

impl From<Dictionary> for DictValue {
    fn from(dict: Dictionary) -> Self {
        DictValue::Dict(dict)
    }
}

/// An insertion-ordered mapping from key (without the leading `/`) to value.
///
/// Re-inserting an existing key replaces the value but keeps the key's position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary(IndexMap<String, DictValue>);

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<DictValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces `key`, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<DictValue>,
    ) -> Option<DictValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&DictValue> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut DictValue> {
        self.0.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DictValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<DictValue>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Dictionary {
    type Item = (String, DictValue);
    type IntoIter = indexmap::map::IntoIter<String, DictValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
