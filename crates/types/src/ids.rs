//! Newtype wrappers for object identities
//!
//! Object numbers and aliases are both "names" for an object, but they live in
//! different spaces: numbers are assigned by the writer, aliases are chosen by
//! callers. Keeping them as distinct types prevents mixing the two up.

use std::borrow::Borrow;
use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;

/// The 1-based number of an indirect object inside a document body.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ObjectNumber(NonZeroU32);

impl ObjectNumber {
    /// Creates an object number. Number 0 is reserved for the free-list head
    /// and yields `None`.
    pub fn new(number: u32) -> Option<Self> {
        NonZeroU32::new(number).map(Self)
    }

    /// The number of the object stored at `index` in a 0-based arena.
    pub fn from_index(index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Position of this object in a 0-based arena.
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Indirect reference syntax, e.g. `12 0 R`.
    pub fn reference(self) -> String {
        format!("{} {} R", self.0, crate::constants::GENERATION)
    }
}

impl fmt::Display for ObjectNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A symbolic name under which an object can be referenced before its number is known.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Alias(Arc<str>);

impl Alias {
    /// Creates a new Alias from a string
    pub fn new(alias: impl Into<Arc<str>>) -> Self {
        Self(alias.into())
    }

    /// Returns the string representation of this alias
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Alias {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for Alias {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<&String> for Alias {
    fn from(s: &String) -> Self {
        Self(s.as_str().into())
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Alias {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
