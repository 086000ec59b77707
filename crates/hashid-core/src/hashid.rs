use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// An encoded hashid string.
///
/// Produced by [`Hashids::encode`][crate::Hashids::encode]. An empty
/// hashid is the "no encoding" value returned for empty input.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Hashid(SmolStr);

impl Hashid {
    pub(crate) fn new(value: impl AsRef<str>) -> Self {
        Self(SmolStr::new(value))
    }

    pub(crate) fn empty() -> Self {
        Self(SmolStr::default())
    }

    /// Returns the hashid as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the hashid length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns `true` for the empty "no encoding" value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Hashid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Hashid").field(&self.0).finish()
    }
}

impl Display for Hashid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hashid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Hashid {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Hashid {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for Hashid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Hashid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Whether the string decodes is only knowable against a
        // configured instance, so deserialization stays structural.
        let s = SmolStr::deserialize(deserializer)?;
        Ok(Self(s))
    }
}
