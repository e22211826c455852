use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A column's identifier, cloned into every event it produces.
///
/// Wraps `Arc<str>` so cloning per notification is a refcount bump, not
/// a heap allocation. Columns without an id in the host document get the
/// empty `ColumnId`; message formatting must cope with that, so the
/// empty value is first-class here (`Default`, `is_empty`).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ColumnId(Arc<str>);

impl ColumnId {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ColumnId {
    fn default() -> Self {
        ColumnId(Arc::from(""))
    }
}

impl PartialEq<str> for ColumnId {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for ColumnId {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl From<&str> for ColumnId {
    #[inline]
    fn from(s: &str) -> Self {
        ColumnId(Arc::from(s))
    }
}

impl From<String> for ColumnId {
    #[inline]
    fn from(s: String) -> Self {
        ColumnId(Arc::from(s.as_str()))
    }
}

/// Absent host ids degrade to the empty id rather than failing.
impl From<Option<&str>> for ColumnId {
    #[inline]
    fn from(s: Option<&str>) -> Self {
        s.map_or_else(ColumnId::default, ColumnId::from)
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// Serde as a plain string. Deserialized through an owned `String` so
// escaped JSON ids work.

impl Serialize for ColumnId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ColumnId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ColumnId::from(s))
    }
}
