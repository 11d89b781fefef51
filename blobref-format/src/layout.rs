//! # Configurable Layout
//!
//! The compiler ABI lists every configurable constant together with the byte
//! offset where it starts inside the program image. The smallest of those
//! offsets is where the code section ends and the configurables section
//! begins.
//!
//! A layout with no entries has no split point, so [`LayoutDescriptor`] can
//! only be constructed from a non-empty entry list.

use crate::error::{FormatError, Result};
use serde::{Deserialize, Serialize};

/// One configurable constant of the ABI
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigurableEntry {
    /// Name of the constant as declared in source
    pub name: String,
    /// Byte offset of the constant within the program image
    pub offset: usize,
}

impl ConfigurableEntry {
    pub fn new(name: impl Into<String>, offset: usize) -> Self {
        Self {
            name: name.into(),
            offset,
        }
    }
}

/// Ordered, non-empty list of configurable entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ConfigurableEntry>", into = "Vec<ConfigurableEntry>")]
pub struct LayoutDescriptor {
    entries: Vec<ConfigurableEntry>,
}

/// The slice of the compiler ABI this crate cares about
#[derive(Deserialize)]
struct AbiConfigurables {
    #[serde(default)]
    configurables: Vec<ConfigurableEntry>,
}

impl LayoutDescriptor {
    /// Create a layout, rejecting an empty entry list
    pub fn new(entries: Vec<ConfigurableEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(FormatError::EmptyLayout);
        }
        Ok(Self { entries })
    }

    /// Parse the `configurables` array of a compiler ABI document
    ///
    /// Only `name` and `offset` are read from each entry; type information
    /// and any other ABI sections are ignored. A missing or empty array
    /// yields [`FormatError::EmptyLayout`].
    pub fn from_abi_json(json: &str) -> Result<Self> {
        let abi: AbiConfigurables = serde_json::from_str(json)?;
        Self::new(abi.configurables)
    }

    pub fn entries(&self) -> &[ConfigurableEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Offset where the configurables section begins
    ///
    /// This is the minimum offset over all entries. Entries sharing that
    /// offset are all equally valid split points.
    pub fn section_offset(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.offset)
            .min()
            .unwrap_or_default()
    }

    /// Fail if more than one entry sits at the section offset
    pub fn ensure_unique_section_offset(&self) -> Result<()> {
        let offset = self.section_offset();
        let count = self
            .entries
            .iter()
            .filter(|entry| entry.offset == offset)
            .count();
        if count > 1 {
            return Err(FormatError::DuplicateOffset { offset });
        }
        Ok(())
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Option<&ConfigurableEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

impl TryFrom<Vec<ConfigurableEntry>> for LayoutDescriptor {
    type Error = FormatError;

    fn try_from(entries: Vec<ConfigurableEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<LayoutDescriptor> for Vec<ConfigurableEntry> {
    fn from(layout: LayoutDescriptor) -> Self {
        layout.entries
    }
}
