//! Name keyed lookup tables merged from the base and overlay archives.
//!
//! Names are resolved to an index once; everything downstream refers to
//! textures by that index.

use std::collections::HashMap;

use log::debug;
use wad::{WadPatch, WadSource, WadTexture};

use crate::error::ScanError;

pub trait Named {
    fn name(&self) -> &str;
}

impl Named for WadTexture {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for WadPatch {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone)]
pub struct NameTable<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for NameTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Named + Clone> NameTable<T> {
    /// Add an entry. If the name is already present the new entry replaces
    /// it and keeps the old index.
    pub fn insert(&mut self, entry: T) -> usize {
        if let Some(&i) = self.index.get(entry.name()) {
            debug!("Replacing {} at {i}", entry.name());
            self.entries[i] = entry;
            return i;
        }
        let i = self.entries.len();
        self.index.insert(entry.name().to_owned(), i);
        self.entries.push(entry);
        i
    }

    pub fn extend<'a>(&mut self, entries: impl IntoIterator<Item = &'a T>)
    where
        T: 'a,
    {
        for e in entries {
            self.insert(e.clone());
        }
    }
}

impl<T> NameTable<T> {
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn get(&self, index: usize) -> &T {
        &self.entries[index]
    }

    pub fn get_by_name(&self, name: &str) -> Option<&T> {
        self.lookup(name).map(|i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub type TextureTable = NameTable<WadTexture>;
pub type PatchTable = NameTable<WadPatch>;

impl TextureTable {
    /// Textures from `base`, then `overlay` with overlay entries winning
    pub fn merge(base: &impl WadSource, overlay: &impl WadSource) -> Self {
        let mut table = Self::default();
        table.extend(base.textures());
        table.extend(overlay.textures());
        table
    }

    /// Resolve a texture used by `linedef` on `map`. A miss is fatal, the
    /// `-` sentinel should have been filtered before this.
    pub fn resolve(&self, map: &str, linedef: usize, name: &str) -> Result<usize, ScanError> {
        self.lookup(name).ok_or_else(|| ScanError::MissingTexture {
            map: map.to_owned(),
            linedef,
            name: name.to_owned(),
        })
    }
}

impl PatchTable {
    /// Patches from `base`, then `overlay` with overlay entries winning
    pub fn merge(base: &impl WadSource, overlay: &impl WadSource) -> Self {
        let mut table = Self::default();
        table.extend(base.patches());
        table.extend(overlay.patches());
        table
    }
}
