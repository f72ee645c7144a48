//! Finds composite textures whose patches overlap each other. These are the
//! textures that can produce a medusa when used as a mid texture on a
//! two-sided line.
//!
//! Overlap is only a necessary condition: whether the overlapping columns
//! ever get drawn is not checked.

use std::collections::HashSet;

use log::{debug, info};
use wad::{WadPatchPlace, WadTexture};

use crate::error::ScanError;
use crate::rect::Rect;
use crate::tables::{PatchTable, TextureTable};

/// True if any two patches in `texture` cover some of the same pixels.
///
/// Stops at the first overlapping pair. Textures with a single patch are
/// never checked, so their patch doesn't need to resolve.
pub fn texture_has_overlap(patches: &PatchTable, texture: &WadTexture) -> Result<bool, ScanError> {
    if texture.patches.len() < 2 {
        return Ok(false);
    }

    // Resolved pair by pair so an early overlap wins over a later bad name
    let rect = |place: &WadPatchPlace| {
        patches
            .get_by_name(&place.name)
            .map(|patch| Rect::at(place.x, place.y, patch.width, patch.height))
            .ok_or_else(|| ScanError::MissingPatch {
                texture: texture.name.clone(),
                patch: place.name.clone(),
            })
    };

    for (i, p1) in texture.patches.iter().enumerate() {
        let r1 = rect(p1)?;
        for p2 in texture.patches[i + 1..].iter() {
            if r1.overlaps(&rect(p2)?) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// The set of textures with overlapping patches, indexed the same as the
/// `TextureTable` it was built from
#[derive(Debug, Default, Clone)]
pub struct OverlapSet {
    flagged: Vec<bool>,
    names: Vec<String>,
    by_name: HashSet<String>,
}

impl OverlapSet {
    pub fn build(textures: &TextureTable, patches: &PatchTable) -> Result<Self, ScanError> {
        let mut flagged = Vec::with_capacity(textures.len());
        let mut names = Vec::new();
        for texture in textures.iter() {
            let overlaps = texture_has_overlap(patches, texture)?;
            if overlaps {
                debug!("Texture {} has overlapping patches", texture.name);
                names.push(texture.name.clone());
            }
            flagged.push(overlaps);
        }
        info!(
            "{} of {} textures have overlapping patches",
            names.len(),
            textures.len()
        );
        let by_name = names.iter().cloned().collect();
        Ok(Self {
            flagged,
            names,
            by_name,
        })
    }

    pub fn contains(&self, texture: usize) -> bool {
        self.flagged.get(texture).copied().unwrap_or(false)
    }

    /// Names of flagged textures, in table order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
