//! This crate contains the decoded records of a WAD that level scanning
//! works with: maps (vertexes, linedefs, sidedefs, sectors), composite
//! textures and the patches they are built from.
//!
//! Reading the binary lumps is left to whatever implements [`WadSource`];
//! the structures here are what a decoder hands over.
//!
//! ```text,ignore
//!   WadSource ──┬── textures: WadTexture ── patches: WadPatchPlace ──> WadPatch (by name)
//!               ├── patches:  WadPatch
//!               └── maps:     WadMap ──┬── linedefs ──> sidedefs (by index)
//!                                      ├── sidedefs ──> sectors  (by index)
//!                                      ├── sectors
//!                                      └── vertexes
//! ```

pub use crate::lumps::*;
pub use crate::map::WadMap;
pub use crate::source::{WadResources, WadSource};

/// The lump module contains the structures that decoded lump records are
/// stored in
pub mod lumps;

pub mod map;

pub mod source;
