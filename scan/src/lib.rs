//! Scans Doom levels for two classic renderer glitches:
//!
//! - **Medusa**: a mid texture on a two-sided line that is composed of
//!   overlapping patches. Drawing it reads past the patch columns and fills the
//!   wall with garbage.
//! - **Tutti-frutti**: a wall segment taller than the texture on it. The
//!   renderer wraps texture columns on their height, so the remainder is drawn
//!   from whatever follows the column in memory.
//!
//! Resources come from a base archive (IWAD) and an overlay (PWAD) through
//! [`wad::WadSource`]. Only the overlay's maps are scanned.
//!
//! ```ignore
//! let report = scan::scan(&iwad, &pwad, ScanConfig::default())?;
//! for map in report.maps.iter() {
//!     for warning in map.warnings.iter() {
//!         println!("{}: {warning}", map.map);
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod medusa;
pub mod overlap;
pub mod rect;
pub mod report;
pub mod scanner;
mod sides;
pub mod tables;
pub mod tutti;

#[cfg(test)]
mod tests;

pub use config::{ScanConfig, WALL_UNIT};
pub use error::ScanError;
pub use log;
pub use overlap::{OverlapSet, texture_has_overlap};
pub use rect::Rect;
pub use report::{MapReport, Report, Side, Warning, WarningKind};
pub use scanner::{Scanner, scan};
pub use tables::{PatchTable, TextureTable};
