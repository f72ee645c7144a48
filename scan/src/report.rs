//! Findings of a scan. Each warning keeps the numbers it was derived from so
//! a report can be formatted or filtered however the caller likes.

use std::fmt;

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Front => write!(f, "front"),
            Side::Back => write!(f, "back"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    Medusa,
    TuttiOneSided,
    TuttiLower,
    TuttiUpper,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Two-sided line with a mid texture that has overlapping patches
    Medusa {
        linedef: usize,
        side: Side,
        texture: String,
        /// Line start, for locating it in an editor
        v1: Vec2,
        /// Line end
        v2: Vec2,
    },
    /// One-sided wall taller than its mid texture
    TuttiOneSided {
        linedef: usize,
        texture: String,
        sector_height: i32,
        y_offset: i32,
        tex_height: i32,
    },
    /// Step (floor difference) taller than the lower texture
    TuttiLower {
        linedef: usize,
        side: Side,
        texture: String,
        tex_height: i32,
        y_offset: i32,
        wall_height: i32,
    },
    /// Ceiling difference against the upper texture
    TuttiUpper {
        linedef: usize,
        side: Side,
        texture: String,
        tex_height: i32,
        y_offset: i32,
        wall_height: i32,
    },
}

impl Warning {
    pub fn kind(&self) -> WarningKind {
        match self {
            Warning::Medusa { .. } => WarningKind::Medusa,
            Warning::TuttiOneSided { .. } => WarningKind::TuttiOneSided,
            Warning::TuttiLower { .. } => WarningKind::TuttiLower,
            Warning::TuttiUpper { .. } => WarningKind::TuttiUpper,
        }
    }

    pub fn linedef(&self) -> usize {
        match self {
            Warning::Medusa { linedef, .. }
            | Warning::TuttiOneSided { linedef, .. }
            | Warning::TuttiLower { linedef, .. }
            | Warning::TuttiUpper { linedef, .. } => *linedef,
        }
    }

    pub fn texture(&self) -> &str {
        match self {
            Warning::Medusa { texture, .. }
            | Warning::TuttiOneSided { texture, .. }
            | Warning::TuttiLower { texture, .. }
            | Warning::TuttiUpper { texture, .. } => texture,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Medusa {
                linedef,
                side,
                texture,
                ..
            } => write!(
                f,
                "possible medusa at line #{linedef}: {side} midtex is {texture}"
            ),
            Warning::TuttiOneSided {
                linedef,
                texture,
                sector_height,
                y_offset,
                tex_height,
            } => write!(
                f,
                "likely tutti at line #{linedef}: 1s sector height is {sector_height} and offset is {y_offset} but texture {texture} height is {tex_height}"
            ),
            Warning::TuttiLower {
                linedef,
                side,
                texture,
                tex_height,
                y_offset,
                wall_height,
            } => write!(
                f,
                "possible tutti at line #{linedef}: {side} side has a lower texture {texture} with a height of {tex_height}, y offset of {y_offset}, and lower wall height of {wall_height}"
            ),
            Warning::TuttiUpper {
                linedef,
                side,
                texture,
                tex_height,
                y_offset,
                wall_height,
            } => write!(
                f,
                "possible tutti at line #{linedef}: {side} side has an upper texture {texture} with a height of {tex_height}, y offset of {y_offset}, and upper wall height of {wall_height}"
            ),
        }
    }
}

/// Warnings for one map, medusas first then tutti-fruttis, each in linedef
/// order
#[derive(Debug, Clone, PartialEq)]
pub struct MapReport {
    pub map: String,
    pub warnings: Vec<Warning>,
}

impl MapReport {
    pub fn new(map: &str) -> Self {
        Self {
            map: map.to_owned(),
            warnings: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn of_kind(&self, kind: WarningKind) -> impl Iterator<Item = &Warning> {
        self.warnings.iter().filter(move |w| w.kind() == kind)
    }
}

/// Only maps with at least one warning are kept
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    pub maps: Vec<MapReport>,
}

impl Report {
    /// Adds the map report unless it is empty
    pub fn push(&mut self, map: MapReport) {
        if !map.is_empty() {
            self.maps.push(map);
        }
    }

    pub fn is_clean(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.maps.iter().map(|m| m.warnings.len()).sum()
    }

    pub fn get(&self, map: &str) -> Option<&MapReport> {
        self.maps.iter().find(|m| m.map == map)
    }
}
