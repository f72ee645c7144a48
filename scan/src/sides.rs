//! Index lookups from a linedef to its sidedefs and sectors. A bad index is
//! malformed map data and ends the scan like any other bad reference.

use wad::{WadLineDef, WadMap, WadSector, WadSideDef};

use crate::error::ScanError;

/// Front sidedef and, for two-sided lines, the back one
pub(crate) fn line_sides<'m>(
    map: &'m WadMap,
    k: usize,
    line: &WadLineDef,
) -> Result<(&'m WadSideDef, Option<&'m WadSideDef>), ScanError> {
    let front = sidedef(map, k, line.front_sidedef)?;
    let back = match map.back_index(line) {
        Some(i) => Some(sidedef(map, k, i)?),
        None => None,
    };
    Ok((front, back))
}

pub(crate) fn sector_of<'m>(
    map: &'m WadMap,
    k: usize,
    side: &WadSideDef,
) -> Result<&'m WadSector, ScanError> {
    map.sector_of(side).ok_or_else(|| ScanError::BadSector {
        map: map.name().to_owned(),
        linedef: k,
        sector: side.sector,
    })
}

fn sidedef(map: &WadMap, k: usize, index: usize) -> Result<&WadSideDef, ScanError> {
    map.sidedef(index).ok_or_else(|| ScanError::BadSideDef {
        map: map.name().to_owned(),
        linedef: k,
        sidedef: index,
    })
}
