//! Medusa candidates: two-sided lines where a mid texture with overlapping
//! patches is drawn. One-sided walls are never drawn through, so they can't
//! show a medusa.

use glam::Vec2;
use log::debug;
use wad::{TexSlot, WadMap};

use crate::error::ScanError;
use crate::overlap::OverlapSet;
use crate::report::{MapReport, Side, Warning};
use crate::sides::line_sides;
use crate::tables::TextureTable;

/// Flag each two-sided line whose front or back mid texture is in
/// `overlapping`. At most one warning per line, the front side is checked
/// first.
pub fn find_medusas(
    map: &WadMap,
    textures: &TextureTable,
    overlapping: &OverlapSet,
    report: &mut MapReport,
) -> Result<(), ScanError> {
    for (k, line) in map.linedefs().iter().enumerate() {
        let (front, Some(back)) = line_sides(map, k, line)? else {
            continue;
        };

        for (side, sidedef) in [(Side::Front, front), (Side::Back, back)] {
            let Some(name) = sidedef.texture(TexSlot::Middle) else {
                continue;
            };
            let texture = textures.resolve(map.name(), k, name)?;
            if overlapping.contains(texture) {
                let warning = Warning::Medusa {
                    linedef: k,
                    side,
                    texture: name.to_owned(),
                    v1: vertex_pos(map, line.start_vertex),
                    v2: vertex_pos(map, line.end_vertex),
                };
                debug!("{}: {warning}", map.name());
                report.warnings.push(warning);
                break;
            }
        }
    }
    Ok(())
}

fn vertex_pos(map: &WadMap, index: usize) -> Vec2 {
    map.vertexes()
        .get(index)
        .map(|v| Vec2::new(v.x as f32, v.y as f32))
        .unwrap_or_default()
}
