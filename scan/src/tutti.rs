//! Tutti-frutti candidates: wall segments taller than the texture drawn on
//! them. The renderer wraps columns of short textures, so anything past the
//! texture height shows garbage.

use log::debug;
use wad::{TexSlot, WadMap, WadSideDef, WadTexture};

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::report::{MapReport, Side, Warning};
use crate::sides::{line_sides, sector_of};
use crate::tables::TextureTable;

/// Check every line of `map`. A one-sided line gets at most one warning, a
/// two-sided line can get a lower and an upper warning for each side.
pub fn find_tutti_fruttis(
    map: &WadMap,
    textures: &TextureTable,
    config: &ScanConfig,
    report: &mut MapReport,
) -> Result<(), ScanError> {
    for (k, line) in map.linedefs().iter().enumerate() {
        let (front, back) = line_sides(map, k, line)?;
        let used = line_textures(map, k, front, back, textures)?;
        // Nothing shorter than a full wall patch, so nothing can wrap
        if used.iter().all(|t| t.height == config.wall_unit) {
            continue;
        }

        match back {
            None => check_one_sided(map, k, front, textures, report)?,
            Some(back) => {
                for (side, this, other) in [(Side::Front, front, back), (Side::Back, back, front)] {
                    check_side(map, k, side, this, other, textures, config, report)?;
                }
            }
        }
    }
    Ok(())
}

/// Every texture drawn on the line: the front mid for one-sided lines, all
/// six slots for two-sided. Sentinel slots are skipped.
fn line_textures<'t>(
    map: &WadMap,
    k: usize,
    front: &WadSideDef,
    back: Option<&WadSideDef>,
    textures: &'t TextureTable,
) -> Result<Vec<&'t WadTexture>, ScanError> {
    let names: Vec<&str> = match back {
        Some(back) => [front, back]
            .into_iter()
            .flat_map(|side| {
                TexSlot::ALL
                    .into_iter()
                    .filter_map(move |slot| side.texture(slot))
            })
            .collect(),
        None => front.texture(TexSlot::Middle).into_iter().collect(),
    };

    names
        .into_iter()
        .map(|name| textures.resolve(map.name(), k, name).map(|i| textures.get(i)))
        .collect()
}

fn check_one_sided(
    map: &WadMap,
    k: usize,
    front: &WadSideDef,
    textures: &TextureTable,
    report: &mut MapReport,
) -> Result<(), ScanError> {
    let Some(name) = front.texture(TexSlot::Middle) else {
        return Ok(());
    };
    let tex_height = textures.get(textures.resolve(map.name(), k, name)?).height;
    let sector_height = sector_of(map, k, front)?.height();
    let y_offset = front.y_offset as i32;

    if sector_height - y_offset.abs() > tex_height {
        push(
            map,
            report,
            Warning::TuttiOneSided {
                linedef: k,
                texture: name.to_owned(),
                sector_height,
                y_offset,
                tex_height,
            },
        );
    }
    Ok(())
}

/// Lower and upper texture of `this` against the sector on the `other` side.
///
/// The two tests are not symmetric. The lower test subtracts the offset from
/// the wall height, the upper test wants the offset between the texture
/// height and the wall height. A negative lower wall ends the check of this
/// side, upper included.
#[allow(clippy::too_many_arguments)]
fn check_side(
    map: &WadMap,
    k: usize,
    side: Side,
    this: &WadSideDef,
    other: &WadSideDef,
    textures: &TextureTable,
    config: &ScanConfig,
    report: &mut MapReport,
) -> Result<(), ScanError> {
    let sector = sector_of(map, k, this)?;
    let other_sector = sector_of(map, k, other)?;
    let y_offset = this.y_offset as i32;

    if let Some(name) = this.texture(TexSlot::Lower) {
        let tex_height = textures.get(textures.resolve(map.name(), k, name)?).height;
        if tex_height != config.wall_unit {
            let wall_height = sector.floor_height as i32 - other_sector.floor_height as i32;
            // Lower texture faces the other way
            if wall_height < 0 {
                return Ok(());
            }
            if wall_height - y_offset.abs() > tex_height {
                push(
                    map,
                    report,
                    Warning::TuttiLower {
                        linedef: k,
                        side,
                        texture: name.to_owned(),
                        tex_height,
                        y_offset,
                        wall_height,
                    },
                );
            }
        }
    }

    if let Some(name) = this.texture(TexSlot::Upper) {
        let tex_height = textures.get(textures.resolve(map.name(), k, name)?).height;
        if tex_height != config.wall_unit {
            let wall_height = sector.ceil_height as i32 - other_sector.ceil_height as i32;
            if wall_height < 0 {
                return Ok(());
            }
            if wall_height > y_offset.abs() && y_offset.abs() > tex_height {
                push(
                    map,
                    report,
                    Warning::TuttiUpper {
                        linedef: k,
                        side,
                        texture: name.to_owned(),
                        tex_height,
                        y_offset,
                        wall_height,
                    },
                );
            }
        }
    }
    Ok(())
}

fn push(map: &WadMap, report: &mut MapReport, warning: Warning) {
    debug!("{}: {warning}", map.name());
    report.warnings.push(warning);
}

#[cfg(test)]
mod tests {
    use wad::{WadResources, WadTexture};

    use super::find_tutti_fruttis;
    use crate::config::ScanConfig;
    use crate::error::ScanError;
    use crate::report::{MapReport, Side, Warning, WarningKind};
    use crate::tables::TextureTable;
    use crate::tests::LevelBuilder;

    fn textures() -> TextureTable {
        let base = WadResources::new("base")
            .with_texture(WadTexture::new("STARTAN3", 128, 128, vec![]))
            .with_texture(WadTexture::new("SHORT64", 64, 64, vec![]))
            .with_texture(WadTexture::new("STEP16", 64, 16, vec![]))
            .with_texture(WadTexture::new("TALL256", 64, 256, vec![]));
        TextureTable::merge(&base, &WadResources::new("overlay"))
    }

    fn scan(map: &wad::WadMap) -> Result<MapReport, ScanError> {
        let mut report = MapReport::new(map.name());
        find_tutti_fruttis(map, &textures(), &ScanConfig::default(), &mut report)?;
        Ok(report)
    }

    fn one_sided_wall(floor: i16, ceil: i16, y_offset: i16, mid: &str) -> wad::WadMap {
        let mut level = LevelBuilder::new("MAP01");
        let s = level.sector(floor, ceil);
        let side = level.side(s, y_offset, "-", mid, "-");
        level.one_sided(side);
        level.build()
    }

    #[test]
    fn one_sided_tall_wall() {
        let report = scan(&one_sided_wall(0, 256, 0, "SHORT64")).unwrap();
        assert_eq!(
            report.warnings,
            vec![Warning::TuttiOneSided {
                linedef: 0,
                texture: "SHORT64".to_owned(),
                sector_height: 256,
                y_offset: 0,
                tex_height: 64,
            }]
        );
    }

    #[test]
    fn one_sided_128_texture_on_256_wall_is_skipped() {
        // All textures on the line are a full wall patch high
        assert!(scan(&one_sided_wall(0, 256, 0, "STARTAN3")).unwrap().is_empty());
    }

    #[test]
    fn one_sided_boundary_is_exclusive() {
        // 192 - 128 == 64, not greater
        let map = one_sided_wall(0, 192, 128, "SHORT64");
        assert!(scan(&map).unwrap().is_empty());

        let map = one_sided_wall(0, 193, 128, "SHORT64");
        assert_eq!(scan(&map).unwrap().warnings.len(), 1);

        let map = one_sided_wall(0, 512, 128, "TALL256");
        assert_eq!(scan(&map).unwrap().warnings.len(), 1);
    }

    #[test]
    fn one_sided_negative_offset_uses_magnitude() {
        let map = one_sided_wall(0, 128, -64, "SHORT64");
        assert!(scan(&map).unwrap().is_empty());

        let map = one_sided_wall(0, 129, -64, "SHORT64");
        let report = scan(&map).unwrap();
        assert!(matches!(
            report.warnings[0],
            Warning::TuttiOneSided { y_offset: -64, .. }
        ));
    }

    #[test]
    fn one_sided_warning_does_not_stop_the_map() {
        let mut level = LevelBuilder::new("MAP01");
        let s = level.sector(0, 256);
        let side = level.side(s, 0, "-", "SHORT64", "-");
        level.one_sided(side);
        level.one_sided(side);

        let report = scan(&level.build()).unwrap();
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.warnings[1].linedef(), 1);
    }

    #[test]
    fn one_sided_without_mid_is_skipped() {
        assert!(scan(&one_sided_wall(0, 256, 0, "-")).unwrap().is_empty());
    }

    #[test]
    fn two_sided_all_128_is_skipped() {
        let mut level = LevelBuilder::new("MAP01");
        let high = level.sector(512, 1024);
        let low = level.sector(0, 64);
        let front = level.side(high, 100, "STARTAN3", "STARTAN3", "STARTAN3");
        let back = level.side(low, -100, "STARTAN3", "STARTAN3", "STARTAN3");
        level.two_sided(front, back);

        assert!(scan(&level.build()).unwrap().is_empty());
    }

    #[test]
    fn lower_texture_on_tall_step() {
        let mut level = LevelBuilder::new("MAP01");
        let raised = level.sector(24, 128);
        let floor = level.sector(0, 128);
        let front = level.side(raised, 0, "-", "-", "STEP16");
        let back = level.side(floor, 0, "-", "-", "-");
        level.two_sided(front, back);

        let report = scan(&level.build()).unwrap();
        assert_eq!(
            report.warnings,
            vec![Warning::TuttiLower {
                linedef: 0,
                side: Side::Front,
                texture: "STEP16".to_owned(),
                tex_height: 16,
                y_offset: 0,
                wall_height: 24,
            }]
        );
    }

    #[test]
    fn lower_texture_offset_covers_step() {
        let mut level = LevelBuilder::new("MAP01");
        let raised = level.sector(24, 128);
        let floor = level.sector(0, 128);
        let front = level.side(raised, -8, "-", "-", "STEP16");
        let back = level.side(floor, 0, "-", "-", "-");
        level.two_sided(front, back);

        assert!(scan(&level.build()).unwrap().is_empty());
    }

    #[test]
    fn negative_lower_wall_skips_rest_of_side() {
        // Front floor is below the back floor, so the front lower check bails
        // and the front upper is never looked at.
        let mut level = LevelBuilder::new("MAP01");
        let this = level.sector(0, 256);
        let other = level.sector(24, 64);
        let front = level.side(this, 100, "SHORT64", "-", "STEP16");
        let back = level.side(other, 0, "-", "-", "-");
        level.two_sided(front, back);
        assert!(scan(&level.build()).unwrap().is_empty());

        // Same upper without the lower texture does warn
        let mut level = LevelBuilder::new("MAP01");
        let this = level.sector(0, 256);
        let other = level.sector(24, 64);
        let front = level.side(this, 100, "SHORT64", "-", "-");
        let back = level.side(other, 0, "-", "-", "-");
        level.two_sided(front, back);
        let report = scan(&level.build()).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].kind(), WarningKind::TuttiUpper);
    }

    #[test]
    fn upper_texture_needs_offset_past_texture() {
        // upper wall 192, offset 0: 192 > 0 but 0 > 64 fails, so no warning
        // even though the lower style test would fire
        let mut level = LevelBuilder::new("MAP01");
        let this = level.sector(0, 256);
        let other = level.sector(0, 64);
        let front = level.side(this, 0, "SHORT64", "-", "-");
        let back = level.side(other, 0, "-", "-", "-");
        level.two_sided(front, back);
        assert!(scan(&level.build()).unwrap().is_empty());

        // offset 100: 192 > 100 > 64
        let mut level = LevelBuilder::new("MAP01");
        let this = level.sector(0, 256);
        let other = level.sector(0, 64);
        let front = level.side(this, -100, "SHORT64", "-", "-");
        let back = level.side(other, 0, "-", "-", "-");
        level.two_sided(front, back);
        let report = scan(&level.build()).unwrap();
        assert_eq!(
            report.warnings,
            vec![Warning::TuttiUpper {
                linedef: 0,
                side: Side::Front,
                texture: "SHORT64".to_owned(),
                tex_height: 64,
                y_offset: -100,
                wall_height: 192,
            }]
        );
    }

    #[test]
    fn no_early_exit_between_sides() {
        let mut level = LevelBuilder::new("MAP01");
        let raised = level.sector(24, 128);
        let open = level.sector(0, 256);
        let front = level.side(raised, 0, "-", "-", "STEP16");
        let back = level.side(open, -100, "SHORT64", "-", "-");
        level.two_sided(front, back);

        let report = scan(&level.build()).unwrap();
        assert_eq!(report.warnings.len(), 2);
        assert!(matches!(
            report.warnings[0],
            Warning::TuttiLower {
                side: Side::Front,
                wall_height: 24,
                ..
            }
        ));
        assert!(matches!(
            report.warnings[1],
            Warning::TuttiUpper {
                side: Side::Back,
                wall_height: 128,
                ..
            }
        ));
    }

    #[test]
    fn missing_texture_is_fatal() {
        let mut level = LevelBuilder::new("E1M1");
        let s = level.sector(0, 128);
        let front = level.side(s, 0, "-", "-", "-");
        let back = level.side(s, 0, "NOSUCH", "-", "-");
        level.two_sided(front, back);

        assert_eq!(
            scan(&level.build()).unwrap_err(),
            ScanError::MissingTexture {
                map: "E1M1".to_owned(),
                linedef: 0,
                name: "NOSUCH".to_owned(),
            }
        );
    }

    #[test]
    fn bad_sector_index_is_fatal() {
        let mut level = LevelBuilder::new("MAP01");
        let side = level.side(7, 0, "-", "SHORT64", "-");
        level.one_sided(side);

        assert_eq!(
            scan(&level.build()).unwrap_err(),
            ScanError::BadSector {
                map: "MAP01".to_owned(),
                linedef: 0,
                sector: 7,
            }
        );
    }

    #[test]
    fn bad_back_sidedef_is_fatal() {
        let mut level = LevelBuilder::new("MAP01");
        let s = level.sector(0, 128);
        let front = level.side(s, 0, "-", "-", "-");
        level.two_sided(front, 12);

        assert!(matches!(
            scan(&level.build()).unwrap_err(),
            ScanError::BadSideDef { sidedef: 12, .. }
        ));
    }

    #[test]
    fn wall_unit_is_configurable() {
        let map = one_sided_wall(0, 256, 0, "SHORT64");
        let config = ScanConfig {
            wall_unit: 64,
            ..ScanConfig::default()
        };
        let mut report = MapReport::new(map.name());
        find_tutti_fruttis(&map, &textures(), &config, &mut report).unwrap();
        assert!(report.is_empty());
    }
}
