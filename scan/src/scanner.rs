use log::{info, warn};
use rayon::prelude::*;
use wad::{WadMap, WadSource};

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::medusa::find_medusas;
use crate::overlap::OverlapSet;
use crate::report::{MapReport, Report};
use crate::tables::{PatchTable, TextureTable};
use crate::tutti::find_tutti_fruttis;

/// Holds the merged resource tables for a base + overlay pair, ready to check
/// maps against.
#[derive(Debug, Clone)]
pub struct Scanner {
    textures: TextureTable,
    patches: PatchTable,
    overlapping: OverlapSet,
    config: ScanConfig,
}

impl Scanner {
    /// Merge the texture and patch tables of both sources, the overlay
    /// replacing base entries of the same name, then find the textures with
    /// overlapping patches.
    ///
    /// Both sources must contain at least one map.
    pub fn new(
        base: &impl WadSource,
        overlay: &impl WadSource,
        config: ScanConfig,
    ) -> Result<Self, ScanError> {
        if base.maps().is_empty() {
            return Err(ScanError::NoMaps {
                source: base.name().to_owned(),
            });
        }
        if overlay.maps().is_empty() {
            return Err(ScanError::NoMaps {
                source: overlay.name().to_owned(),
            });
        }

        let textures = TextureTable::merge(base, overlay);
        let patches = PatchTable::merge(base, overlay);
        info!(
            "Merged {} textures and {} patches from {} and {}",
            textures.len(),
            patches.len(),
            base.name(),
            overlay.name()
        );

        let overlapping = if config.medusa {
            OverlapSet::build(&textures, &patches)?
        } else {
            OverlapSet::default()
        };

        Ok(Self {
            textures,
            patches,
            overlapping,
            config,
        })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn textures(&self) -> &TextureTable {
        &self.textures
    }

    pub fn patches(&self) -> &PatchTable {
        &self.patches
    }

    pub fn overlapping(&self) -> &OverlapSet {
        &self.overlapping
    }

    /// Medusa pass then tutti-frutti pass over one map
    pub fn scan_map(&self, map: &WadMap) -> Result<MapReport, ScanError> {
        let mut report = MapReport::new(map.name());
        if self.config.medusa {
            find_medusas(map, &self.textures, &self.overlapping, &mut report)?;
        }
        if self.config.tutti_frutti {
            find_tutti_fruttis(map, &self.textures, &self.config, &mut report)?;
        }
        if !report.is_empty() {
            warn!("{}: {} warnings", map.name(), report.warnings.len());
        }
        Ok(report)
    }

    /// Scan each map, keeping the reports that have warnings. Reports are in
    /// the same order as `maps` whether or not the scan runs in parallel.
    pub fn scan_maps(&self, maps: &[WadMap]) -> Result<Report, ScanError> {
        info!("Scanning {} maps", maps.len());
        let reports: Vec<MapReport> = if self.config.parallel {
            maps.par_iter()
                .map(|m| self.scan_map(m))
                .collect::<Result<Vec<_>, ScanError>>()?
        } else {
            maps.iter()
                .map(|m| self.scan_map(m))
                .collect::<Result<Vec<_>, ScanError>>()?
        };

        let mut report = Report::default();
        for map in reports {
            report.push(map);
        }
        info!(
            "{} warnings across {} maps",
            report.warning_count(),
            report.maps.len()
        );
        Ok(report)
    }
}

/// Check every map of `overlay` using resources from both archives
pub fn scan(
    base: &impl WadSource,
    overlay: &impl WadSource,
    config: ScanConfig,
) -> Result<Report, ScanError> {
    Scanner::new(base, overlay, config)?.scan_maps(overlay.maps())
}
