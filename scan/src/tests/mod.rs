
use wad::{WadLineDef, WadMap, WadSector, WadSideDef, WadVertex};

/// Builds small maps for tests. Each line gets its own pair of vertexes,
/// line `k` runs from `(0, 64k)` to `(64, 64k)`.
pub(crate) struct LevelBuilder {
    map: WadMap,
}

impl LevelBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            map: WadMap::new(name),
        }
    }

    pub fn sector(&mut self, floor: i16, ceil: i16) -> usize {
        self.map.add_sector(WadSector::new(floor, ceil))
    }

    pub fn side(
        &mut self,
        sector: usize,
        y_offset: i16,
        upper: &str,
        mid: &str,
        lower: &str,
    ) -> usize {
        self.map
            .add_sidedef(WadSideDef::new(0, y_offset, upper, lower, mid, sector))
    }

    fn vertexes(&mut self) -> (usize, usize) {
        let y = self.map.linedefs().len() as i16 * 64;
        let v1 = self.map.add_vertex(WadVertex::new(0, y));
        let v2 = self.map.add_vertex(WadVertex::new(64, y));
        (v1, v2)
    }

    pub fn one_sided(&mut self, front: usize) -> usize {
        let (v1, v2) = self.vertexes();
        self.map.add_linedef(WadLineDef::one_sided(v1, v2, front))
    }

    pub fn two_sided(&mut self, front: usize, back: usize) -> usize {
        let (v1, v2) = self.vertexes();
        self.map.add_linedef(WadLineDef::two_sided(v1, v2, front, back))
    }

    pub fn build(self) -> WadMap {
        self.map
    }
}

/// Logs go to the test harness capture
pub(crate) fn init_logger() {
    let _ = simplelog::TestLogger::init(log::LevelFilter::Debug, simplelog::Config::default());
}
