use crate::lumps::{WadLineDef, WadSector, WadSideDef, WadVertex};

/// All the geometry of one level, as decoded from its map lumps. Sub-tables
/// are addressed by index, the same way the lumps reference each other.
///
/// Indexes are not validated when added, so lookups through them return
/// `Option`.
#[derive(Debug, Default, Clone)]
pub struct WadMap {
    name: String,
    vertexes: Vec<WadVertex>,
    linedefs: Vec<WadLineDef>,
    sidedefs: Vec<WadSideDef>,
    sectors: Vec<WadSector>,
}

impl WadMap {
    pub fn new(name: &str) -> WadMap {
        WadMap {
            name: name.to_owned(),
            ..WadMap::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_vertex(&mut self, v: WadVertex) -> usize {
        self.vertexes.push(v);
        self.vertexes.len() - 1
    }

    pub fn vertexes(&self) -> &[WadVertex] {
        &self.vertexes
    }

    pub fn add_linedef(&mut self, l: WadLineDef) -> usize {
        self.linedefs.push(l);
        self.linedefs.len() - 1
    }

    pub fn linedefs(&self) -> &[WadLineDef] {
        &self.linedefs
    }

    pub fn add_sidedef(&mut self, s: WadSideDef) -> usize {
        self.sidedefs.push(s);
        self.sidedefs.len() - 1
    }

    pub fn sidedefs(&self) -> &[WadSideDef] {
        &self.sidedefs
    }

    pub fn add_sector(&mut self, s: WadSector) -> usize {
        self.sectors.push(s);
        self.sectors.len() - 1
    }

    pub fn sectors(&self) -> &[WadSector] {
        &self.sectors
    }

    pub fn sidedef(&self, index: usize) -> Option<&WadSideDef> {
        self.sidedefs.get(index)
    }

    pub fn sector(&self, index: usize) -> Option<&WadSector> {
        self.sectors.get(index)
    }

    /// The sector a sidedef faces, `None` if its index is past the sector
    /// table
    pub fn sector_of(&self, side: &WadSideDef) -> Option<&WadSector> {
        self.sector(side.sector)
    }

    pub fn front_side(&self, line: &WadLineDef) -> Option<&WadSideDef> {
        self.sidedef(line.front_sidedef)
    }

    /// The back sidedef index of a two-sided line, `None` for one-sided
    /// lines. The index itself is not checked.
    pub fn back_index(&self, line: &WadLineDef) -> Option<usize> {
        line.back_sidedef.filter(|_| line.is_two_sided())
    }
}
