//! Decoded lump records. Everything here is a read-only snapshot produced by
//! an archive decoder; nothing in the scanner mutates these.

/// Texture name used by a `SideDef` slot that has no texture
pub const NO_TEXTURE: &str = "-";

/// A `Patch` is a single picture that composite textures are built from. Only
/// the dimensions matter for scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WadPatch {
    pub name: String,
    pub width: i32,
    pub height: i32,
}

impl WadPatch {
    pub fn new(name: &str, width: i32, height: i32) -> WadPatch {
        WadPatch {
            name: name.to_owned(),
            width,
            height,
        }
    }
}

/// Placement of a named patch inside a composite texture. `x` and `y` are the
/// offset of the patch's top-left corner from the texture origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WadPatchPlace {
    pub name: String,
    pub x: i32,
    pub y: i32,
}

impl WadPatchPlace {
    pub fn new(name: &str, x: i32, y: i32) -> WadPatchPlace {
        WadPatchPlace {
            name: name.to_owned(),
            x,
            y,
        }
    }
}

/// A composite wall texture as defined in `TEXTURE1`/`TEXTURE2`.
///
/// The patches are kept in the order the archive lists them. `height` is the
/// height the texture was declared with, which is what the renderer wraps on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WadTexture {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub patches: Vec<WadPatchPlace>,
}

impl WadTexture {
    pub fn new(name: &str, width: i32, height: i32, patches: Vec<WadPatchPlace>) -> WadTexture {
        WadTexture {
            name: name.to_owned(),
            width,
            height,
            patches,
        }
    }
}

/// A `Vertex` is the basic struct used for any type of coordinate
/// in the map
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WadVertex {
    pub x: i16,
    pub y: i16,
}

impl WadVertex {
    pub fn new(x: i16, y: i16) -> WadVertex {
        WadVertex { x, y }
    }
}

/// A `Sector` is a horizontal area of the level where a floor height and
/// ceiling height is defined.
///
/// `ceil_height >= floor_height` by convention only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WadSector {
    pub floor_height: i16,
    pub ceil_height: i16,
}

impl WadSector {
    pub fn new(floor_height: i16, ceil_height: i16) -> WadSector {
        WadSector {
            floor_height,
            ceil_height,
        }
    }

    pub fn height(&self) -> i32 {
        self.ceil_height as i32 - self.floor_height as i32
    }
}

/// A sidedef is a definition of what wall texture(s) to draw along a
/// `LineDef`, and a group of sidedefs outline the space of a `Sector`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WadSideDef {
    pub x_offset: i16,
    pub y_offset: i16,
    /// Name of upper texture used for example in the upper of a window
    pub upper_tex: String,
    /// Name of lower texture used for example in the front of a step
    pub lower_tex: String,
    /// The regular part of a wall
    pub middle_tex: String,
    /// Sector that this sidedef faces or helps to surround
    pub sector: usize,
}

impl WadSideDef {
    pub fn new(
        x_offset: i16,
        y_offset: i16,
        upper_tex: &str,
        lower_tex: &str,
        middle_tex: &str,
        sector: usize,
    ) -> WadSideDef {
        WadSideDef {
            x_offset,
            y_offset,
            upper_tex: upper_tex.to_owned(),
            lower_tex: lower_tex.to_owned(),
            middle_tex: middle_tex.to_owned(),
            sector,
        }
    }

    /// Texture name in the slot, or `None` for the `-` sentinel
    pub fn texture(&self, slot: TexSlot) -> Option<&str> {
        let name = match slot {
            TexSlot::Lower => &self.lower_tex,
            TexSlot::Middle => &self.middle_tex,
            TexSlot::Upper => &self.upper_tex,
        };
        if name == NO_TEXTURE {
            None
        } else {
            Some(name)
        }
    }
}

/// The three texture slots of a `SideDef`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TexSlot {
    Lower,
    Middle,
    Upper,
}

impl TexSlot {
    pub const ALL: [TexSlot; 3] = [TexSlot::Lower, TexSlot::Middle, TexSlot::Upper];
}

/// The linedef flag bits the scanner looks at. The rest of the flags only
/// matter to the engine and are carried untouched in `WadLineDef::flags`.
pub enum LineDefFlags {
    /// Players and monsters can't cross the line
    Blocking = 1,
    /// The line separates two sectors and the back sidedef is drawn. Without
    /// it the engine treats the line as a solid wall.
    TwoSided = 1 << 2,
}

/// Each linedef represents a line from one of the VERTEXES to another.
///
/// A Linedef will always have at least one side. This first side is referred to
/// as either front or right. If you imagine a linedef starting from the bottom
/// of the screen travelling upwards then the right side of this line is the first
/// valid side (and is the front).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WadLineDef {
    /// The line starts from this point
    pub start_vertex: usize,
    /// The line ends at this point
    pub end_vertex: usize,
    /// The line attributes, see `LineDefFlags`
    pub flags: u16,
    /// Index of the front (right) `SideDef` for this line
    pub front_sidedef: usize,
    /// Index of the back (left) `SideDef` for this line. Present iff the
    /// line is two-sided.
    pub back_sidedef: Option<usize>,
}

impl WadLineDef {
    /// A one-sided line, flags are cleared of `TwoSided`
    pub fn one_sided(start_vertex: usize, end_vertex: usize, front_sidedef: usize) -> WadLineDef {
        WadLineDef {
            start_vertex,
            end_vertex,
            flags: LineDefFlags::Blocking as u16,
            front_sidedef,
            back_sidedef: None,
        }
    }

    pub fn two_sided(
        start_vertex: usize,
        end_vertex: usize,
        front_sidedef: usize,
        back_sidedef: usize,
    ) -> WadLineDef {
        WadLineDef {
            start_vertex,
            end_vertex,
            flags: LineDefFlags::TwoSided as u16,
            front_sidedef,
            back_sidedef: Some(back_sidedef),
        }
    }

    /// The back side only counts if the flag says so; a stray back sidedef on
    /// a line without `TwoSided` is ignored just like the engine does.
    pub fn is_two_sided(&self) -> bool {
        self.flags & LineDefFlags::TwoSided as u16 != 0 && self.back_sidedef.is_some()
    }
}
