use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A source had no levels in it, so there is nothing to check against
    NoMaps { source: String },
    /// A sidedef references a texture that neither archive defines
    MissingTexture {
        map: String,
        linedef: usize,
        name: String,
    },
    /// A linedef points at a sidedef past the end of the map's sidedef table
    BadSideDef {
        map: String,
        linedef: usize,
        sidedef: usize,
    },
    /// A sidedef of this linedef faces a sector past the end of the map's
    /// sector table
    BadSector {
        map: String,
        linedef: usize,
        sector: usize,
    },
    /// A composite texture is built from a patch that neither archive defines
    MissingPatch { texture: String, patch: String },
    /// The scan configuration couldn't be parsed
    Config(String),
}

impl Error for ScanError {}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::NoMaps { source } => write!(f, "{source} contains no maps"),
            ScanError::MissingTexture { map, linedef, name } => write!(
                f,
                "{map}: line #{linedef} uses texture {name} which is not defined"
            ),
            ScanError::BadSideDef {
                map,
                linedef,
                sidedef,
            } => write!(
                f,
                "{map}: line #{linedef} uses sidedef #{sidedef} which does not exist"
            ),
            ScanError::BadSector {
                map,
                linedef,
                sector,
            } => write!(
                f,
                "{map}: line #{linedef} faces sector #{sector} which does not exist"
            ),
            ScanError::MissingPatch { texture, patch } => write!(
                f,
                "texture {texture} uses patch {patch} which is not defined"
            ),
            ScanError::Config(m) => write!(f, "invalid scan config: {m}"),
        }
    }
}
