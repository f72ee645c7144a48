use crate::lumps::{WadPatch, WadTexture};
use crate::map::WadMap;

/// Anything that can hand over the decoded contents of an archive.
///
/// Lookups by name happen downstream, so implementors only need to expose the
/// records in archive order.
pub trait WadSource {
    /// Used to identify the source in errors and logs, typically the file stem
    fn name(&self) -> &str;

    /// Composite texture definitions from `TEXTURE1` and `TEXTURE2`
    fn textures(&self) -> &[WadTexture];

    /// Patches named in `PNAMES`, with their picture dimensions
    fn patches(&self) -> &[WadPatch];

    /// Every level in the archive, in directory order
    fn maps(&self) -> &[WadMap];
}

/// An owned, fully decoded archive
#[derive(Debug, Default, Clone)]
pub struct WadResources {
    name: String,
    textures: Vec<WadTexture>,
    patches: Vec<WadPatch>,
    maps: Vec<WadMap>,
}

impl WadResources {
    pub fn new(name: &str) -> WadResources {
        WadResources {
            name: name.to_owned(),
            ..WadResources::default()
        }
    }

    pub fn add_texture(&mut self, texture: WadTexture) {
        self.textures.push(texture);
    }

    pub fn add_patch(&mut self, patch: WadPatch) {
        self.patches.push(patch);
    }

    pub fn add_map(&mut self, map: WadMap) {
        self.maps.push(map);
    }

    pub fn with_texture(mut self, texture: WadTexture) -> Self {
        self.add_texture(texture);
        self
    }

    pub fn with_patch(mut self, patch: WadPatch) -> Self {
        self.add_patch(patch);
        self
    }

    pub fn with_map(mut self, map: WadMap) -> Self {
        self.add_map(map);
        self
    }
}

impl WadSource for WadResources {
    fn name(&self) -> &str {
        &self.name
    }

    fn textures(&self) -> &[WadTexture] {
        &self.textures
    }

    fn patches(&self) -> &[WadPatch] {
        &self.patches
    }

    fn maps(&self) -> &[WadMap] {
        &self.maps
    }
}
