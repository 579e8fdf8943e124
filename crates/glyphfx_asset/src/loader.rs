use std::{collections::HashMap, fs::File, io::Read, path::Path};

use anyhow::anyhow;
use log::debug;

#[derive(Clone)]
pub struct Asset {
    pub bytes: Vec<u8>,
}

/// Identifies one face of a font family, e.g. ("Roboto", "Bold").
#[derive(Eq, Hash, PartialEq, Clone, Debug)]
pub struct FaceKey {
    pub family: String,
    pub style: String,
}

impl FaceKey {
    pub fn new(family: &str, style: &str) -> Self {
        Self {
            family: family.to_string(),
            style: style.to_string(),
        }
    }
}

/// Keeps font files in memory, keyed by the path (or name) they were loaded from.
/// Faces map a family + style pair onto one of the loaded assets.
pub struct Loader {
    assets: HashMap<String, Asset>,
    faces: HashMap<FaceKey, String>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            assets: HashMap::new(),
            faces: HashMap::new(),
        }
    }

    pub fn get_font_by_family(&self, family: &str, style: &str) -> anyhow::Result<Asset> {
        let key = FaceKey::new(family, style);
        let path = self
            .faces
            .get(&key)
            .ok_or(anyhow!("No font registered for '{}' ({}).", family, style))?;
        let asset = self
            .assets
            .get(path)
            .ok_or(anyhow!("Path '{}' doesn't exist in asset map.", path))?;
        Ok(asset.clone())
    }

    pub fn load<S: AsRef<Path>>(&mut self, path: S) -> anyhow::Result<()> {
        let mut file = File::open(path.as_ref())?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        debug!("loaded {} bytes from {}", bytes.len(), path.as_ref().display());
        self.assets
            .insert(path.as_ref().to_string_lossy().into_owned(), Asset { bytes });
        Ok(())
    }

    /// Stores an asset that didn't come from disk (embedded fonts, tests).
    pub fn insert(&mut self, name: &str, bytes: Vec<u8>) {
        self.assets.insert(name.to_string(), Asset { bytes });
    }

    /// Loads `path` (unless it is already loaded) and makes it the font for `family` + `style`.
    pub fn register_face<S: AsRef<Path>>(
        &mut self,
        family: &str,
        style: &str,
        path: S,
    ) -> anyhow::Result<()> {
        let name = path.as_ref().to_string_lossy().into_owned();
        if !self.assets.contains_key(&name) {
            self.load(path.as_ref())?;
        }
        self.faces.insert(FaceKey::new(family, style), name);
        Ok(())
    }

    /// Same as [Loader::register_face] for an asset already stored under `name`.
    pub fn register_face_by_name(
        &mut self,
        family: &str,
        style: &str,
        name: &str,
    ) -> anyhow::Result<()> {
        if !self.assets.contains_key(name) {
            return Err(anyhow!("Path '{}' doesn't exist in asset map.", name));
        }
        self.faces
            .insert(FaceKey::new(family, style), name.to_string());
        Ok(())
    }

    pub fn faces(&self) -> impl Iterator<Item = &FaceKey> {
        self.faces.keys()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
