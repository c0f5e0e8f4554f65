use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::types::MaterialId;

/// A renderable surface: texture candidates plus an RGBA tint.
/// Texture loading and filtering happen outside this crate; the catalog only
/// carries the data a renderer needs to resolve the surface.
#[derive(Clone, Debug)]
pub struct Material {
    pub id: MaterialId,
    pub key: String,
    pub texture_candidates: Vec<PathBuf>,
    pub tint: [u8; 4],
}

#[derive(Default, Clone, Debug)]
pub struct MaterialCatalog {
    pub materials: Vec<Material>,
    pub by_key: HashMap<String, MaterialId>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    pub fn get_id(&self, key: &str) -> Option<MaterialId> {
        self.by_key.get(key).copied()
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Parses a catalog from TOML. Materials are declared as an ordered array
    /// of tables; ids are assigned in declaration order, so the file is the
    /// single source of truth for palette indices.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: MaterialsConfig = toml::from_str(toml_str)?;
        let mut catalog = MaterialCatalog::new();
        for entry in cfg.materials {
            if catalog.by_key.contains_key(&entry.key) {
                return Err(format!("duplicate material key: {}", entry.key).into());
            }
            let id = MaterialId(catalog.materials.len() as u16);
            catalog.by_key.insert(entry.key.clone(), id);
            catalog.materials.push(Material {
                id,
                key: entry.key,
                texture_candidates: entry.textures.into_iter().map(PathBuf::from).collect(),
                tint: entry.tint.unwrap_or([255, 255, 255, 255]),
            });
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct MaterialsConfig {
    pub materials: Vec<MaterialEntry>,
}

#[derive(Deserialize)]
pub struct MaterialEntry {
    pub key: String,
    pub textures: Vec<String>,
    pub tint: Option<[u8; 4]>,
}
