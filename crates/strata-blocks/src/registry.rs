use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::{BlocksConfig, MaterialsDef};
use super::material::MaterialCatalog;
use super::types::{Block, BlockId, FaceRole, MaterialId};

/// Per-role material selection compiled from a block's config.
#[derive(Default, Clone, Debug)]
pub struct CompiledMaterials {
    pub all: Option<MaterialId>,
    pub top: Option<MaterialId>,
    pub bottom: Option<MaterialId>,
    pub side: Option<MaterialId>,
}

impl CompiledMaterials {
    /// Resolves a face role to a material, falling through to the `all`
    /// selector. `None` means the registry-wide fallback applies.
    pub fn material_for(&self, role: FaceRole) -> Option<MaterialId> {
        match role {
            FaceRole::Top => self.top.or(self.all),
            FaceRole::Bottom => self.bottom.or(self.all),
            FaceRole::Side => self.side.or(self.all),
            FaceRole::All => self.all,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    pub solid: bool,
    pub materials: CompiledMaterials,
}

#[derive(Clone, Debug)]
pub struct BlockRegistry {
    pub materials: MaterialCatalog,
    pub blocks: Vec<BlockType>,
    pub by_name: HashMap<String, BlockId>,
    pub fallback_material: MaterialId,
}

impl BlockRegistry {
    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(id as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    /// A block is solid when its type says so; codes without a registry entry
    /// count as solid unless they are air. Visibility and face emission key
    /// off this exclusively.
    #[inline]
    pub fn is_solid(&self, b: Block) -> bool {
        self.get(b.id).map(|ty| ty.solid).unwrap_or(!b.is_air())
    }

    /// Total material lookup: unknown block codes and unmapped face roles
    /// resolve to the fallback material, never to "unset".
    #[inline]
    pub fn material_for_face(&self, b: Block, role: FaceRole) -> MaterialId {
        self.get(b.id)
            .and_then(|ty| ty.materials.material_for(role))
            .unwrap_or(self.fallback_material)
    }

    /// The built-in palette and block set shipped with the crate:
    /// grass_side = 0, grass_top = 1, dirt = 2, cobble_stone = 3.
    pub fn embedded() -> Result<Self, Box<dyn Error>> {
        let materials =
            MaterialCatalog::from_toml_str(include_str!("../../../assets/voxels/materials.toml"))?;
        let cfg: BlocksConfig = toml::from_str(include_str!("../../../assets/voxels/blocks.toml"))?;
        Self::from_configs(materials, cfg)
    }

    pub fn load_from_paths(
        materials_path: impl AsRef<Path>,
        blocks_path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn Error>> {
        let materials = MaterialCatalog::from_path(materials_path)?;
        let blocks_toml = fs::read_to_string(blocks_path)?;
        let cfg: BlocksConfig = toml::from_str(&blocks_toml)?;
        Self::from_configs(materials, cfg)
    }

    pub fn from_configs(
        materials: MaterialCatalog,
        cfg: BlocksConfig,
    ) -> Result<Self, Box<dyn Error>> {
        let fallback_material = materials
            .get_id(&cfg.unknown_material)
            .ok_or_else(|| format!("unknown_material not in catalog: {}", cfg.unknown_material))?;
        let mut reg = BlockRegistry {
            materials,
            blocks: Vec::new(),
            by_name: HashMap::new(),
            fallback_material,
        };
        for def in cfg.blocks.into_iter() {
            let id = reg.blocks.len() as BlockId;
            // `blocks` doubles as the id -> type table, so declared codes must
            // match file position.
            if let Some(explicit) = def.id {
                if explicit != id {
                    return Err(format!(
                        "block '{}' declares id {} but sits at position {}",
                        def.name, explicit, id
                    )
                    .into());
                }
            }
            let mats = compile_materials(&reg.materials, def.materials)?;
            if reg.by_name.contains_key(&def.name) {
                return Err(format!("duplicate block name: {}", def.name).into());
            }
            reg.by_name.insert(def.name.clone(), id);
            reg.blocks.push(BlockType {
                id,
                name: def.name,
                solid: def.solid.unwrap_or(true),
                materials: mats,
            });
        }
        Ok(reg)
    }
}

fn compile_materials(
    catalog: &MaterialCatalog,
    def: Option<MaterialsDef>,
) -> Result<CompiledMaterials, Box<dyn Error>> {
    let def = def.unwrap_or_default();
    let resolve = |key: Option<String>| -> Result<Option<MaterialId>, Box<dyn Error>> {
        match key {
            None => Ok(None),
            Some(k) => catalog
                .get_id(&k)
                .map(Some)
                .ok_or_else(|| format!("material key not in catalog: {k}").into()),
        }
    };
    Ok(CompiledMaterials {
        all: resolve(def.all)?,
        top: resolve(def.top)?,
        bottom: resolve(def.bottom)?,
        side: resolve(def.side)?,
    })
}
