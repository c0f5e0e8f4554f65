use serde::Deserialize;

/// Top-level blocks config file.
#[derive(Deserialize)]
pub struct BlocksConfig {
    /// Catalog key of the material used when a block or face role has no
    /// mapping of its own. Mandatory: selection must never come up empty.
    pub unknown_material: String,
    pub blocks: Vec<BlockDef>,
}

#[derive(Deserialize)]
pub struct BlockDef {
    pub name: String,
    /// Explicit type code. When present it must equal the block's position in
    /// the file; it exists so the codes are visible where the blocks are
    /// declared rather than implied by ordering.
    pub id: Option<u16>,
    pub solid: Option<bool>,
    pub materials: Option<MaterialsDef>,
}

/// Face-role material selectors, by catalog key.
#[derive(Default, Deserialize)]
pub struct MaterialsDef {
    pub all: Option<String>,
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub side: Option<String>,
}
