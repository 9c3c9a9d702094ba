//! Asset boundary: named texture and mesh registry, materials, appearance lookup.
//!
//! Assets are identified by content-addressed hashes and looked up by logical
//! name. A missing name is an ordinary `None`, never an error; callers drop
//! the optional attachment instead of failing.
//!
//! # Layout
//! The registry can be written to and read from a JSON manifest.

mod appearance;

pub use appearance::{BodyAppearance, Material, SpriteShading, SpriteStyle};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;

/// Content-addressed asset ID computed from the asset kind, name and path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetId(pub u64);

/// A texture known to the rendering framework by file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture {
    pub name: String,
    pub path: String,
}

/// A mesh known to the rendering framework by file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    pub path: String,
}

/// An asset entry in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Asset {
    Texture(Texture),
    Mesh(Mesh),
}

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Name of the mesh every body is drawn with.
pub const SPHERE_MESH: &str = "sphere";
/// Optional sprite texture for the corona particles.
pub const SUN_FLARE_TEXTURE: &str = "sun_flare";

/// Registry of textures and meshes.
///
/// Textures and meshes live in separate namespaces, so a texture and a mesh
/// may share a logical name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetStore {
    assets: BTreeMap<AssetId, Asset>,
    textures: BTreeMap<String, AssetId>,
    meshes: BTreeMap<String, AssetId>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture under `name`, replacing any previous one.
    pub fn register_texture(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> AssetId {
        let texture = Texture {
            name: name.into(),
            path: path.into(),
        };
        let id = content_hash("texture", &texture.name, &texture.path);
        if let Some(old) = self.textures.insert(texture.name.clone(), id) {
            if old != id {
                self.assets.remove(&old);
            }
        }
        tracing::debug!(name = %texture.name, path = %texture.path, "texture registered");
        self.assets.insert(id, Asset::Texture(texture));
        id
    }

    /// Register a mesh under `name`, replacing any previous one.
    pub fn register_mesh(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> AssetId {
        let mesh = Mesh {
            name: name.into(),
            path: path.into(),
        };
        let id = content_hash("mesh", &mesh.name, &mesh.path);
        if let Some(old) = self.meshes.insert(mesh.name.clone(), id) {
            if old != id {
                self.assets.remove(&old);
            }
        }
        tracing::debug!(name = %mesh.name, path = %mesh.path, "mesh registered");
        self.assets.insert(id, Asset::Mesh(mesh));
        id
    }

    /// Look up a texture handle by logical name.
    pub fn texture(&self, name: &str) -> Option<AssetId> {
        self.textures.get(name).copied()
    }

    /// Look up a mesh handle by logical name.
    pub fn mesh(&self, name: &str) -> Option<AssetId> {
        self.meshes.get(name).copied()
    }

    /// Get an asset by ID.
    pub fn get(&self, id: AssetId) -> Option<&Asset> {
        self.assets.get(&id)
    }

    /// Get a texture by ID.
    pub fn get_texture(&self, id: AssetId) -> Option<&Texture> {
        match self.assets.get(&id) {
            Some(Asset::Texture(t)) => Some(t),
            _ => None,
        }
    }

    /// Get a mesh by ID.
    pub fn get_mesh(&self, id: AssetId) -> Option<&Mesh> {
        match self.assets.get(&id) {
            Some(Asset::Mesh(m)) => Some(m),
            _ => None,
        }
    }

    /// Number of registered assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// The sphere mesh, the nine color textures and the earth normal map.
    ///
    /// The flare sprite is not included; callers fall back to plain points.
    pub fn solar_system_defaults() -> Self {
        let mut store = Self::new();
        store.register_mesh(SPHERE_MESH, "obj/sphere.obj");
        for (name, ext) in [
            ("sun", "jpg"),
            ("mercury", "jpg"),
            ("venus", "jpg"),
            ("earth", "png"),
            ("mars", "jpg"),
            ("jupiter", "jpg"),
            ("saturn", "jpg"),
            ("uranus", "jpg"),
            ("neptune", "jpg"),
        ] {
            store.register_texture(format!("{name}_color"), format!("tex/{name}_color.{ext}"));
        }
        store.register_texture("earth_normal", "tex/earth_normal.png");
        store
    }

    /// Save the asset registry to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AssetError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load an asset registry from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let file = std::fs::File::open(path)?;
        let store: Self = serde_json::from_reader(file)?;
        Ok(store)
    }
}

fn content_hash(kind: &str, name: &str, path: &str) -> AssetId {
    let mut hasher = Sha256::new();
    hasher.update(kind.as_bytes());
    hasher.update([0u8]);
    hasher.update(name.as_bytes());
    hasher.update([0u8]);
    hasher.update(path.as_bytes());
    let result = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&result[..8]);
    AssetId(u64::from_le_bytes(bytes))
}

pub fn crate_info() -> &'static str {
    "orrery-assets v0.1.0"
}
