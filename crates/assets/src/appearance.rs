use serde::{Deserialize, Serialize};

use crate::{AssetId, AssetStore, SPHERE_MESH, SUN_FLARE_TEXTURE};

/// Phong material coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl Material {
    /// Self-lit look for the light source: high ambient, no highlights.
    pub fn emissive() -> Self {
        Self {
            ambient: [0.9, 0.9, 0.8],
            diffuse: [1.0, 1.0, 0.95],
            specular: [0.0, 0.0, 0.0],
            shininess: 1.0,
        }
    }

    /// Lit by the sun: low ambient, moderate highlights.
    pub fn planet() -> Self {
        Self {
            ambient: [0.05, 0.05, 0.05],
            diffuse: [0.8, 0.8, 0.8],
            specular: [0.3, 0.3, 0.3],
            shininess: 32.0,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::planet()
    }
}

/// Everything the renderer needs to draw one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyAppearance {
    pub mesh: Option<AssetId>,
    pub color: Option<AssetId>,
    /// Attached only when a matching `*_normal` texture exists.
    pub normal: Option<AssetId>,
    pub material: Material,
}

impl BodyAppearance {
    /// Resolve the assets for a body whose color texture is `texture_name`.
    ///
    /// The normal map name is `texture_name` with `_color` replaced by
    /// `_normal`. Missing assets are left as `None`.
    pub fn resolve(store: &AssetStore, texture_name: &str, emissive: bool) -> Self {
        let mesh = store.mesh(SPHERE_MESH);
        let color = store.texture(texture_name);
        if color.is_none() {
            tracing::warn!(texture = texture_name, "color texture not registered");
        }
        let normal = normal_map_name(texture_name).and_then(|n| store.texture(&n));
        tracing::debug!(
            texture = texture_name,
            has_normal = normal.is_some(),
            "appearance resolved"
        );

        Self {
            mesh,
            color,
            normal,
            material: if emissive {
                Material::emissive()
            } else {
                Material::planet()
            },
        }
    }
}

/// `earth_color` -> `earth_normal`. `None` when the name has no `_color` part.
pub fn normal_map_name(texture_name: &str) -> Option<String> {
    texture_name
        .find("_color")
        .map(|pos| format!("{}_normal{}", &texture_name[..pos], &texture_name[pos + 6..]))
}

/// How corona particles are shaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpriteShading {
    /// Alpha-blended textured sprites.
    Textured(AssetId),
    /// Plain colored points.
    Untextured,
}

/// Draw settings for the particle corona.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteStyle {
    pub shading: SpriteShading,
    pub tint: [f32; 4],
    pub point_size: f32,
}

impl SpriteStyle {
    pub const POINT_SIZE: f32 = 64.0;

    /// Use the flare sprite when registered, colored points otherwise.
    pub fn resolve(store: &AssetStore) -> Self {
        match store.texture(SUN_FLARE_TEXTURE) {
            Some(id) => Self {
                shading: SpriteShading::Textured(id),
                tint: [1.0, 0.7, 0.2, 1.0],
                point_size: Self::POINT_SIZE,
            },
            None => {
                tracing::debug!("no flare sprite, using plain points");
                Self {
                    shading: SpriteShading::Untextured,
                    tint: [1.0, 0.65, 0.1, 1.0],
                    point_size: Self::POINT_SIZE,
                }
            }
        }
    }

    pub fn is_textured(&self) -> bool {
        matches!(self.shading, SpriteShading::Textured(_))
    }
}
