//! Texture handles and the fixed asset table
//!
//! The core never decodes images. It asks the platform's `AssetLoader` for an
//! opaque handle per file at setup and passes the handles through to the
//! renderer untouched.

use thiserror::Error;

use crate::platform::AssetLoader;

pub const LANDER_TEXTURE: &str = "assets/space_ship.png";
pub const STONE_TEXTURE: &str = "assets/StoneFloorTexture_1.png";
pub const FAILED_TEXTURE: &str = "assets/Failed.png";
pub const PASSED_TEXTURE: &str = "assets/Passed.png";
pub const LAND_INDICATOR_TEXTURE: &str = "assets/land_indicator.png";
pub const FLAME_TEXTURE: &str = "assets/fire1.png";
pub const FUEL_TEXTURE: &str = "assets/fuel.png";

/// Opaque texture handle assigned by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unable to load texture {path}: {reason}")]
    TextureLoad { path: String, reason: String },
}

/// Every texture the game shows, loaded once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSet {
    pub lander: TextureId,
    pub stone: TextureId,
    pub failed: TextureId,
    pub passed: TextureId,
    pub land_indicator: TextureId,
    pub flame: TextureId,
    pub fuel: TextureId,
}

impl TextureSet {
    /// Load the full set. Any missing texture is fatal for the run.
    pub fn load<L: AssetLoader + ?Sized>(loader: &mut L) -> Result<Self, AssetError> {
        let set = Self {
            lander: loader.load_texture(LANDER_TEXTURE)?,
            stone: loader.load_texture(STONE_TEXTURE)?,
            failed: loader.load_texture(FAILED_TEXTURE)?,
            passed: loader.load_texture(PASSED_TEXTURE)?,
            land_indicator: loader.load_texture(LAND_INDICATOR_TEXTURE)?,
            flame: loader.load_texture(FLAME_TEXTURE)?,
            fuel: loader.load_texture(FUEL_TEXTURE)?,
        };
        log::debug!("Loaded texture set {:?}", set);
        Ok(set)
    }
}
