//! Sprite assets
//!
//! A sprite that fails to load is replaced by a solid placeholder of the
//! requested size. Missing art never stops the game.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use thiserror::Error;

use crate::consts::{BOSS_SIZE, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::renderer::{Color, colors};

pub const PLAYER_SPRITE: &str = "player.png";
pub const BOSS_SPRITE: &str = "boss.png";

/// Asset loading failures
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid sprite size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Decoded RGBA8 sprite at its display size
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes
    pub rgba: Vec<u8>,
    /// True when this is a stand-in for an image that failed to load
    pub placeholder: bool,
}

impl Sprite {
    /// Solid-color stand-in
    pub fn placeholder(width: u32, height: u32, color: Color) -> Self {
        let px = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        let rgba = px.repeat((width * height) as usize);
        Self {
            width,
            height,
            rgba,
            placeholder: true,
        }
    }

    /// Mean color of the opaque pixels, used where only a flat fill is drawn
    pub fn tint(&self) -> Color {
        let mut sum = [0u64; 3];
        let mut count = 0u64;
        for px in self.rgba.chunks_exact(4).filter(|px| px[3] > 0) {
            for (acc, &c) in sum.iter_mut().zip(px) {
                *acc += c as u64;
            }
            count += 1;
        }
        if count == 0 {
            return [0.0; 4];
        }
        let channel = |total: u64| total as f32 / count as f32 / 255.0;
        [channel(sum[0]), channel(sum[1]), channel(sum[2]), 1.0]
    }
}

/// Supplies sprites by path
pub trait AssetProvider {
    /// Load the image at `path`, scaled to exactly `width` x `height`
    fn load_sprite(&self, path: &Path, width: u32, height: u32) -> Result<Sprite, AssetError>;
}

/// Decodes images from disk relative to a root directory
#[derive(Debug, Clone)]
pub struct ImageAssets {
    root: PathBuf,
}

impl ImageAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetProvider for ImageAssets {
    fn load_sprite(&self, path: &Path, width: u32, height: u32) -> Result<Sprite, AssetError> {
        if width == 0 || height == 0 {
            return Err(AssetError::InvalidSize { width, height });
        }

        let full = self.root.join(path);
        let img = image::open(&full).map_err(|source| AssetError::Image {
            path: full.clone(),
            source,
        })?;
        let rgba = img
            .resize_exact(width, height, FilterType::Nearest)
            .to_rgba8()
            .into_raw();

        log::debug!("Loaded sprite {} ({}x{})", full.display(), width, height);
        Ok(Sprite {
            width,
            height,
            rgba,
            placeholder: false,
        })
    }
}

/// Load a sprite, substituting a placeholder of the same size on failure
pub fn load_or_placeholder(
    assets: &dyn AssetProvider,
    path: &Path,
    width: u32,
    height: u32,
    fallback: Color,
) -> Sprite {
    match assets.load_sprite(path, width, height) {
        Ok(sprite) => sprite,
        Err(e) => {
            log::warn!("Using placeholder for {}: {}", path.display(), e);
            Sprite::placeholder(width, height, fallback)
        }
    }
}

/// Every sprite the scene draws
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub player: Sprite,
    pub boss: Sprite,
}

impl SpriteSheet {
    pub fn load(assets: &dyn AssetProvider) -> Self {
        Self {
            player: load_or_placeholder(
                assets,
                Path::new(PLAYER_SPRITE),
                PLAYER_WIDTH as u32,
                PLAYER_HEIGHT as u32,
                colors::WHITE,
            ),
            boss: load_or_placeholder(
                assets,
                Path::new(BOSS_SPRITE),
                BOSS_SIZE as u32,
                BOSS_SIZE as u32,
                colors::RED,
            ),
        }
    }

    /// Placeholders only, for headless runs and tests
    pub fn placeholders() -> Self {
        Self {
            player: Sprite::placeholder(PLAYER_WIDTH as u32, PLAYER_HEIGHT as u32, colors::WHITE),
            boss: Sprite::placeholder(BOSS_SIZE as u32, BOSS_SIZE as u32, colors::RED),
        }
    }
}
