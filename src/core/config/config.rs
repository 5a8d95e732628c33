use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "letterfall".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical extent of the orthographic view in world units.
    pub frustum_height: f32,
    /// Vertical center of the view; the ground sits at y = 0.
    pub center_y: f32,
    /// Device pixel ratio cap (the original caps devicePixelRatio at 2).
    pub max_pixel_ratio: f32,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            frustum_height: 10.0,
            center_y: 4.8,
            max_pixel_ratio: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity_y: f32,
    pub friction: f32,
    pub restitution: f32,
    /// Cap on internal catch-up sub-steps per frame.
    pub max_substeps: usize,
    pub ground_half_width: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_y: -9.0,
            friction: 0.1,
            restitution: 0.7,
            max_substeps: 3,
            ground_half_width: 50.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GlyphConfig {
    pub radius: f32,
    pub lifetime_secs: f32,
    pub launch_vx: SpawnRange<f32>,
    pub launch_vy: f32,
    /// Text2d rasterization size; glyphs are scaled back to ~1 world unit.
    pub font_px: f32,
    pub max_pending_chars: usize,
}
impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            radius: 0.25,
            lifetime_secs: 10.0,
            launch_vx: SpawnRange {
                min: -1.0,
                max: 1.0,
            },
            launch_vy: 12.0,
            font_px: 100.0,
            max_pending_chars: 25,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PageTurnConfig {
    pub cooldown_secs: f32,
    pub pool_size: usize,
    pub fill_scale: f32,
    pub fill_secs: f32,
    pub ripple_scale: f32,
    pub ripple_secs: f32,
    pub fade_delay_secs: f32,
    pub fade_secs: f32,
}
impl Default for PageTurnConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: 0.08,
            pool_size: 300,
            fill_scale: 30.0,
            fill_secs: 1.0,
            ripple_scale: 8.0,
            ripple_secs: 1.0,
            fade_delay_secs: 0.25,
            fade_secs: 0.75,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct RgbShiftConfig {
    pub enabled: bool,
    pub amount: f32,
    pub angle_deg: f32,
}
impl Default for RgbShiftConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            amount: 0.004,
            angle_deg: 90.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BloomConfig {
    pub enabled: bool,
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}
impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            strength: 5.8,
            radius: 1.1,
            threshold: 0.17,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct FilmConfig {
    pub enabled: bool,
    pub noise_intensity: f32,
    pub scanline_intensity: f32,
    pub scanline_count: f32,
}
impl Default for FilmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            noise_intensity: 0.25,
            scanline_intensity: 0.2,
            scanline_count: 640.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PixelateConfig {
    pub enabled: bool,
    pub pixel_size: f32,
}
impl Default for PixelateConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            pixel_size: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct VignetteConfig {
    pub enabled: bool,
    pub offset: f32,
    pub darkness: f32,
}
impl Default for VignetteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            offset: 0.95,
            darkness: 1.6,
        }
    }
}

/// Strongly-typed settings for every pass in the fixed effect chain. Pass
/// order is decided at initialization and is not reconfigurable here.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EffectChainConfig {
    pub rgb_shift: RgbShiftConfig,
    pub bloom: BloomConfig,
    pub film: FilmConfig,
    pub pixelate: PixelateConfig,
    pub vignette: VignetteConfig,
    /// 1 disables MSAA, in which case SMAA is appended to the chain instead.
    pub msaa_samples: u32,
}
impl Default for EffectChainConfig {
    fn default() -> Self {
        Self {
            rgb_shift: Default::default(),
            bloom: Default::default(),
            film: Default::default(),
            pixelate: Default::default(),
            vignette: Default::default(),
            msaa_samples: 1,
        }
    }
}

impl EffectChainConfig {
    /// Clamp tunables into usable ranges; invalid values never reach a shader.
    pub fn sanitized(&self) -> Self {
        let mut s = *self;
        s.rgb_shift.amount = s.rgb_shift.amount.clamp(0.0, 0.1);
        s.bloom.strength = s.bloom.strength.clamp(0.0, 10.0);
        s.bloom.radius = s.bloom.radius.clamp(0.0, 2.0);
        s.bloom.threshold = s.bloom.threshold.clamp(0.0, 1.0);
        s.film.noise_intensity = s.film.noise_intensity.clamp(0.0, 1.0);
        s.film.scanline_intensity = s.film.scanline_intensity.clamp(0.0, 1.0);
        s.film.scanline_count = s.film.scanline_count.max(1.0);
        s.pixelate.pixel_size = s.pixelate.pixel_size.clamp(1.0, 64.0);
        s.vignette.offset = s.vignette.offset.clamp(0.0, 3.0);
        s.vignette.darkness = s.vignette.darkness.clamp(0.0, 10.0);
        s
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    /// Contact force magnitude below which impacts stay silent.
    pub impact_force_threshold: f32,
}
impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            impact_force_threshold: 1.5,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub physics: PhysicsConfig,
    pub glyphs: GlyphConfig,
    pub page_turn: PageTurnConfig,
    pub effects: EffectChainConfig,
    pub audio: AudioConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.camera.frustum_height <= 0.0 {
            w.push("camera.frustum_height must be > 0".into());
        }
        if self.physics.gravity_y > 0.0 {
            w.push(format!(
                "physics.gravity_y is positive ({}); glyphs will float upward",
                self.physics.gravity_y
            ));
        }
        if self.physics.max_substeps == 0 {
            w.push("physics.max_substeps is 0; the world will not advance".into());
        }
        if !(0.0..=1.5).contains(&self.physics.restitution) {
            w.push(format!(
                "restitution {} outside recommended 0..1.5",
                self.physics.restitution
            ));
        }
        if self.glyphs.radius <= 0.0 {
            w.push("glyphs.radius must be > 0".into());
        }
        if self.glyphs.lifetime_secs <= 0.0 {
            w.push("glyphs.lifetime_secs <= 0; glyphs vanish immediately".into());
        }
        if self.glyphs.launch_vx.min > self.glyphs.launch_vx.max {
            w.push(format!(
                "glyphs.launch_vx min ({}) greater than max ({})",
                self.glyphs.launch_vx.min, self.glyphs.launch_vx.max
            ));
        }
        if self.page_turn.pool_size == 0 {
            w.push("page_turn.pool_size is 0; page turns will render nothing".into());
        }
        if self.page_turn.cooldown_secs < 0.0 {
            w.push("page_turn.cooldown_secs negative -> treated as no cooldown".into());
        }
        if self.effects != self.effects.sanitized() {
            w.push("effects config contains out-of-range tunables; values were clamped".into());
        }
        if self.audio.impact_force_threshold < 0.0 {
            w.push("audio.impact_force_threshold negative; every touch will click".into());
        }
        w
    }
}
