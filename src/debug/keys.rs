//! Effect-chain hotkeys (debug builds): F1..F5 toggle individual passes,
//! F8 cycles the pixelate block size, F9/F10 nudge the rgb shift amount.

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::rendering::postprocess::EffectChainSettings;

#[cfg(feature = "debug")]
const PIXEL_SIZES: [f32; 5] = [2.0, 4.0, 8.0, 16.0, 32.0];

#[cfg(feature = "debug")]
pub fn debug_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<EffectChainSettings>,
) {
    if keys.just_pressed(KeyCode::F1) {
        settings.0.rgb_shift.enabled = !settings.0.rgb_shift.enabled;
        info!(target: "debug", "rgb shift {}", settings.0.rgb_shift.enabled);
    }
    if keys.just_pressed(KeyCode::F2) {
        settings.0.bloom.enabled = !settings.0.bloom.enabled;
        info!(target: "debug", "bloom {}", settings.0.bloom.enabled);
    }
    if keys.just_pressed(KeyCode::F3) {
        settings.0.film.enabled = !settings.0.film.enabled;
        info!(target: "debug", "film {}", settings.0.film.enabled);
    }
    if keys.just_pressed(KeyCode::F4) {
        settings.0.pixelate.enabled = !settings.0.pixelate.enabled;
        info!(target: "debug", "pixelate {}", settings.0.pixelate.enabled);
    }
    if keys.just_pressed(KeyCode::F5) {
        settings.0.vignette.enabled = !settings.0.vignette.enabled;
        info!(target: "debug", "vignette {}", settings.0.vignette.enabled);
    }
    if keys.just_pressed(KeyCode::F8) {
        let current = settings.0.pixelate.pixel_size;
        let next = PIXEL_SIZES
            .iter()
            .position(|&s| s > current)
            .map(|i| PIXEL_SIZES[i])
            .unwrap_or(PIXEL_SIZES[0]);
        settings.0.pixelate.pixel_size = next;
        info!(target: "debug", "pixel size {next}");
    }
    if keys.just_pressed(KeyCode::F9) {
        settings.0.rgb_shift.amount = (settings.0.rgb_shift.amount - 0.001).max(0.0);
        info!(target: "debug", "rgb shift amount {}", settings.0.rgb_shift.amount);
    }
    if keys.just_pressed(KeyCode::F10) {
        settings.0.rgb_shift.amount = (settings.0.rgb_shift.amount + 0.001).min(0.1);
        info!(target: "debug", "rgb shift amount {}", settings.0.rgb_shift.amount);
    }
}
