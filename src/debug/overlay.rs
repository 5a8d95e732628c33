#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use super::DebugStats;
#[cfg(feature = "debug")]
use crate::rendering::postprocess::EffectChainSettings;

#[cfg(feature = "debug")]
#[derive(Component)]
pub(crate) struct DebugOverlayText;

#[cfg(feature = "debug")]
#[allow(dead_code)]
pub fn debug_overlay_spawn(mut commands: Commands) {
    // Top-left anchored UI text node; default font keeps the overlay asset-free.
    commands.spawn((
        Text::new("(collecting stats...)"),
        TextFont {
            font_size: 14.0,
            ..Default::default()
        },
        TextColor(Color::srgb(0.15, 0.15, 0.15)),
        bevy::ui::Node {
            position_type: bevy::ui::PositionType::Absolute,
            top: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        DebugOverlayText,
    ));
}

#[cfg(feature = "debug")]
#[allow(dead_code)]
pub(crate) fn debug_overlay_update(
    stats: Res<DebugStats>,
    settings: Res<EffectChainSettings>,
    mut q_text: Query<&mut Text, With<DebugOverlayText>>,
) {
    if let Ok(mut text) = q_text.single_mut() {
        if !(stats.is_changed() || settings.is_changed()) {
            return;
        }
        let fx = &settings.0;
        text.0 = format!(
            "fps {:.0} ({:.1} ms)\nglyphs {}\nfx rgb:{} bloom:{} film:{} pix:{} vig:{}",
            stats.fps,
            stats.frame_time_ms,
            stats.glyph_count,
            on_off(fx.rgb_shift.enabled),
            on_off(fx.bloom.enabled),
            on_off(fx.film.enabled),
            on_off(fx.pixelate.enabled),
            on_off(fx.vignette.enabled),
        );
    }
}

#[cfg(feature = "debug")]
fn on_off(v: bool) -> &'static str {
    if v {
        "on"
    } else {
        "off"
    }
}
