//! The cooldown-gated "page turn": advance the palette, restyle live glyphs,
//! and play the fill/ripple sprite pair. Animations are fire-and-forget; a
//! retrigger before completion may reuse the same pooled sprite and the
//! visuals overlap (accepted, not guarded against).

use bevy::prelude::*;

use crate::core::components::{Glyph, GlyphColors};
use crate::core::config::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::effects::{
    AlphaFade, Easing, EffectPool, EffectSprite, ScaleTween, TweenFinish, FILL_POSITION,
    RIPPLE_POSITION,
};
use crate::gameplay::palette::{page_turn_colors, ColorCycle, GlyphStyle};

/// Cooldown gate: a trigger is accepted only once the previous deadline has
/// passed; acceptance re-arms the deadline.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PageTurnCooldown {
    next_allowed: f64,
}

impl PageTurnCooldown {
    pub fn ready(&self, now: f64) -> bool {
        now >= self.next_allowed
    }

    /// Accept and arm, or reject.
    pub fn try_trigger(&mut self, now: f64, cooldown: f64) -> bool {
        if !self.ready(now) {
            return false;
        }
        self.next_allowed = now + cooldown;
        true
    }
}

/// Request to turn the page. Keyboard requests go through the cooldown; the
/// startup turn (`force`) bypasses it, matching the original's direct call
/// during scene construction.
#[derive(Event, Debug, Clone, Copy)]
pub struct PageTurnRequested {
    pub force: bool,
}

pub struct PageTurnPlugin;

impl Plugin for PageTurnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PageTurnCooldown>()
            .init_resource::<ColorCycle>()
            .init_resource::<GlyphStyle>()
            .add_event::<PageTurnRequested>()
            .add_systems(PostStartup, initial_page_turn)
            .add_systems(Update, handle_page_turn.in_set(PrePhysicsSet));
    }
}

/// The original fires one fill during scene construction so the first page
/// already has a color pair before any input arrives.
fn initial_page_turn(mut turns: EventWriter<PageTurnRequested>) {
    turns.write(PageTurnRequested { force: true });
}

#[allow(clippy::too_many_arguments)]
fn handle_page_turn(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut commands: Commands,
    mut events: EventReader<PageTurnRequested>,
    mut cooldown: ResMut<PageTurnCooldown>,
    mut cycle: ResMut<ColorCycle>,
    mut style: ResMut<GlyphStyle>,
    pool: Option<ResMut<EffectPool>>,
    mut q_sprites: Query<(&mut Sprite, &mut Transform), With<EffectSprite>>,
    mut q_glyphs: Query<&mut GlyphColors, With<Glyph>>,
) {
    let Some(mut pool) = pool else {
        events.clear();
        return;
    };
    let now = time.elapsed_secs_f64();
    let pt = &cfg.page_turn;
    for ev in events.read() {
        if !ev.force && !cooldown.try_trigger(now, pt.cooldown_secs as f64) {
            continue;
        }
        let colors = page_turn_colors(&mut cycle);
        *style = GlyphStyle {
            fill: colors.held,
            outline: colors.incoming,
        };

        // Restyle every live glyph to the new pair.
        for mut gc in q_glyphs.iter_mut() {
            gc.fill = colors.held;
            gc.outline = colors.incoming;
        }

        // Fill sweep: grows to cover the page, then commits the backdrop.
        let fill = pool.acquire_next();
        if let Ok((mut sprite, mut tf)) = q_sprites.get_mut(fill) {
            sprite.color = colors.incoming.with_alpha(1.0);
            tf.translation = FILL_POSITION;
            commands.entity(fill).remove::<AlphaFade>().insert(ScaleTween {
                from: tf.scale.truncate(),
                to: Vec2::splat(pt.fill_scale),
                duration: pt.fill_secs,
                elapsed: 0.0,
                easing: Easing::Linear,
                on_complete: TweenFinish::CommitBackdrop(colors.incoming),
            });
        }

        // Ripple: smaller burst in the old color, fading out after a beat.
        let ripple = pool.acquire_next();
        if let Ok((mut sprite, mut tf)) = q_sprites.get_mut(ripple) {
            sprite.color = colors.held.with_alpha(1.0);
            tf.translation = RIPPLE_POSITION;
            commands.entity(ripple).insert((
                ScaleTween {
                    from: tf.scale.truncate(),
                    to: Vec2::splat(pt.ripple_scale),
                    duration: pt.ripple_secs,
                    elapsed: 0.0,
                    easing: Easing::ExpoOut,
                    on_complete: TweenFinish::ResetScale,
                },
                AlphaFade {
                    delay: pt.fade_delay_secs,
                    duration: pt.fade_secs,
                    elapsed: 0.0,
                    from: 1.0,
                },
            ));
        }

        debug!(target: "page_turn", "palette advanced to index {}", cycle.index());
    }
}
