//! Keyboard routing: printable keys spawn glyphs, Enter requests a page turn.
//! Modifier and navigation keys never produce `Key::Character` so they fall
//! through without an explicit ignore list.

use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::core::config::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::glyph_spawn::SpawnGlyph;
use crate::gameplay::lanes::lane_offset;
use crate::gameplay::page_turn::PageTurnRequested;

/// The text "being typed". The original replaced rather than appended the
/// buffer on every keypress, so it only ever holds the latest character;
/// that behavior is kept, including the (always-true) length gate that both
/// the buffer write and the spawn sit behind.
#[derive(Resource, Debug, Default)]
pub struct PendingText(pub String);

/// Replace-not-append buffer rule: a character passes the gate while the
/// buffer is under `max_chars`, replacing the whole buffer. Returns the
/// character to spawn when accepted.
pub fn push_pending(pending: &mut String, max_chars: usize, ch: char) -> Option<char> {
    if pending.chars().count() >= max_chars {
        return None;
    }
    *pending = ch.to_string();
    Some(ch)
}

pub struct KeyboardPlugin;

impl Plugin for KeyboardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingText>()
            .add_systems(Update, route_key_events.in_set(PrePhysicsSet));
    }
}

pub fn route_key_events(
    mut keys: EventReader<KeyboardInput>,
    cfg: Res<GameConfig>,
    mut pending: ResMut<PendingText>,
    mut spawns: EventWriter<SpawnGlyph>,
    mut turns: EventWriter<PageTurnRequested>,
) {
    for ev in keys.read() {
        if !ev.state.is_pressed() {
            continue;
        }
        let typed = match &ev.logical_key {
            Key::Character(s) => s.chars().next(),
            Key::Space => Some(' '),
            Key::Enter => {
                turns.write(PageTurnRequested { force: false });
                None
            }
            _ => None,
        };
        let Some(ch) = typed else {
            continue;
        };
        if let Some(ch) = push_pending(&mut pending.0, cfg.glyphs.max_pending_chars, ch) {
            spawns.write(SpawnGlyph {
                text: ch.to_string(),
                lane_x: lane_offset(ch),
            });
        }
    }
}
