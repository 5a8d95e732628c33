//! Scheduled glyph removal. The original demo leaned on uncancellable
//! one-shot host timers; here expiries sit in an explicit min-heap polled once
//! per frame, so teardown can drop in-flight removals.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use bevy::prelude::*;

use crate::core::system::system_order::PostPhysicsAdjustSet;

/// One scheduled removal. Expiry is kept in integer microseconds so the heap
/// ordering is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Scheduled {
    due_us: u64,
    entity: Entity,
}

/// Min-heap of pending removals keyed by expiry time.
#[derive(Resource, Default)]
pub struct DespawnQueue {
    heap: BinaryHeap<Reverse<Scheduled>>,
    cancelled: HashSet<Entity>,
}

impl DespawnQueue {
    pub fn schedule(&mut self, entity: Entity, due_secs: f64) {
        self.cancelled.remove(&entity);
        self.heap.push(Reverse(Scheduled {
            due_us: secs_to_us(due_secs),
            entity,
        }));
    }

    /// Drop a pending removal; the entry is skipped when it comes due.
    pub fn cancel(&mut self, entity: Entity) {
        self.cancelled.insert(entity);
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.cancelled.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Pop every entry due at or before `now_secs`, skipping cancelled ones.
    pub fn drain_due(&mut self, now_secs: f64) -> Vec<Entity> {
        let now_us = secs_to_us(now_secs);
        let mut due = Vec::new();
        while let Some(Reverse(next)) = self.heap.peek().copied() {
            if next.due_us > now_us {
                break;
            }
            self.heap.pop();
            if !self.cancelled.remove(&next.entity) {
                due.push(next.entity);
            }
        }
        due
    }
}

fn secs_to_us(secs: f64) -> u64 {
    (secs.max(0.0) * 1e6) as u64
}

pub struct GlyphLifetimePlugin;

impl Plugin for GlyphLifetimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DespawnQueue>()
            .add_systems(Update, expire_due_glyphs.in_set(PostPhysicsAdjustSet));
    }
}

/// Removes expired pairs from both worlds: despawning the body entity also
/// takes down its `Text2d` child.
fn expire_due_glyphs(mut commands: Commands, time: Res<Time>, mut queue: ResMut<DespawnQueue>) {
    for entity in queue.drain_due(time.elapsed_secs_f64()) {
        if let Ok(mut e) = commands.get_entity(entity) {
            e.despawn();
        }
    }
}
