//! App-level check that scheduled removals actually despawn entities.

use bevy::prelude::*;
use letterfall::gameplay::lifetime::{DespawnQueue, GlyphLifetimePlugin};

#[test]
fn due_entity_is_despawned_on_update() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(GlyphLifetimePlugin);

    let doomed = app.world_mut().spawn_empty().id();
    let survivor = app.world_mut().spawn_empty().id();
    {
        let mut queue = app.world_mut().resource_mut::<DespawnQueue>();
        queue.schedule(doomed, 0.0);
        queue.schedule(survivor, 1e9);
    }

    app.update();
    app.update();

    assert!(app.world().get_entity(doomed).is_err());
    assert!(app.world().get_entity(survivor).is_ok());
}

#[test]
fn cancelled_entity_survives() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(GlyphLifetimePlugin);

    let spared = app.world_mut().spawn_empty().id();
    {
        let mut queue = app.world_mut().resource_mut::<DespawnQueue>();
        queue.schedule(spared, 0.0);
        queue.cancel(spared);
    }

    app.update();
    app.update();

    assert!(app.world().get_entity(spared).is_ok());
}
