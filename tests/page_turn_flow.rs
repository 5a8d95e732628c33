//! App-level page-turn flow: event consumption through the schedule, the
//! style resource update, live-glyph restyling, fill/ripple tween arming,
//! and cooldown rejection.

use bevy::prelude::*;
use letterfall::core::components::{Glyph, GlyphColors};
use letterfall::core::config::config::GameConfig;
use letterfall::gameplay::effects::{
    AlphaFade, EffectPool, EffectSprite, ScaleTween, TweenFinish, FILL_POSITION, RIPPLE_POSITION,
};
use letterfall::gameplay::page_turn::{PageTurnCooldown, PageTurnPlugin, PageTurnRequested};
use letterfall::gameplay::palette::{ColorCycle, GlyphStyle, PALETTE};

fn setup() -> (App, Vec<Entity>) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameConfig::default());
    app.add_plugins(PageTurnPlugin);
    let mut sprites = Vec::new();
    for _ in 0..4 {
        let e = app
            .world_mut()
            .spawn((Sprite::default(), Transform::default(), EffectSprite))
            .id();
        sprites.push(e);
    }
    app.world_mut()
        .insert_resource(EffectPool::new(sprites.clone()));
    (app, sprites)
}

#[test]
fn startup_turn_arms_fill_and_ripple() {
    let (mut app, sprites) = setup();
    app.update();

    assert_eq!(app.world().resource::<ColorCycle>().index(), 1);
    let style = app.world().resource::<GlyphStyle>();
    assert_eq!(style.fill, PALETTE[0]);
    assert_eq!(style.outline, PALETTE[1]);

    // fill sprite: incoming color, fill position, linear tween committing the
    // backdrop, no fade
    let fill_tween = app
        .world()
        .get::<ScaleTween>(sprites[0])
        .expect("fill sprite armed");
    assert!(matches!(
        fill_tween.on_complete,
        TweenFinish::CommitBackdrop(_)
    ));
    assert!(app.world().get::<AlphaFade>(sprites[0]).is_none());
    assert_eq!(
        app.world().get::<Sprite>(sprites[0]).unwrap().color,
        PALETTE[1].with_alpha(1.0)
    );
    assert_eq!(
        app.world().get::<Transform>(sprites[0]).unwrap().translation,
        FILL_POSITION
    );

    // ripple sprite: held color, ripple position, tween plus delayed fade
    let ripple_tween = app
        .world()
        .get::<ScaleTween>(sprites[1])
        .expect("ripple sprite armed");
    assert!(matches!(ripple_tween.on_complete, TweenFinish::ResetScale));
    assert!(app.world().get::<AlphaFade>(sprites[1]).is_some());
    assert_eq!(
        app.world().get::<Sprite>(sprites[1]).unwrap().color,
        PALETTE[0].with_alpha(1.0)
    );
    assert_eq!(
        app.world().get::<Transform>(sprites[1]).unwrap().translation,
        RIPPLE_POSITION
    );
}

#[test]
fn turn_restyles_every_live_glyph() {
    let (mut app, sprites) = setup();
    let glyphs: Vec<Entity> = (0..3)
        .map(|_| {
            app.world_mut()
                .spawn((
                    Glyph,
                    GlyphColors {
                        fill: Color::WHITE,
                        outline: Color::WHITE,
                    },
                ))
                .id()
        })
        .collect();

    // startup turn, then an explicit request
    app.update();
    app.world_mut()
        .send_event(PageTurnRequested { force: false });
    app.update();

    assert_eq!(app.world().resource::<ColorCycle>().index(), 2);
    for g in &glyphs {
        let colors = app.world().get::<GlyphColors>(*g).unwrap();
        assert_eq!(colors.fill, PALETTE[1]);
        assert_eq!(colors.outline, PALETTE[2]);
    }
    // the second turn took the next pool entries
    assert!(app.world().get::<ScaleTween>(sprites[2]).is_some());
    assert!(app.world().get::<ScaleTween>(sprites[3]).is_some());
}

#[test]
fn request_inside_cooldown_window_is_ignored() {
    let (mut app, _sprites) = setup();
    app.update();
    assert_eq!(app.world().resource::<ColorCycle>().index(), 1);
    let style_before = *app.world().resource::<GlyphStyle>();

    // arm the gate so the next request is guaranteed to land inside the window
    let now = app.world().resource::<Time>().elapsed_secs_f64();
    assert!(app
        .world_mut()
        .resource_mut::<PageTurnCooldown>()
        .try_trigger(now, 1e9));

    app.world_mut()
        .send_event(PageTurnRequested { force: false });
    app.update();

    assert_eq!(app.world().resource::<ColorCycle>().index(), 1);
    assert_eq!(*app.world().resource::<GlyphStyle>(), style_before);

    // a forced turn still goes through
    app.world_mut().send_event(PageTurnRequested { force: true });
    app.update();
    assert_eq!(app.world().resource::<ColorCycle>().index(), 2);
}
