use bevy::prelude::*;
use clap::Parser;

use letterfall::{GameConfig, GamePlugin};

#[derive(Parser, Debug)]
#[command(version, about = "Falling-letter physics toy")]
struct Cli {
    /// Path to the RON config file.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: std::path::PathBuf,
}

/// Config problems collected before logging is up; reported once at startup.
#[derive(Resource, Debug, Default)]
struct ConfigWarnings(Vec<String>);

fn main() {
    let cli = Cli::parse();
    let (cfg, load_err) = GameConfig::load_or_default(&cli.config);

    let mut warnings = Vec::new();
    if let Some(err) = load_err {
        warnings.push(format!(
            "config {} unusable ({err}); running with defaults",
            cli.config.display()
        ));
    }
    warnings.extend(cfg.validate());

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(ConfigWarnings(warnings))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .add_systems(Startup, report_config_warnings)
        .run();
}

fn report_config_warnings(warnings: Res<ConfigWarnings>) {
    for w in &warnings.0 {
        warn!(target: "config", "{w}");
    }
}
