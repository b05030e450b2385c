// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::orbit_camera::orbit_camera_controller;
use crate::engine::core::app_state::{AppState, report_failure};
use crate::engine::core::render_loop::{
    RenderLoop, exit_when_stopped, render_loop_running, start_render_loop,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{
    ManifestLoader, asset_root, load_manifest_system, start_loading,
};
use crate::engine::scene::assembler::assemble_scene;
use crate::engine::scene::gizmos::MarkerCubeFactory;
use crate::engine::systems::fps_tracking::fps_text_update_system;
use crate::engine::systems::viewport::handle_window_resize;

// Web lifecycle modules
use crate::web::page_lifecycle::PageLifecyclePlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]))
        .add_plugins(PageLifecyclePlugin)
        .insert_resource(ClearColor(Color::NONE));

    app.init_resource::<ManifestLoader>()
        .init_resource::<MarkerCubeFactory>()
        .init_resource::<RenderLoop>();

    app.add_systems(Startup, start_loading)
        .add_systems(
            Update,
            load_manifest_system.run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Assembling), assemble_scene)
        .add_systems(OnEnter(AppState::Running), start_render_loop)
        .add_systems(OnEnter(AppState::Failed), report_failure);

    let runtime_systems = (
        orbit_camera_controller,
        handle_window_resize,
        fps_text_update_system,
    );

    app.add_systems(
        Update,
        runtime_systems.run_if(in_state(AppState::Running).and(render_loop_running)),
    )
    .add_systems(Update, exit_when_stopped);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        file_path: asset_root().into(),
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
