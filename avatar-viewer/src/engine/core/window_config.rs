// Standard library and external crates
use bevy::prelude::*;
use bevy::window::PresentMode;

const WINDOW_TITLE: &str = "Avatar Viewer";

pub fn create_window_config() -> Window {
    // Bevy appends its own canvas to the page body when none is named
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            title: WINDOW_TITLE.into(),
            fit_canvas_to_parent: true,
            transparent: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: WINDOW_TITLE.into(),
            transparent: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
