// Standard library and external crates
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

/// Width over height, falling back to square for a collapsed viewport.
pub fn viewport_aspect(width: f32, height: f32) -> f32 {
    if width > 0.0 && height > 0.0 {
        width / height
    } else {
        1.0
    }
}

pub fn primary_window_aspect(windows: &Query<&Window, With<PrimaryWindow>>) -> f32 {
    windows
        .single()
        .map(|window| viewport_aspect(window.width(), window.height()))
        .unwrap_or(1.0)
}

// Keep the projection in step with the canvas; the surface itself is resized by the renderer
pub fn handle_window_resize(
    mut resize_events: EventReader<WindowResized>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    let Some(resized) = resize_events.read().last() else {
        return;
    };

    let aspect = viewport_aspect(resized.width, resized.height);
    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect;
        }
    }
}
