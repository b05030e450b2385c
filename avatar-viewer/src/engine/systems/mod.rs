//! Runtime systems that run every frame once the scene is up.

/// FPS overlay creation and per-frame text update.
pub mod fps_tracking;

/// Aspect ratio tracking for window resizes.
pub mod viewport;
