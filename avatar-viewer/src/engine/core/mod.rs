//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions
//! and the render loop handle for both native and WASM targets.

/// Plugin configuration and state-scheduled systems for the Bevy app.
pub mod app_setup;

/// Application state machine from manifest loading to running.
pub mod app_state;

/// Cancellable handle on the continuous render loop.
pub mod render_loop;

/// Platform-specific window configuration for native and WASM builds.
///
/// Lets Bevy append a transparent canvas to the page and keep it fitted to the viewport.
pub mod window_config;
