//! Shared configuration for the avatar viewer.
//!
//! Everything here is fixed at compile time; the viewer has no runtime
//! configuration surface.

/// Manifest location and the file keys the scene assembler expects.
pub mod manifest;

/// Camera projection, look-at placement and orbit control tuning.
pub mod render_settings;

/// Debug marker cube colours and size.
pub mod marker;
