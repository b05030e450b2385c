//! Manifest fetch and decode.
//!
//! Requests `/scene.json` through the asset server, then decodes it into an
//! `AvatarBundle` resource before the scene assembler runs.

/// Manifest request, load-state tracking and decoding into `AvatarBundle`.
pub mod manifest_loader;
