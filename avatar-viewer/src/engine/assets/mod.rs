//! Avatar manifest and its decoded form.
//!
//! The manifest is loaded as a JSON asset and decoded once into an
//! [`avatar_bundle::AvatarBundle`] resource that the scene assembler consumes.

/// Decoded avatar bundle and the per-file decode policy.
pub mod avatar_bundle;

/// Wire form of `/scene.json`, registered as a Bevy JSON asset.
pub mod scene_manifest;
