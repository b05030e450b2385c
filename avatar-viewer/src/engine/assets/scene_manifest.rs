// Standard library and external crates
use std::collections::HashMap;

use bevy::prelude::*;
use serde::Deserialize;

/// One embedded file. `content` is base64 text for every entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestFile {
    pub content: String,
}

/// Plain `{x, y, z}` vector as it appears in the manifest JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ManifestVec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ManifestVec3 {
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

/// Camera placement carried through decoding untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct CameraPlacement {
    pub position: ManifestVec3,
    pub direction: ManifestVec3,
}

/// Avatar manifest as a Bevy asset. Mirrors the JSON served at `/scene.json`.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
pub struct SceneManifest {
    pub files: HashMap<String, ManifestFile>,
    pub camera: CameraPlacement,
}
