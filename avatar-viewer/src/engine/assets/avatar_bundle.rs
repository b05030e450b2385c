// Standard library and external crates
use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bevy::prelude::*;
use constants::manifest::{PNG_DATA_URI_PREFIX, PNG_SUFFIX};

// Crate engine modules
use crate::engine::assets::scene_manifest::{CameraPlacement, SceneManifest};
use crate::error::AvatarError;

/// Content of a bundle entry after decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedFile {
    /// `.png` entries, kept as base64 and wrapped for direct use as an image source.
    ImageDataUri(String),
    /// Every other entry, base64-decoded.
    Raw(Vec<u8>),
}

impl DecodedFile {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            DecodedFile::ImageDataUri(uri) => uri.as_bytes(),
            DecodedFile::Raw(bytes) => bytes,
        }
    }

    pub fn data_uri(&self) -> Option<&str> {
        match self {
            DecodedFile::ImageDataUri(uri) => Some(uri),
            DecodedFile::Raw(_) => None,
        }
    }
}

/// Decoded manifest, ready for scene assembly.
#[derive(Resource, Debug, Clone)]
pub struct AvatarBundle {
    files: HashMap<String, DecodedFile>,
    pub camera: CameraPlacement,
}

impl AvatarBundle {
    /// Decode every manifest entry in place. Keys are never added or dropped.
    pub fn decode(manifest: SceneManifest) -> Result<Self, AvatarError> {
        let files = manifest
            .files
            .into_iter()
            .map(|(name, file)| {
                let decoded = decode_file(&name, file.content)?;
                Ok((name, decoded))
            })
            .collect::<Result<HashMap<_, _>, AvatarError>>()?;

        Ok(Self {
            files,
            camera: manifest.camera,
        })
    }

    pub fn files(&self) -> &HashMap<String, DecodedFile> {
        &self.files
    }

    pub fn file(&self, name: &str) -> Result<&DecodedFile, AvatarError> {
        self.files
            .get(name)
            .ok_or_else(|| AvatarError::MissingFile(name.to_string()))
    }

    /// UTF-8 view of a decoded entry, for the OBJ and MTL text formats.
    pub fn text(&self, name: &str) -> Result<&str, AvatarError> {
        std::str::from_utf8(self.file(name)?.as_bytes()).map_err(|source| AvatarError::NotText {
            file: name.to_string(),
            source,
        })
    }
}

/// Apply the suffix-based decode policy to one entry.
pub fn decode_file(name: &str, content: String) -> Result<DecodedFile, AvatarError> {
    if name.ends_with(PNG_SUFFIX) {
        return Ok(DecodedFile::ImageDataUri(format!(
            "{PNG_DATA_URI_PREFIX}{content}"
        )));
    }

    STANDARD
        .decode(content.as_bytes())
        .map(DecodedFile::Raw)
        .map_err(|source| AvatarError::Decode {
            file: name.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::scene_manifest::ManifestFile;

    fn manifest(entries: &[(&str, &str)]) -> SceneManifest {
        SceneManifest {
            files: entries
                .iter()
                .map(|(name, content)| {
                    (
                        name.to_string(),
                        ManifestFile {
                            content: content.to_string(),
                        },
                    )
                })
                .collect(),
            camera: CameraPlacement::default(),
        }
    }

    #[test]
    fn png_entries_are_wrapped_without_decoding() {
        // Not valid base64 on purpose: the payload must pass through untouched.
        let decoded = decode_file("Player11Tex.png", "not*base64".to_string()).unwrap();
        assert_eq!(
            decoded,
            DecodedFile::ImageDataUri("data:image/png;base64,not*base64".to_string())
        );
    }

    #[test]
    fn other_entries_are_base64_decoded() {
        let decoded = decode_file("scene.obj", "diAwIDAgMA==".to_string()).unwrap();
        assert_eq!(decoded, DecodedFile::Raw(b"v 0 0 0".to_vec()));
    }

    #[test]
    fn suffix_match_is_on_the_full_extension() {
        // "notpng" does not end with ".png", so it is decoded.
        let decoded = decode_file("icon.notpng", "aGVsbG8=".to_string()).unwrap();
        assert_eq!(decoded, DecodedFile::Raw(b"hello".to_vec()));
    }

    #[test]
    fn invalid_base64_names_the_file() {
        let err = decode_file("scene.mtl", "%%%".to_string()).unwrap_err();
        match err {
            AvatarError::Decode { file, .. } => assert_eq!(file, "scene.mtl"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_preserves_key_set() {
        let source = manifest(&[
            ("scene.obj", "diAwIDAgMA=="),
            ("scene.mtl", "bmV3bXRsIG0="),
            ("a.png", "AAAA"),
            ("notes.txt", ""),
        ]);
        let mut expected: Vec<String> = source.files.keys().cloned().collect();
        expected.sort();

        let bundle = AvatarBundle::decode(source).unwrap();
        let mut actual: Vec<String> = bundle.files().keys().cloned().collect();
        actual.sort();

        assert_eq!(actual, expected);
        assert_eq!(bundle.file("notes.txt").unwrap(), &DecodedFile::Raw(Vec::new()));
    }

    #[test]
    fn one_bad_entry_fails_the_whole_bundle() {
        let source = manifest(&[("scene.obj", "diAwIDAgMA=="), ("scene.mtl", "!!")]);
        assert!(matches!(
            AvatarBundle::decode(source),
            Err(AvatarError::Decode { .. })
        ));
    }

    #[test]
    fn text_access_reports_missing_and_binary_entries() {
        let bundle = AvatarBundle::decode(manifest(&[("blob.bin", "/w==")])).unwrap();

        assert!(matches!(
            bundle.text("scene.obj"),
            Err(AvatarError::MissingFile(name)) if name == "scene.obj"
        ));
        assert!(matches!(
            bundle.text("blob.bin"),
            Err(AvatarError::NotText { .. })
        ));
    }
}
