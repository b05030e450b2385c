// Standard library and external crates
use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::manifest::MANIFEST_FILE;

// Crate engine modules
use crate::engine::assets::avatar_bundle::AvatarBundle;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::core::app_state::AppState;
use crate::error::AvatarError;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

/// Where the asset server resolves `MANIFEST_FILE` from.
pub fn asset_root() -> &'static str {
    #[cfg(target_arch = "wasm32")]
    {
        constants::manifest::WEB_ASSET_ROOT
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        constants::manifest::NATIVE_ASSET_ROOT
    }
}

/// Full manifest path for log and error messages.
pub fn manifest_url() -> String {
    format!("{}/{}", asset_root().trim_end_matches('/'), MANIFEST_FILE)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestProgress {
    Pending,
    Ready,
    Failed(String),
}

impl ManifestProgress {
    /// State to move to, or `None` to keep waiting.
    pub fn next_state(&self) -> Option<AppState> {
        match self {
            ManifestProgress::Pending => None,
            ManifestProgress::Ready => Some(AppState::Assembling),
            ManifestProgress::Failed(_) => Some(AppState::Failed),
        }
    }
}

pub fn classify_load_state(state: Option<LoadState>) -> ManifestProgress {
    match state {
        Some(LoadState::Loaded) => ManifestProgress::Ready,
        Some(LoadState::Failed(err)) => ManifestProgress::Failed(err.to_string()),
        _ => ManifestProgress::Pending,
    }
}

// Issue the single manifest request
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Requesting avatar manifest from {}", manifest_url());
    manifest_loader.handle = Some(asset_server.load(MANIFEST_FILE));
}

/// What the loading stage resolved to on this frame.
#[derive(Debug)]
pub enum ManifestOutcome {
    Waiting,
    Decoded(AvatarBundle),
    Failed(AvatarError),
}

impl ManifestOutcome {
    pub fn next_state(&self) -> Option<AppState> {
        match self {
            ManifestOutcome::Waiting => None,
            ManifestOutcome::Decoded(_) => Some(AppState::Assembling),
            ManifestOutcome::Failed(_) => Some(AppState::Failed),
        }
    }
}

/// Turn the load progress and the fetched manifest into a decoded bundle or
/// the error that ends loading.
pub fn resolve_manifest(
    progress: ManifestProgress,
    manifest: Option<SceneManifest>,
) -> ManifestOutcome {
    match (progress, manifest) {
        (ManifestProgress::Failed(reason), _) => ManifestOutcome::Failed(AvatarError::Network {
            path: manifest_url(),
            reason,
        }),
        (ManifestProgress::Ready, Some(manifest)) => match AvatarBundle::decode(manifest) {
            Ok(bundle) => ManifestOutcome::Decoded(bundle),
            Err(err) => ManifestOutcome::Failed(err),
        },
        _ => ManifestOutcome::Waiting,
    }
}

// Decode the manifest once it arrives; any failure stops before assembly
pub fn load_manifest_system(
    manifest_loader: Res<ManifestLoader>,
    asset_server: Res<AssetServer>,
    mut manifests: ResMut<Assets<SceneManifest>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(handle) = &manifest_loader.handle else {
        return;
    };

    let progress = classify_load_state(asset_server.get_load_state(handle));
    let manifest = match progress {
        ManifestProgress::Ready => manifests.remove(handle),
        _ => None,
    };

    let outcome = resolve_manifest(progress, manifest);
    let Some(state) = outcome.next_state() else {
        return;
    };

    match outcome {
        ManifestOutcome::Decoded(bundle) => {
            let images = bundle
                .files()
                .values()
                .filter(|file| file.data_uri().is_some())
                .count();
            info!(
                "✓ Avatar manifest decoded ({} files, {} images)",
                bundle.files().len(),
                images
            );
            commands.insert_resource(bundle);
        }
        ManifestOutcome::Failed(err) => error!("{err}"),
        ManifestOutcome::Waiting => {}
    }

    next_state.set(state);
}
