// Standard library and external crates
use bevy::prelude::*;

/// Page lifecycle: fetch and decode, build the scene, then render until torn down.
/// Any failure parks the app in `Failed` with nothing rendered.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Assembling,
    Running,
    Failed,
}

pub fn report_failure() {
    error!("→ Avatar loading aborted, no scene will be rendered");
}
