//! Scene assembly from the decoded avatar bundle.
//!
//! Spawns the avatar meshes, the debug marker cubes, the camera with its
//! orbit target, lighting and the FPS overlay.

/// One-shot system building the scene once the bundle is decoded.
pub mod assembler;

/// Wireframe marker cubes with alternating colours.
pub mod gizmos;
