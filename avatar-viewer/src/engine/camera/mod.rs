//! Orbit camera controls for avatar inspection.
//!
//! Left drag orbits, right drag pans, scroll dollies towards the target.

/// Orbit state resource, look-at placement and the controller system.
pub mod orbit_camera;
