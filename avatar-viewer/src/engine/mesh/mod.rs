/// Conversion of parsed OBJ/MTL data into engine meshes and materials.
pub mod avatar_model;

/// Line-list cube used by the debug markers.
pub mod marker_cube;
