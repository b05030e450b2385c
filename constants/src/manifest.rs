/// Manifest file name, resolved against the asset root.
pub const MANIFEST_FILE: &str = "scene.json";

/// Asset root on the web. Joined with `MANIFEST_FILE` this fetches `/scene.json`.
pub const WEB_ASSET_ROOT: &str = "/";

/// Asset root for native builds, relative to the crate directory.
pub const NATIVE_ASSET_ROOT: &str = "assets";

/// Geometry entry inside the bundle.
pub const OBJ_FILE: &str = "scene.obj";

/// Material library entry inside the bundle.
pub const MTL_FILE: &str = "scene.mtl";

/// Files with this suffix are kept as base64 and wrapped in a data URI.
pub const PNG_SUFFIX: &str = ".png";

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";
