/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 70.0;

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Distance along the manifest direction between the camera and the orbit target.
/// The target sits at `position - LOOK_AT_DISTANCE * direction`.
pub const LOOK_AT_DISTANCE: f32 = 5.5;

/// Radians of orbit per pixel of pointer movement.
pub const ORBIT_ROTATE_SENSITIVITY: f32 = 0.005;

/// Pan speed as a fraction of the orbit radius per pixel.
pub const ORBIT_PAN_SENSITIVITY: f32 = 0.0015;

/// Fractional radius change per scroll line.
pub const ORBIT_ZOOM_SENSITIVITY: f32 = 0.1;

/// Scroll pixels are scaled down to roughly match one line.
pub const ORBIT_PIXEL_SCROLL_SCALE: f32 = 0.05;

pub const ORBIT_MIN_RADIUS: f32 = 0.01;
pub const ORBIT_MAX_RADIUS: f32 = 900.0;

/// Pitch clamp just short of the poles, in radians.
pub const ORBIT_PITCH_LIMIT: f32 = 1.55;

/// FPS overlay font size in pixels.
pub const FPS_FONT_SIZE: f32 = 16.0;
