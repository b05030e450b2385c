/// Colour of the 1st, 3rd, 5th... marker cube.
pub const MARKER_GREEN: u32 = 0x00ff00;

/// Colour of the 2nd, 4th, 6th... marker cube.
pub const MARKER_RED: u32 = 0xff0000;

/// Edge length of a marker cube, matching a unit box.
pub const MARKER_SIZE: f32 = 1.0;
