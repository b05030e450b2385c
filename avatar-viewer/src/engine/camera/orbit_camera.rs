// Standard library and external crates
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::render_settings::{
    LOOK_AT_DISTANCE, ORBIT_MAX_RADIUS, ORBIT_MIN_RADIUS, ORBIT_PAN_SENSITIVITY,
    ORBIT_PITCH_LIMIT, ORBIT_PIXEL_SCROLL_SCALE, ORBIT_ROTATE_SENSITIVITY,
    ORBIT_ZOOM_SENSITIVITY,
};

/// Orbit target for a manifest camera: `position - LOOK_AT_DISTANCE * direction`.
pub fn look_at_target(position: Vec3, direction: Vec3) -> Vec3 {
    position - direction * LOOK_AT_DISTANCE
}

/// Orbit controls state. The camera sits on a sphere of `radius` around
/// `target`, at `yaw` around +Y (0 looks down -Z) and `pitch` above the
/// horizon.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    /// Spherical state that reproduces `eye` exactly. When `target`
    /// coincides with `eye` the target moves down -Z so the eye stays put.
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length();

        if radius <= f32::EPSILON {
            return Self {
                target: eye - Vec3::Z * ORBIT_MIN_RADIUS,
                radius: ORBIT_MIN_RADIUS,
                yaw: 0.0,
                pitch: 0.0,
            };
        }

        Self {
            target,
            radius,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).clamp(-1.0, 1.0).asin(),
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.radius
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }

    /// Orbit by a pointer delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_ROTATE_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * ORBIT_ROTATE_SENSITIVITY)
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    /// Slide the target in the view plane. Speed scales with distance.
    pub fn pan(&mut self, delta: Vec2, view_rotation: Quat) {
        let right = view_rotation * Vec3::X;
        let up = view_rotation * Vec3::Y;
        let scale = self.radius * ORBIT_PAN_SENSITIVITY;
        self.target += (-right * delta.x + up * delta.y) * scale;
    }

    /// Dolly towards the target; positive `lines` moves closer.
    pub fn zoom(&mut self, lines: f32) {
        self.radius = (self.radius * (-lines * ORBIT_ZOOM_SENSITIVITY).exp())
            .clamp(ORBIT_MIN_RADIUS, ORBIT_MAX_RADIUS);
    }
}

pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    if mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            orbit.rotate(mouse_delta);
        } else if mouse_button.pressed(MouseButton::Right) {
            let view_rotation = camera_transform.rotation;
            orbit.pan(mouse_delta, view_rotation);
        }
    }

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * ORBIT_PIXEL_SCROLL_SCALE,
        };
    }

    if scroll_accum.abs() > f32::EPSILON {
        orbit.zoom(scroll_accum);
    }

    if orbit.is_changed() {
        *camera_transform = orbit.transform();
    }
}
