use glam::{Mat4, Vec3};

/// Fly camera with position, yaw, pitch, and projection parameters.
///
/// Starts at (0, 2, 10) looking down -Z so the front monogram row is in
/// view on the first frame.
pub struct FlyCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub speed: f32,
    pub sensitivity: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 10.0),
            yaw: -90.0_f32.to_radians(),
            pitch: 0.0,
            fov: 60.0_f32.to_radians(),
            aspect: 16.0 / 10.0,
            near: 0.1,
            far: 1000.0,
            speed: 10.0,
            sensitivity: 0.003,
        }
    }
}

impl FlyCamera {
    const MIN_FOV: f32 = 15.0 * std::f32::consts::PI / 180.0;
    const MAX_FOV: f32 = 90.0 * std::f32::consts::PI / 180.0;

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Apply a camera-local movement direction for one frame.
    pub fn translate(&mut self, dir: Vec3, dt: f32) {
        let step = self.speed * dt;
        self.position += self.right() * dir.x * step;
        self.position.y += dir.y * step;
        self.position += self.forward() * dir.z * step;
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self
            .pitch
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    /// Narrow or widen the field of view by a scroll delta, in steps of two
    /// degrees per line.
    pub fn zoom(&mut self, delta: f32) {
        self.fov = (self.fov - delta * 2.0_f32.to_radians()).clamp(Self::MIN_FOV, Self::MAX_FOV);
    }

    pub fn reset(&mut self) {
        let aspect = self.aspect;
        *self = Self {
            aspect,
            ..Self::default()
        };
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = FlyCamera::default();
        let fwd = cam.forward();
        assert!(fwd.z < -0.99);
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn camera_movement() {
        let mut cam = FlyCamera::default();
        let start = cam.position;
        cam.translate(Vec3::new(0.0, 0.0, 1.0), 1.0);
        assert_ne!(cam.position, start);
        // Forward from the stock pose is toward the scene.
        assert!(cam.position.z < start.z);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = FlyCamera::default();
        cam.rotate(0.0, -100_000.0);
        assert!(cam.pitch <= 89.0_f32.to_radians() + 1e-6);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = FlyCamera::default();
        cam.zoom(1_000.0);
        assert!(cam.fov >= 15.0_f32.to_radians() - 1e-6);
        cam.zoom(-1_000.0);
        assert!(cam.fov <= 90.0_f32.to_radians() + 1e-6);
    }

    #[test]
    fn reset_keeps_aspect() {
        let mut cam = FlyCamera::default();
        cam.aspect = 2.5;
        cam.position = Vec3::splat(100.0);
        cam.reset();
        assert_eq!(cam.aspect, 2.5);
        assert_eq!(cam.position, Vec3::new(0.0, 2.0, 10.0));
    }
}
