use glam::Vec3;

/// A high-level action produced by the window layer each frame or keypress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Move the camera along its local axes (x: right, y: up, z: forward).
    Move(Vec3),
    /// Rotate the camera by a mouse delta.
    Look { dx: f32, dy: f32 },
    /// Zoom the projection by a scroll delta.
    Zoom(f32),
    /// Grow the model scaling factor one step.
    ScaleUp,
    /// Shrink the model scaling factor one step.
    ScaleDown,
    /// Put the camera back at its starting pose.
    ResetCamera,
    /// Close the window.
    Quit,
}

/// Global model scaling factor, stepped from the keyboard and clamped so the
/// models can neither vanish nor swallow the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor {
    value: f32,
}

impl ScaleFactor {
    const STEP: f32 = 1.25;
    const MIN: f32 = 0.125;
    const MAX: f32 = 8.0;

    pub fn new() -> Self {
        Self { value: 1.0 }
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    pub fn up(&mut self) {
        self.value = (self.value * Self::STEP).min(Self::MAX);
    }

    pub fn down(&mut self) {
        self.value = (self.value / Self::STEP).max(Self::MIN);
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_move_is_constructible() {
        let a = Action::Move(Vec3::new(0.0, 0.0, 1.0));
        assert!(matches!(a, Action::Move(_)));
    }

    #[test]
    fn scale_factor_steps_up_and_down() {
        let mut s = ScaleFactor::new();
        s.up();
        assert!(s.get() > 1.0);
        s.down();
        assert!((s.get() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn scale_factor_is_clamped() {
        let mut s = ScaleFactor::new();
        for _ in 0..100 {
            s.up();
        }
        assert!(s.get() <= 8.0);
        for _ in 0..200 {
            s.down();
        }
        assert!(s.get() >= 0.125);
    }
}
