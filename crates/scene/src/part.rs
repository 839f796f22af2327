use glam::{Mat4, Vec3};

/// One cuboid of a glyph, built by chaining transform calls.
///
/// Each call post-multiplies the current matrix, so operations written first
/// apply last in world space: `Part::new().translated(t).scaled(s)` is a
/// cuboid of size `s` centered at `t`. This mirrors how the assignment
/// chained its matrix helpers, where order of composition is the whole
/// exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Part {
    matrix: Mat4,
}

impl Part {
    pub fn new() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
        }
    }

    pub fn translated(self, offset: Vec3) -> Self {
        Self {
            matrix: self.matrix * Mat4::from_translation(offset),
        }
    }

    pub fn scaled(self, factors: Vec3) -> Self {
        Self {
            matrix: self.matrix * Mat4::from_scale(factors),
        }
    }

    /// Axis-aligned cuboid spanning `x0..x1` by `y0..y1`, one unit deep and
    /// centered on the z=0 plane.
    pub fn bar(x0: f32, x1: f32, y0: f32, y1: f32) -> Self {
        let center = Vec3::new((x0 + x1) * 0.5, (y0 + y1) * 0.5, 0.0);
        let size = Vec3::new(x1 - x0, y1 - y0, 1.0);
        Self::new().translated(center).scaled(size)
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// World-space corners of the unit cube under this part's matrix.
    pub fn corners(&self) -> [Vec3; 8] {
        let mut out = [Vec3::ZERO; 8];
        let mut i = 0;
        for x in [-0.5, 0.5] {
            for y in [-0.5, 0.5] {
                for z in [-0.5, 0.5] {
                    out[i] = self.matrix.transform_point3(Vec3::new(x, y, z));
                    i += 1;
                }
            }
        }
        out
    }
}

impl Default for Part {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_then_scale_keeps_center() {
        // Post-multiplication: the translation is not affected by the scale.
        let p = Part::new()
            .translated(Vec3::new(2.0, 3.0, 0.0))
            .scaled(Vec3::new(4.0, 1.0, 1.0));
        let center = p.matrix().transform_point3(Vec3::ZERO);
        assert_eq!(center, Vec3::new(2.0, 3.0, 0.0));
    }

    #[test]
    fn scale_then_translate_scales_the_offset() {
        // Written the other way round the offset is stretched, exactly like
        // chaining scale-before-translate did in the assignment.
        let p = Part::new()
            .scaled(Vec3::new(2.0, 1.0, 1.0))
            .translated(Vec3::new(1.0, 0.0, 0.0));
        let center = p.matrix().transform_point3(Vec3::ZERO);
        assert_eq!(center, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn bar_spans_its_extents() {
        let p = Part::bar(1.0, 3.0, 0.0, 5.0);
        let corners = p.corners();
        let min = corners.iter().copied().reduce(Vec3::min).unwrap();
        let max = corners.iter().copied().reduce(Vec3::max).unwrap();
        assert_eq!(min, Vec3::new(1.0, 0.0, -0.5));
        assert_eq!(max, Vec3::new(3.0, 5.0, 0.5));
    }
}
