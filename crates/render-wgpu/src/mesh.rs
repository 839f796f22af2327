use bytemuck::{Pod, Zeroable};
use monogram_common::Color;
use monogram_scene::CubeInstance;

/// Keeps the grid lines from z-fighting with cube bottoms resting at y=0.
const GRID_BIAS: f32 = -0.001;

/// Length of each coordinate axis segment.
pub const AXIS_LENGTH: f32 = 5.0;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Per-instance data for one glyph cube: model matrix columns plus color.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct InstanceData {
    pub model_0: [f32; 4],
    pub model_1: [f32; 4],
    pub model_2: [f32; 4],
    pub model_3: [f32; 4],
    pub color: [f32; 4],
}

impl InstanceData {
    pub fn from_cube(inst: &CubeInstance) -> Self {
        let cols = inst.model.to_cols_array_2d();
        Self {
            model_0: cols[0],
            model_1: cols[1],
            model_2: cols[2],
            model_3: cols[3],
            color: inst.color.to_array(),
        }
    }
}

/// Generate unit cube vertices and indices with per-face normals.
pub fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let p = 0.5_f32;
    #[rustfmt::skip]
    let vertices = vec![
        // +Z face
        Vertex { position: [-p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [-p,  p,  p], normal: [0.0, 0.0, 1.0] },
        // -Z face
        Vertex { position: [ p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 0.0, -1.0] },
        // +X face
        Vertex { position: [ p, -p,  p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [1.0, 0.0, 0.0] },
        // -X face
        Vertex { position: [-p, -p, -p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [-1.0, 0.0, 0.0] },
        // +Y face
        Vertex { position: [-p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 1.0, 0.0] },
        // -Y face
        Vertex { position: [-p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [0.0, -1.0, 0.0] },
    ];
    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0,1,2, 2,3,0,       // +Z
        4,5,6, 6,7,4,       // -Z
        8,9,10, 10,11,8,    // +X
        12,13,14, 14,15,12, // -X
        16,17,18, 18,19,16, // +Y
        20,21,22, 22,23,20, // -Y
    ];
    (vertices, indices)
}

/// Generate ground grid line vertices on the y=0 plane (nudged just below
/// it), `2 * half_extent` cells on a side.
pub fn grid_mesh(half_extent: i32, spacing: f32) -> Vec<LineVertex> {
    let mut verts = Vec::new();
    let color = Color::GRID.to_array();
    let extent = half_extent as f32 * spacing;

    for i in -half_extent..=half_extent {
        let offset = i as f32 * spacing;
        // Lines along X
        verts.push(LineVertex {
            position: [-extent, GRID_BIAS, offset],
            color,
        });
        verts.push(LineVertex {
            position: [extent, GRID_BIAS, offset],
            color,
        });
        // Lines along Z
        verts.push(LineVertex {
            position: [offset, GRID_BIAS, -extent],
            color,
        });
        verts.push(LineVertex {
            position: [offset, GRID_BIAS, extent],
            color,
        });
    }
    verts
}

/// Coordinate axes at the origin: +X red, +Y green, +Z blue.
pub fn axes_mesh() -> Vec<LineVertex> {
    let axes = [
        ([AXIS_LENGTH, 0.0, 0.0], Color::AXIS_X),
        ([0.0, AXIS_LENGTH, 0.0], Color::AXIS_Y),
        ([0.0, 0.0, AXIS_LENGTH], Color::AXIS_Z),
    ];
    let mut verts = Vec::with_capacity(6);
    for (tip, color) in axes {
        verts.push(LineVertex {
            position: [0.0, 0.0, 0.0],
            color: color.to_array(),
        });
        verts.push(LineVertex {
            position: tip,
            color: color.to_array(),
        });
    }
    verts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_mesh_counts() {
        let (verts, indices) = cube_mesh();
        assert_eq!(verts.len(), 24);
        assert_eq!(indices.len(), 36);
        assert!(indices.iter().all(|&i| (i as usize) < verts.len()));
    }

    #[test]
    fn cube_normals_are_unit_axes() {
        let (verts, _) = cube_mesh();
        for v in verts {
            let n = v.normal;
            let len_sq = n[0] * n[0] + n[1] * n[1] + n[2] * n[2];
            assert!((len_sq - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn grid_mesh_counts_and_bias() {
        // One line pair per direction per step, two vertices each.
        let verts = grid_mesh(50, 1.0);
        assert_eq!(verts.len(), 101 * 4);
        assert!(verts.iter().all(|v| v.position[1] < 0.0));
    }

    #[test]
    fn instance_data_carries_translation_column() {
        use glam::{Mat4, Vec3};
        let inst = CubeInstance {
            model: Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)),
            color: Color::AXIS_X,
        };
        let data = InstanceData::from_cube(&inst);
        assert_eq!(data.model_3, [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(data.color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn axes_have_expected_colors() {
        let verts = axes_mesh();
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[1].position, [AXIS_LENGTH, 0.0, 0.0]);
        assert_eq!(verts[1].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(verts[3].color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(verts[5].color, [0.0, 0.0, 1.0, 1.0]);
    }
}
