use crate::glyph::Glyph;
use glam::{Mat4, Vec3};
use monogram_common::{Color, Transform};
use serde::Serialize;
use thiserror::Error;

/// Letter spacing between adjacent glyph cells.
const LETTER_SPACING: f32 = 1.0;

/// Depth gap between successive monogram rows.
const ROW_DEPTH: f32 = 7.0;

/// Colors assigned to rows in order.
const ROW_PALETTE: [Color; 4] = [
    Color::rgb(0.2, 0.6, 1.0),
    Color::rgb(1.0, 0.8, 0.0),
    Color::rgb(0.9, 0.3, 0.3),
    Color::rgb(0.4, 0.9, 0.5),
];

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("no block layout for character {0:?}")]
    UnsupportedGlyph(char),
    #[error("monogram text is empty")]
    EmptyText,
}

/// One cube to draw: a model matrix applied to the unit cube, plus a color.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CubeInstance {
    pub model: Mat4,
    pub color: Color,
}

/// A row of block glyphs sharing a transform and a color.
#[derive(Debug, Clone)]
pub struct Monogram {
    text: String,
    glyphs: Vec<Glyph>,
    transform: Transform,
    color: Color,
}

impl Monogram {
    /// Validate `text` against the glyph set and build a row at the origin.
    pub fn new(text: &str, color: Color) -> Result<Self, LayoutError> {
        if text.is_empty() {
            return Err(LayoutError::EmptyText);
        }
        let glyphs = text
            .chars()
            .map(|ch| Glyph::for_char(ch).ok_or(LayoutError::UnsupportedGlyph(ch)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            text: text.to_owned(),
            glyphs,
            transform: Transform::default(),
            color,
        })
    }

    /// Move the whole row so its lower-left glyph corner sits at `position`.
    pub fn at(mut self, position: Vec3) -> Self {
        self.transform = Transform::at(position);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Total width of the row including letter spacing.
    pub fn width(&self) -> f32 {
        let advances: f32 = self.glyphs.iter().map(|g| g.advance()).sum();
        let gaps = self.glyphs.len().saturating_sub(1) as f32 * LETTER_SPACING;
        advances + gaps
    }

    fn cuboid_count(&self) -> usize {
        self.glyphs.iter().map(|g| g.parts().len()).sum()
    }

    /// Flatten this row into per-cube instances.
    pub fn instances(&self, out: &mut Vec<CubeInstance>) {
        let row = self.transform.matrix();
        let mut pen_x = 0.0;
        for glyph in &self.glyphs {
            let cell = Mat4::from_translation(Vec3::new(pen_x, 0.0, 0.0));
            for part in glyph.parts() {
                out.push(CubeInstance {
                    model: row * cell * part.matrix(),
                    color: self.color,
                });
            }
            pen_x += glyph.advance() + LETTER_SPACING;
        }
    }
}

/// Serializable description of an assembled scene, for inspection tooling.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSummary {
    pub rows: Vec<String>,
    pub glyphs: usize,
    pub cuboids: usize,
    pub bounds_min: [f32; 3],
    pub bounds_max: [f32; 3],
}

/// The static arrangement drawn every frame: a set of monogram rows.
#[derive(Debug, Clone)]
pub struct Scene {
    rows: Vec<Monogram>,
}

impl Scene {
    /// The stock arrangement: "C3" on the front row, "R9" seven units back.
    pub fn stock() -> Self {
        Self::from_rows(&["C3".into(), "R9".into()])
            .unwrap_or_else(|_| unreachable!("stock rows use supported glyphs"))
    }

    /// Build centered rows, one per string, marching away from the camera.
    pub fn from_rows(texts: &[String]) -> Result<Self, LayoutError> {
        let mut rows = Vec::with_capacity(texts.len());
        for (i, text) in texts.iter().enumerate() {
            let color = ROW_PALETTE[i % ROW_PALETTE.len()];
            let row = Monogram::new(text, color)?;
            let origin = Vec3::new(-row.width() * 0.5, 0.0, -(i as f32) * ROW_DEPTH);
            rows.push(row.at(origin));
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Monogram] {
        &self.rows
    }

    /// Flatten all rows into the per-cube draw list.
    pub fn instances(&self) -> Vec<CubeInstance> {
        let mut out = Vec::new();
        for row in &self.rows {
            row.instances(&mut out);
        }
        out
    }

    pub fn summary(&self) -> SceneSummary {
        let instances = self.instances();
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for inst in &instances {
            for x in [-0.5, 0.5] {
                for y in [-0.5, 0.5] {
                    for z in [-0.5, 0.5] {
                        let p = inst.model.transform_point3(Vec3::new(x, y, z));
                        min = min.min(p);
                        max = max.max(p);
                    }
                }
            }
        }
        if instances.is_empty() {
            min = Vec3::ZERO;
            max = Vec3::ZERO;
        }
        SceneSummary {
            rows: self.rows.iter().map(|r| r.text().to_owned()).collect(),
            glyphs: self.rows.iter().map(|r| r.glyphs.len()).sum(),
            cuboids: instances.len(),
            bounds_min: min.to_array(),
            bounds_max: max.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn monogram_rejects_unknown_characters() {
        let err = Monogram::new("CZ", Color::GRID).unwrap_err();
        assert_eq!(err, LayoutError::UnsupportedGlyph('Z'));
    }

    #[test]
    fn monogram_rejects_empty_text() {
        let err = Monogram::new("", Color::GRID).unwrap_err();
        assert_eq!(err, LayoutError::EmptyText);
    }

    #[test]
    fn two_glyph_row_width() {
        // Two 3-wide glyphs plus one unit of letter spacing.
        let row = Monogram::new("C3", Color::GRID).unwrap();
        assert!((row.width() - 7.0).abs() < EPS);
    }

    #[test]
    fn stock_scene_matches_the_assignment() {
        let scene = Scene::stock();
        assert_eq!(scene.rows().len(), 2);
        assert_eq!(scene.rows()[0].text(), "C3");
        assert_eq!(scene.rows()[1].text(), "R9");

        // C has 3 bars, 3 has 4, R has 5, 9 has 5.
        assert_eq!(scene.instances().len(), 17);
    }

    #[test]
    fn back_row_sits_seven_units_deep() {
        let scene = Scene::stock();
        let mut front = Vec::new();
        scene.rows()[0].instances(&mut front);
        let mut back = Vec::new();
        scene.rows()[1].instances(&mut back);

        let z_of = |inst: &CubeInstance| inst.model.transform_point3(Vec3::ZERO).z;
        assert!(front.iter().all(|i| (z_of(i) - 0.0).abs() < 0.5 + EPS));
        assert!(back.iter().all(|i| (z_of(i) + 7.0).abs() < 0.5 + EPS));
    }

    #[test]
    fn rows_are_centered() {
        let scene = Scene::from_rows(&["C3".into()]).unwrap();
        let s = scene.summary();
        assert!((s.bounds_min[0] + s.bounds_max[0]).abs() < EPS);
    }

    #[test]
    fn instances_rest_on_ground() {
        let scene = Scene::stock();
        let min_y = scene
            .instances()
            .iter()
            .flat_map(|i| {
                [
                    i.model.transform_point3(Vec3::new(-0.5, -0.5, -0.5)).y,
                    i.model.transform_point3(Vec3::new(0.5, -0.5, 0.5)).y,
                ]
            })
            .fold(f32::INFINITY, f32::min);
        assert!(min_y.abs() < EPS);
    }

    #[test]
    fn space_splits_a_row_without_cubes() {
        let one = Scene::from_rows(&["C3".into()]).unwrap();
        let spaced = Scene::from_rows(&["C3 C3".into()]).unwrap();
        assert_eq!(spaced.instances().len(), one.instances().len() * 2);
        assert!(spaced.rows()[0].width() > one.rows()[0].width() * 2.0);
    }

    #[test]
    fn summary_counts_and_bounds() {
        let scene = Scene::stock();
        let s = scene.summary();
        assert_eq!(s.rows, vec!["C3".to_string(), "R9".to_string()]);
        assert_eq!(s.glyphs, 4);
        assert_eq!(s.cuboids, 17);
        assert!((s.bounds_min[1]).abs() < EPS);
        assert!((s.bounds_max[1] - 5.0).abs() < EPS);
    }
}
