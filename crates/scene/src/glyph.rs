use crate::part::Part;

/// Height of every glyph cell in world units.
pub const GLYPH_HEIGHT: f32 = 5.0;

const GLYPH_WIDTH: f32 = 3.0;
const SPACE_ADVANCE: f32 = 2.0;

/// A block-letter layout: cuboids hand-composed in glyph-local space.
///
/// The local cell runs from x=0 to `advance` and from y=0 (ground) to
/// [`GLYPH_HEIGHT`]. Parts are merged bars rather than per-cell cubes, the
/// way the original arrangements were built.
#[derive(Debug, Clone)]
pub struct Glyph {
    ch: char,
    parts: Vec<Part>,
    advance: f32,
}

impl Glyph {
    /// Look up the layout for a character. Space is a valid empty glyph.
    pub fn for_char(ch: char) -> Option<Glyph> {
        let parts = match ch {
            ' ' => {
                return Some(Glyph {
                    ch,
                    parts: Vec::new(),
                    advance: SPACE_ADVANCE,
                });
            }
            'C' => vec![
                Part::bar(0.0, 1.0, 0.0, 5.0),
                Part::bar(1.0, 3.0, 4.0, 5.0),
                Part::bar(1.0, 3.0, 0.0, 1.0),
            ],
            'E' => vec![
                Part::bar(0.0, 1.0, 0.0, 5.0),
                Part::bar(1.0, 3.0, 4.0, 5.0),
                Part::bar(1.0, 2.0, 2.0, 3.0),
                Part::bar(1.0, 3.0, 0.0, 1.0),
            ],
            'N' => vec![
                Part::bar(0.0, 1.0, 0.0, 5.0),
                Part::bar(1.0, 2.0, 2.0, 4.0),
                Part::bar(2.0, 3.0, 0.0, 5.0),
            ],
            'A' => vec![
                Part::bar(0.0, 1.0, 0.0, 4.0),
                Part::bar(0.0, 3.0, 4.0, 5.0),
                Part::bar(1.0, 2.0, 2.0, 3.0),
                Part::bar(2.0, 3.0, 0.0, 4.0),
            ],
            // The R leans on its leg: the right column is split into a knee
            // cube and a short shin, as in the original arrangement.
            'R' => vec![
                Part::bar(0.0, 1.0, 0.0, 5.0),
                Part::bar(1.0, 2.0, 4.0, 5.0),
                Part::bar(1.0, 2.0, 2.0, 3.0),
                Part::bar(2.0, 3.0, 3.0, 4.0),
                Part::bar(2.0, 3.0, 0.0, 2.0),
            ],
            '0' => vec![
                Part::bar(0.0, 1.0, 0.0, 5.0),
                Part::bar(1.0, 2.0, 4.0, 5.0),
                Part::bar(1.0, 2.0, 0.0, 1.0),
                Part::bar(2.0, 3.0, 0.0, 5.0),
            ],
            '3' => vec![
                Part::bar(2.0, 3.0, 0.0, 5.0),
                Part::bar(0.0, 2.0, 4.0, 5.0),
                Part::bar(0.0, 2.0, 2.0, 3.0),
                Part::bar(0.0, 2.0, 0.0, 1.0),
            ],
            '4' => vec![
                Part::bar(0.0, 1.0, 2.0, 5.0),
                Part::bar(1.0, 2.0, 2.0, 3.0),
                Part::bar(2.0, 3.0, 0.0, 5.0),
            ],
            '9' => vec![
                Part::bar(0.0, 1.0, 2.0, 5.0),
                Part::bar(1.0, 2.0, 4.0, 5.0),
                Part::bar(1.0, 2.0, 2.0, 3.0),
                Part::bar(2.0, 3.0, 0.0, 5.0),
                Part::bar(0.0, 2.0, 0.0, 1.0),
            ],
            _ => return None,
        };
        Some(Glyph {
            ch,
            parts,
            advance: GLYPH_WIDTH,
        })
    }

    /// Characters with a block layout, space excluded.
    pub fn supported() -> &'static [char] {
        &['A', 'C', 'E', 'N', 'R', '0', '3', '4', '9']
    }

    pub fn character(&self) -> char {
        self.ch
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Horizontal space this glyph occupies before letter spacing.
    pub fn advance(&self) -> f32 {
        self.advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const EPS: f32 = 1e-4;

    #[test]
    fn all_supported_glyphs_resolve() {
        for &ch in Glyph::supported() {
            let g = Glyph::for_char(ch).unwrap();
            assert!(!g.parts().is_empty(), "glyph {ch:?} has no parts");
            assert!(g.advance() > 0.0);
        }
    }

    #[test]
    fn unsupported_character_has_no_layout() {
        assert!(Glyph::for_char('Z').is_none());
        assert!(Glyph::for_char('7').is_none());
    }

    #[test]
    fn space_is_empty_with_advance() {
        let g = Glyph::for_char(' ').unwrap();
        assert!(g.parts().is_empty());
        assert!(g.advance() > 0.0);
    }

    #[test]
    fn glyphs_stay_inside_their_cell() {
        for &ch in Glyph::supported() {
            let g = Glyph::for_char(ch).unwrap();
            for part in g.parts() {
                for corner in part.corners() {
                    assert!(
                        corner.x >= -EPS && corner.x <= g.advance() + EPS,
                        "glyph {ch:?} part leaves cell in x: {corner:?}"
                    );
                    assert!(
                        corner.y >= -EPS && corner.y <= GLYPH_HEIGHT + EPS,
                        "glyph {ch:?} part leaves cell in y: {corner:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn glyphs_rest_on_the_ground() {
        for &ch in Glyph::supported() {
            let g = Glyph::for_char(ch).unwrap();
            let min_y = g
                .parts()
                .iter()
                .flat_map(|p| p.corners())
                .map(|c| c.y)
                .fold(f32::INFINITY, f32::min);
            assert!(
                min_y.abs() < EPS,
                "glyph {ch:?} floats above the ground: min_y={min_y}"
            );
        }
    }

    #[test]
    fn glyphs_reach_full_height() {
        for &ch in Glyph::supported() {
            let g = Glyph::for_char(ch).unwrap();
            let max_y = g
                .parts()
                .iter()
                .flat_map(|p| p.corners())
                .map(|c| c.y)
                .fold(f32::NEG_INFINITY, f32::max);
            assert!(
                (max_y - GLYPH_HEIGHT).abs() < EPS,
                "glyph {ch:?} does not reach the cell top: max_y={max_y}"
            );
        }
    }

    #[test]
    fn r_leg_is_split() {
        // The R's right side is a knee cube over a two-unit shin with a gap
        // row between them.
        let g = Glyph::for_char('R').unwrap();
        assert_eq!(g.parts().len(), 5);
        let covers = |y: f32| {
            g.parts().iter().any(|p| {
                let c = p.corners();
                let min = c.iter().copied().reduce(Vec3::min).unwrap();
                let max = c.iter().copied().reduce(Vec3::max).unwrap();
                min.x <= 2.5 && max.x >= 2.5 && min.y <= y && max.y >= y
            })
        };
        assert!(covers(0.5));
        assert!(covers(3.5));
        assert!(!covers(2.5));
    }
}
