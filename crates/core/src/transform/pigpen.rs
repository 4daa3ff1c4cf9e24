//! Pigpen cipher glyphs.
//!
//! A–I sit in a tic-tac-toe grid, J–R in a second grid marked with a dot,
//! S–V in the quadrants of an X and W–Z in a dotted X. Each glyph is the
//! outline of the letter's cell, drawn on a unit square.

use serde::Serialize;

use crate::geometry::{Point, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Quadrant {
    Top,
    Left,
    Right,
    Bottom,
}

/// The cell a letter occupies, which determines its outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PigpenFrame {
    /// Cell of the 3×3 grid; `row` and `col` are `0..3`.
    Grid { row: u8, col: u8 },
    /// Quadrant of the X.
    Chevron(Quadrant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PigpenGlyph {
    pub letter: char,
    pub frame: PigpenFrame,
    pub dotted: bool,
}

impl PigpenGlyph {
    /// Outline segments on the unit square.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        match self.frame {
            PigpenFrame::Grid { row, col } => {
                let mut lines = Vec::with_capacity(4);
                if row > 0 {
                    lines.push(Segment::new(0.0, 0.0, 1.0, 0.0));
                }
                if row < 2 {
                    lines.push(Segment::new(0.0, 1.0, 1.0, 1.0));
                }
                if col > 0 {
                    lines.push(Segment::new(0.0, 0.0, 0.0, 1.0));
                }
                if col < 2 {
                    lines.push(Segment::new(1.0, 0.0, 1.0, 1.0));
                }
                lines
            }
            PigpenFrame::Chevron(quadrant) => {
                let (a, apex, b) = chevron_points(quadrant);
                vec![
                    Segment {
                        from: a,
                        to: apex,
                    },
                    Segment {
                        from: apex,
                        to: b,
                    },
                ]
            }
        }
    }

    /// Where the dot goes for J–R and W–Z.
    #[must_use]
    pub fn dot(&self) -> Option<Point> {
        if !self.dotted {
            return None;
        }
        let point = match self.frame {
            PigpenFrame::Grid { .. } => Point::new(0.5, 0.5),
            PigpenFrame::Chevron(Quadrant::Top) => Point::new(0.5, 0.35),
            PigpenFrame::Chevron(Quadrant::Bottom) => Point::new(0.5, 0.65),
            PigpenFrame::Chevron(Quadrant::Left) => Point::new(0.35, 0.5),
            PigpenFrame::Chevron(Quadrant::Right) => Point::new(0.65, 0.5),
        };
        Some(point)
    }
}

// The apex points toward the centre of the X, so the opening faces outward.
fn chevron_points(quadrant: Quadrant) -> (Point, Point, Point) {
    match quadrant {
        Quadrant::Top => (Point::new(0.0, 0.0), Point::new(0.5, 1.0), Point::new(1.0, 0.0)),
        Quadrant::Bottom => (Point::new(0.0, 1.0), Point::new(0.5, 0.0), Point::new(1.0, 1.0)),
        Quadrant::Left => (Point::new(0.0, 0.0), Point::new(1.0, 0.5), Point::new(0.0, 1.0)),
        Quadrant::Right => (Point::new(1.0, 0.0), Point::new(0.0, 0.5), Point::new(1.0, 1.0)),
    }
}

const QUADRANTS: [Quadrant; 4] = [
    Quadrant::Top,
    Quadrant::Left,
    Quadrant::Right,
    Quadrant::Bottom,
];

/// Glyph for a Latin letter, case-insensitive.
#[must_use]
pub fn glyph_for(ch: char) -> Option<PigpenGlyph> {
    let letter = ch.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let index = letter as u8 - b'A';

    let (frame, dotted) = match index {
        0..=17 => {
            let cell = index % 9;
            (
                PigpenFrame::Grid {
                    row: cell / 3,
                    col: cell % 3,
                },
                index >= 9,
            )
        }
        _ => {
            let slot = index - 18;
            (
                PigpenFrame::Chevron(QUADRANTS[usize::from(slot % 4)]),
                slot >= 4,
            )
        }
    };

    Some(PigpenGlyph {
        letter,
        frame,
        dotted,
    })
}

/// Glyphs for every letter of `text`; `None` marks a word break or an
/// unsupported character so renderers can leave a gap.
#[must_use]
pub fn encode(text: &str) -> Vec<Option<PigpenGlyph>> {
    text.chars().map(glyph_for).collect()
}
