//! Scaling from unit-square glyph data and pose angles to SVG coordinates.

use gdpt_core::geometry::{Point, Segment};
use gdpt_core::transform::pigpen::PigpenGlyph;
use gdpt_core::transform::semaphore::{SemaphorePose, SemaphoreSignal, SignalKind};

/// An SVG `line` in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Line {
    #[must_use]
    pub fn between(from: Point, to: Point) -> Self {
        Self {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
        }
    }
}

/// Map unit-square segments into a `size`-wide box at `origin`.
#[must_use]
pub fn scale_segments(segments: &[Segment], origin: Point, size: f32) -> Vec<Line> {
    segments
        .iter()
        .map(|segment| {
            Line::between(
                segment.from.scaled(origin, size),
                segment.to.scaled(origin, size),
            )
        })
        .collect()
}

//
// ─── SEMAPHORE ─────────────────────────────────────────────────────────────────
//

/// Viewport of one signaller figure.
pub const FIGURE_VIEWBOX: &str = "0 0 100 120";

const LEFT_SHOULDER: Point = Point::new(42.0, 48.0);
const RIGHT_SHOULDER: Point = Point::new(58.0, 48.0);
const ARM_LENGTH: f32 = 34.0;

/// End of an arm of `length` raised `angle` degrees clockwise from straight down.
///
/// Screen y grows downward and 90° points to the observer's left.
#[must_use]
pub fn arm_end(shoulder: Point, angle: u16, length: f32) -> Point {
    let radians = f32::from(angle % 360).to_radians();
    Point::new(
        shoulder.x - length * radians.sin(),
        shoulder.y + length * radians.cos(),
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct SemaphoreFigureVm {
    pub label: String,
    pub left_arm: Line,
    pub right_arm: Line,
    pub left_flag: Point,
    pub right_flag: Point,
}

#[must_use]
pub fn semaphore_figure(signal: &SemaphoreSignal) -> SemaphoreFigureVm {
    let label = match signal.kind {
        SignalKind::Letter | SignalKind::Digit => signal.label.to_string(),
        SignalKind::NumeralSign => "Số".to_string(),
        SignalKind::LettersSign => "Chữ".to_string(),
        SignalKind::Rest => "Nghỉ".to_string(),
    };
    figure_for_pose(label, signal.pose)
}

#[must_use]
pub fn figure_for_pose(label: String, pose: SemaphorePose) -> SemaphoreFigureVm {
    let left_flag = arm_end(LEFT_SHOULDER, pose.left, ARM_LENGTH);
    let right_flag = arm_end(RIGHT_SHOULDER, pose.right, ARM_LENGTH);
    SemaphoreFigureVm {
        label,
        left_arm: Line::between(LEFT_SHOULDER, left_flag),
        right_arm: Line::between(RIGHT_SHOULDER, right_flag),
        left_flag,
        right_flag,
    }
}

//
// ─── PIGPEN ────────────────────────────────────────────────────────────────────
//

pub const GLYPH_SIZE: f32 = 40.0;
const GLYPH_PADDING: f32 = 4.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PigpenGlyphVm {
    pub letter: char,
    pub lines: Vec<Line>,
    pub dot: Option<Point>,
}

#[must_use]
pub fn pigpen_glyph(glyph: &PigpenGlyph) -> PigpenGlyphVm {
    let origin = Point::new(GLYPH_PADDING, GLYPH_PADDING);
    let inner = GLYPH_SIZE - 2.0 * GLYPH_PADDING;
    PigpenGlyphVm {
        letter: glyph.letter,
        lines: scale_segments(&glyph.segments(), origin, inner),
        dot: glyph.dot().map(|dot| dot.scaled(origin, inner)),
    }
}
