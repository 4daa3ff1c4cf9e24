use dioxus::prelude::*;

use crate::vm::{FIGURE_VIEWBOX, GLYPH_SIZE, Line, PigpenGlyphVm, SemaphoreFigureVm};

#[component]
pub(super) fn SemaphoreFigure(figure: SemaphoreFigureVm) -> Element {
    rsx! {
        figure { class: "semaphore-figure",
            svg {
                view_box: FIGURE_VIEWBOX,
                width: "100",
                height: "120",
                // head and body
                circle { cx: "50", cy: "30", r: "9", class: "figure-head" }
                line { x1: "50", y1: "39", x2: "50", y2: "80", class: "figure-body" }
                line { x1: "42", y1: "48", x2: "58", y2: "48", class: "figure-body" }
                line { x1: "50", y1: "80", x2: "42", y2: "110", class: "figure-body" }
                line { x1: "50", y1: "80", x2: "58", y2: "110", class: "figure-body" }
                SvgLine { line: figure.left_arm, class: "figure-arm" }
                SvgLine { line: figure.right_arm, class: "figure-arm" }
                circle { cx: "{figure.left_flag.x}", cy: "{figure.left_flag.y}", r: "5", class: "figure-flag" }
                circle { cx: "{figure.right_flag.x}", cy: "{figure.right_flag.y}", r: "5", class: "figure-flag" }
            }
            figcaption { "{figure.label}" }
        }
    }
}

#[component]
pub(super) fn PigpenGlyphSvg(glyph: PigpenGlyphVm) -> Element {
    rsx! {
        svg {
            class: "pigpen-glyph",
            view_box: "0 0 {GLYPH_SIZE} {GLYPH_SIZE}",
            width: "{GLYPH_SIZE}",
            height: "{GLYPH_SIZE}",
            "aria-label": "{glyph.letter}",
            for (i, line) in glyph.lines.iter().enumerate() {
                SvgLine { key: "{i}", line: *line, class: "glyph-stroke" }
            }
            if let Some(dot) = glyph.dot {
                circle { cx: "{dot.x}", cy: "{dot.y}", r: "2.5", class: "glyph-dot" }
            }
        }
    }
}

#[component]
pub(super) fn TrailGlyph(lines: Vec<Line>, title: &'static str) -> Element {
    rsx! {
        svg {
            class: "trail-glyph",
            view_box: "0 0 64 64",
            width: "64",
            height: "64",
            "aria-label": "{title}",
            for (i, line) in lines.iter().enumerate() {
                SvgLine { key: "{i}", line: *line, class: "glyph-stroke" }
            }
        }
    }
}

#[component]
fn SvgLine(line: Line, class: &'static str) -> Element {
    rsx! {
        line {
            x1: "{line.x1}",
            y1: "{line.y1}",
            x2: "{line.x2}",
            y2: "{line.y2}",
            class,
        }
    }
}
