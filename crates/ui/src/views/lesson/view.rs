use dioxus::prelude::*;
use dioxus_router::Link;

use gdpt_core::content::Lesson;
use gdpt_core::geometry::Point;
use gdpt_core::model::TopicKey;

use super::graphics::{SemaphoreFigure, TrailGlyph};
use super::tools::{CipherWorkbench, MorseTool, SemaphoreTool};
use crate::routes::Route;
use crate::vm::{figure_for_pose, scale_segments};

#[component]
pub fn LessonView(topic: TopicKey) -> Element {
    let config = topic.config();
    let lesson = Lesson::for_topic(topic);

    rsx! {
        div { class: "page lesson-page {config.color_class}",
            header { class: "lesson-header",
                Link { class: "lesson-back", to: Route::Home {}, "← Trang chủ" }
                h2 { "{config.icon} {config.label}" }
                p { class: "lesson-description", "{config.description}" }
            }
            div { class: "lesson-body",
                match lesson {
                    Lesson::Morse { table: codes } => rsx! {
                        MorseTool {}
                        table { class: "morse-table",
                            tbody {
                                for (ch, code) in codes.iter() {
                                    tr { key: "{ch}",
                                        th { "{ch}" }
                                        td { class: "morse-code", "{code}" }
                                    }
                                }
                            }
                        }
                    },
                    Lesson::Semaphore { table: poses } => rsx! {
                        SemaphoreTool {}
                        h3 { "Bảng chữ cái" }
                        div { class: "figure-grid",
                            for (ch, pose) in poses.iter() {
                                SemaphoreFigure { key: "{ch}", figure: figure_for_pose(ch.to_string(), *pose) }
                            }
                        }
                    },
                    Lesson::Cipher => rsx! {
                        CipherWorkbench {}
                    },
                    Lesson::FirstAid { procedures } => rsx! {
                        for procedure in procedures.iter() {
                            section { key: "{procedure.title}", class: "lesson-card",
                                h3 { "{procedure.title}" }
                                p { "{procedure.summary}" }
                                ol {
                                    for step in procedure.steps.iter() {
                                        li { "{step}" }
                                    }
                                }
                            }
                        }
                    },
                    Lesson::Knots { knots } => rsx! {
                        for knot in knots.iter() {
                            section { key: "{knot.name}", class: "lesson-card",
                                h3 { "{knot.name}" }
                                p { class: "lesson-usage", "{knot.usage}" }
                                ol {
                                    for step in knot.steps.iter() {
                                        li { "{step}" }
                                    }
                                }
                            }
                        }
                    },
                    Lesson::TrailSigns { signs } => rsx! {
                        div { class: "trail-grid",
                            for sign in signs.iter() {
                                section { key: "{sign.name}", class: "lesson-card trail-card",
                                    TrailGlyph {
                                        lines: scale_segments(sign.glyph, Point::new(4.0, 4.0), 56.0),
                                        title: sign.name,
                                    }
                                    h3 { "{sign.name}" }
                                    p { "{sign.meaning}" }
                                }
                            }
                        }
                    },
                    Lesson::Doctrine { sections } => rsx! {
                        for part in sections.iter() {
                            section { key: "{part.heading}", class: "lesson-card",
                                h3 { "{part.heading}" }
                                for paragraph in part.paragraphs.iter() {
                                    p { "{paragraph}" }
                                }
                            }
                        }
                    },
                }
            }
            footer { class: "lesson-footer",
                Link { class: "btn btn-primary", id: "lesson-take-quiz", to: Route::Quiz { topic }, "Làm bài kiểm tra" }
            }
        }
    }
}
