use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SectionVm, TopicCardVm, map_dashboard_sections};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let dashboard = ctx.dashboard();

    let launch_topic = use_hook(|| ctx.take_initial_topic());
    use_effect(move || {
        if let Some(topic) = launch_topic {
            let _ = navigator.replace(Route::Lesson { topic });
        }
    });

    let resource = use_resource(move || {
        let dashboard = dashboard.clone();
        async move {
            let sections = dashboard
                .sections()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_dashboard_sections(&sections))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page home-page",
            h2 { "Chương trình tu học" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Đang tải..." }
                },
                ViewState::Ready(sections) => rsx! {
                    for section in sections {
                        SectionBlock { section }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Thử lại"
                    }
                },
            }
        }
    }
}

#[component]
fn SectionBlock(section: SectionVm) -> Element {
    rsx! {
        section { class: "home-section",
            h3 { class: "home-section__title", "{section.title}" }
            div { class: "topic-grid",
                for card in section.cards {
                    TopicCard { key: "{card.key}", card }
                }
            }
        }
    }
}

#[component]
fn TopicCard(card: TopicCardVm) -> Element {
    let topic = card.key;
    rsx! {
        article { class: "topic-card {card.color_class}",
            div { class: "topic-card__icon", "{card.icon}" }
            h4 { class: "topic-card__title", "{card.label}" }
            p { class: "topic-card__description", "{card.description}" }
            p { class: "topic-card__count", "{card.count_label}" }
            div { class: "topic-card__actions",
                Link { class: "btn btn-primary", to: Route::Lesson { topic }, "Học" }
                if card.can_quiz {
                    Link { class: "btn btn-secondary", to: Route::Quiz { topic }, "Kiểm tra" }
                } else {
                    span { class: "btn btn-secondary btn--disabled", "Kiểm tra" }
                }
            }
        }
    }
}
