use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use gdpt_core::model::TopicKey;

use crate::views::{HomeView, LessonView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/lesson/:topic", LessonView)] Lesson { topic: TopicKey },
        #[route("/quiz/:topic", QuizView)] Quiz { topic: TopicKey },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { to: Route::Home {}, class: "topbar__brand", "GĐPT · Kỹ năng" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
