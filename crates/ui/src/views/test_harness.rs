use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use gdpt_core::model::TopicKey;
use gdpt_core::time::fixed_now;
use services::{AppConfig, AppServices, Clock, DashboardService, QuizService, SignalPlayer, SilentSink};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{HomeView, LessonView, QuizView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    initial_topic: Option<TopicKey>,
}

impl UiApp for TestApp {
    fn initial_topic(&self) -> Option<TopicKey> {
        self.initial_topic
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn signal_player(&self) -> Arc<SignalPlayer> {
        self.services.signal_player()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Lesson(TopicKey),
    Quiz(TopicKey),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: Option<QuizTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Lesson(topic) => rsx! { LessonView { topic } },
        ViewKind::Quiz(topic) => rsx! { QuizView { topic } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub quiz_handles: Option<QuizTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness over the seeded question bank.
pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::seeded().expect("seed bank"))
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    let config = AppConfig::from_toml_str("[quiz]\nsample_size = 3\n").expect("test config");
    let services = AppServices::new(
        &storage,
        &config,
        Clock::fixed(fixed_now()),
        Arc::new(SilentSink),
    );
    let quiz_handles = match view {
        ViewKind::Quiz(_) => Some(QuizTestHandles::default()),
        _ => None,
    };

    let app = Arc::new(TestApp {
        services,
        initial_topic: None,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        quiz_handles,
    }
}
