use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use tracing::debug;

use gdpt_core::model::{QuizResult, TopicKey};
use services::QuizPhase;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{OptionVm, QuizIntent, QuizVm, result_message, start_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView(topic: TopicKey) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz = ctx.quiz();
    let config = topic.config();

    let vm = use_signal(|| None::<QuizVm>);

    let resource = use_resource(move || {
        let quiz = quiz.clone();
        let mut vm = vm;
        async move {
            let started = start_quiz(&quiz, topic).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        if let Some(vm) = vm.write().as_mut() {
            if let Err(err) = vm.apply(intent) {
                debug!(error = %err, ?intent, "quiz intent ignored");
            }
        }
    });

    let on_retry = use_callback(move |()| {
        let mut vm = vm;
        let mut resource = resource;
        vm.set(None);
        resource.restart();
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let vm_guard = vm.read();
    let phase = vm_guard.as_ref().map(QuizVm::phase);
    let finished = vm_guard
        .as_ref()
        .filter(|_| phase == Some(QuizPhase::Result))
        .map(|current| current.session().score_snapshot());
    let ready_body = match (vm_guard.as_ref(), finished) {
        (_, Some(result)) => rsx! {
            ResultPanel { result, on_retry }
        },
        (Some(current), None) => rsx! {
            QuestionCard {
                progress: current.progress_label(),
                score: current.score_label(),
                question: current.question_text().unwrap_or_default().to_string(),
                image_url: current.image_url().map(str::to_owned),
                options: current.options(),
                answered: phase == Some(QuizPhase::Answered),
                explanation: current.feedback().and_then(|f| f.explanation.clone()),
                next_label: current.next_label(),
                on_intent: dispatch_intent,
            }
        },
        (None, None) => rsx! {
            p { class: "quiz-empty", "{ViewError::EmptyQuiz.message()}" }
        },
    };

    rsx! {
        div { class: "page quiz-page {config.color_class}", id: "quiz-root",
            header { class: "quiz-header",
                h2 { "Kiểm tra: {config.label}" }
                button {
                    class: "quiz-quit",
                    id: "quiz-quit",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Lesson { topic });
                    },
                    "Thoát"
                }
            }
            div { class: "quiz-body",
                match state {
                    ViewState::Idle => rsx! {
                        p { "Idle" }
                    },
                    ViewState::Loading => rsx! {
                        p { "Đang tải..." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "quiz-empty", "{err.message()}" }
                        if err == ViewError::EmptyQuiz {
                            Link { class: "btn btn-secondary", to: Route::Lesson { topic }, "Về bài học" }
                        } else {
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| on_retry.call(()),
                                "Thử lại"
                            }
                        }
                    },
                    ViewState::Ready(()) => ready_body,
                }
            }
        }
    }
}

#[component]
fn ResultPanel(result: QuizResult, on_retry: EventHandler<()>) -> Element {
    let verdict = if result.passed {
        "quiz-result--passed"
    } else {
        "quiz-result--failed"
    };
    rsx! {
        div { class: "quiz-result {verdict}", id: "quiz-result",
            h3 { "{result_message(&result)}" }
            p { class: "quiz-result__score", "{result.score} / {result.total} câu đúng" }
            p { class: "quiz-result__percentage", "{result.percentage}%" }
            div { class: "quiz-result__actions",
                button {
                    class: "btn btn-primary",
                    id: "quiz-retry",
                    r#type: "button",
                    onclick: move |_| on_retry.call(()),
                    "Làm lại"
                }
                Link { class: "btn btn-secondary", to: Route::Home {}, "Về trang chủ" }
            }
        }
    }
}

#[component]
fn QuestionCard(
    progress: String,
    score: String,
    question: String,
    image_url: Option<String>,
    options: Vec<OptionVm>,
    answered: bool,
    explanation: Option<String>,
    next_label: &'static str,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        div { class: "quiz-card",
            div { class: "quiz-card__meta",
                span { class: "quiz-progress", "{progress}" }
                span { class: "quiz-score", "{score}" }
            }
            p { class: "quiz-question", id: "quiz-question", "{question}" }
            if let Some(src) = image_url {
                img { class: "quiz-image", src: "{src}", alt: "" }
            }
            div { class: "quiz-options",
                for option in options {
                    button {
                        key: "{option.index}",
                        class: option.tone.class(),
                        id: "quiz-option-{option.index}",
                        r#type: "button",
                        disabled: answered,
                        onclick: move |_| on_intent.call(QuizIntent::Select(option.index)),
                        span { class: "quiz-option__label", "{option.label}." }
                        " {option.text}"
                    }
                }
            }
            if answered {
                if let Some(text) = explanation {
                    p { class: "quiz-explanation", "{text}" }
                }
                button {
                    class: "btn btn-primary",
                    id: "quiz-next",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "{next_label}"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<Option<QuizVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
