use dioxus::prelude::ReadableExt;
use gdpt_core::model::{QuestionDraft, TopicKey};
use storage::repository::Storage;

use super::test_harness::{
    ViewKind, drive_dom, setup_view_harness, setup_view_harness_with_storage,
};
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_sections_and_counts() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    for expected in ["Truyền tin", "Kỹ năng trại", "Phật pháp", "Mật thư", "Gút dây"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("câu hỏi"), "missing question count in {html}");
    assert!(html.contains("Kiểm tra"), "missing quiz link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_reflects_authored_question() {
    let storage = Storage::in_memory();
    let draft = QuestionDraft::new(
        TopicKey::Knots,
        "Nút nào dùng để nối hai dây bằng nhau?",
        ["Nút dẹt", "Nút thòng lọng", "Nút ghế đơn", "Nút thợ chài"],
        0,
    );
    storage
        .questions
        .add_question(draft, TopicKey::Knots)
        .await
        .expect("add question");

    let mut harness = setup_view_harness_with_storage(ViewKind::Home, storage);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("1 câu hỏi"), "missing single count in {html}");
    assert!(html.contains("Chưa có câu hỏi"), "missing empty topic label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_morse_tools() {
    let mut harness = setup_view_harness(ViewKind::Lesson(TopicKey::Morse));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("... --- ..."), "missing SOS preview in {html}");
    assert!(html.contains("morse-table"), "missing code table in {html}");
    assert!(html.contains("morse-play"), "missing play button in {html}");
    assert!(html.contains("morse-decode-output"), "missing decode field in {html}");
    assert!(html.contains("GDPT"), "missing decoded text in {html}");
    assert!(html.contains("Làm bài kiểm tra"), "missing quiz link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_cipher_default_output() {
    let mut harness = setup_view_harness(ViewKind::Lesson(TopicKey::Cipher));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Jld Glqk Skdw Wx"), "missing shifted text in {html}");
    assert!(html.contains("cipher-pigpen"), "missing pigpen tab in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_full_semaphore_alphabet() {
    let mut harness = setup_view_harness(ViewKind::Lesson(TopicKey::Semaphore));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Bảng chữ cái"), "missing alphabet heading in {html}");
    assert!(html.matches("<svg").count() >= 26, "missing letter figures in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_runs_to_result() {
    let mut harness = setup_view_harness(ViewKind::Quiz(TopicKey::Morse));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Câu 1 / 3"), "missing progress in {html}");
    assert!(html.contains("quiz-option-3"), "missing options in {html}");

    let handles = harness.quiz_handles.clone().expect("quiz handles");
    let dispatch = handles.dispatch();
    let vm = handles.vm();

    for _ in 0..3 {
        let correct = harness.dom.in_runtime(|| {
            vm.peek()
                .as_ref()
                .and_then(|current| current.session().current_question())
                .map(|question| question.correct_answer())
                .expect("question on screen")
        });
        harness.dom.in_runtime(|| dispatch.call(QuizIntent::Select(correct)));
        drive_dom(&mut harness.dom);
        assert!(
            harness.render().contains("quiz-option--correct"),
            "missing correct marker"
        );
        harness.dom.in_runtime(|| dispatch.call(QuizIntent::Next));
        drive_dom(&mut harness.dom);
    }

    let html = harness.render();
    assert!(html.contains("quiz-result--passed"), "missing pass verdict in {html}");
    assert!(html.contains("3 / 3 câu đúng"), "missing score in {html}");
    assert!(html.contains("100%"), "missing percentage in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_ignores_next_before_answer() {
    let mut harness = setup_view_harness(ViewKind::Quiz(TopicKey::Knots));
    harness.rebuild();
    harness.drive_async().await;

    let handles = harness.quiz_handles.clone().expect("quiz handles");
    let dispatch = handles.dispatch();
    harness.dom.in_runtime(|| dispatch.call(QuizIntent::Next));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Câu 1 / 3"), "progress moved in {html}");
    assert!(!html.contains("quiz-next"), "next shown before answer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reports_empty_topic() {
    let mut harness =
        setup_view_harness_with_storage(ViewKind::Quiz(TopicKey::Doctrine), Storage::in_memory());
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Chủ đề này chưa có câu hỏi."),
        "missing empty message in {html}"
    );
    assert!(html.contains("Về bài học"), "missing lesson link in {html}");
}
