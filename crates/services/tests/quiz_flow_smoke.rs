use std::sync::Arc;

use gdpt_core::model::{QuestionDraft, TopicKey};
use gdpt_core::time::fixed_now;
use services::{
    AppConfig, AppServices, Clock, QuizError, QuizPhase, SignalError, SilentSink,
};
use storage::repository::Storage;

fn services() -> AppServices {
    let config = AppConfig::from_toml_str("[quiz]\nsample_size = 4\n").unwrap();
    AppServices::new(
        &Storage::seeded().unwrap(),
        &config,
        Clock::fixed(fixed_now()),
        Arc::new(SilentSink),
    )
}

#[tokio::test]
async fn full_quiz_reaches_a_result() {
    let services = services();
    let quiz = services.quiz();
    let mut session = quiz.start_quiz(TopicKey::Morse).await.unwrap();
    assert_eq!(session.total(), 4);

    let mut correct = 0;
    while session.phase() != QuizPhase::Result {
        let question = session.current_question().unwrap().clone();
        // Answer the first two right and the rest wrong.
        let pick = if correct < 2 {
            correct += 1;
            question.correct_answer()
        } else {
            (question.correct_answer() + 1) % 4
        };
        let feedback = session.submit_answer(pick).unwrap();
        assert_eq!(feedback.correct_answer, question.correct_answer());
        session.advance().unwrap();
    }

    let result = session.result().unwrap();
    assert_eq!((result.score, result.total, result.percentage), (2, 4, 50));
    assert!(result.passed);
    assert_eq!(session.submit_answer(0), Err(QuizError::Finished));
}

#[tokio::test]
async fn authored_question_shows_up_on_the_dashboard() {
    let services = services();
    let before = services.dashboard().topics().await.unwrap();
    let knots_before = before
        .iter()
        .find(|t| t.config.key == TopicKey::Knots)
        .unwrap()
        .question_count;

    services
        .authoring()
        .add_question(QuestionDraft::new(
            TopicKey::Knots,
            "Gút nào dễ tháo nhất?",
            ["Gút dẹt", "Gút chết", "Gút kép", "Gút đôi"],
            0,
        ))
        .await
        .unwrap();

    let after = services.dashboard().topics().await.unwrap();
    let knots_after = after
        .iter()
        .find(|t| t.config.key == TopicKey::Knots)
        .unwrap()
        .question_count;
    assert_eq!(knots_after, knots_before + 1);
}

#[test]
fn signal_player_is_exclusive() {
    let services = services();
    let player = services.signal_player();

    player.play("... --- ...").unwrap();
    assert_eq!(player.play("."), Err(SignalError::Busy));
    player.cancel();
    assert!(player.play(".").is_ok());
}
