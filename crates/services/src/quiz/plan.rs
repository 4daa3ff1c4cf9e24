use rand::Rng;
use rand::seq::SliceRandom;

use gdpt_core::model::{Question, TopicKey};

/// Draw up to `sample_size` questions for `topic` from `pool`.
///
/// Questions from other topics are dropped, the rest are shuffled uniformly
/// with `rng` and truncated. A pool smaller than `sample_size` is used whole.
pub fn sample_questions<R>(
    topic: TopicKey,
    pool: impl IntoIterator<Item = Question>,
    sample_size: u32,
    rng: &mut R,
) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    let mut candidates: Vec<Question> = pool
        .into_iter()
        .filter(|question| question.topic() == topic)
        .collect();

    candidates.as_mut_slice().shuffle(rng);

    let limit = usize::try_from(sample_size).unwrap_or(usize::MAX);
    candidates.truncate(limit);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdpt_core::model::{QuestionDraft, QuestionId};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn pool(per_topic: usize) -> Vec<Question> {
        [TopicKey::Morse, TopicKey::Knots]
            .into_iter()
            .flat_map(|topic| {
                (0..per_topic).map(move |i| {
                    QuestionDraft::new(topic, format!("{topic} {i}"), ["a", "b", "c", "d"], 0)
                        .validate(topic)
                        .unwrap()
                        .assign_id(QuestionId::new(format!("{topic}-{i}")))
                })
            })
            .collect()
    }

    #[test]
    fn sample_is_bounded_and_filtered() {
        let mut rng = StdRng::seed_from_u64(7);
        let sample = sample_questions(TopicKey::Morse, pool(30), 20, &mut rng);

        assert_eq!(sample.len(), 20);
        assert!(sample.iter().all(|q| q.topic() == TopicKey::Morse));
        let ids: HashSet<_> = sample.iter().map(|q| q.id().clone()).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn small_pool_is_used_whole() {
        let mut rng = StdRng::seed_from_u64(7);
        let sample = sample_questions(TopicKey::Knots, pool(3), 20, &mut rng);
        assert_eq!(sample.len(), 3);
    }

    #[test]
    fn topic_without_questions_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample_questions(TopicKey::Doctrine, pool(5), 20, &mut rng).is_empty());
    }

    #[test]
    fn same_seed_same_order() {
        let a = sample_questions(TopicKey::Morse, pool(10), 5, &mut StdRng::seed_from_u64(42));
        let b = sample_questions(TopicKey::Morse, pool(10), 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
