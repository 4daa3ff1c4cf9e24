use crate::content::{
    DOCTRINE_SECTIONS, DoctrineSection, FIRST_AID_PROCEDURES, KNOTS, Knot, Procedure,
    TRAIL_SIGNS, TrailSign,
};
use crate::model::TopicKey;
use crate::transform::morse;
use crate::transform::semaphore::{self, SemaphorePose};

/// Study material for one topic, each variant carrying its own payload.
///
/// Presenters match on this exhaustively; interactive variants only carry the
/// reference tables, the transforms live in `crate::transform`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lesson {
    Morse {
        table: &'static [(char, &'static str)],
    },
    Semaphore {
        table: &'static [(char, SemaphorePose)],
    },
    Cipher,
    FirstAid {
        procedures: &'static [Procedure],
    },
    Knots {
        knots: &'static [Knot],
    },
    TrailSigns {
        signs: &'static [TrailSign],
    },
    Doctrine {
        sections: &'static [DoctrineSection],
    },
}

impl Lesson {
    #[must_use]
    pub fn for_topic(topic: TopicKey) -> Self {
        match topic {
            TopicKey::Morse => Lesson::Morse {
                table: &morse::TABLE,
            },
            TopicKey::Semaphore => Lesson::Semaphore {
                table: &semaphore::TABLE,
            },
            TopicKey::Cipher => Lesson::Cipher,
            TopicKey::FirstAid => Lesson::FirstAid {
                procedures: &FIRST_AID_PROCEDURES,
            },
            TopicKey::Knots => Lesson::Knots { knots: &KNOTS },
            TopicKey::TrailSigns => Lesson::TrailSigns {
                signs: &TRAIL_SIGNS,
            },
            TopicKey::Doctrine => Lesson::Doctrine {
                sections: &DOCTRINE_SECTIONS,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_topic_gets_its_own_lesson_kind() {
        assert!(matches!(Lesson::for_topic(TopicKey::Morse), Lesson::Morse { .. }));
        assert!(matches!(Lesson::for_topic(TopicKey::Semaphore), Lesson::Semaphore { .. }));
        assert!(matches!(Lesson::for_topic(TopicKey::Cipher), Lesson::Cipher));
        assert!(matches!(Lesson::for_topic(TopicKey::Knots), Lesson::Knots { .. }));
        assert!(matches!(Lesson::for_topic(TopicKey::TrailSigns), Lesson::TrailSigns { .. }));
        assert!(matches!(Lesson::for_topic(TopicKey::Doctrine), Lesson::Doctrine { .. }));
    }

    #[test]
    fn static_lessons_carry_content() {
        match Lesson::for_topic(TopicKey::FirstAid) {
            Lesson::FirstAid { procedures } => assert!(!procedures.is_empty()),
            other => panic!("unexpected lesson {other:?}"),
        }
    }
}
