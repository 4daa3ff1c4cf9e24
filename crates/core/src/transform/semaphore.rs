//! Flag semaphore poses.
//!
//! Angles are in degrees, measured clockwise from an arm pointing straight
//! down, as the observer sees the signaller: `0` down, `90` out to the
//! observer's left, `180` straight up, `270` out to the observer's right.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SemaphorePose {
    /// Arm on the observer's left.
    pub left: u16,
    /// Arm on the observer's right.
    pub right: u16,
}

impl SemaphorePose {
    const fn new(left: u16, right: u16) -> Self {
        Self { left, right }
    }
}

/// Both flags lowered.
pub const REST: SemaphorePose = SemaphorePose::new(0, 0);
/// "Numerals follow".
pub const NUMERAL_SIGN: SemaphorePose = SemaphorePose::new(180, 225);
/// "Letters follow" (same pose as J).
pub const LETTERS_SIGN: SemaphorePose = TABLE[9].1;

/// Letter poses A–Z.
pub const TABLE: [(char, SemaphorePose); 26] = [
    ('A', SemaphorePose::new(45, 0)),
    ('B', SemaphorePose::new(90, 0)),
    ('C', SemaphorePose::new(135, 0)),
    ('D', SemaphorePose::new(180, 0)),
    ('E', SemaphorePose::new(0, 225)),
    ('F', SemaphorePose::new(0, 270)),
    ('G', SemaphorePose::new(0, 315)),
    ('H', SemaphorePose::new(90, 45)),
    ('I', SemaphorePose::new(135, 45)),
    ('J', SemaphorePose::new(180, 270)),
    ('K', SemaphorePose::new(45, 180)),
    ('L', SemaphorePose::new(45, 225)),
    ('M', SemaphorePose::new(45, 270)),
    ('N', SemaphorePose::new(45, 315)),
    ('O', SemaphorePose::new(135, 90)),
    ('P', SemaphorePose::new(90, 180)),
    ('Q', SemaphorePose::new(90, 225)),
    ('R', SemaphorePose::new(90, 270)),
    ('S', SemaphorePose::new(90, 315)),
    ('T', SemaphorePose::new(135, 180)),
    ('U', SemaphorePose::new(135, 225)),
    ('V', SemaphorePose::new(180, 315)),
    ('W', SemaphorePose::new(225, 270)),
    ('X', SemaphorePose::new(225, 315)),
    ('Y', SemaphorePose::new(135, 270)),
    ('Z', SemaphorePose::new(315, 270)),
];

/// Pose for one character.
///
/// Digits reuse letter poses (`1`–`9` = A–I, `0` = K); `' '` is [`REST`] and
/// `'#'` the [`NUMERAL_SIGN`].
#[must_use]
pub fn pose_for(ch: char) -> Option<SemaphorePose> {
    match ch.to_ascii_uppercase() {
        upper @ 'A'..='Z' => Some(TABLE[usize::from(upper as u8 - b'A')].1),
        '0' => Some(TABLE[10].1),
        digit @ '1'..='9' => Some(TABLE[usize::from(digit as u8 - b'1')].1),
        ' ' => Some(REST),
        '#' => Some(NUMERAL_SIGN),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignalKind {
    Letter,
    Digit,
    NumeralSign,
    LettersSign,
    Rest,
}

/// One pose in a transmitted sequence, with the character it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SemaphoreSignal {
    pub label: char,
    pub kind: SignalKind,
    pub pose: SemaphorePose,
}

/// Poses for a whole message.
///
/// A numeral sign is inserted before each run of digits and a letters sign
/// when switching back to letters. Unsupported characters are skipped.
#[must_use]
pub fn sequence(text: &str) -> Vec<SemaphoreSignal> {
    let mut signals = Vec::new();
    let mut numerals = false;

    for ch in text.chars() {
        let upper = ch.to_ascii_uppercase();
        let Some(pose) = pose_for(upper) else {
            continue;
        };
        let kind = match upper {
            'A'..='Z' => SignalKind::Letter,
            '0'..='9' => SignalKind::Digit,
            '#' => SignalKind::NumeralSign,
            _ => SignalKind::Rest,
        };

        match kind {
            SignalKind::Digit if !numerals => {
                signals.push(SemaphoreSignal {
                    label: '#',
                    kind: SignalKind::NumeralSign,
                    pose: NUMERAL_SIGN,
                });
                numerals = true;
            }
            SignalKind::Letter if numerals => {
                signals.push(SemaphoreSignal {
                    label: 'J',
                    kind: SignalKind::LettersSign,
                    pose: LETTERS_SIGN,
                });
                numerals = false;
            }
            SignalKind::NumeralSign => numerals = true,
            _ => {}
        }

        signals.push(SemaphoreSignal {
            label: upper,
            kind,
            pose,
        });
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(pose_for('a'), pose_for('A'));
        assert_eq!(pose_for('R'), Some(SemaphorePose { left: 90, right: 270 }));
    }

    #[test]
    fn u_raises_both_arms() {
        let u = pose_for('U').unwrap();
        assert!(u.left > 90 && u.left < 180);
        assert!(u.right > 180 && u.right < 270);
    }

    #[test]
    fn digits_reuse_letter_poses() {
        assert_eq!(pose_for('1'), pose_for('A'));
        assert_eq!(pose_for('9'), pose_for('I'));
        assert_eq!(pose_for('0'), pose_for('K'));
    }

    #[test]
    fn space_is_rest_and_unknown_is_none() {
        assert_eq!(pose_for(' '), Some(REST));
        assert_eq!(pose_for('?'), None);
    }

    #[test]
    fn poses_are_distinct() {
        for (i, (letter, a)) in TABLE.iter().enumerate() {
            assert_eq!(usize::from(*letter as u8 - b'A'), i);
            for (_, b) in &TABLE[i + 1..] {
                assert_ne!(a, b);
            }
            assert_ne!(*a, REST);
            assert_ne!(*a, NUMERAL_SIGN);
        }
    }

    #[test]
    fn sequence_inserts_mode_signs() {
        let labels: String = sequence("a12b").iter().map(|s| s.label).collect();
        assert_eq!(labels, "A#12JB");
        let kinds: Vec<_> = sequence("1 ").iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SignalKind::NumeralSign, SignalKind::Digit, SignalKind::Rest]
        );
    }
}
