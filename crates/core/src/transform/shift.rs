//! Caesar shift over the 26-letter Latin alphabet.

const ALPHABET_LEN: i32 = 26;

/// Shift every ASCII letter `k` places forward within its case, wrapping.
///
/// `k` may be negative or larger than 26; it is reduced into `0..26` first.
#[must_use]
pub fn encode(text: &str, k: i32) -> String {
    let k = normalize(k);
    text.chars().map(|ch| shift_char(ch, k)).collect()
}

/// Inverse of [`encode`] for the same `k`.
#[must_use]
pub fn decode(text: &str, k: i32) -> String {
    encode(text, -i32::from(normalize(k)))
}

/// Reduce an arbitrary shift amount into `0..26`.
#[must_use]
pub fn normalize(k: i32) -> u8 {
    // rem_euclid(26) is always in 0..26
    u8::try_from(k.rem_euclid(ALPHABET_LEN)).unwrap_or(0)
}

fn shift_char(ch: char, k: u8) -> char {
    let base = match ch {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return ch,
    };
    // ASCII letters only reach here
    let offset = (ch as u8 - base + k) % 26;
    char::from(base + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_and_wraps_each_case() {
        assert_eq!(encode("Hello, World!", 3), "Khoor, Zruog!");
        assert_eq!(encode("xyz XYZ", 3), "abc ABC");
    }

    #[test]
    fn negative_and_large_shifts_normalize() {
        assert_eq!(encode("abc", -1), "zab");
        assert_eq!(encode("abc", 27), "bcd");
        assert_eq!(normalize(-27), 25);
    }

    #[test]
    fn zero_shift_is_identity() {
        assert_eq!(encode("GĐPT 2024", 0), "GĐPT 2024");
    }

    #[test]
    fn round_trips_for_every_key() {
        let text = "Gia Đình Phật Tử – Sen Trắng 1951!";
        for k in 0..26 {
            assert_eq!(encode(&encode(text, k), 26 - k), text, "k = {k}");
            assert_eq!(decode(&encode(text, k), k), text, "k = {k}");
        }
    }

    #[test]
    fn decode_undoes_negative_and_oversized_keys() {
        assert_eq!(decode("zab", -1), "abc");
        assert_eq!(decode("bcd", 27), "abc");
        assert_eq!(decode("Jld Glqk", 3), "Gia Dinh");
    }

    #[test]
    fn non_ascii_letters_pass_through() {
        assert_eq!(encode("đ ă", 5), "đ ă");
    }
}
