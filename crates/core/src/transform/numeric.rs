//! Letter-to-number substitution (`A -> 1 … Z -> 26`).

const SEPARATOR: char = '-';

/// Upper-case the input, replace letters by their alphabet position and join
/// every token with `-`. Non-letters (digits, punctuation, spaces) are kept as
/// their own tokens.
#[must_use]
pub fn encode(text: &str) -> String {
    let tokens: Vec<String> = text
        .chars()
        .flat_map(char::to_uppercase)
        .map(|ch| match ch {
            'A'..='Z' => (u32::from(ch) - u32::from('A') + 1).to_string(),
            other => other.to_string(),
        })
        .collect();
    tokens.join(&SEPARATOR.to_string())
}

/// Map `-`-separated tokens back: `1..=26` become letters, anything else is
/// copied unchanged.
///
/// Lossy for digits in the original text: `encode("A1")` and `encode("AA")`
/// both yield `1-1`.
#[must_use]
pub fn decode(text: &str) -> String {
    text.split(SEPARATOR)
        .map(|token| match token.parse::<u8>() {
            Ok(n @ 1..=26) => char::from(b'A' + n - 1).to_string(),
            _ => token.to_string(),
        })
        .collect()
}
