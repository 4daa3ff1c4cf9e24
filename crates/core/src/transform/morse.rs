//! International Morse code for letters and digits.

pub const DOT: char = '.';
pub const DASH: char = '-';
/// Separator between per-character codes in an encoded sequence.
pub const LETTER_GAP: char = ' ';
/// Word separator accepted by [`decode`].
pub const WORD_GAP: char = '/';

pub const TABLE: [(char, &str); 36] = [
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."), ('F', "..-."),
    ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"), ('K', "-.-"), ('L', ".-.."),
    ('M', "--"), ('N', "-."), ('O', "---"), ('P', ".--."), ('Q', "--.-"), ('R', ".-."),
    ('S', "..."), ('T', "-"), ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"),
    ('Y', "-.--"), ('Z', "--.."), ('0', "-----"), ('1', ".----"), ('2', "..---"),
    ('3', "...--"), ('4', "....-"), ('5', "....."), ('6', "-...."), ('7', "--..."),
    ('8', "---.."), ('9', "----."),
];

/// Code for a single character, case-insensitive.
#[must_use]
pub fn code_for(ch: char) -> Option<&'static str> {
    let upper = ch.to_ascii_uppercase();
    TABLE
        .iter()
        .find(|(key, _)| *key == upper)
        .map(|(_, code)| *code)
}

/// Character for a single dot/dash code.
#[must_use]
pub fn char_for(code: &str) -> Option<char> {
    TABLE
        .iter()
        .find(|(_, candidate)| *candidate == code)
        .map(|(ch, _)| *ch)
}

/// Encode text as per-character codes joined by single spaces.
///
/// Characters outside A–Z/0–9 (including spaces) are dropped.
#[must_use]
pub fn encode(text: &str) -> String {
    text.chars()
        .filter_map(code_for)
        .collect::<Vec<_>>()
        .join(&LETTER_GAP.to_string())
}

/// Decode space-separated codes; `/` marks a word break. Unknown codes are dropped.
#[must_use]
pub fn decode(symbols: &str) -> String {
    symbols
        .split(WORD_GAP)
        .map(|word| word.split_whitespace().filter_map(char_for).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
