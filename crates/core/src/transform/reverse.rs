/// Reverse the whole character sequence (not word by word).
#[must_use]
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}
