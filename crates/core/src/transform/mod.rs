//! Deterministic cipher and signal transforms.
//!
//! Text transforms work case-insensitively on Latin letters and pass other
//! characters through unless a module says otherwise. Lookup-only modules
//! (`semaphore`, `pigpen`) feed renderers and produce no text.

pub mod morse;
pub mod numeric;
pub mod pigpen;
pub mod reverse;
pub mod semaphore;
pub mod shift;

/// Which text transform a cipher tool applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTransform {
    Shift(i32),
    Numeric,
    Reverse,
    Morse,
}

impl TextTransform {
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            TextTransform::Shift(k) => shift::encode(text, k),
            TextTransform::Numeric => numeric::encode(text),
            TextTransform::Reverse => reverse::reverse(text),
            TextTransform::Morse => morse::encode(text),
        }
    }
}
