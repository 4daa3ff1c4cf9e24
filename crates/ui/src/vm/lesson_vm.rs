use std::num::ParseIntError;

use gdpt_core::transform::{TextTransform, morse, numeric, pigpen, semaphore, shift};

use super::geometry::{PigpenGlyphVm, SemaphoreFigureVm, pigpen_glyph, semaphore_figure};

/// Initial value of the shift amount field.
pub const DEFAULT_SHIFT: i32 = 3;

/// Morse code for the input, or an empty string if nothing is encodable.
#[must_use]
pub fn morse_preview(input: &str) -> String {
    morse::encode(input)
}

/// Letters read back from dot/dash groups typed by the learner.
#[must_use]
pub fn morse_reading(symbols: &str) -> String {
    morse::decode(symbols)
}

#[must_use]
pub fn semaphore_figures(input: &str) -> Vec<SemaphoreFigureVm> {
    semaphore::sequence(input)
        .iter()
        .map(semaphore_figure)
        .collect()
}

//
// ─── CIPHER TOOLS ──────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CipherTool {
    Shift,
    Unshift,
    Numeric,
    NumericDecode,
    Reverse,
    Pigpen,
}

impl CipherTool {
    pub const ALL: [CipherTool; 6] = [
        CipherTool::Shift,
        CipherTool::Unshift,
        CipherTool::Numeric,
        CipherTool::NumericDecode,
        CipherTool::Reverse,
        CipherTool::Pigpen,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CipherTool::Shift => "Dời chữ",
            CipherTool::Unshift => "Giải dời chữ",
            CipherTool::Numeric => "Chữ → số",
            CipherTool::NumericDecode => "Số → chữ",
            CipherTool::Reverse => "Đảo ngược",
            CipherTool::Pigpen => "Pigpen",
        }
    }

    /// Stable suffix for the tab's DOM id.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            CipherTool::Shift => "shift",
            CipherTool::Unshift => "unshift",
            CipherTool::Numeric => "numeric",
            CipherTool::NumericDecode => "numeric-decode",
            CipherTool::Reverse => "reverse",
            CipherTool::Pigpen => "pigpen",
        }
    }

    #[must_use]
    pub const fn uses_shift(self) -> bool {
        matches!(self, CipherTool::Shift | CipherTool::Unshift)
    }
}

/// One cell of pigpen output: a glyph, or a gap for anything else.
#[derive(Clone, Debug, PartialEq)]
pub enum PigpenCell {
    Glyph(PigpenGlyphVm),
    Gap(char),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CipherOutput {
    Text(String),
    Pigpen(Vec<PigpenCell>),
}

/// Parse the shift amount field. Blank or non-integer input is rejected.
///
/// # Errors
///
/// Returns the `ParseIntError` for anything that is not a whole number.
pub fn parse_shift(raw: &str) -> Result<i32, ParseIntError> {
    raw.trim().parse()
}

/// Run `tool` with the raw shift field as typed.
///
/// The field is only read by the shift tools; the others ignore it even
/// when it is malformed.
///
/// # Errors
///
/// Returns the parse error when a shift tool gets a malformed amount.
pub fn run_cipher_field(
    tool: CipherTool,
    input: &str,
    raw_amount: &str,
) -> Result<CipherOutput, ParseIntError> {
    let amount = if tool.uses_shift() {
        parse_shift(raw_amount)?
    } else {
        0
    };
    Ok(run_cipher(tool, input, amount))
}

#[must_use]
pub fn run_cipher(tool: CipherTool, input: &str, amount: i32) -> CipherOutput {
    match tool {
        CipherTool::Shift => CipherOutput::Text(TextTransform::Shift(amount).apply(input)),
        CipherTool::Unshift => CipherOutput::Text(shift::decode(input, amount)),
        CipherTool::Numeric => CipherOutput::Text(TextTransform::Numeric.apply(input)),
        CipherTool::NumericDecode => CipherOutput::Text(numeric::decode(input)),
        CipherTool::Reverse => CipherOutput::Text(TextTransform::Reverse.apply(input)),
        CipherTool::Pigpen => CipherOutput::Pigpen(
            input
                .chars()
                .zip(pigpen::encode(input))
                .map(|(ch, glyph)| match glyph {
                    Some(glyph) => PigpenCell::Glyph(pigpen_glyph(&glyph)),
                    None => PigpenCell::Gap(ch),
                })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_tools_round_trip() {
        let CipherOutput::Text(encoded) = run_cipher(CipherTool::Shift, "Gia Dinh", 5) else {
            panic!("expected text output");
        };
        assert_eq!(encoded, "Lnf Insm");
        assert_eq!(
            run_cipher(CipherTool::Unshift, &encoded, 5),
            CipherOutput::Text("Gia Dinh".into())
        );
    }

    #[test]
    fn numeric_tools() {
        assert_eq!(
            run_cipher(CipherTool::Numeric, "ABC", 0),
            CipherOutput::Text("1-2-3".into())
        );
        assert_eq!(
            run_cipher(CipherTool::NumericDecode, "7-4-16-20", 0),
            CipherOutput::Text("GDPT".into())
        );
    }

    #[test]
    fn pigpen_leaves_gaps_for_non_letters() {
        let CipherOutput::Pigpen(cells) = run_cipher(CipherTool::Pigpen, "a b", 0) else {
            panic!("expected pigpen output");
        };
        assert_eq!(cells.len(), 3);
        assert!(matches!(cells[1], PigpenCell::Gap(' ')));
    }

    #[test]
    fn shift_field_parsing() {
        assert_eq!(parse_shift(" 7 "), Ok(7));
        assert_eq!(parse_shift("-2"), Ok(-2));
        assert!(parse_shift("abc").is_err());
        assert!(parse_shift("2x").is_err());
        assert!(parse_shift("   ").is_err());
    }

    #[test]
    fn malformed_shift_is_rejected_not_replaced() {
        assert!(run_cipher_field(CipherTool::Shift, "abc", "2x").is_err());
        assert!(run_cipher_field(CipherTool::Unshift, "abc", "").is_err());
        assert_eq!(
            run_cipher_field(CipherTool::Shift, "abc", "2"),
            Ok(CipherOutput::Text("cde".into()))
        );
    }

    #[test]
    fn other_tools_ignore_the_shift_field() {
        assert_eq!(
            run_cipher_field(CipherTool::Reverse, "abc", "2x"),
            Ok(CipherOutput::Text("cba".into()))
        );
    }

    #[test]
    fn tool_keys_are_unique() {
        let mut keys: Vec<_> = CipherTool::ALL.iter().map(|tool| tool.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), CipherTool::ALL.len());
    }

    #[test]
    fn previews() {
        assert_eq!(morse_preview("sos"), "... --- ...");
        assert_eq!(morse_reading("--. -.. .--. - / ... --- ..."), "GDPT SOS");
        assert_eq!(semaphore_figures("ab").len(), 2);
    }
}
