//! Signal text decoder
//!
//! Grammar:
//!
//! ```text
//! signal   := duration '[' number (',' number)* ']'
//! duration := number
//! ```
//!
//! Blank characters may appear between any two tokens. The sample count is not
//! stated in the text; it is whatever number of comma separated values parse.
//!
//! Each primitive takes the input and a byte position and returns the position
//! just past what it consumed, so repetition needs no shared scan state.

use crate::error::{SignalError, SyntaxReason};
use crate::model::Signal;

/// Decode the textual form `"<duration> [<s0>, <s1>, ...]"` into a signal
pub fn decode(input: &str) -> Result<Signal, SignalError> {
    let fail = |position: usize, reason: SyntaxReason| SignalError::Syntax {
        input: input.to_string(),
        position,
        reason,
    };

    let (duration, pos) = number(input, 0)
        .ok_or_else(|| fail(skip_blank(input, 0), SyntaxReason::MissingDuration))?;

    let (first, mut pos) = symbol(input, pos, b'[')
        .and_then(|after_bracket| number(input, after_bracket))
        .ok_or_else(|| fail(skip_blank(input, pos), SyntaxReason::MissingOpenBracket))?;

    let mut samples = vec![first];
    while let Some((value, next)) = symbol(input, pos, b',').and_then(|p| number(input, p)) {
        samples.push(value);
        pos = next;
    }

    pos = skip_blank(input, pos);
    match char_at(input, pos) {
        Some(']') => pos += 1,
        found => return Err(fail(pos, SyntaxReason::MissingCloseBracket { found })),
    }

    pos = skip_blank(input, pos);
    if let Some(found) = char_at(input, pos) {
        return Err(fail(pos, SyntaxReason::TrailingContent { found }));
    }

    log::debug!("Decoded signal: {} samples over {}s", samples.len(), duration);

    Signal::new(duration, samples)
}

/// Blank characters accepted between tokens
#[inline]
fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Position of the first non-blank byte at or after `at`
fn skip_blank(input: &str, at: usize) -> usize {
    let bytes = input.as_bytes();
    let mut pos = at;
    while pos < bytes.len() && is_blank(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Character starting at byte `pos`, if any
fn char_at(input: &str, pos: usize) -> Option<char> {
    input.get(pos..).and_then(|rest| rest.chars().next())
}

/// Match optional blanks followed by the ASCII byte `expected`
fn symbol(input: &str, at: usize, expected: u8) -> Option<usize> {
    let pos = skip_blank(input, at);
    (input.as_bytes().get(pos) == Some(&expected)).then_some(pos + 1)
}

/// Match optional blanks followed by a floating-point literal
///
/// Accepts an optional sign, then either `inf`/`infinity`/`nan` (any case) or
/// digits with an optional fraction and exponent. An exponent marker without
/// digits is left unconsumed, so `"1e"` reads as `1` followed by `e`.
fn number(input: &str, at: usize) -> Option<(f64, usize)> {
    let bytes = input.as_bytes();
    let start = skip_blank(input, at);
    let mut pos = start;

    if matches!(bytes.get(pos), Some(b'+' | b'-')) {
        pos += 1;
    }

    if let Some(len) = special_literal(&bytes[pos..]) {
        pos += len;
    } else {
        let int_digits = count_digits(&bytes[pos..]);
        pos += int_digits;

        let mut frac_digits = 0;
        if bytes.get(pos) == Some(&b'.') {
            frac_digits = count_digits(&bytes[pos + 1..]);
            if int_digits + frac_digits > 0 {
                pos += 1 + frac_digits;
            }
        }

        if int_digits + frac_digits == 0 {
            return None;
        }

        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            let mut exp = pos + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_digits = count_digits(&bytes[exp..]);
            if exp_digits > 0 {
                pos = exp + exp_digits;
            }
        }
    }

    let value = input[start..pos].parse::<f64>().ok()?;
    Some((value, pos))
}

/// Length of a leading `infinity`, `inf` or `nan`, ignoring ASCII case
fn special_literal(bytes: &[u8]) -> Option<usize> {
    ["infinity", "inf", "nan"]
        .iter()
        .find(|word| {
            bytes.len() >= word.len() && bytes[..word.len()].eq_ignore_ascii_case(word.as_bytes())
        })
        .map(|word| word.len())
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason_of(input: &str) -> SyntaxReason {
        match decode(input) {
            Err(SignalError::Syntax { reason, .. }) => reason,
            other => panic!("expected syntax error for {:?}, got {:?}", input, other),
        }
    }

    fn position_of(input: &str) -> usize {
        match decode(input) {
            Err(SignalError::Syntax { position, .. }) => position,
            other => panic!("expected syntax error for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_number_literals() {
        assert_eq!(number("1.5", 0), Some((1.5, 3)));
        assert_eq!(number("  -2e3,", 0), Some((-2000.0, 6)));
        assert_eq!(number("+.5]", 0), Some((0.5, 3)));
        assert_eq!(number("7.]", 0), Some((7.0, 2)));
        assert_eq!(number("1e", 0), Some((1.0, 1)));
        assert_eq!(number("1e+", 0), Some((1.0, 1)));
        assert_eq!(number("2E-2x", 0), Some((0.02, 4)));
        assert_eq!(number(".", 0), None);
        assert_eq!(number("-", 0), None);
        assert_eq!(number("[1", 0), None);
        assert_eq!(number("", 0), None);
    }

    #[test]
    fn test_special_literals() {
        assert_eq!(number("inf", 0), Some((f64::INFINITY, 3)));
        assert_eq!(number("-Infinity,", 0), Some((f64::NEG_INFINITY, 9)));
        let (nan, end) = number("NaN]", 0).unwrap();
        assert!(nan.is_nan());
        assert_eq!(end, 3);
        assert_eq!(number("in", 0), None);
    }

    #[test]
    fn test_symbol_skips_blanks() {
        assert_eq!(symbol(" \t[", 0, b'['), Some(3));
        assert_eq!(symbol("(", 0, b'['), None);
        assert_eq!(symbol("", 0, b'['), None);
    }

    #[test]
    fn test_decode_basic() {
        let signal = decode("1.0 [1, 2, 3]").unwrap();
        assert_eq!(signal.duration(), 1.0);
        assert_eq!(signal.samples(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_decode_whitespace_variation() {
        for text in [
            "1.0[1,2,3]",
            "1.0 [ 1 , 2 , 3 ]",
            "  1.0\n[\t1,\n2 ,3 ]  \n",
        ] {
            let signal = decode(text).unwrap();
            assert_eq!(signal.duration(), 1.0, "input {:?}", text);
            assert_eq!(signal.samples(), &[1.0, 2.0, 3.0], "input {:?}", text);
        }
    }

    #[test]
    fn test_sample_count_from_content() {
        assert_eq!(decode("2.5 [4.0]").unwrap().len(), 1);
        assert_eq!(decode("2.5 [4.0, 5.0, 6.0]").unwrap().len(), 3);

        let long: Vec<String> = (0..1000).map(|i| i.to_string()).collect();
        let text = format!("10 [{}]", long.join(", "));
        let signal = decode(&text).unwrap();
        assert_eq!(signal.len(), 1000);
        assert_eq!(signal.sample(999), Ok(999.0));
    }

    #[test]
    fn test_missing_duration() {
        assert_eq!(reason_of("[1,2,3]"), SyntaxReason::MissingDuration);
        assert_eq!(reason_of(""), SyntaxReason::MissingDuration);
        assert_eq!(position_of("  [1]"), 2);
    }

    #[test]
    fn test_missing_open_bracket() {
        assert_eq!(reason_of("1.0 (1,2)"), SyntaxReason::MissingOpenBracket);
        assert_eq!(reason_of("1.0 []"), SyntaxReason::MissingOpenBracket);
        assert_eq!(reason_of("1.0"), SyntaxReason::MissingOpenBracket);
        assert_eq!(position_of("1.0 (1,2)"), 4);
    }

    #[test]
    fn test_missing_close_bracket() {
        assert_eq!(
            reason_of("1.0 [1,2,3"),
            SyntaxReason::MissingCloseBracket { found: None }
        );
        assert_eq!(
            reason_of("1.0 [1,2,3)"),
            SyntaxReason::MissingCloseBracket { found: Some(')') }
        );
        // A comma that is not followed by a number ends the sample list
        assert_eq!(
            reason_of("1.0 [1,,2]"),
            SyntaxReason::MissingCloseBracket { found: Some(',') }
        );
        assert_eq!(
            reason_of("1.0 [1, abc]"),
            SyntaxReason::MissingCloseBracket { found: Some(',') }
        );
        assert_eq!(position_of("1.0 [1,2,3"), 10);
    }

    #[test]
    fn test_trailing_content() {
        assert_eq!(
            reason_of("1.0 [1,2,3] extra"),
            SyntaxReason::TrailingContent { found: 'e' }
        );
        assert_eq!(position_of("1.0 [1,2,3] extra"), 12);
        assert_eq!(
            reason_of("1.0 [1]]"),
            SyntaxReason::TrailingContent { found: ']' }
        );
    }

    #[test]
    fn test_non_ascii_found_char() {
        assert_eq!(
            reason_of("1 [1] é"),
            SyntaxReason::TrailingContent { found: 'é' }
        );
    }

    #[test]
    fn test_infinite_duration_rejected() {
        assert!(matches!(
            decode("inf [1]"),
            Err(SignalError::NonFiniteDuration(_))
        ));
    }

    #[test]
    fn test_non_finite_samples_accepted() {
        let signal = decode("1 [inf, -inf, nan]").unwrap();
        assert_eq!(signal.sample(0), Ok(f64::INFINITY));
        assert_eq!(signal.sample(1), Ok(f64::NEG_INFINITY));
        assert!(signal.sample(2).unwrap().is_nan());
    }
}
