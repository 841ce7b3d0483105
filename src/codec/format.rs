//! Signal text encoder

use crate::model::Signal;
use std::fmt::{self, Write};

/// Render a signal in its canonical form `"<duration> [<s0>, <s1>, ...]"`
///
/// The output decodes back to a bit-identical signal. The one exception is a
/// NaN carrying a custom payload, which comes back as the plain NaN of the same sign.
pub fn encode(signal: &Signal) -> String {
    signal.to_string()
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", Number(self.duration()))?;
        for (i, &sample) in self.samples().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", Number(sample))?;
        }
        f.write_char(']')
    }
}

/// Format a single value with the shortest digits that parse back exactly
///
/// Like `%g`, very large and very small magnitudes switch to exponent form.
pub fn format_number(value: f64) -> String {
    Number(value).to_string()
}

/// Display adapter for one encoded value
struct Number(f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let magnitude = value.abs();
        if value.is_nan() {
            // `{}` drops the sign of NaN
            f.write_str(if value.is_sign_negative() { "-NaN" } else { "NaN" })
        } else if value.is_infinite() || magnitude == 0.0 || (1e-4..1e15).contains(&magnitude) {
            write!(f, "{}", value)
        } else {
            write!(f, "{:e}", value)
        }
    }
}
