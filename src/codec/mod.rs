//! Textual encoding of signals
//!
//! `decode` and `encode` convert between a `Signal` and its text form
//! `"<duration> [<s0>, <s1>, ...]"`. Encoding is canonical and exact: decoding
//! the output of `encode` always reproduces the original signal bit for bit.

mod format;
mod parser;

pub use format::{encode, format_number};
pub use parser::decode;

use crate::error::SignalError;
use crate::model::Signal;
use std::str::FromStr;

impl FromStr for Signal {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
