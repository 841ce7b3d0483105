//! Validation utilities
//!
//! Confirms signals and signal files survive the text codec unchanged

mod roundtrip;

pub use roundtrip::{validate_file, validate_roundtrip};
