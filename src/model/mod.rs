//! Signal data model
//!
//! A signal is an immutable `(duration, samples)` pair. Everything else in the
//! crate (text codec, spectral analysis, batch runs) consumes this type.

mod signal;

pub use signal::Signal;
