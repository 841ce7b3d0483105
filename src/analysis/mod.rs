//! Spectral analysis layer
//!
//! Band power is computed from a real-input Fourier transform supplied through
//! the `FourierTransform` trait, so the transform engine can be swapped.

mod band;
mod direct;
mod real;
mod traits;

pub use band::{band_power, bin_range, FrequencyBand, SpectralAnalyzer};
pub use direct::DirectDft;
pub use real::RustFftTransform;
pub use rustfft::num_complex::Complex;
pub use traits::FourierTransform;
