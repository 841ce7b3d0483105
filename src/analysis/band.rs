//! Spectral power within a frequency band
//!
//! Bin `k` of a signal with duration `T` sits at frequency `k / T`. A band
//! `(freq_min, freq_max)` selects bins
//!
//! ```text
//! k_min = floor(freq_min * T) + 1      clamped to >= 0
//! k_max = floor(freq_max * T)          clamped to <= N/2
//! ```
//!
//! The `+ 1` only applies to the lower edge: a bin lying exactly on `freq_min`
//! is excluded while one lying exactly on `freq_max` is included. Stored band
//! power figures depend on this selection, so it is kept as is.

use super::traits::FourierTransform;
use crate::model::Signal;
use rustfft::num_complex::Complex;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Frequency band query, in the same units as `1 / duration`
///
/// Not validated: an inverted band simply selects no bins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBand {
    pub freq_min: f64,
    pub freq_max: f64,
}

impl FrequencyBand {
    pub fn new(freq_min: f64, freq_max: f64) -> Self {
        Self { freq_min, freq_max }
    }
}

/// Indices of the bins selected by `band` for a signal of `len` samples over `duration`
///
/// Returns `None` when the band selects no bins.
pub fn bin_range(len: usize, duration: f64, band: FrequencyBand) -> Option<RangeInclusive<usize>> {
    let nyquist = (len / 2) as i64;

    // Float-to-int casts saturate, so out-of-range products still clamp correctly
    let k_min = ((band.freq_min * duration).floor() as i64)
        .saturating_add(1)
        .max(0);
    let k_max = ((band.freq_max * duration).floor() as i64).min(nyquist);

    (k_min <= k_max).then(|| k_min as usize..=k_max as usize)
}

/// Total power of `signal` between `freq_min` and `freq_max`
///
/// Sums `re² + im²` over the selected bins of the transform output. The result
/// is not normalised by `N` or by the duration. An empty band yields exactly `0.0`.
///
/// # Errors
///
/// Only failures of the transform backend, returned unchanged.
pub fn band_power<T: FourierTransform + ?Sized>(
    signal: &Signal,
    freq_min: f64,
    freq_max: f64,
    transform: &T,
) -> Result<f64, T::Error> {
    let bins = transform.real_forward(signal.samples())?;
    let range = bin_range(
        signal.len(),
        signal.duration(),
        FrequencyBand::new(freq_min, freq_max),
    );

    log::debug!(
        "Band [{}, {}] over {} samples ({}s): bins {:?}",
        freq_min,
        freq_max,
        signal.len(),
        signal.duration(),
        range
    );

    Ok(power_in(&bins, range))
}

fn power_in(bins: &[Complex<f64>], range: Option<RangeInclusive<usize>>) -> f64 {
    let Some(range) = range else {
        return 0.0;
    };

    bins.iter()
        .take(range.end() + 1)
        .skip(*range.start())
        .fold(0.0, |power, bin| power + bin.norm_sqr())
}

/// Band power calculator bound to one transform backend
#[derive(Debug, Clone, Default)]
pub struct SpectralAnalyzer<T: FourierTransform> {
    transform: T,
}

impl<T: FourierTransform> SpectralAnalyzer<T> {
    pub fn new(transform: T) -> Self {
        Self { transform }
    }

    /// The transform backend in use
    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Total power of `signal` between `freq_min` and `freq_max`
    pub fn band_power(&self, signal: &Signal, freq_min: f64, freq_max: f64) -> Result<f64, T::Error> {
        band_power(signal, freq_min, freq_max, &self.transform)
    }

    /// Power in each of `bands`, sharing a single transform of `signal`
    pub fn band_powers(&self, signal: &Signal, bands: &[FrequencyBand]) -> Result<Vec<f64>, T::Error> {
        let bins = self.transform.real_forward(signal.samples())?;

        Ok(bands
            .iter()
            .map(|&band| power_in(&bins, bin_range(signal.len(), signal.duration(), band)))
            .collect())
    }
}
