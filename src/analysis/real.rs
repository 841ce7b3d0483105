//! FFT backend built on rustfft

use super::traits::FourierTransform;
use crate::error::TransformError;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Real-input transform computed with a rustfft forward plan
///
/// The planner and working buffer live only for the duration of one call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustFftTransform;

impl RustFftTransform {
    pub fn new() -> Self {
        Self
    }
}

impl FourierTransform for RustFftTransform {
    type Error = TransformError;

    fn real_forward(&self, samples: &[f64]) -> Result<Vec<Complex<f64>>, TransformError> {
        let n = samples.len();
        if n == 0 {
            return Err(TransformError::EmptyInput);
        }

        let mut buffer: Vec<Complex<f64>> =
            samples.iter().map(|&x| Complex::new(x, 0.0)).collect();

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        // Upper half mirrors the lower half for real input
        buffer.truncate(n / 2 + 1);
        Ok(buffer)
    }
}
