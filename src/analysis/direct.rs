//! Direct O(N²) DFT backend

use super::traits::FourierTransform;
use crate::error::TransformError;
use rustfft::num_complex::Complex;
use std::f64::consts::PI;

/// Evaluates the DFT sum directly
///
/// Slow, but has no planning step; used as a reference when checking the FFT
/// backend and selectable from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectDft;

impl DirectDft {
    pub fn new() -> Self {
        Self
    }
}

impl FourierTransform for DirectDft {
    type Error = TransformError;

    fn real_forward(&self, samples: &[f64]) -> Result<Vec<Complex<f64>>, TransformError> {
        let n = samples.len();
        if n == 0 {
            return Err(TransformError::EmptyInput);
        }

        let bins = (0..=n / 2)
            .map(|k| {
                samples
                    .iter()
                    .enumerate()
                    .fold(Complex::new(0.0, 0.0), |acc, (t, &x)| {
                        // Reduce k*t mod n first to keep the angle small
                        let phase = -2.0 * PI * ((k * t) % n) as f64 / n as f64;
                        acc + Complex::from_polar(x, phase)
                    })
            })
            .collect();

        Ok(bins)
    }
}

#[cfg(test)]
mod tests {
    use super::super::real::RustFftTransform;
    use super::*;

    #[test]
    fn test_matches_fft_backend() {
        let samples: Vec<f64> = (0..31).map(|i| ((i * 7) % 5) as f64 - 2.0).collect();
        let direct = DirectDft::new().real_forward(&samples).unwrap();
        let fft = RustFftTransform::new().real_forward(&samples).unwrap();

        assert_eq!(direct.len(), fft.len());
        for (d, f) in direct.iter().zip(&fft) {
            assert!((d - f).norm() < 1e-9, "direct {} vs fft {}", d, f);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            DirectDft::new().real_forward(&[]),
            Err(TransformError::EmptyInput)
        );
    }
}
