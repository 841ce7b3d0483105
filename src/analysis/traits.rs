//! Fourier transform seam

use rustfft::num_complex::Complex;

/// Real-input discrete Fourier transform
///
/// Allows swapping the transform engine (rustfft, the direct DFT, or a stub in
/// tests) without touching the band power logic.
pub trait FourierTransform {
    /// Failure raised by the backend; passed through to callers untouched
    type Error;

    /// Transform `N` real samples into `N/2 + 1` complex bins
    ///
    /// Bins are in ascending frequency order with the DC component at index 0.
    fn real_forward(&self, samples: &[f64]) -> Result<Vec<Complex<f64>>, Self::Error>;
}

impl<T: FourierTransform + ?Sized> FourierTransform for &T {
    type Error = T::Error;

    fn real_forward(&self, samples: &[f64]) -> Result<Vec<Complex<f64>>, Self::Error> {
        (**self).real_forward(samples)
    }
}
