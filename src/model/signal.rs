use crate::error::SignalError;
use serde::{Deserialize, Serialize};

/// A sampled waveform covering a fixed time span
///
/// Sample `i` sits at time `i * duration / len`. Signals are immutable once built
/// and always hold at least one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSignal")]
pub struct Signal {
    /// Time span covered by the samples, in seconds
    duration: f64,

    /// Ordered real samples
    samples: Vec<f64>,
}

/// Unchecked serde shape, funnelled through `Signal::new`
#[derive(Deserialize)]
struct RawSignal {
    duration: f64,
    samples: Vec<f64>,
}

impl TryFrom<RawSignal> for Signal {
    type Error = SignalError;

    fn try_from(raw: RawSignal) -> Result<Self, Self::Error> {
        Signal::new(raw.duration, raw.samples)
    }
}

impl TryFrom<(f64, Vec<f64>)> for Signal {
    type Error = SignalError;

    fn try_from((duration, samples): (f64, Vec<f64>)) -> Result<Self, Self::Error> {
        Signal::new(duration, samples)
    }
}

#[allow(clippy::len_without_is_empty)]
impl Signal {
    /// Build a signal from a duration and its samples
    ///
    /// Fails with `InvalidLength` when `samples` is empty and with
    /// `NonFiniteDuration` when `duration` is NaN or infinite. Zero and negative
    /// durations are accepted as-is.
    pub fn new(duration: f64, samples: Vec<f64>) -> Result<Self, SignalError> {
        if samples.is_empty() {
            return Err(SignalError::InvalidLength);
        }
        if !duration.is_finite() {
            return Err(SignalError::NonFiniteDuration(duration));
        }

        Ok(Self { duration, samples })
    }

    /// Build a signal by copying an existing numeric array
    pub fn from_slice(duration: f64, samples: &[f64]) -> Result<Self, SignalError> {
        Self::new(duration, samples.to_vec())
    }

    /// Number of samples (always at least 1)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Time span in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sample at `index`
    pub fn sample(&self, index: usize) -> Result<f64, SignalError> {
        self.samples
            .get(index)
            .copied()
            .ok_or(SignalError::OutOfRange {
                index,
                len: self.samples.len(),
            })
    }

    /// All samples in order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Samples per second
    pub fn sample_rate(&self) -> f64 {
        self.samples.len() as f64 / self.duration
    }

    /// Implied timestamp of sample `index`
    pub fn sample_time(&self, index: usize) -> Result<f64, SignalError> {
        self.sample(index)?;
        Ok(index as f64 * self.duration / self.samples.len() as f64)
    }

    /// Bit-for-bit equality of duration and every sample
    ///
    /// Unlike `==`, this treats identical NaN payloads as equal and tells `0.0`
    /// apart from `-0.0`.
    pub fn is_identical(&self, other: &Signal) -> bool {
        self.duration.to_bits() == other.duration.to_bits()
            && self.samples.len() == other.samples.len()
            && self
                .samples
                .iter()
                .zip(&other.samples)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct() {
        let signal = Signal::new(2.0, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(signal.len(), 4);
        assert_eq!(signal.duration(), 2.0);
        assert_eq!(signal.samples(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(signal.sample_rate(), 2.0);
    }

    #[test]
    fn test_empty_samples_rejected() {
        for duration in [0.0, 1.0, -3.5, 1e9] {
            assert_eq!(
                Signal::new(duration, Vec::new()),
                Err(SignalError::InvalidLength)
            );
        }
        assert_eq!(Signal::from_slice(1.0, &[]), Err(SignalError::InvalidLength));
    }

    #[test]
    fn test_non_finite_duration_rejected() {
        assert!(matches!(
            Signal::new(f64::INFINITY, vec![1.0]),
            Err(SignalError::NonFiniteDuration(_))
        ));
        assert!(Signal::new(f64::NAN, vec![1.0]).is_err());
        // Sign and zero are not policed
        assert!(Signal::new(0.0, vec![1.0]).is_ok());
        assert!(Signal::new(-1.0, vec![1.0]).is_ok());
    }

    #[test]
    fn test_sample_access() {
        let signal = Signal::from_slice(1.0, &[0.5, -0.5]).unwrap();
        assert_eq!(signal.sample(0), Ok(0.5));
        assert_eq!(signal.sample(1), Ok(-0.5));
        assert_eq!(
            signal.sample(2),
            Err(SignalError::OutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_sample_time() {
        let signal = Signal::new(1.0, vec![0.0; 4]).unwrap();
        assert_eq!(signal.sample_time(0), Ok(0.0));
        assert_eq!(signal.sample_time(2), Ok(0.5));
        assert!(signal.sample_time(4).is_err());
    }

    #[test]
    fn test_is_identical_distinguishes_signed_zero() {
        let a = Signal::new(1.0, vec![0.0]).unwrap();
        let b = Signal::new(1.0, vec![-0.0]).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_identical(&b));
        assert!(a.is_identical(&a.clone()));
    }

    #[test]
    fn test_try_from_tuple() {
        let signal = Signal::try_from((3.0, vec![1.0])).unwrap();
        assert_eq!(signal.duration(), 3.0);
        assert!(Signal::try_from((3.0, Vec::new())).is_err());
    }
}
