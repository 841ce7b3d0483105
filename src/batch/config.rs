//! Batch run configuration

use crate::analysis::FrequencyBand;
use std::path::PathBuf;

/// Default extension of signal text files
pub const DEFAULT_EXTENSION: &str = "sig";

/// Configuration for a batch band power run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// A single signal file, or a directory of them
    pub input: PathBuf,

    /// Band to measure in every signal
    pub band: FrequencyBand,

    /// Extension (without dot) of files picked up from a directory
    pub extension: String,

    /// Descend into subdirectories
    pub recursive: bool,
}

impl BatchConfig {
    /// Create a configuration covering the whole spectrum above DC
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            band: FrequencyBand::new(0.0, f64::INFINITY),
            extension: DEFAULT_EXTENSION.to_string(),
            recursive: false,
        }
    }

    /// Set the frequency band
    pub fn with_band(mut self, freq_min: f64, freq_max: f64) -> Self {
        self.band = FrequencyBand::new(freq_min, freq_max);
        self
    }

    /// Set the signal file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Enable or disable descending into subdirectories
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}
