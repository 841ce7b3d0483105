//! Batch band power evaluation over signal files

use super::config::BatchConfig;
use crate::analysis::{FourierTransform, SpectralAnalyzer};
use crate::codec::decode;
use crate::model::Signal;
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Band power outcome for one signal file
#[derive(Debug, Clone, Serialize)]
pub struct BandReport {
    /// Signal file
    pub path: PathBuf,

    /// Number of samples (None if the file could not be decoded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,

    /// Signal duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Power within the configured band
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,

    /// Why this file has no power figure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BandReport {
    fn failed(path: &Path, error: &anyhow::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            samples: None,
            duration: None,
            power: None,
            error: Some(format!("{:#}", error)),
        }
    }

    /// Whether a power figure was produced
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Batch pipeline: collect signal files, decode, measure band power
pub struct BatchPipeline<T: FourierTransform> {
    config: BatchConfig,
    analyzer: SpectralAnalyzer<T>,
}

impl<T> BatchPipeline<T>
where
    T: FourierTransform + Sync,
    T::Error: Display,
{
    /// Create a new batch pipeline
    pub fn new(config: BatchConfig, transform: T) -> Result<Self> {
        if !config.input.exists() {
            anyhow::bail!("Input path does not exist: {:?}", config.input);
        }

        Ok(Self {
            config,
            analyzer: SpectralAnalyzer::new(transform),
        })
    }

    /// Signal files covered by this run, sorted by path
    pub fn signal_files(&self) -> Result<Vec<PathBuf>> {
        let input = &self.config.input;
        if input.is_file() {
            return Ok(vec![input.clone()]);
        }

        let max_depth = if self.config.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        for entry in WalkDir::new(input).max_depth(max_depth) {
            let entry = entry.with_context(|| format!("Failed to scan directory: {:?}", input))?;
            let path = entry.path();
            let matches_ext = path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case(self.config.extension.as_str()))
                .unwrap_or(false);

            if entry.file_type().is_file() && matches_ext {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Run the complete batch and return one report per file
    pub fn run(&self) -> Result<Vec<BandReport>> {
        let files = self.signal_files()?;
        log::info!(
            "Measuring band [{}, {}] in {} signal file(s) under {:?}",
            self.config.band.freq_min,
            self.config.band.freq_max,
            files.len(),
            self.config.input
        );

        let reports: Vec<BandReport> = files
            .par_iter()
            .map(|path| match self.measure(path) {
                Ok(report) => report,
                Err(e) => {
                    log::warn!("Skipping {:?}: {:#}", path, e);
                    BandReport::failed(path, &e)
                }
            })
            .collect();

        let failed = reports.iter().filter(|r| !r.is_ok()).count();
        log::info!(
            "Batch complete: {} measured, {} failed",
            reports.len() - failed,
            failed
        );

        Ok(reports)
    }

    /// Measure band power for a single signal file
    fn measure(&self, path: &Path) -> Result<BandReport> {
        let signal = load_signal(path)?;
        let band = self.config.band;

        let power = self
            .analyzer
            .band_power(&signal, band.freq_min, band.freq_max)
            .map_err(|e| anyhow::anyhow!("Transform failed: {}", e))?;

        log::debug!("{:?}: {} samples, power {}", path, signal.len(), power);

        Ok(BandReport {
            path: path.to_path_buf(),
            samples: Some(signal.len()),
            duration: Some(signal.duration()),
            power: Some(power),
            error: None,
        })
    }
}

/// Read and decode a signal text file
pub fn load_signal(path: &Path) -> Result<Signal> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read signal file: {:?}", path))?;
    decode(&text).with_context(|| format!("Failed to decode signal file: {:?}", path))
}
