//! Batch evaluation of signal files

pub mod config;
pub mod pipeline;

pub use config::BatchConfig;
pub use pipeline::{load_signal, BandReport, BatchPipeline};
