//! Round-trip validation of the signal text codec

use crate::batch::load_signal;
use crate::codec::{decode, encode};
use crate::model::Signal;
use anyhow::{Context, Result};
use std::path::Path;

/// Check that `signal` survives encode then decode bit for bit
pub fn validate_roundtrip(signal: &Signal) -> Result<()> {
    let text = encode(signal);
    let decoded =
        decode(&text).with_context(|| format!("Canonical encoding failed to decode: {}", text))?;

    if !decoded.is_identical(signal) {
        let mismatch = signal
            .samples()
            .iter()
            .zip(decoded.samples())
            .position(|(a, b)| a.to_bits() != b.to_bits());

        match mismatch {
            Some(index) => anyhow::bail!(
                "Round-trip changed sample {}: {:?} became {:?}",
                index,
                signal.samples()[index],
                decoded.samples()[index]
            ),
            None => anyhow::bail!(
                "Round-trip changed signal: {:?} became {:?} ({} vs {} samples)",
                signal.duration(),
                decoded.duration(),
                signal.len(),
                decoded.len()
            ),
        }
    }

    Ok(())
}

/// Decode a signal file and check its canonical form round-trips
///
/// # Returns
/// The decoded signal if validation passes
pub fn validate_file(path: &Path) -> Result<Signal> {
    log::debug!("Validating signal file: {:?}", path);

    let signal = load_signal(path)?;
    validate_roundtrip(&signal).with_context(|| format!("Validation failed for {:?}", path))?;

    log::info!("✅ {:?}: {} samples over {}s", path, signal.len(), signal.duration());
    Ok(signal)
}
