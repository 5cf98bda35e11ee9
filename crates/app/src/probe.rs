//! WAV duration lookup.
//!
//! Used when the transcript does not carry the recording duration. Reads the
//! header only; samples are never decoded.

use anyhow::{Context, Result};
use std::path::Path;

/// Duration in seconds of a WAV file, from its header.
pub fn wav_duration_secs<P: AsRef<Path>>(path: P) -> Result<f64> {
    let reader = hound::WavReader::open(path.as_ref())
        .with_context(|| format!("failed to open WAV at {}", path.as_ref().display()))?;
    let spec = reader.spec();
    let frames = reader.duration();
    Ok(frames as f64 / spec.sample_rate as f64)
}
