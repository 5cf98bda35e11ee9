//! Eager validation of detector output.
//!
//! The windowing loop itself is total over well-formed input, so every shape
//! check happens here, before the first window is produced. A failure reports
//! the channel, the index, and the offending values; nothing is emitted after
//! a validation error.

use crate::error::{Channel, WindowError};
use crate::types::SpeechInterval;

/// Checks one speaker's interval list against the detector contract: finite
/// values, `start < end`, within `[0, duration]`, sorted ascending by start,
/// mutually non-overlapping.
pub fn validate_intervals(
    channel: Channel,
    intervals: &[SpeechInterval],
    duration: f64,
) -> Result<(), WindowError> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(WindowError::InvalidDuration(duration));
    }

    let mut prev_end = 0.0f64;
    for (index, iv) in intervals.iter().enumerate() {
        if !iv.start.is_finite() || !iv.end.is_finite() {
            return Err(WindowError::InvalidInterval {
                channel,
                index,
                reason: format!("non-finite bounds [{}, {}]", iv.start, iv.end),
            });
        }
        if iv.start >= iv.end {
            return Err(WindowError::InvalidInterval {
                channel,
                index,
                reason: format!("start {} is not before end {}", iv.start, iv.end),
            });
        }
        if iv.start < 0.0 || iv.end > duration {
            return Err(WindowError::InvalidInterval {
                channel,
                index,
                reason: format!(
                    "[{}, {}] falls outside the recording [0, {}]",
                    iv.start, iv.end, duration
                ),
            });
        }
        if iv.start < prev_end {
            return Err(WindowError::InvalidInterval {
                channel,
                index,
                reason: format!(
                    "start {} overlaps or precedes previous end {}",
                    iv.start, prev_end
                ),
            });
        }
        prev_end = iv.end;
    }

    Ok(())
}
