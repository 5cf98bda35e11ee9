use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SHIFT_SECS, DEFAULT_WINDOW_LENGTH_SECS, LOOKAHEAD_SECS, MIN_SEGMENT_SECS,
};
use crate::error::WindowError;

/// Windowing parameters.
///
/// `shift` controls overlap between consecutive windows: the stride is
/// `window_length - shift`, so `shift = 0` produces back-to-back windows and
/// larger shifts produce more overlap. `shift` must stay in
/// `[0, window_length)` so the stride is positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window length in seconds
    pub window_length: f64,
    /// Overlap between consecutive windows, in seconds
    pub shift: f64,
    /// Intervals shorter than this are still dropped when they clip to zero
    /// width; at or above it they are retained
    pub min_segment: f64,
    /// Candidate-scan horizon past the window end, in seconds. Only bounds the
    /// lookup; never changes clipping or inclusion
    pub lookahead: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_length: DEFAULT_WINDOW_LENGTH_SECS,
            shift: DEFAULT_SHIFT_SECS,
            min_segment: MIN_SEGMENT_SECS,
            lookahead: LOOKAHEAD_SECS,
        }
    }
}

impl WindowConfig {
    /// Time step between consecutive window starts, in seconds.
    pub fn stride(&self) -> f64 {
        self.window_length - self.shift
    }

    /// Checks every field before any windowing starts. Reports the offending
    /// value so callers can surface it directly.
    pub fn validate(&self) -> Result<(), WindowError> {
        if !self.window_length.is_finite() || self.window_length <= 0.0 {
            return Err(WindowError::InvalidConfiguration {
                field: "window_length",
                value: self.window_length,
                reason: "must be finite and positive".into(),
            });
        }
        if !self.shift.is_finite() || self.shift < 0.0 || self.shift >= self.window_length {
            return Err(WindowError::InvalidConfiguration {
                field: "shift",
                value: self.shift,
                reason: format!("must be in [0, {})", self.window_length),
            });
        }
        if !self.min_segment.is_finite() || self.min_segment < 0.0 {
            return Err(WindowError::InvalidConfiguration {
                field: "min_segment",
                value: self.min_segment,
                reason: "must be finite and non-negative".into(),
            });
        }
        if !self.lookahead.is_finite() || self.lookahead < 0.0 {
            return Err(WindowError::InvalidConfiguration {
                field: "lookahead",
                value: self.lookahead,
                reason: "must be finite and non-negative".into(),
            });
        }
        Ok(())
    }
}
