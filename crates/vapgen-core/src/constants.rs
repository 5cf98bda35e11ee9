//! Windowing constants shared across the dataset pipeline

/// Default training window length (seconds)
pub const DEFAULT_WINDOW_LENGTH_SECS: f64 = 20.0;

/// Default shift between consecutive windows (seconds)
/// shift = window_length - stride; 0.0 means non-overlapping windows
pub const DEFAULT_SHIFT_SECS: f64 = 0.0;

/// Minimum original duration below which a zero-width clip is still retained (seconds)
/// Matches the detector's min_speech_duration of 50ms
pub const MIN_SEGMENT_SECS: f64 = 0.05;

/// How far past the window end the candidate scan may look (seconds)
/// Bounds the lookup horizon only; never widens the emitted window
pub const LOOKAHEAD_SECS: f64 = 2.0;

/// Clipped interval endpoints are rounded to 6 decimal places (microseconds)
pub const ROUND_SCALE: f64 = 1e6;
