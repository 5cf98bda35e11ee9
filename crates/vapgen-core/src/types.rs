//! Core types for window generation

use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

/// One span of detected voice activity for a single speaker, in seconds
/// relative to the start of the recording.
///
/// Lists of these are produced by the external speech detector, sorted
/// ascending by `start` and mutually non-overlapping. They are validated
/// once and never re-sorted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeechInterval {
    pub start: f64,
    pub end: f64,
}

impl SpeechInterval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A speech interval re-expressed relative to one window's start and clamped
/// to the window bounds. Both endpoints are rounded to 6 decimal places and
/// satisfy `0 <= start <= end <= window_length`.
///
/// Serializes as a two-element array `[start, end]`, the shape the training
/// pipeline expects inside `vad_list`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "(f64, f64)")]
pub struct ClippedInterval {
    pub start: f64,
    pub end: f64,
}

impl From<(f64, f64)> for ClippedInterval {
    fn from((start, end): (f64, f64)) -> Self {
        Self { start, end }
    }
}

impl Serialize for ClippedInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.start)?;
        tup.serialize_element(&self.end)?;
        tup.end()
    }
}

/// Per-window clip lists, one per speaker channel.
///
/// A channel with no speech in the window carries an empty list, never a
/// missing entry. Serializes as the nested list `[[...], [...]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowAnnotations {
    pub channels: [Vec<ClippedInterval>; 2],
}

impl WindowAnnotations {
    pub fn new(channel_a: Vec<ClippedInterval>, channel_b: Vec<ClippedInterval>) -> Self {
        Self {
            channels: [channel_a, channel_b],
        }
    }

    /// True when neither channel has any speech in the window.
    pub fn is_silent(&self) -> bool {
        self.channels.iter().all(|c| c.is_empty())
    }
}

/// One training example: a fixed-length slice of the recording together with
/// the window-relative speech annotations for both speakers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedWindow {
    pub window_start: f64,
    pub window_end: f64,
    pub annotations: WindowAnnotations,
}

/// One row of the training table, ready for serialization.
///
/// `audio_path`, `session` and `dataset` are caller-supplied constants carried
/// through unchanged; the windower never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetRow {
    pub audio_path: String,
    pub start: f64,
    pub end: f64,
    pub vad_list: WindowAnnotations,
    pub session: u64,
    pub dataset: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipped_interval_serializes_as_pair() {
        let clip = ClippedInterval::from((1.5, 2.25));
        let json = serde_json::to_string(&clip).unwrap();
        assert_eq!(json, "[1.5,2.25]");
    }

    #[test]
    fn annotations_serialize_as_nested_lists() {
        let ann = WindowAnnotations::new(vec![ClippedInterval::from((0.0, 0.5))], vec![]);
        let json = serde_json::to_string(&ann).unwrap();
        assert_eq!(json, "[[[0.0,0.5]],[]]");
    }

    #[test]
    fn empty_channels_are_present_not_null() {
        let ann = WindowAnnotations::new(vec![], vec![]);
        assert!(ann.is_silent());
        assert_eq!(serde_json::to_string(&ann).unwrap(), "[[],[]]");
    }
}
