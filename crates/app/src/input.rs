//! Detector transcript loading.
//!
//! The external speech detector hands over one JSON document per stereo
//! session: a speaker-id map of sorted, non-overlapping intervals, plus
//! optional audio path and duration. The windower wants exactly two channels,
//! so the map is pinned to two speakers here; ids map to channels in
//! lexicographic order for a stable assignment.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use vapgen_core::SpeechInterval;

#[derive(Debug, Clone, Deserialize)]
pub struct DetectorTranscript {
    /// Source recording the intervals were detected on
    #[serde(default)]
    pub audio_path: Option<String>,
    /// Recording duration in seconds, if the detector reported it
    #[serde(default)]
    pub duration: Option<f64>,
    /// Speaker id -> sorted speech intervals
    pub speakers: BTreeMap<String, Vec<SpeechInterval>>,
}

/// Transcript resolved to the two-channel shape the windower consumes.
#[derive(Debug, Clone)]
pub struct SessionInput {
    pub audio_path: Option<String>,
    pub duration: Option<f64>,
    pub speaker_ids: [String; 2],
    pub channels: [Vec<SpeechInterval>; 2],
}

impl DetectorTranscript {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("failed to read transcript at {}", path.as_ref().display())
        })?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse transcript at {}", path.as_ref().display()))
    }

    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("malformed detector transcript")
    }

    /// Pins the speaker map to the two channels of a stereo session.
    pub fn into_session(self) -> Result<SessionInput> {
        if self.speakers.len() != 2 {
            bail!(
                "expected exactly 2 speakers in the transcript, found {}: [{}]",
                self.speakers.len(),
                self.speakers
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let mut entries = self.speakers.into_iter();
        let (id_a, channel_a) = entries.next().expect("len checked above");
        let (id_b, channel_b) = entries.next().expect("len checked above");

        Ok(SessionInput {
            audio_path: self.audio_path,
            duration: self.duration,
            speaker_ids: [id_a, id_b],
            channels: [channel_a, channel_b],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_speaker_transcript() {
        let json = r#"{
            "audio_path": "call.wav",
            "duration": 42.0,
            "speakers": {
                "left": [{"start": 0.5, "end": 1.0}],
                "right": []
            }
        }"#;
        let session = DetectorTranscript::parse(json)
            .unwrap()
            .into_session()
            .unwrap();
        assert_eq!(session.audio_path.as_deref(), Some("call.wav"));
        assert_eq!(session.duration, Some(42.0));
        assert_eq!(session.speaker_ids, ["left".to_string(), "right".to_string()]);
        assert_eq!(session.channels[0].len(), 1);
        assert!(session.channels[1].is_empty());
    }

    #[test]
    fn speaker_order_is_lexicographic_not_insertion() {
        let json = r#"{"speakers": {"b": [], "a": [{"start": 1.0, "end": 2.0}]}}"#;
        let session = DetectorTranscript::parse(json)
            .unwrap()
            .into_session()
            .unwrap();
        assert_eq!(session.speaker_ids, ["a".to_string(), "b".to_string()]);
        assert_eq!(session.channels[0].len(), 1);
    }

    #[test]
    fn rejects_wrong_speaker_count() {
        let json = r#"{"speakers": {"solo": []}}"#;
        let err = DetectorTranscript::parse(json)
            .unwrap()
            .into_session()
            .unwrap_err();
        assert!(err.to_string().contains("exactly 2 speakers"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(DetectorTranscript::parse("{not json").is_err());
    }
}
