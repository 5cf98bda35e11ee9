use clap::Parser;
use std::path::PathBuf;

use vapgen_core::constants::{
    DEFAULT_SHIFT_SECS, DEFAULT_WINDOW_LENGTH_SECS, LOOKAHEAD_SECS, MIN_SEGMENT_SECS,
};
use vapgen_core::WindowConfig;

/// Generate VAP training windows from a speech-detector transcript.
#[derive(Parser, Debug)]
#[command(name = "vapgen", version, about)]
pub struct Cli {
    /// Detector transcript (JSON: speaker id -> sorted speech intervals)
    #[arg(long)]
    pub transcript: PathBuf,

    /// Output CSV path
    #[arg(long, default_value = "output.csv")]
    pub output_csv: PathBuf,

    /// Window length in seconds
    #[arg(long, default_value_t = DEFAULT_WINDOW_LENGTH_SECS)]
    pub window_length: f64,

    /// Overlap between consecutive windows in seconds; 0 means back-to-back
    #[arg(long, default_value_t = DEFAULT_SHIFT_SECS)]
    pub shift: f64,

    /// Retain zero-width boundary clips whose original duration reaches this
    #[arg(long, default_value_t = MIN_SEGMENT_SECS)]
    pub min_segment: f64,

    /// Candidate-scan horizon past the window end, in seconds
    #[arg(long, default_value_t = LOOKAHEAD_SECS)]
    pub lookahead: f64,

    /// WAV file to probe for duration when the transcript omits it
    #[arg(long)]
    pub audio: Option<PathBuf>,

    /// Session id column value
    #[arg(long, default_value_t = 0)]
    pub session: u64,

    /// Dataset tag column value
    #[arg(long, default_value = "sample")]
    pub dataset: String,
}

impl Cli {
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            window_length: self.window_length,
            shift: self.shift,
            min_segment: self.min_segment,
            lookahead: self.lookahead,
        }
    }
}
