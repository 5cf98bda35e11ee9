//! Fixed-length window generation over per-speaker speech intervals.
//!
//! The windower walks a recording in strides of `window_length - shift`
//! seconds and, for each window, clips both speakers' intervals to
//! window-relative offsets. Interval lookup is a stateless binary search per
//! window, so the emitted sequence does not depend on iteration order and the
//! iterator can be restarted or consumed more than once.

use crate::config::WindowConfig;
use crate::error::{Channel, WindowError};
use crate::types::{AnnotatedWindow, ClippedInterval, DatasetRow, SpeechInterval, WindowAnnotations};
use crate::validate::validate_intervals;

fn round6(value: f64) -> f64 {
    use crate::constants::ROUND_SCALE;
    (value * ROUND_SCALE).round() / ROUND_SCALE
}

/// Clips one speaker's intervals to a single window.
///
/// Intervals ending at or before `window_start` can never intersect this or
/// any later window, so the binary search skips them outright. An interval is
/// annotated when it begins before the window's end; `config.lookahead` only
/// bounds how far past the window end the scan looks, it never widens the
/// window itself.
///
/// Clipped endpoints are rounded to 6 decimal places first; an interval whose
/// rounded slice collapses to zero width is still kept when its original
/// duration reaches `config.min_segment`, so short speech bursts sitting on a
/// window boundary are not lost.
pub fn clip_to_window(
    intervals: &[SpeechInterval],
    window_start: f64,
    config: &WindowConfig,
) -> Vec<ClippedInterval> {
    let window_end = window_start + config.window_length;
    let horizon = window_end + config.lookahead;

    let first = intervals.partition_point(|iv| iv.end <= window_start);

    let mut clips = Vec::new();
    for iv in &intervals[first..] {
        if iv.start >= horizon {
            break;
        }
        if iv.start >= window_end {
            // Inside the scan horizon but outside the window: relevant to a
            // later window only.
            continue;
        }
        let start = round6((iv.start - window_start).max(0.0));
        let end = round6((iv.end - window_start).min(config.window_length));
        if end > start || iv.duration() >= config.min_segment {
            clips.push(ClippedInterval { start, end });
        }
    }
    clips
}

/// Validated windowing input: two speaker channels, a recording duration and
/// a configuration. Construction performs all validation; iteration is total.
#[derive(Debug, Clone)]
pub struct Windower<'a> {
    channel_a: &'a [SpeechInterval],
    channel_b: &'a [SpeechInterval],
    duration: f64,
    config: WindowConfig,
}

impl<'a> Windower<'a> {
    /// Validates the configuration and both interval lists eagerly. After
    /// this returns `Ok`, window generation never fails.
    pub fn new(
        channel_a: &'a [SpeechInterval],
        channel_b: &'a [SpeechInterval],
        duration: f64,
        config: WindowConfig,
    ) -> Result<Self, WindowError> {
        config.validate()?;
        validate_intervals(Channel::A, channel_a, duration)?;
        validate_intervals(Channel::B, channel_b, duration)?;

        let windower = Self {
            channel_a,
            channel_b,
            duration,
            config,
        };
        tracing::debug!(
            duration,
            window_length = config.window_length,
            stride = config.stride(),
            windows = windower.window_count(),
            "windower ready"
        );
        Ok(windower)
    }

    /// Number of windows that will be emitted. A recording shorter than one
    /// window yields zero windows; that is an empty result, not an error.
    pub fn window_count(&self) -> usize {
        if self.duration < self.config.window_length {
            return 0;
        }
        ((self.duration - self.config.window_length) / self.config.stride()).floor() as usize + 1
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Lazy, restartable sequence of annotated windows in increasing
    /// `window_start` order.
    pub fn windows(&self) -> Windows<'_> {
        Windows {
            windower: self,
            next_index: 0,
            count: self.window_count(),
        }
    }

    /// Adapts the window sequence into dataset rows, attaching the
    /// caller-supplied constants. Serialization stays with the consumer.
    pub fn rows(&self, audio_path: &str, session: u64, dataset: &str) -> Rows<'_> {
        Rows {
            windows: self.windows(),
            audio_path: audio_path.to_string(),
            session,
            dataset: dataset.to_string(),
        }
    }

    fn window_at(&self, index: usize) -> AnnotatedWindow {
        let window_start = index as f64 * self.config.stride();
        AnnotatedWindow {
            window_start,
            window_end: window_start + self.config.window_length,
            annotations: WindowAnnotations::new(
                clip_to_window(self.channel_a, window_start, &self.config),
                clip_to_window(self.channel_b, window_start, &self.config),
            ),
        }
    }
}

/// Iterator over `AnnotatedWindow`s. Finite and exact-sized.
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    windower: &'a Windower<'a>,
    next_index: usize,
    count: usize,
}

impl Iterator for Windows<'_> {
    type Item = AnnotatedWindow;

    fn next(&mut self) -> Option<AnnotatedWindow> {
        if self.next_index >= self.count {
            return None;
        }
        let window = self.windower.window_at(self.next_index);
        self.next_index += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Windows<'_> {}

/// Iterator over `DatasetRow`s, one per window.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    windows: Windows<'a>,
    audio_path: String,
    session: u64,
    dataset: String,
}

impl Iterator for Rows<'_> {
    type Item = DatasetRow;

    fn next(&mut self) -> Option<DatasetRow> {
        let window = self.windows.next()?;
        Some(DatasetRow {
            audio_path: self.audio_path.clone(),
            start: window.window_start,
            end: window.window_end,
            vad_list: window.annotations,
            session: self.session,
            dataset: self.dataset.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}
