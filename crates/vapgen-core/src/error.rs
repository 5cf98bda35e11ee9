use thiserror::Error;

/// Channel label used in validation errors, so a failure points at the
/// offending speaker list rather than a bare index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    A,
    B,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::A => write!(f, "speaker A"),
            Channel::B => write!(f, "speaker B"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindowError {
    #[error("invalid configuration: {field} = {value}: {reason}")]
    InvalidConfiguration {
        field: &'static str,
        value: f64,
        reason: String,
    },

    #[error("invalid interval for {channel} at index {index}: {reason}")]
    InvalidInterval {
        channel: Channel,
        index: usize,
        reason: String,
    },

    #[error("invalid recording duration {0}")]
    InvalidDuration(f64),
}
