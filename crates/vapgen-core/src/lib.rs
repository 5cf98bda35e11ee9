pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod validate;
pub mod windower;

// Core exports - grouped and sorted alphabetically
pub use config::WindowConfig;
pub use error::{Channel, WindowError};
pub use types::{AnnotatedWindow, ClippedInterval, DatasetRow, SpeechInterval, WindowAnnotations};
pub use windower::{clip_to_window, Windower};
