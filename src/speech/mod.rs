//! Optional speech-to-text input for the chat composer.
//!
//! The host may or may not offer speech recognition. Everything here works
//! against the `TranscriptionProvider` and `SoundCuePlayer` traits so the
//! adapter behaves the same with a real browser, no browser, or a test double.

#[cfg(feature = "dioxus")]
pub mod browser;
pub mod sounds;
pub mod transcriber;

pub use sounds::{SilentCues, SoundCue, SoundCuePlayer};
pub use transcriber::{
    RecordingState, TranscriptEvent, TranscriptSink, Transcriber, TranscriptionProvider,
    UnavailableProvider,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpeechError {
    #[error("speech recognition is not available")]
    Unavailable,
    #[error("speech recognition failed to start: {0}")]
    Start(String),
}
