//! Recording state machine around a speech recognition provider.
//!
//! - Idle -> Recording (start)
//! - Recording -> Idle (stop)
//!
//! Recognition errors are logged and never change the state. A language
//! change while recording applies to the next session only.

use super::SpeechError;
use super::sounds::{SilentCues, SoundCue, SoundCuePlayer};
use crate::types::Language;
use serde::Deserialize;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordingState {
    #[default]
    Idle,
    Recording,
}

impl fmt::Display for RecordingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordingState::Idle => write!(f, "Idle"),
            RecordingState::Recording => write!(f, "Recording"),
        }
    }
}

/// Events a provider reports while a session runs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TranscriptEvent {
    /// Best guess for the latest result, replacing any earlier guess.
    Result { transcript: String },
    Error { error: String },
    Ended,
}

pub type TranscriptSink = Rc<dyn Fn(TranscriptEvent)>;

pub trait TranscriptionProvider {
    fn is_available(&self) -> bool;

    /// Start a continuous, interim-results session in `language`, reporting
    /// through `sink` until `end` is called.
    fn begin(&mut self, language: Language, sink: TranscriptSink) -> Result<(), SpeechError>;

    fn end(&mut self);
}

/// Stand-in for hosts without speech recognition.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableProvider;

impl TranscriptionProvider for UnavailableProvider {
    fn is_available(&self) -> bool {
        false
    }

    fn begin(&mut self, _language: Language, _sink: TranscriptSink) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable)
    }

    fn end(&mut self) {}
}

pub struct Transcriber {
    provider: Box<dyn TranscriptionProvider>,
    cues: Box<dyn SoundCuePlayer>,
    on_transcript: Rc<dyn Fn(String)>,
    state: RecordingState,
    language: Language,
}

impl Transcriber {
    pub fn new(
        provider: Box<dyn TranscriptionProvider>,
        cues: Box<dyn SoundCuePlayer>,
        on_transcript: impl Fn(String) + 'static,
    ) -> Self {
        Self {
            provider,
            cues,
            on_transcript: Rc::new(on_transcript),
            state: RecordingState::Idle,
            language: Language::default(),
        }
    }

    /// An inert transcriber: start and stop do nothing.
    pub fn unavailable(on_transcript: impl Fn(String) + 'static) -> Self {
        Self::new(Box::new(UnavailableProvider), Box::new(SilentCues), on_transcript)
    }

    pub fn state(&self) -> RecordingState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == RecordingState::Recording
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_available()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language == language {
            return;
        }
        if self.is_recording() {
            tracing::info!(
                "Recognition language set to {}; applies from the next recording",
                language
            );
        }
        self.language = language;
    }

    /// Swap in a different provider, ending any session on the old one.
    pub fn install_provider(&mut self, provider: Box<dyn TranscriptionProvider>) {
        if self.is_recording() {
            self.provider.end();
            self.state = RecordingState::Idle;
        }
        self.provider = provider;
    }

    pub fn start(&mut self) {
        if self.is_recording() {
            return;
        }
        if !self.provider.is_available() {
            tracing::debug!("Speech recognition unavailable; ignoring start");
            return;
        }

        let on_transcript = Rc::clone(&self.on_transcript);
        let sink: TranscriptSink = Rc::new(move |event| dispatch_event(event, &*on_transcript));
        match self.provider.begin(self.language, sink) {
            Ok(()) => {
                tracing::debug!("Transcriber: {} -> {}", self.state, RecordingState::Recording);
                self.state = RecordingState::Recording;
                self.cues.play(SoundCue::Start);
            }
            Err(e) => tracing::error!("Failed to start speech recognition: {}", e),
        }
    }

    pub fn stop(&mut self) {
        if !self.is_recording() {
            return;
        }
        self.provider.end();
        tracing::debug!("Transcriber: {} -> {}", self.state, RecordingState::Idle);
        self.state = RecordingState::Idle;
        self.cues.play(SoundCue::Stop);
    }

    pub fn toggle(&mut self) {
        if self.is_recording() {
            self.stop();
        } else {
            self.start();
        }
    }
}

fn dispatch_event(event: TranscriptEvent, on_transcript: &dyn Fn(String)) {
    match event {
        TranscriptEvent::Result { transcript } => on_transcript(transcript),
        TranscriptEvent::Error { error } => tracing::error!("Speech recognition error: {}", error),
        TranscriptEvent::Ended => tracing::debug!("Speech recognition session ended"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct ProviderLog {
        begins: Vec<Language>,
        ends: usize,
        sink: Option<TranscriptSink>,
    }

    struct FakeProvider {
        log: Rc<RefCell<ProviderLog>>,
        fail_start: bool,
    }

    impl TranscriptionProvider for FakeProvider {
        fn is_available(&self) -> bool {
            true
        }

        fn begin(&mut self, language: Language, sink: TranscriptSink) -> Result<(), SpeechError> {
            if self.fail_start {
                return Err(SpeechError::Start("not-allowed".to_string()));
            }
            let mut log = self.log.borrow_mut();
            log.begins.push(language);
            log.sink = Some(sink);
            Ok(())
        }

        fn end(&mut self) {
            self.log.borrow_mut().ends += 1;
        }
    }

    struct RecordingCues(Rc<RefCell<Vec<SoundCue>>>);

    impl SoundCuePlayer for RecordingCues {
        fn play(&self, cue: SoundCue) {
            self.0.borrow_mut().push(cue);
        }
    }

    struct Harness {
        transcriber: Transcriber,
        log: Rc<RefCell<ProviderLog>>,
        cues: Rc<RefCell<Vec<SoundCue>>>,
        input: Rc<RefCell<String>>,
    }

    fn harness(fail_start: bool) -> Harness {
        let log = Rc::new(RefCell::new(ProviderLog::default()));
        let cues = Rc::new(RefCell::new(Vec::new()));
        let input = Rc::new(RefCell::new(String::new()));
        let input_handle = Rc::clone(&input);
        let transcriber = Transcriber::new(
            Box::new(FakeProvider {
                log: Rc::clone(&log),
                fail_start,
            }),
            Box::new(RecordingCues(Rc::clone(&cues))),
            move |text| *input_handle.borrow_mut() = text,
        );
        Harness {
            transcriber,
            log,
            cues,
            input,
        }
    }

    fn emit(log: &Rc<RefCell<ProviderLog>>, event: TranscriptEvent) {
        let sink = log.borrow().sink.clone().expect("session not started");
        sink(event);
    }

    #[test]
    fn test_start_stop_transitions_and_cues() {
        let mut h = harness(false);
        assert_eq!(h.transcriber.state(), RecordingState::Idle);

        h.transcriber.start();
        assert!(h.transcriber.is_recording());
        h.transcriber.start();
        assert_eq!(h.log.borrow().begins.len(), 1);

        h.transcriber.stop();
        assert_eq!(h.transcriber.state(), RecordingState::Idle);
        h.transcriber.stop();
        assert_eq!(h.log.borrow().ends, 1);

        assert_eq!(h.cues.borrow().as_slice(), &[SoundCue::Start, SoundCue::Stop]);
    }

    #[test]
    fn test_transcript_replaces_input() {
        let mut h = harness(false);
        h.transcriber.start();

        emit(&h.log, TranscriptEvent::Result { transcript: "how do".into() });
        emit(
            &h.log,
            TranscriptEvent::Result {
                transcript: "how do I plant sandalwood".into(),
            },
        );
        assert_eq!(*h.input.borrow(), "how do I plant sandalwood");
    }

    #[test]
    fn test_recognition_error_keeps_state() {
        let mut h = harness(false);
        h.transcriber.start();
        emit(&h.log, TranscriptEvent::Error { error: "network".into() });
        emit(&h.log, TranscriptEvent::Ended);
        assert!(h.transcriber.is_recording());
        assert_eq!(*h.input.borrow(), "");
    }

    #[test]
    fn test_failed_start_stays_idle() {
        let mut h = harness(true);
        h.transcriber.start();
        assert_eq!(h.transcriber.state(), RecordingState::Idle);
        assert!(h.cues.borrow().is_empty());
    }

    #[test]
    fn test_language_change_applies_to_next_session() {
        let mut h = harness(false);
        h.transcriber.start();
        h.transcriber.set_language(Language::Kannada);
        assert!(h.transcriber.is_recording());
        assert_eq!(h.log.borrow().ends, 0);

        h.transcriber.toggle();
        h.transcriber.toggle();
        assert_eq!(
            h.log.borrow().begins,
            vec![Language::English, Language::Kannada]
        );
    }

    #[test]
    fn test_unavailable_is_inert() {
        let mut transcriber = Transcriber::unavailable(|_| {});
        assert!(!transcriber.is_available());
        transcriber.start();
        assert_eq!(transcriber.state(), RecordingState::Idle);
        transcriber.toggle();
        transcriber.stop();
        assert_eq!(transcriber.state(), RecordingState::Idle);
    }

    #[test]
    fn test_install_provider_ends_running_session() {
        let mut h = harness(false);
        h.transcriber.start();
        h.transcriber.install_provider(Box::new(UnavailableProvider));
        assert_eq!(h.log.borrow().ends, 1);
        assert_eq!(h.transcriber.state(), RecordingState::Idle);
        assert!(!h.transcriber.is_available());
    }

    #[test]
    fn test_event_wire_format() {
        let event: TranscriptEvent =
            serde_json::from_str(r#"{"kind":"result","transcript":"hello"}"#).unwrap();
        assert_eq!(
            event,
            TranscriptEvent::Result {
                transcript: "hello".to_string()
            }
        );
        let event: TranscriptEvent = serde_json::from_str(r#"{"kind":"ended"}"#).unwrap();
        assert_eq!(event, TranscriptEvent::Ended);
    }
}
