//! Browser-backed speech recognition and sound cues, bridged through
//! `document::eval`. Only built with a Dioxus platform.

use super::sounds::{SoundCue, SoundCuePlayer, cue_url};
use super::transcriber::{TranscriptEvent, TranscriptSink, TranscriptionProvider};
use super::SpeechError;
use crate::types::Language;
use dioxus::prelude::*;

const RECOGNITION_GLOBAL: &str = "__sandalwoodRecognition";

const PROBE_SCRIPT: &str =
    "dioxus.send(Boolean(window.SpeechRecognition || window.webkitSpeechRecognition));";

/// Ask the host whether it exposes a speech recognition constructor.
pub async fn speech_recognition_available() -> bool {
    let mut eval = document::eval(PROBE_SCRIPT);
    match eval.recv::<bool>().await {
        Ok(available) => available,
        Err(e) => {
            tracing::warn!("Speech recognition probe failed: {}", e);
            false
        }
    }
}

pub fn recognition_script(language: Language) -> String {
    format!(
        r#"
const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition;
if (Recognition) {{
    const recognition = new Recognition();
    recognition.continuous = true;
    recognition.interimResults = true;
    recognition.lang = "{lang}";
    recognition.onresult = (event) => {{
        const latest = event.results[event.results.length - 1];
        dioxus.send({{ kind: "result", transcript: latest[0].transcript }});
    }};
    recognition.onerror = (event) => dioxus.send({{ kind: "error", error: String(event.error) }});
    recognition.onend = () => dioxus.send({{ kind: "ended" }});
    window.{global} = recognition;
    recognition.start();
}} else {{
    dioxus.send({{ kind: "error", error: "speech recognition unavailable" }});
    dioxus.send({{ kind: "ended" }});
}}
"#,
        lang = language.code(),
        global = RECOGNITION_GLOBAL,
    )
}

pub fn stop_script() -> String {
    format!(
        "if (window.{g}) {{ window.{g}.stop(); window.{g} = null; }}",
        g = RECOGNITION_GLOBAL
    )
}

pub fn cue_script(url: &str) -> String {
    let literal = serde_json::to_string(url).unwrap_or_else(|_| "\"\"".to_string());
    format!("new Audio({literal}).play().catch(() => {{}});")
}

/// `SpeechRecognition` / `webkitSpeechRecognition` in the webview.
#[derive(Default)]
pub struct BrowserSpeechProvider {
    listener: Option<Task>,
}

impl BrowserSpeechProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TranscriptionProvider for BrowserSpeechProvider {
    fn is_available(&self) -> bool {
        true
    }

    fn begin(&mut self, language: Language, sink: TranscriptSink) -> Result<(), SpeechError> {
        let mut eval = document::eval(&recognition_script(language));
        let task = spawn(async move {
            loop {
                match eval.recv::<TranscriptEvent>().await {
                    Ok(TranscriptEvent::Ended) => {
                        sink(TranscriptEvent::Ended);
                        break;
                    }
                    Ok(event) => sink(event),
                    Err(e) => {
                        tracing::warn!("Speech recognition bridge closed: {}", e);
                        break;
                    }
                }
            }
        });
        self.listener = Some(task);
        Ok(())
    }

    fn end(&mut self) {
        let _ = document::eval(&stop_script());
        if let Some(task) = self.listener.take() {
            task.cancel();
        }
    }
}

/// Plays `start.mp3` / `stop.mp3` from the configured sounds path.
pub struct BrowserSoundCues {
    base: String,
}

impl BrowserSoundCues {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl SoundCuePlayer for BrowserSoundCues {
    fn play(&self, cue: SoundCue) {
        let _ = document::eval(&cue_script(&cue_url(&self.base, cue)));
    }
}
