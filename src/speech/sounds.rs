use std::fmt;

/// Short audio cues played when recording starts or stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Start,
    Stop,
}

impl SoundCue {
    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::Start => "start.mp3",
            SoundCue::Stop => "stop.mp3",
        }
    }
}

impl fmt::Display for SoundCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundCue::Start => write!(f, "start"),
            SoundCue::Stop => write!(f, "stop"),
        }
    }
}

/// Fire-and-forget cue playback. Implementations must never fail loudly.
pub trait SoundCuePlayer {
    fn play(&self, cue: SoundCue);
}

/// Used where the host cannot play audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCues;

impl SoundCuePlayer for SilentCues {
    fn play(&self, cue: SoundCue) {
        tracing::debug!("Skipping {} cue (no audio output)", cue);
    }
}

/// Joins the configured sounds path with the cue's file name.
pub fn cue_url(base: &str, cue: SoundCue) -> String {
    format!("{}/{}", base.trim_end_matches('/'), cue.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_url() {
        assert_eq!(cue_url("/sounds", SoundCue::Start), "/sounds/start.mp3");
        assert_eq!(cue_url("/sounds/", SoundCue::Stop), "/sounds/stop.mp3");
        assert_eq!(
            cue_url("https://cdn.example.com/audio", SoundCue::Stop),
            "https://cdn.example.com/audio/stop.mp3"
        );
    }
}
