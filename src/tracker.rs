use chrono::{DateTime, Local};
use log::warn;

use crate::analyzer::{self, Detection, VOICE_CONFIDENCE};
use crate::history::SessionHistory;
use crate::observation::{Details, MoodObservation, Source};
use crate::sentiment::{self, SentimentResult};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Owns the session history and the current mood for one app session.
pub struct MoodTracker<C = SystemClock> {
    clock: C,
    history: SessionHistory,
    current: Option<MoodObservation>,
}

impl MoodTracker<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MoodTracker<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MoodTracker<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            history: SessionHistory::new(),
            current: None,
        }
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn current(&self) -> Option<&MoodObservation> {
        self.current.as_ref()
    }

    pub fn record_face(&mut self, mood: &str, confidence: f32) -> &MoodObservation {
        let obs = MoodObservation::new(mood, confidence, Source::Face, self.clock.now());
        self.push(obs)
    }

    pub fn record_voice(&mut self, tone: &str, transcript: &str) -> &MoodObservation {
        self.push_voice(tone, VOICE_CONFIDENCE, transcript)
    }

    pub fn record_text(&mut self, result: &SentimentResult, text: &str) -> &MoodObservation {
        self.push_text(result.sentiment.as_str(), result.confidence(), text)
    }

    /// Scores `text` and records it. Blank input is ignored.
    pub fn analyze_text(&mut self, text: &str) -> Option<&MoodObservation> {
        if text.trim().is_empty() {
            warn!("[tracker] ignoring blank text entry");
            return None;
        }
        let result = sentiment::score(text);
        Some(self.record_text(&result, text))
    }

    /// Records the output of any analyzer under its source, keeping the
    /// analyzer's label and confidence. Blank text input is ignored.
    pub fn record_detection(
        &mut self,
        source: Source,
        detection: &Detection,
        input: &str,
    ) -> Option<&MoodObservation> {
        match source {
            Source::Face => Some(self.record_face(&detection.mood, detection.confidence)),
            Source::Voice => {
                let transcript = analyzer::voice_transcript(input);
                Some(self.push_voice(&detection.mood, detection.confidence, &transcript))
            }
            Source::Text => {
                if input.trim().is_empty() {
                    warn!("[tracker] ignoring blank text entry");
                    return None;
                }
                Some(self.push_text(&detection.mood, detection.confidence, input))
            }
        }
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.current = None;
    }

    fn push_voice(&mut self, tone: &str, confidence: f32, transcript: &str) -> &MoodObservation {
        let obs = MoodObservation::new(tone, confidence, Source::Voice, self.clock.now())
            .with_details(Details {
                text: Some(transcript.to_string()),
                voice_tone: Some(tone.to_string()),
            });
        self.push(obs)
    }

    fn push_text(&mut self, mood: &str, confidence: f32, text: &str) -> &MoodObservation {
        let obs = MoodObservation::new(mood, confidence, Source::Text, self.clock.now())
            .with_details(Details {
                text: Some(text.to_string()),
                voice_tone: None,
            });
        self.push(obs)
    }

    fn push(&mut self, obs: MoodObservation) -> &MoodObservation {
        self.history.record(obs.clone());
        self.current.insert(obs)
    }
}
