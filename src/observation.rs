use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::classify::{self, Color, MoodCategory};
use crate::utils;

pub const DAY_KEY_FORMAT: &str = "%A, %b %-d";
pub const TIME_FORMAT: &str = "%I:%M %p";

/// Modality that produced an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Face,
    Voice,
    Text,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Face, Source::Voice, Source::Text];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Face => "face",
            Source::Voice => "voice",
            Source::Text => "text",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            Source::Face => "Facial Expression",
            Source::Voice => "Voice Tone",
            Source::Text => "Text Sentiment",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Source::Face => "smile",
            Source::Voice => "microphone",
            Source::Text => "comment",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_tone: Option<String>,
}

/// A single recorded inference of emotional state.
///
/// Fields are fixed at construction; `confidence` is clamped into [0, 1],
/// including when read back from an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ObservationRecord")]
pub struct MoodObservation {
    mood: String,
    confidence: f32,
    source: Source,
    timestamp: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Details>,
}

/// Wire shape of an observation before its invariants are applied.
#[derive(Deserialize)]
struct ObservationRecord {
    mood: String,
    confidence: f32,
    source: Source,
    timestamp: DateTime<Local>,
    #[serde(default)]
    details: Option<Details>,
}

impl From<ObservationRecord> for MoodObservation {
    fn from(record: ObservationRecord) -> Self {
        let obs = MoodObservation::new(
            record.mood,
            record.confidence,
            record.source,
            record.timestamp,
        );
        match record.details {
            Some(details) => obs.with_details(details),
            None => obs,
        }
    }
}

impl MoodObservation {
    pub fn new(
        mood: impl Into<String>,
        confidence: f32,
        source: Source,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            mood: mood.into(),
            confidence: utils::clamp01(confidence),
            source,
            timestamp,
            details: None,
        }
    }

    pub fn with_details(mut self, details: Details) -> Self {
        self.details = Some(details);
        self
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    pub fn category(&self) -> MoodCategory {
        classify::category_for(&self.mood)
    }

    pub fn color(&self) -> Color {
        classify::color_for(&self.mood)
    }

    /// Calendar-day bucket key, e.g. `Monday, Jan 5`.
    pub fn day_key(&self) -> String {
        self.timestamp.format(DAY_KEY_FORMAT).to_string()
    }

    pub fn time_label(&self) -> String {
        self.timestamp.format(TIME_FORMAT).to_string()
    }
}
