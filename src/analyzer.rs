//! Mood analyzers and the per-analyzer session state machine.
//!
//! Face and voice analysis are simulated: a label is drawn uniformly from a
//! fixed candidate set after a fixed delay. Text analysis uses the lexicon
//! scorer. Any of them can sit behind [`MoodAnalyzer`].

use std::thread;
use std::time::Duration;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observation::Source;
use crate::sentiment;

pub const FACE_DELAY: Duration = Duration::from_millis(2000);
pub const VOICE_DELAY: Duration = Duration::from_millis(1500);
pub const TEXT_DELAY: Duration = Duration::from_millis(1000);

pub const VOICE_CONFIDENCE: f32 = 0.7;
pub const DEFAULT_TRANSCRIPT: &str = "This is a simulated voice transcript.";

pub const FACE_CANDIDATES: &[(&str, f32)] = &[("happy", 0.9), ("neutral", 0.7), ("sad", 0.8)];
pub const VOICE_CANDIDATES: &[(&str, f32)] = &[
    ("happy", VOICE_CONFIDENCE),
    ("neutral", VOICE_CONFIDENCE),
    ("sad", VOICE_CONFIDENCE),
    ("excited", VOICE_CONFIDENCE),
    ("anxious", VOICE_CONFIDENCE),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub mood: String,
    pub confidence: f32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzerError {
    #[error("analyzer has no candidate labels")]
    NoCandidates,
    #[error("analysis already in progress")]
    Busy,
    #[error("analyzer is not recording")]
    NotRecording,
    #[error("analyzer is not analyzing")]
    NotAnalyzing,
}

pub trait MoodAnalyzer {
    fn source(&self) -> Source;

    /// Simulated processing time before a result is available.
    fn delay(&self) -> Duration;

    fn analyze(&mut self, input: &str) -> Detection;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub label: String,
    pub confidence: f32,
}

/// Picks one candidate uniformly at random. Cannot fail once built.
#[derive(Debug, Clone)]
pub struct RandomChoiceAnalyzer<R = StdRng> {
    source: Source,
    candidates: Vec<Candidate>,
    delay: Duration,
    rng: R,
}

impl RandomChoiceAnalyzer<StdRng> {
    pub fn new(
        source: Source,
        candidates: &[(&str, f32)],
        delay: Duration,
    ) -> Result<Self, AnalyzerError> {
        if candidates.is_empty() {
            return Err(AnalyzerError::NoCandidates);
        }
        Ok(Self::from_table(source, candidates, delay))
    }

    pub fn face() -> Self {
        Self::from_table(Source::Face, FACE_CANDIDATES, FACE_DELAY)
    }

    pub fn voice() -> Self {
        Self::from_table(Source::Voice, VOICE_CANDIDATES, VOICE_DELAY)
    }

    fn from_table(source: Source, table: &[(&str, f32)], delay: Duration) -> Self {
        Self {
            source,
            candidates: table
                .iter()
                .map(|(label, confidence)| Candidate {
                    label: (*label).to_string(),
                    confidence: *confidence,
                })
                .collect(),
            delay,
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> RandomChoiceAnalyzer<R> {
    pub fn with_rng<R2: Rng>(self, rng: R2) -> RandomChoiceAnalyzer<R2> {
        RandomChoiceAnalyzer {
            source: self.source,
            candidates: self.candidates,
            delay: self.delay,
            rng,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}

impl<R: Rng> MoodAnalyzer for RandomChoiceAnalyzer<R> {
    fn source(&self) -> Source {
        self.source
    }

    fn delay(&self) -> Duration {
        self.delay
    }

    fn analyze(&mut self, _input: &str) -> Detection {
        let idx = self.rng.gen_range(0..self.candidates.len());
        let pick = &self.candidates[idx];
        Detection {
            mood: pick.label.clone(),
            confidence: pick.confidence,
        }
    }
}

/// Real analyzer backed by the lexicon scorer.
#[derive(Debug, Clone)]
pub struct TextSentimentAnalyzer {
    delay: Duration,
}

impl TextSentimentAnalyzer {
    pub fn new() -> Self {
        Self { delay: TEXT_DELAY }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for TextSentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodAnalyzer for TextSentimentAnalyzer {
    fn source(&self) -> Source {
        Source::Text
    }

    fn delay(&self) -> Duration {
        self.delay
    }

    fn analyze(&mut self, input: &str) -> Detection {
        let result = sentiment::score(input);
        Detection {
            mood: result.sentiment.as_str().to_string(),
            confidence: result.confidence(),
        }
    }
}

/// Blank voice input falls back to a canned transcript.
pub fn voice_transcript(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_TRANSCRIPT.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzerState {
    Idle,
    Recording,
    Analyzing,
    Complete(Detection),
}

/// Drives one analyzer through `Idle -> Analyzing -> Complete -> Idle`.
///
/// The simulated delay blocks the caller and cannot be cancelled.
pub struct SimulatedSession<A> {
    analyzer: A,
    state: AnalyzerState,
    simulate_delay: bool,
}

impl<A: MoodAnalyzer> SimulatedSession<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            state: AnalyzerState::Idle,
            simulate_delay: true,
        }
    }

    /// Skip the sleep in `finish`; used by tests and `--fast`.
    pub fn without_delay(mut self) -> Self {
        self.simulate_delay = false;
        self
    }

    pub fn state(&self) -> &AnalyzerState {
        &self.state
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn start(&mut self) -> Result<(), AnalyzerError> {
        match self.state {
            AnalyzerState::Idle | AnalyzerState::Complete(_) => {
                debug!("[{}] analyzing", self.analyzer.source().as_str());
                self.state = AnalyzerState::Analyzing;
                Ok(())
            }
            AnalyzerState::Recording | AnalyzerState::Analyzing => Err(AnalyzerError::Busy),
        }
    }

    pub fn start_recording(&mut self) -> Result<(), AnalyzerError> {
        match self.state {
            AnalyzerState::Idle | AnalyzerState::Complete(_) => {
                debug!("[{}] recording", self.analyzer.source().as_str());
                self.state = AnalyzerState::Recording;
                Ok(())
            }
            AnalyzerState::Recording | AnalyzerState::Analyzing => Err(AnalyzerError::Busy),
        }
    }

    pub fn stop_recording(&mut self) -> Result<(), AnalyzerError> {
        if self.state != AnalyzerState::Recording {
            return Err(AnalyzerError::NotRecording);
        }
        debug!("[{}] recording stopped", self.analyzer.source().as_str());
        self.state = AnalyzerState::Analyzing;
        Ok(())
    }

    pub fn finish(&mut self, input: &str) -> Result<Detection, AnalyzerError> {
        if self.state != AnalyzerState::Analyzing {
            return Err(AnalyzerError::NotAnalyzing);
        }

        let delay = self.analyzer.delay();
        if self.simulate_delay && !delay.is_zero() {
            thread::sleep(delay);
        }

        let detection = self.analyzer.analyze(input);
        debug!(
            "[{}] complete mood={} conf={:.2}",
            self.analyzer.source().as_str(),
            detection.mood,
            detection.confidence
        );
        self.state = AnalyzerState::Complete(detection.clone());
        Ok(detection)
    }

    pub fn reset(&mut self) {
        self.state = AnalyzerState::Idle;
    }
}
