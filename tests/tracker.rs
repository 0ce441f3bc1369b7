use chrono::{Local, TimeZone};

use mood_tracker_core::analyzer::Detection;
use mood_tracker_core::classify::Color;
use mood_tracker_core::observation::Source;
use mood_tracker_core::sentiment;
use mood_tracker_core::tracker::{FixedClock, MoodTracker};

fn tracker() -> MoodTracker<FixedClock> {
    let ts = Local.with_ymd_and_hms(2024, 5, 6, 14, 30, 0).unwrap();
    MoodTracker::with_clock(FixedClock(ts))
}

#[test]
fn face_detection_becomes_current_and_head() {
    let mut t = tracker();
    t.record_face("happy", 0.9);
    t.record_face("sad", 0.8);

    let current = t.current().expect("current mood");
    assert_eq!(current.mood(), "sad");
    assert_eq!(current.source(), Source::Face);
    assert_eq!(current.color(), Color::RED);
    assert_eq!(t.history().len(), 2);
    assert_eq!(t.history().latest().map(|o| o.mood()), Some("sad"));
}

#[test]
fn voice_carries_transcript_and_tone() {
    let mut t = tracker();
    let obs = t.record_voice("anxious", "I have a lot to do");
    assert!((obs.confidence() - 0.7).abs() < 1e-6);
    let details = obs.details().expect("details");
    assert_eq!(details.text.as_deref(), Some("I have a lot to do"));
    assert_eq!(details.voice_tone.as_deref(), Some("anxious"));
}

#[test]
fn text_confidence_is_abs_score() {
    let mut t = tracker();
    let result = sentiment::score("This is terrible and awful");
    let obs = t.record_text(&result, "This is terrible and awful");
    assert_eq!(obs.mood(), "negative");
    assert!((obs.confidence() - result.score.abs()).abs() < 1e-6);
    assert_eq!(obs.color(), Color::RED);
}

#[test]
fn blank_text_is_ignored() {
    let mut t = tracker();
    assert!(t.analyze_text("   ").is_none());
    assert!(t.history().is_empty());
    assert!(t.current().is_none());
}

#[test]
fn detection_routes_by_source() {
    let mut t = tracker();
    let d = Detection {
        mood: "excited".to_string(),
        confidence: 0.7,
    };
    let obs = t.record_detection(Source::Voice, &d, "").expect("voice recorded");
    assert_eq!(obs.source(), Source::Voice);
    assert_eq!(
        obs.details().and_then(|d| d.text.as_deref()),
        Some("This is a simulated voice transcript.")
    );

    let text = Detection {
        mood: "neutral".to_string(),
        confidence: 0.0,
    };
    assert!(t.record_detection(Source::Text, &text, "  ").is_none());
    assert_eq!(t.history().len(), 1);
}

#[test]
fn text_detection_is_recorded_as_given() {
    let mut t = tracker();
    // the lexicon scorer would call this negative at 0.33
    let d = Detection {
        mood: "positive".to_string(),
        confidence: 0.95,
    };
    let obs = t
        .record_detection(Source::Text, &d, "this is awful")
        .expect("text recorded");
    assert_eq!(obs.mood(), "positive");
    assert!((obs.confidence() - 0.95).abs() < 1e-6);
    assert_eq!(
        obs.details().and_then(|d| d.text.as_deref()),
        Some("this is awful")
    );
}

#[test]
fn voice_detection_keeps_its_confidence() {
    let mut t = tracker();
    let d = Detection {
        mood: "happy".to_string(),
        confidence: 0.55,
    };
    let obs = t
        .record_detection(Source::Voice, &d, "sunny outside")
        .expect("voice recorded");
    assert!((obs.confidence() - 0.55).abs() < 1e-6);
    assert_eq!(obs.details().and_then(|d| d.voice_tone.as_deref()), Some("happy"));
}

#[test]
fn reset_clears_everything() {
    let mut t = tracker();
    t.analyze_text("great day");
    t.reset();
    assert!(t.history().is_empty());
    assert!(t.current().is_none());
}

#[test]
fn timestamps_come_from_clock() {
    let mut t = tracker();
    let obs = t.record_face("neutral", 0.7);
    assert_eq!(obs.day_key(), "Monday, May 6");
    assert_eq!(obs.time_label(), "02:30 PM");
}
