use std::fs;

use chrono::{Local, TimeZone};

use mood_tracker_core::export::{self, ExportError};
use mood_tracker_core::observation::{Details, MoodObservation, Source};

#[test]
fn export_writes_jsonl_and_reads_back() -> Result<(), ExportError> {
    let tmp_dir = std::env::temp_dir().join(format!("mood_export_test_{}", std::process::id()));
    if tmp_dir.exists() {
        fs::remove_dir_all(&tmp_dir)?;
    }
    let path = tmp_dir.join("nested").join("history.jsonl");

    let ts = Local.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap();
    let entries = vec![
        MoodObservation::new("happy", 0.9, Source::Face, ts),
        MoodObservation::new("anxious", 0.7, Source::Voice, ts).with_details(Details {
            text: Some("so much \"work\"".to_string()),
            voice_tone: Some("anxious".to_string()),
        }),
    ];

    let written = export::write_jsonl(&path, &entries)?;
    assert_eq!(written, 2);

    let contents = fs::read_to_string(&path)?;
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"source\":\"face\""));

    let loaded = export::read_jsonl(&path)?;
    assert_eq!(loaded, entries);

    let _ = fs::remove_dir_all(&tmp_dir);
    Ok(())
}

#[test]
fn malformed_line_reports_position() {
    let path = std::env::temp_dir().join(format!("mood_export_bad_{}.jsonl", std::process::id()));
    fs::write(&path, "\nnot json\n").unwrap();

    match export::read_jsonl(&path) {
        Err(ExportError::Json { line, .. }) => assert_eq!(line, 2),
        other => panic!("unexpected: {:?}", other),
    }

    let _ = fs::remove_file(path);
}

#[test]
fn out_of_range_confidence_is_clamped_on_read() -> Result<(), ExportError> {
    let path = std::env::temp_dir().join(format!(
        "mood_export_clamp_{}.jsonl",
        std::process::id()
    ));
    let lines = [
        r#"{"mood":"happy","confidence":5.0,"source":"face","timestamp":"2024-01-01T09:00:00+00:00"}"#,
        r#"{"mood":"sad","confidence":-2.0,"source":"voice","timestamp":"2024-01-01T10:00:00+00:00","details":{"voice_tone":"sad"}}"#,
    ];
    fs::write(&path, lines.join("\n"))?;

    let loaded = export::read_jsonl(&path)?;
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].confidence(), 1.0);
    assert_eq!(loaded[1].confidence(), 0.0);
    assert_eq!(
        loaded[1].details().and_then(|d| d.voice_tone.as_deref()),
        Some("sad")
    );
    assert!(loaded.iter().all(|o| (0.0..=1.0).contains(&o.confidence())));

    let _ = fs::remove_file(path);
    Ok(())
}
