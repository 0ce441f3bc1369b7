use chrono::{Local, TimeZone};

use mood_tracker_core::history;
use mood_tracker_core::insights::{self, WeekDay};
use mood_tracker_core::observation::{MoodObservation, Source};
use mood_tracker_core::viz;

#[test]
fn cells_round_half_up_and_clamp() {
    assert_eq!(viz::cells(0, 10, 8), 0);
    assert_eq!(viz::cells(5, 10, 8), 4);
    assert_eq!(viz::cells(1, 16, 8), 1);
    assert_eq!(viz::cells(30, 10, 8), 8);
    assert_eq!(viz::cells(1, 0, 5), 0);
}

#[test]
fn bars_fill_twenty_cells() {
    assert_eq!(viz::share_bar(0), "");
    assert_eq!(viz::share_bar(50), "#".repeat(10));
    assert_eq!(viz::share_bar(100), "#".repeat(20));
    assert_eq!(viz::score_bar(10), "#".repeat(20));
    assert_eq!(viz::score_bar(3), "#".repeat(6));
}

fn day(score: u8) -> WeekDay {
    WeekDay {
        day: "Mon".to_string(),
        mood: "Happy".to_string(),
        score,
    }
}

#[test]
fn sparkline_one_glyph_per_day() {
    assert_eq!(viz::week_sparkline(&[]), "");

    let week: Vec<WeekDay> = [0, 5, 10].into_iter().map(day).collect();
    let line = viz::week_sparkline(&week);
    let glyphs: Vec<char> = line.chars().collect();
    assert_eq!(glyphs, vec![' ', '▄', '█']);
    assert!(glyphs.iter().all(|g| viz::TREND_GLYPHS.contains(g)));
}

#[test]
fn distribution_lines_show_percentages() {
    let counts: Vec<(&str, usize)> = vec![("happy", 3), ("sad", 1)];
    let lines = viz::distribution_lines(&insights::percentages(&counts));
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("happy"));
    assert!(lines[0].ends_with("75%"));
    assert!(lines[1].ends_with("25%"));
}

#[test]
fn history_lines_include_headers_and_sources() {
    let ts = Local.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let entries = vec![MoodObservation::new("happy", 0.9, Source::Voice, ts)];
    let lines = viz::history_lines(&history::group_by_day(&entries));
    assert_eq!(lines[0], "Monday, Jan 1");
    assert!(lines[1].contains("Voice Tone"));
    assert!(lines[1].contains("#4CAF50"));
    assert!(lines[1].contains("09:00 AM"));
}

#[test]
fn week_lines_one_per_day() {
    let week = vec![WeekDay {
        day: "Mon".to_string(),
        mood: "Sad".to_string(),
        score: 10,
    }];
    let lines = viz::week_lines(&week);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(&"#".repeat(20)));
}
