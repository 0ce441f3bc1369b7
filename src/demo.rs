//! Seeded mock data for the history and insights screens.
//!
//! Every generated entry gets its own timestamp built from the day offset and
//! a drawn hour, so entries never share or mutate a date.

use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone};
use rand::Rng;

use crate::insights::{WeekDay, WEEK_DAYS};
use crate::observation::{MoodObservation, Source};

pub const MOCK_MOODS: [&str; 5] = ["happy", "sad", "neutral", "anxious", "excited"];
pub const MOCK_DAYS: i64 = 7;

/// 1..=3 entries per day for the last week, newest day first, hours between
/// 08:00 and 19:00 in increasing order within a day.
pub fn history<R: Rng>(rng: &mut R, today: DateTime<Local>) -> Vec<MoodObservation> {
    let mut out = Vec::new();

    for offset in 0..MOCK_DAYS {
        let day = (today - Duration::days(offset)).date_naive();
        let count = rng.gen_range(1..=3);

        let mut hours: Vec<u32> = (0..count).map(|_| rng.gen_range(8..20)).collect();
        hours.sort_unstable();

        for hour in hours {
            let mood = MOCK_MOODS[rng.gen_range(0..MOCK_MOODS.len())];
            let source = Source::ALL[rng.gen_range(0..Source::ALL.len())];
            let confidence = rng.gen_range(0.5..1.0);
            let Some(time) = NaiveTime::from_hms_opt(hour, 0, 0) else {
                continue;
            };
            let Some(ts) = Local.from_local_datetime(&day.and_time(time)).earliest() else {
                continue;
            };
            out.push(MoodObservation::new(mood, confidence, source, ts));
        }
    }

    out
}

/// Dominant mood and a 1..=10 score for each weekday.
pub fn week<R: Rng>(rng: &mut R) -> Vec<WeekDay> {
    WEEK_DAYS
        .iter()
        .map(|day| WeekDay {
            day: day.to_string(),
            mood: capitalize(MOCK_MOODS[rng.gen_range(0..MOCK_MOODS.len())]),
            score: rng.gen_range(1..=10),
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
