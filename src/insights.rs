//! Aggregates for the insights screen: label distribution and weekly trend.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::observation::MoodObservation;
use crate::utils;

pub const WEEK_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
pub const TREND_MAX_SCORE: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelShare {
    pub label: String,
    pub count: usize,
    /// Rounded share of the total, 0..=100.
    pub percentage: u32,
}

/// Counts labels (case-folded) in first-occurrence order.
pub fn count_by_label<'a, I>(observations: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a MoodObservation>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for obs in observations {
        let label = utils::normalize_label(obs.mood());
        match index.get(&label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label.clone(), counts.len());
                counts.push((label, 1));
            }
        }
    }

    counts
}

/// `round(100 * count / total)` per label. A zero total yields 0% everywhere.
pub fn percentages<S: AsRef<str>>(counts: &[(S, usize)]) -> Vec<LabelShare> {
    let total: usize = counts.iter().map(|(_, c)| *c).sum();

    counts
        .iter()
        .map(|(label, count)| {
            let percentage = if total == 0 {
                0
            } else {
                (100.0 * *count as f64 / total as f64).round() as u32
            };
            LabelShare {
                label: label.as_ref().to_string(),
                count: *count,
                percentage,
            }
        })
        .collect()
}

/// Most frequent label; the earliest one wins a tie.
pub fn dominant_mood<S: AsRef<str>>(counts: &[(S, usize)]) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    for (label, count) in counts {
        if *count == 0 {
            continue;
        }
        match best {
            Some((_, c)) if c >= *count => {}
            _ => best = Some((label.as_ref(), *count)),
        }
    }
    best.map(|(label, _)| label)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDay {
    pub day: String,
    pub mood: String,
    /// 1..=10
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Positive,
    Neutral,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Positive => "Positive",
            Trend::Neutral => "Neutral",
        }
    }
}

/// Mean over the supplied days; above 5 reads as positive. An empty week
/// is neutral.
pub fn overall_trend(week: &[WeekDay]) -> Trend {
    if week.is_empty() {
        return Trend::Neutral;
    }
    let sum: u32 = week.iter().map(|d| d.score as u32).sum();
    let mean = sum as f32 / week.len() as f32;
    if mean > 5.0 {
        Trend::Positive
    } else {
        Trend::Neutral
    }
}

pub fn best_day(week: &[WeekDay]) -> Option<&WeekDay> {
    let mut best: Option<&WeekDay> = None;
    for day in week {
        match best {
            Some(b) if b.score >= day.score => {}
            _ => best = Some(day),
        }
    }
    best
}
