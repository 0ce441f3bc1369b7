//! Plain-text renderings of the history and insights screens.

use crate::history::DayGroup;
use crate::insights::{LabelShare, WeekDay, TREND_MAX_SCORE};
use crate::observation::MoodObservation;

const LABEL_WIDTH: usize = 10;
const BAR_WIDTH: usize = 20;

pub const TREND_GLYPHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// `part / whole` of `width` cells, rounded half up. Parts above `whole`
/// fill the bar; an empty `whole` fills nothing.
pub fn cells(part: usize, whole: usize, width: usize) -> usize {
    if whole == 0 {
        return 0;
    }
    (part.min(whole) * width * 2 + whole) / (2 * whole)
}

pub fn share_bar(percentage: u32) -> String {
    "#".repeat(cells(percentage as usize, 100, BAR_WIDTH))
}

pub fn score_bar(score: u8) -> String {
    "#".repeat(cells(score as usize, TREND_MAX_SCORE as usize, BAR_WIDTH))
}

/// One glyph per day, taller for higher scores.
pub fn week_sparkline(week: &[WeekDay]) -> String {
    let top = TREND_GLYPHS.len() - 1;
    week.iter()
        .map(|day| TREND_GLYPHS[cells(day.score as usize, TREND_MAX_SCORE as usize, top)])
        .collect()
}

/// One line per label: `happy      ########             40%`.
pub fn distribution_lines(shares: &[LabelShare]) -> Vec<String> {
    shares
        .iter()
        .map(|share| {
            format!(
                "{:<label$} {:<bar$} {:>3}%",
                share.label,
                share_bar(share.percentage),
                share.percentage,
                label = LABEL_WIDTH,
                bar = BAR_WIDTH
            )
        })
        .collect()
}

pub fn week_lines(week: &[WeekDay]) -> Vec<String> {
    week.iter()
        .map(|day| {
            format!(
                "{:<4} {:<bar$} {:>2} {}",
                day.day,
                score_bar(day.score),
                day.score,
                day.mood,
                bar = BAR_WIDTH
            )
        })
        .collect()
}

pub fn observation_line(obs: &MoodObservation) -> String {
    format!(
        "[{}] {:<9} {} \u{2022} {} ({:.0}%)",
        obs.color(),
        obs.mood(),
        obs.source().display_label(),
        obs.time_label(),
        obs.confidence() * 100.0
    )
}

pub fn history_lines(groups: &[DayGroup]) -> Vec<String> {
    let mut lines = Vec::new();
    for group in groups {
        lines.push(group.key.clone());
        for obs in &group.entries {
            lines.push(format!("  {}", observation_line(obs)));
        }
    }
    lines
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
