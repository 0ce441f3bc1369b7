use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::normalize_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Positive,
    Negative,
    Neutral,
}

/// Display color as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    pub const GREEN: Color = Color("#4CAF50");
    pub const RED: Color = Color("#F44336");
    pub const GRAY: Color = Color("#9E9E9E");

    pub fn hex(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl MoodCategory {
    pub fn color(&self) -> Color {
        match self {
            MoodCategory::Positive => Color::GREEN,
            MoodCategory::Negative => Color::RED,
            MoodCategory::Neutral => Color::GRAY,
        }
    }
}

/// Labels are folded the same way `insights::count_by_label` folds them.
pub fn category_for(label: &str) -> MoodCategory {
    match normalize_label(label).as_str() {
        "happy" | "excited" | "positive" => MoodCategory::Positive,
        "sad" | "anxious" | "negative" => MoodCategory::Negative,
        _ => MoodCategory::Neutral,
    }
}

pub fn color_for(label: &str) -> Color {
    category_for(label).color()
}
