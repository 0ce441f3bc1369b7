use std::env;

use log::debug;
use thiserror::Error;

/// App settings. The toggles are stored and reported but nothing else in the
/// crate reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub notifications: bool,
    pub face_analysis: bool,
    pub voice_analysis: bool,
    pub text_analysis: bool,
    pub dark_mode: bool,
    pub data_sharing: bool,
    pub seed: Option<u64>,
    pub fast: bool,
    pub script: Option<String>,
    pub inputs_path: Option<String>,
    pub export_path: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown setting '{0}'")]
    UnknownSetting(String),
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
    #[error("missing value after {0}")]
    MissingValue(String),
}

pub const TOGGLE_NAMES: [&str; 6] = [
    "notifications",
    "faceAnalysis",
    "voiceAnalysis",
    "textAnalysis",
    "darkMode",
    "dataSharing",
];

impl Default for Config {
    fn default() -> Self {
        Self {
            notifications: true,
            face_analysis: true,
            voice_analysis: true,
            text_analysis: true,
            dark_mode: false,
            data_sharing: false,
            seed: None,
            fast: false,
            script: None,
            inputs_path: None,
            export_path: None,
        }
    }
}

impl Config {
    /// Sets a toggle by its settings-screen key.
    pub fn toggle(&mut self, name: &str, value: bool) -> Result<(), ConfigError> {
        let slot = match name {
            "notifications" => &mut self.notifications,
            "faceAnalysis" => &mut self.face_analysis,
            "voiceAnalysis" => &mut self.voice_analysis,
            "textAnalysis" => &mut self.text_analysis,
            "darkMode" => &mut self.dark_mode,
            "dataSharing" => &mut self.data_sharing,
            other => return Err(ConfigError::UnknownSetting(other.to_string())),
        };
        *slot = value;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<bool, ConfigError> {
        match name {
            "notifications" => Ok(self.notifications),
            "faceAnalysis" => Ok(self.face_analysis),
            "voiceAnalysis" => Ok(self.voice_analysis),
            "textAnalysis" => Ok(self.text_analysis),
            "darkMode" => Ok(self.dark_mode),
            "dataSharing" => Ok(self.data_sharing),
            other => Err(ConfigError::UnknownSetting(other.to_string())),
        }
    }

    pub fn toggles(&self) -> Vec<(&'static str, bool)> {
        TOGGLE_NAMES
            .iter()
            .filter_map(|name| self.get(name).ok().map(|v| (*name, v)))
            .collect()
    }

    /// Applies `--flag [value]` arguments on top of `self`. Unknown flags are
    /// skipped; a missing or unparsable value is an error.
    pub fn apply_args<I, S>(&mut self, args: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let val = next_value(&mut args, &arg)?;
                    self.seed = Some(parse_seed(&arg, &val)?);
                }
                "--fast" => self.fast = true,
                "--script" => self.script = Some(next_value(&mut args, &arg)?),
                "--inputs" => self.inputs_path = non_blank(next_value(&mut args, &arg)?),
                "--export" => self.export_path = non_blank(next_value(&mut args, &arg)?),
                "--dark-mode" => self.dark_mode = true,
                "--data-sharing" => self.data_sharing = true,
                "--no-notifications" => self.notifications = false,
                "--no-face" => self.face_analysis = false,
                "--no-voice" => self.voice_analysis = false,
                "--no-text" => self.text_analysis = false,
                other => debug!("[config] skipping unknown argument '{}'", other),
            }
        }
        Ok(())
    }

    /// Applies `MOOD_*` variables read through `lookup`. Unset variables keep
    /// the current value; unparsable ones are an error.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let flags: [(&str, &mut bool); 7] = [
            ("MOOD_NOTIFICATIONS", &mut self.notifications),
            ("MOOD_FACE_ANALYSIS", &mut self.face_analysis),
            ("MOOD_VOICE_ANALYSIS", &mut self.voice_analysis),
            ("MOOD_TEXT_ANALYSIS", &mut self.text_analysis),
            ("MOOD_DARK_MODE", &mut self.dark_mode),
            ("MOOD_DATA_SHARING", &mut self.data_sharing),
            ("MOOD_FAST", &mut self.fast),
        ];
        for (key, slot) in flags {
            if let Some(raw) = lookup(key) {
                *slot = parse_bool(&raw).ok_or_else(|| invalid(key, &raw))?;
            }
        }

        if let Some(raw) = lookup("MOOD_SEED") {
            self.seed = Some(parse_seed("MOOD_SEED", &raw)?);
        }
        if let Some(path) = lookup("MOOD_EXPORT") {
            if let Some(path) = non_blank(path) {
                self.export_path = Some(path);
            }
        }
        Ok(())
    }
}

fn next_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, ConfigError> {
    args.next()
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn parse_seed(key: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| invalid(key, raw))
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn from_env_or_args() -> Result<Config, ConfigError> {
    let mut cfg = Config::default();
    cfg.apply_env(|key| env::var(key).ok())?;
    cfg.apply_args(env::args().skip(1))?;
    Ok(cfg)
}
