//! Journal entries fed to the text analyzer in a scripted session.

use std::fs;

use log::{debug, warn};

use crate::config::Config;

const SAMPLE_ENTRIES: &[&str] = &[
    "I am happy and excited about the trip",
    "Work was difficult and the meeting went badly",
    "The cat sat on the mat",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOrigin {
    File,
    Script,
    Samples,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntries {
    pub origin: EntryOrigin,
    pub entries: Vec<String>,
}

impl JournalEntries {
    /// First entry, used as the simulated voice transcript.
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }
}

pub fn sample_entries() -> &'static [&'static str] {
    SAMPLE_ENTRIES
}

/// Picks the first non-empty origin: inputs file (one entry per line), then
/// the `;`-separated script, then the built-in samples.
pub fn load_entries(cfg: &Config) -> JournalEntries {
    let from_file = cfg.inputs_path.as_deref().and_then(read_entry_file);
    let from_script = cfg.script.as_deref().map(|s| split_entries(s, ';'));

    let picked = [
        (EntryOrigin::File, from_file),
        (EntryOrigin::Script, from_script),
    ]
    .into_iter()
    .find_map(|(origin, entries)| entries.filter(|e| !e.is_empty()).map(|e| (origin, e)));

    let (origin, entries) = picked.unwrap_or_else(|| {
        (
            EntryOrigin::Samples,
            SAMPLE_ENTRIES.iter().map(|s| s.to_string()).collect(),
        )
    });
    debug!("[dialog] {} entries from {:?}", entries.len(), origin);

    JournalEntries { origin, entries }
}

fn read_entry_file(path: &str) -> Option<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Some(split_entries(&contents, '\n')),
        Err(err) => {
            warn!("[dialog] cannot read journal file '{}': {}", path, err);
            None
        }
    }
}

fn split_entries(raw: &str, sep: char) -> Vec<String> {
    raw.split(sep)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
