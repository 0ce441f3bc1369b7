//! JSON-lines export of a session's observations.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::observation::MoodObservation;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed export line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub fn write_jsonl<'a, P, I>(path: P, observations: I) -> Result<usize, ExportError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a MoodObservation>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?);
    let mut written = 0;
    for obs in observations {
        let line = serde_json::to_string(obs).map_err(|source| ExportError::Json {
            line: written + 1,
            source,
        })?;
        writeln!(out, "{}", line)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Blank lines are skipped.
pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<MoodObservation>, ExportError> {
    let reader = BufReader::new(File::open(path)?);
    let mut observations = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let obs = serde_json::from_str(trimmed).map_err(|source| ExportError::Json {
            line: idx + 1,
            source,
        })?;
        observations.push(obs);
    }
    Ok(observations)
}
