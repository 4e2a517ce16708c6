//! Loading the site document from disk or over HTTP.
//!
//! Stage 1 of the dept-site build. A load either produces a fully-formed
//! [`SiteData`] or a [`LoadError`] — there is no partial-document recovery.
//! Failure is a returned value, never a panic: callers report it on the
//! user-facing error surface and skip population entirely.

use crate::model::SiteData;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("data endpoint returned HTTP status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(Box<ureq::Error>),
    #[error("failed to read response body: {0}")]
    Body(std::io::Error),
    #[error("malformed data document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load and parse a local `data.json`.
pub fn load_file(path: &Path) -> Result<SiteData, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = SiteData::from_json(&text)?;
    log_counts(&data);
    Ok(data)
}

/// Fetch and parse the document from an HTTP endpoint.
///
/// Any non-success status is a hard failure for this load attempt, as is a
/// transport error or a parse error.
pub fn fetch(url: &str) -> Result<SiteData, LoadError> {
    let response = match ureq::get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => return Err(LoadError::Status(code)),
        Err(other) => return Err(LoadError::Transport(Box::new(other))),
    };
    let text = response.into_string().map_err(LoadError::Body)?;
    let data = SiteData::from_json(&text)?;
    log_counts(&data);
    Ok(data)
}

fn log_counts(data: &SiteData) {
    let counts = data.counts();
    debug!(
        specialties = counts.specialties,
        courses = counts.courses,
        faculty = counts.faculty,
        statistics = counts.statistics,
        "data document loaded"
    );
}
