//! Loading element lists and saving classification reports.
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::net::element::GraphElement;
use crate::report::ClassificationReport;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ron error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn elements_from_json_str(s: &str) -> Result<Vec<GraphElement>, IoError> {
    Ok(serde_json::from_str(s)?)
}

pub fn read_elements_json<P: AsRef<Path>>(path: P) -> Result<Vec<GraphElement>, IoError> {
    let content = fs::read_to_string(path)?;
    elements_from_json_str(&content)
}

pub fn elements_from_ron_str(s: &str) -> Result<Vec<GraphElement>, IoError> {
    Ok(ron::from_str(s)?)
}

pub fn read_elements_ron<P: AsRef<Path>>(path: P) -> Result<Vec<GraphElement>, IoError> {
    let content = fs::read_to_string(path)?;
    elements_from_ron_str(&content)
}

pub fn write_report_json<P: AsRef<Path>>(
    path: P,
    report: &ClassificationReport,
) -> Result<(), IoError> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(report)?;
    fs::write(path, content)?;
    Ok(())
}
