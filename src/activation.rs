use crate::repo::{locate_root, RECORDER_MARKERS, WORKFLOW_STATE_DIR};
use chrono::{SecondsFormat, Utc};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const ACTIVATION_LOG_FILE_NAME: &str = "skill-activation.log";

#[derive(Debug, thiserror::Error)]
pub enum ActivationError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to append to activation log {path}: {source}")]
    Append {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub fn activation_log_path(root: &Path) -> PathBuf {
    root.join(WORKFLOW_STATE_DIR)
        .join("logs")
        .join(ACTIVATION_LOG_FILE_NAME)
}

pub fn format_activation_line(timestamp: &str, skill: &str, run_id: &str) -> String {
    format!("{timestamp}\tskill={skill}\trun_id={run_id}\n")
}

pub fn record_activation(
    start: &Path,
    skill: &str,
    run_id: &str,
) -> Result<PathBuf, ActivationError> {
    let root = locate_root(start, RECORDER_MARKERS);
    let path = activation_log_path(&root);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ActivationError::CreateDir {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false);
    let line = format_activation_line(&timestamp, skill, run_id);
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| ActivationError::Append {
            path: path.display().to_string(),
            source,
        })?;
    file.write_all(line.as_bytes())
        .map_err(|source| ActivationError::Append {
            path: path.display().to_string(),
            source,
        })?;
    Ok(path)
}
