use std::path::{Path, PathBuf};

pub const WORKFLOW_STATE_DIR: &str = ".agent";
pub const VCS_DIR: &str = ".git";
pub const PROJECT_MANIFEST_FILE: &str = "pyproject.toml";

pub const RECORDER_MARKERS: &[&str] = &[WORKFLOW_STATE_DIR, VCS_DIR, PROJECT_MANIFEST_FILE];
pub const WRITER_MARKERS: &[&str] = &[WORKFLOW_STATE_DIR, VCS_DIR];

pub fn locate_root(start: &Path, markers: &[&str]) -> PathBuf {
    for dir in start.ancestors() {
        if markers.iter().any(|marker| dir.join(marker).exists()) {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}
