use crate::repo::{locate_root, WRITER_MARKERS};
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to resolve repo root {path}: {source}")]
    ResolveRoot {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("resolved path {resolved} is outside repo root {root}")]
    OutsideRoot { resolved: String, root: String },
    #[error("failed to create artifact directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write artifact {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub fn resolve_artifact_path(root: &Path, relative: &str) -> Result<PathBuf, ArtifactError> {
    // Symlinks below the root are not resolved, so a link pointing outside
    // the repository is not caught by this check.
    let resolved = normalize(&root.join(relative));
    if resolved.starts_with(root) {
        Ok(resolved)
    } else {
        Err(ArtifactError::OutsideRoot {
            resolved: resolved.display().to_string(),
            root: root.display().to_string(),
        })
    }
}

pub fn prepare_artifact(start: &Path, relative: &str) -> Result<PathBuf, ArtifactError> {
    let root = locate_root(start, WRITER_MARKERS);
    let root = root
        .canonicalize()
        .map_err(|source| ArtifactError::ResolveRoot {
            path: root.display().to_string(),
            source,
        })?;
    let resolved = resolve_artifact_path(&root, relative)?;
    if let Some(parent) = resolved.parent() {
        fs::create_dir_all(parent).map_err(|source| ArtifactError::CreateDir {
            path: parent.display().to_string(),
            source,
        })?;
    }
    Ok(resolved)
}

pub fn write_resolved(resolved: &Path, content: &str) -> Result<(), ArtifactError> {
    fs::write(resolved, content).map_err(|source| ArtifactError::Write {
        path: resolved.display().to_string(),
        source,
    })
}

pub fn write_artifact(
    start: &Path,
    relative: &str,
    content: &str,
) -> Result<PathBuf, ArtifactError> {
    let resolved = prepare_artifact(start, relative)?;
    write_resolved(&resolved, content)?;
    Ok(resolved)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::VCS_DIR;
    use tempfile::tempdir;

    #[test]
    fn resolve_keeps_paths_inside_the_root() {
        let root = Path::new("/repo");

        let resolved = resolve_artifact_path(root, "artifacts/foo/bar.md").expect("resolve");

        assert_eq!(resolved, Path::new("/repo/artifacts/foo/bar.md"));
    }

    #[test]
    fn resolve_collapses_dot_and_dot_dot_segments() {
        let root = Path::new("/repo");

        let resolved = resolve_artifact_path(root, "a/./b/../c.md").expect("resolve");

        assert_eq!(resolved, Path::new("/repo/a/c.md"));
    }

    #[test]
    fn resolve_accepts_the_root_itself() {
        let root = Path::new("/repo");

        assert_eq!(resolve_artifact_path(root, ".").expect("resolve"), root);
        assert_eq!(resolve_artifact_path(root, "").expect("resolve"), root);
    }

    #[test]
    fn resolve_rejects_traversal_above_the_root() {
        let root = Path::new("/repo");

        let err = resolve_artifact_path(root, "../../etc/passwd").expect_err("escape");

        match err {
            ArtifactError::OutsideRoot { resolved, root } => {
                assert_eq!(resolved, "/etc/passwd");
                assert_eq!(root, "/repo");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn resolve_rejects_sibling_directories_sharing_a_name_prefix() {
        let root = Path::new("/repo");

        let err = resolve_artifact_path(root, "../repo-other/file.md").expect_err("escape");

        assert!(matches!(err, ArtifactError::OutsideRoot { .. }));
    }

    #[test]
    fn resolve_rejects_an_absolute_path_outside_the_root() {
        let root = Path::new("/repo");

        let err = resolve_artifact_path(root, "/etc/passwd").expect_err("escape");

        assert!(matches!(err, ArtifactError::OutsideRoot { .. }));
    }

    #[test]
    fn write_artifact_creates_missing_parents_and_overwrites() {
        let temp = tempdir().expect("tempdir");
        fs::create_dir(temp.path().join(VCS_DIR)).expect("create marker");
        let root = temp.path().canonicalize().expect("canonicalize root");

        let first = write_artifact(temp.path(), "artifacts/x/y.md", "hello").expect("first write");
        assert_eq!(first, root.join("artifacts/x/y.md"));
        assert_eq!(fs::read_to_string(&first).expect("read artifact"), "hello");

        let second = write_artifact(temp.path(), "artifacts/x/y.md", "replaced").expect("rewrite");
        assert_eq!(second, first);
        assert_eq!(fs::read_to_string(&second).expect("read artifact"), "replaced");
    }

    #[test]
    fn write_artifact_refuses_to_escape_the_located_root() {
        let temp = tempdir().expect("tempdir");
        let repo = temp.path().join("repo");
        fs::create_dir_all(repo.join(VCS_DIR)).expect("create marker");

        let err = write_artifact(&repo, "../escape.txt", "nope").expect_err("escape");

        assert!(matches!(err, ArtifactError::OutsideRoot { .. }));
        assert!(!temp.path().join("escape.txt").exists());
    }
}
