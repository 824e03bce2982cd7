// Local JSON artifact, written atomically
use crate::error::{Result, SinkError};
use crate::payload::checksum;
use atomicwrites::{AtomicFile, OverwriteBehavior};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Permission bits of a freshly written artifact.
#[cfg(unix)]
const ARTIFACT_MODE: u32 = 0o644;

/// Description of a written artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactInfo {
    pub path: PathBuf,
    pub size: u64,
    pub checksum: String,
}

/// Write `payload` to `path`, replacing any existing file.
///
/// The file is written to a temporary sibling and renamed into place, so
/// readers never observe a partial artifact.
pub fn write_artifact<P: AsRef<Path>>(path: P, payload: &[u8]) -> Result<ArtifactInfo> {
    let path = path.as_ref();
    let artifact_err = |source: std::io::Error| SinkError::Artifact {
        path: path.to_path_buf(),
        source,
    };

    AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
        .write(|f| f.write_all(payload))
        .map_err(|e| artifact_err(e.into()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(ARTIFACT_MODE))
            .map_err(artifact_err)?;
    }

    Ok(ArtifactInfo {
        path: path.to_path_buf(),
        size: payload.len() as u64,
        checksum: checksum(payload),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.json");

        write_artifact(&path, b"[1]").unwrap();
        let info = write_artifact(&path, b"[]").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"[]");
        assert_eq!(info.size, 2);
        assert_eq!(info.checksum, checksum(b"[]"));
        // No temporary files left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.json");
        write_artifact(&path, b"[]").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("output.json");

        assert!(matches!(
            write_artifact(&path, b"[]"),
            Err(SinkError::Artifact { .. })
        ));
    }
}
