use crate::error::BumpError;
use crate::version::{Part, VersionMatch, find_first};
use log::{debug, info};
use semver::Version;
use std::path::Path;

/// Reads and rewrites the first `major.minor.patch` version string in a text file.
pub struct VersionBumper;

impl VersionBumper {
    /// Returns the first version found in the file at `path`.
    ///
    /// The file is only read. A missing or unreadable file surfaces as [`BumpError::Io`].
    pub fn inspect(path: impl AsRef<Path>) -> Result<Version, BumpError> {
        let path = path.as_ref();
        let contents = Self::read(path)?;
        let found = Self::locate(path, &contents)?;
        Ok(found.version)
    }

    /// Increments `part` of the first version in the file at `path` and writes the file back.
    ///
    /// `part` must be one of `major`, `minor` or `patch`. The file is left untouched unless
    /// every check passes.
    pub fn bump(path: impl AsRef<Path>, part: &str) -> Result<Version, BumpError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(BumpError::FileNotFound(path.to_path_buf()));
        }

        let contents = Self::read(path)?;
        let found = Self::locate(path, &contents)?;
        let part: Part = part.parse()?;
        let new_version = part.apply(&found.version)?;

        let new_contents = found.splice(&contents, &new_version);
        std::fs::write(path, new_contents).map_err(|source| BumpError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Bumped '{}' from {} to {}",
            path.display(),
            found.version,
            new_version
        );
        Ok(new_version)
    }

    /// The name shown for `path` in status lines: its file name, or the whole path when it has none.
    pub fn file_label(path: impl AsRef<Path>) -> String {
        let path = path.as_ref();
        path.file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .to_string()
    }

    fn read(path: &Path) -> Result<String, BumpError> {
        debug!("Reading file: '{}'", path.display());
        std::fs::read_to_string(path).map_err(|source| BumpError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn locate(path: &Path, contents: &str) -> Result<VersionMatch, BumpError> {
        find_first(contents)?.ok_or_else(|| BumpError::NoVersionFound(path.to_path_buf()))
    }
}
