//! Writing rendered artifacts into the repository tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::catalog::FileArtifact;
use crate::error::{Error, Result};

/// Repository root all artifact paths are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Resolves the root from the running executable, which is expected to
    /// live one directory below it (`<root>/<tools>/<exe>`).
    ///
    /// # Errors
    /// * `Error::LayoutError` if the executable path cannot be determined or
    ///   has no grandparent directory
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| {
            Error::LayoutError(format!("cannot locate the running executable: {e}"))
        })?;
        Self::from_tool_path(&exe)
    }

    /// Resolves the root two levels above `tool`.
    pub fn from_tool_path(tool: &Path) -> Result<Self> {
        let root = tool.parent().and_then(Path::parent).ok_or_else(|| {
            Error::LayoutError(format!(
                "'{}' has no directory two levels above it",
                tool.display()
            ))
        })?;
        debug!("Resolved repository root {}", root.display());
        Ok(Self::new(root))
    }

    /// Resolves the root from an explicit override or from the executable.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self> {
        match root {
            Some(root) => Ok(Self::new(root)),
            None => Self::from_current_exe(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn target(&self, artifact: &FileArtifact) -> PathBuf {
        self.root.join(artifact.path())
    }

    /// Creates `relative` below the root unless it already exists. Missing
    /// parents are not created.
    pub fn ensure_dir<P: AsRef<Path>>(&self, relative: P) -> Result<PathBuf> {
        let path = self.root.join(relative);
        match fs::create_dir(&path) {
            Ok(()) => debug!("Created directory {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
                debug!("Directory {} already exists", path.display())
            }
            Err(source) => return Err(Error::WriteError { path, source }),
        }
        Ok(path)
    }

    /// Writes every artifact in order, overwriting existing files.
    ///
    /// Stops at the first failure. Files written before it stay on disk.
    pub fn write_all(&self, artifacts: &[FileArtifact]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = self.target(artifact);
            write_file(&path, &artifact.content)?;
            info!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|source| Error::WriteError { path: path.to_path_buf(), source })
}
