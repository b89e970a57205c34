use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A rendered artifact that knows where it belongs on disk.
pub trait GeneratedFile {
    /// Get the file path relative to the output root
    fn relative_path(&self) -> PathBuf;

    /// How to treat a file that already exists at the target path
    fn overwrite(&self) -> Overwrite {
        Overwrite::Always
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file below `base`, creating parent directories as needed
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = base.join(self.relative_path());

        if self.overwrite() == Overwrite::IfMissing && path.exists() {
            tracing::debug!(path = %path.display(), "skipping existing file");
            return Ok(WriteResult::Skipped);
        }

        write_file(&path, &self.render())?;
        tracing::debug!(path = %path.display(), "wrote generated file");
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist (hand-editable stubs)
    IfMissing,
}
