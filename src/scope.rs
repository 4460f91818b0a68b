//! # Directory Scopes
//!
//! A [`DirectoryScope`] is a lightweight handle for a directory subtree that
//! may not exist yet. It supports relative addressing (`resolve`, `dir`)
//! without touching disk; only `write` and `read` perform I/O. This lets a
//! fixture declare its tree shape before deciding which leaves to populate.
//!
//! Write semantics are deliberately blunt: parents are created as needed and
//! the target file is truncated and rewritten in full. There is no merge,
//! append, or read-before-write check — fixtures are disposable, test-scoped
//! artifacts, not durable state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A handle representing a directory subtree, rooted at an absolute path.
///
/// Cloning a scope clones only the handle; scopes never own or delete the
/// directories they point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryScope {
    root: PathBuf,
}

impl DirectoryScope {
    /// Create a scope rooted at `root`. No disk I/O occurs.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root path of this scope.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative path under this scope's root.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// A nested scope rooted at `resolve(relative)`. No disk I/O occurs.
    ///
    /// Nesting composes: `scope.dir(a).dir(b)` resolves paths identically to
    /// `scope.dir(a/b)`.
    pub fn dir(&self, relative: impl AsRef<Path>) -> DirectoryScope {
        DirectoryScope::new(self.resolve(relative))
    }

    /// Write `content` to the file at `relative`, creating all intermediate
    /// directories and overwriting any prior content in full.
    ///
    /// Returns the absolute path of the written file.
    pub fn write(&self, relative: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let path = self.resolve(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        log::debug!("wrote {} bytes to {}", content.len(), path.display());
        Ok(path)
    }

    /// Read the full text content of the file at `relative`.
    ///
    /// Fails with [`Error::FileNotFound`] if the file does not exist; the
    /// file is never created as a side effect of reading.
    pub fn read(&self, relative: impl AsRef<Path>) -> Result<String> {
        let path = self.resolve(relative);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::FileNotFound { path }),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_then_read_round_trip() {
        let temp = TempDir::new().unwrap();
        let scope = DirectoryScope::new(temp.path());

        scope.write("settings.gradle.kts", "rootProject.name = \"x\"\n").unwrap();
        assert_eq!(
            scope.read("settings.gradle.kts").unwrap(),
            "rootProject.name = \"x\"\n"
        );
    }

    #[test]
    fn test_write_creates_intermediate_directories() {
        let temp = TempDir::new().unwrap();
        let scope = DirectoryScope::new(temp.path());

        let path = scope.write("src/main/kotlin/App.kt", "fun main() {}").unwrap();
        assert!(path.exists());
        assert!(temp.path().join("src/main/kotlin").is_dir());
    }

    #[test]
    fn test_overwrite_is_total() {
        let temp = TempDir::new().unwrap();
        let scope = DirectoryScope::new(temp.path());

        scope.write("a.txt", "a much longer original content").unwrap();
        scope.write("a.txt", "short").unwrap();
        assert_eq!(scope.read("a.txt").unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file_fails_without_side_effects() {
        let temp = TempDir::new().unwrap();
        let scope = DirectoryScope::new(temp.path());

        let err = scope.read("never-written.txt").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert!(!temp.path().join("never-written.txt").exists());
    }

    #[test]
    fn test_nested_scope_equivalence() {
        let scope = DirectoryScope::new("/tmp/fixtures/proj1");
        assert_eq!(
            scope.dir("a").dir("b").resolve("c.txt"),
            scope.dir("a/b").resolve("c.txt")
        );
        assert_eq!(scope.dir("a").dir("b").root(), scope.dir("a/b").root());
    }

    #[test]
    fn test_nesting_requires_no_disk_io() {
        // A scope over a nonexistent root can still resolve and nest.
        let scope = DirectoryScope::new("/definitely/not/created");
        let nested = scope.dir("sub");
        assert_eq!(nested.root(), Path::new("/definitely/not/created/sub"));
        assert!(!Path::new("/definitely/not/created").exists());
    }
}
