//! # Bound File Accessors
//!
//! A [`FileBinding`] ties a fixed relative path to typed get/set operations
//! against whatever [`DirectoryScope`] is supplied at access time. The
//! binding itself carries no scope, so one binding is reusable across every
//! fixture of a suite.
//!
//! Named constructors exist for the conventional descriptor files of both
//! dialects the external tool accepts. They differ only in relative path and
//! an advisory [`Language`] tag; the tag is a hint for tooling and syntax
//! highlighting, never enforced at runtime — descriptor content is opaque
//! text to this library.

use crate::error::Result;
use crate::scope::DirectoryScope;

/// Advisory content-language tag for a bound file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Kotlin DSL descriptor syntax (dialect A).
    Kotlin,
    /// Groovy DSL descriptor syntax (dialect B).
    Groovy,
    /// Java-style properties syntax.
    Properties,
    /// Plain text.
    Text,
}

/// A reusable binding of a fixed relative path to read/write operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBinding {
    relative_path: String,
    language: Language,
}

impl FileBinding {
    /// Create a binding for an arbitrary relative path.
    pub fn new(relative_path: impl Into<String>, language: Language) -> Self {
        Self {
            relative_path: relative_path.into(),
            language,
        }
    }

    /// The relative path this binding addresses.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// The advisory content-language tag.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Read the full text of the bound file under `scope`.
    ///
    /// Fails with [`crate::error::Error::FileNotFound`] if the file was never
    /// written.
    pub fn read(&self, scope: &DirectoryScope) -> Result<String> {
        scope.read(&self.relative_path)
    }

    /// Write `content` to the bound file under `scope`, creating parent
    /// directories as needed and replacing any prior content.
    pub fn write(&self, scope: &DirectoryScope, content: &str) -> Result<()> {
        scope.write(&self.relative_path, content)?;
        Ok(())
    }

    /// Whether the bound file currently exists under `scope`.
    pub fn exists(&self, scope: &DirectoryScope) -> bool {
        scope.resolve(&self.relative_path).is_file()
    }

    /// The primary build descriptor, Kotlin dialect (`build.gradle.kts`).
    pub fn build_script_kts() -> Self {
        Self::new("build.gradle.kts", Language::Kotlin)
    }

    /// The settings descriptor, Kotlin dialect (`settings.gradle.kts`).
    pub fn settings_kts() -> Self {
        Self::new("settings.gradle.kts", Language::Kotlin)
    }

    /// The primary build descriptor, Groovy dialect (`build.gradle`).
    pub fn build_script() -> Self {
        Self::new("build.gradle", Language::Groovy)
    }

    /// The settings descriptor, Groovy dialect (`settings.gradle`).
    pub fn settings() -> Self {
        Self::new("settings.gradle", Language::Groovy)
    }

    /// The properties file (`gradle.properties`).
    pub fn gradle_properties() -> Self {
        Self::new("gradle.properties", Language::Properties)
    }
}
