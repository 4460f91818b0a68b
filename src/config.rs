//! # Test-Host Configuration
//!
//! Fixtures must never land in the real working directory, so every location
//! they depend on — the scratch root, the shared local dependency repository,
//! and the reference project sources — is supplied by the process that
//! launches the test suite. This module resolves those locations from a
//! key/value [`ConfigSource`] (environment variables in production), with
//! required-presence validation and per-key caching.
//!
//! ## Key Components
//!
//! - **`ConfigSource`**: the lookup abstraction. `EnvSource` reads process
//!   environment variables; `MapSource` backs tests and embedders with an
//!   in-memory map.
//! - **`Config`**: the resolver. Each distinct key is looked up at most once
//!   and the resolved value is cached for the lifetime of the `Config`;
//!   a missing key is a hard [`Error::MissingConfiguration`], never a silent
//!   default.
//!
//! A `Config` is constructed once at process start and passed by reference to
//! every fixture builder — it is deliberately not a global singleton.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{Error, Result};

/// Key naming the base temporary-directory root for all fixtures.
pub const TMP_ROOT: &str = "BUILDBOX_TMP_ROOT";

/// Key naming the shared local dependency repository directory.
///
/// This directory is read-only from the fixtures' point of view and is shared
/// across every fixture of a test run; descriptor boilerplate references it
/// via a relative path computed from each fixture root.
pub const DEV_REPO: &str = "BUILDBOX_DEV_REPO";

/// Key naming the directory containing reference example project sources.
pub const EXAMPLE_PROJECTS_DIR: &str = "BUILDBOX_EXAMPLE_PROJECTS_DIR";

/// Key naming the directory containing reference integration project sources.
pub const INTEGRATION_PROJECTS_DIR: &str = "BUILDBOX_INTEGRATION_PROJECTS_DIR";

/// Fixed subdirectory of the temp root under which functional-test fixtures
/// are created.
pub const FUNCTIONAL_TEST_DIR_NAME: &str = "functional-tests";

/// A read-only key/value store supplied by the launching process.
pub trait ConfigSource: Send + Sync {
    /// Look up the raw value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;
}

/// `ConfigSource` backed by process environment variables.
#[derive(Debug, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// `ConfigSource` backed by an in-memory map.
///
/// Used by tests and by embedders that resolve locations themselves.
#[derive(Debug, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key/value pair, replacing any previous value for the key.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Resolver for the well-known test-host locations.
///
/// Values are resolved lazily on first access and cached; resolution is
/// idempotent and side-effect-free beyond the first call. None of the
/// resolved directories are validated for existence here — the
/// create-on-write behavior of [`crate::scope::DirectoryScope`] handles
/// creation lazily.
pub struct Config {
    source: Box<dyn ConfigSource>,
    cache: Mutex<HashMap<String, String>>,
}

impl Config {
    /// Create a config over an arbitrary source.
    pub fn new(source: impl ConfigSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Create a config that reads process environment variables.
    pub fn from_env() -> Self {
        Self::new(EnvSource)
    }

    /// Resolve the raw string value for `key`.
    ///
    /// The first successful lookup is cached for the lifetime of this
    /// `Config`; an absent key fails with `Error::MissingConfiguration`.
    pub fn raw(&self, key: &str) -> Result<String> {
        let mut cache = self.cache.lock().map_err(|_| Error::LockPoisoned {
            context: "configuration cache".to_string(),
        })?;

        if let Some(value) = cache.get(key) {
            return Ok(value.clone());
        }

        let value = self
            .source
            .get(key)
            .ok_or_else(|| Error::MissingConfiguration {
                key: key.to_string(),
                hint: Some(format!(
                    "set the {} environment variable before running the suite",
                    key
                )),
            })?;

        log::debug!("resolved configuration key {} = {}", key, value);
        cache.insert(key.to_string(), value.clone());
        Ok(value)
    }

    /// Resolve `key` and apply `convert` to the raw string.
    pub fn get_with<T>(&self, key: &str, convert: impl FnOnce(&str) -> T) -> Result<T> {
        Ok(convert(&self.raw(key)?))
    }

    /// Resolve `key` as a filesystem path.
    pub fn path(&self, key: &str) -> Result<PathBuf> {
        self.get_with(key, |raw| PathBuf::from(raw))
    }

    /// The base temporary-directory root.
    pub fn tmp_root(&self) -> Result<PathBuf> {
        self.path(TMP_ROOT)
    }

    /// The directory under which functional-test fixtures are created.
    ///
    /// A fixed subdirectory of the temp root; not validated for existence.
    pub fn functional_test_root(&self) -> Result<PathBuf> {
        Ok(self.tmp_root()?.join(FUNCTIONAL_TEST_DIR_NAME))
    }

    /// The shared local dependency repository directory.
    pub fn dev_repo(&self) -> Result<PathBuf> {
        self.path(DEV_REPO)
    }

    /// The directory containing reference example project sources.
    pub fn example_projects_dir(&self) -> Result<PathBuf> {
        self.path(EXAMPLE_PROJECTS_DIR)
    }

    /// The directory containing reference integration project sources.
    pub fn integration_projects_dir(&self) -> Result<PathBuf> {
        self.path(INTEGRATION_PROJECTS_DIR)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config").finish_non_exhaustive()
    }
}
