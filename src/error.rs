//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for
//! `buildbox`. It uses the `thiserror` library to create a comprehensive
//! `Error` enum covering every anticipated failure mode of fixture setup,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur while resolving configuration, materializing a fixture tree, or
//!   launching the external build tool. Each variant includes contextual
//!   information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library to simplify function signatures.
//!
//! Note that a *failing* build-tool invocation is deliberately absent from
//! this taxonomy: a non-zero exit code is data carried by
//! [`crate::runner::RunResult`], not an error of this layer. Only the
//! inability to launch the tool at all is an `Error`.
//!
//! Propagation policy: no variant is recovered from locally. Every failure
//! propagates synchronously to the immediate caller via `Result`.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for buildbox operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required configuration key was absent at resolution time.
    ///
    /// This is fatal to fixture setup and surfaced immediately: fixtures must
    /// never silently fall back to the real working directory.
    #[error("Missing required configuration key: {key}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    MissingConfiguration {
        key: String,
        /// Optional hint for how to supply the missing key
        hint: Option<String>,
    },

    /// A conventional file was read before it was ever written.
    ///
    /// This indicates a test-authoring mistake (read-before-write), so it is
    /// surfaced as a hard failure rather than an empty result.
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Two paths could not be related by a relative path.
    ///
    /// Raised when the base and target share no common root, such as
    /// differently-anchored paths or Windows paths on different drives.
    #[error("Cannot express {} relative to {}: paths share no common root", target.display(), base.display())]
    Relativize { base: PathBuf, target: PathBuf },

    /// The external build tool could not be launched as a subprocess.
    ///
    /// Includes the program name and the underlying OS error message.
    #[error("Failed to launch '{program}': {message}")]
    Launch { program: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// An error indicating that a mutex or other lock has been poisoned.
    #[error("Lock poisoned: {context}")]
    LockPoisoned { context: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
