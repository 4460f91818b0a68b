//! # Buildbox
//!
//! This library provides disposable, isolated project fixtures for driving
//! black-box tests of an external build tool. It is designed to be used by
//! functional-test suites (and the `buildbox` command-line tool) that need a
//! realistic project tree on disk, pre-populated with conventional
//! configuration files, and a way to invoke the tool against it.
//!
//! ## Quick Example
//!
//! ```
//! use buildbox::files::FileBinding;
//! use buildbox::scope::DirectoryScope;
//!
//! // A scope is a handle for a directory subtree; nothing is created until
//! // a write happens.
//! let scope = DirectoryScope::new(std::env::temp_dir().join("buildbox-doc-example"));
//! scope.write("src/App.kt", "fun main() {}").unwrap();
//! assert_eq!(scope.read("src/App.kt").unwrap(), "fun main() {}");
//!
//! // Bound accessors address the conventional descriptor files.
//! let settings = FileBinding::settings_kts();
//! settings.write(&scope, "rootProject.name = \"demo\"").unwrap();
//! assert!(settings.exists(&scope));
//! ```
//!
//! ## Core Concepts
//!
//! The library is built around a few key pieces:
//!
//! - **Configuration (`config`)**: resolves the test-host locations (scratch
//!   root, shared dependency repository, reference project sources) from
//!   environment variables, with required-presence validation and per-key
//!   caching. Missing keys fail fast — fixtures never fall back to the real
//!   working directory.
//! - **Scopes (`scope`)**: lightweight handles over directory subtrees with
//!   relative addressing and create-on-write semantics.
//! - **Bound files (`files`)**: reusable accessors tying a conventional
//!   relative path to read/write operations against any scope.
//! - **Fixtures (`fixture`)**: the builder that composes a scope with
//!   descriptor boilerplate (in either of the tool's two dialects) and a
//!   caller-supplied customization closure, yielding a tree ready to hand to
//!   the runner.
//! - **Runner (`runner`)**: the single point of contact with the external
//!   build tool — a blocking subprocess invocation bound to the fixture root,
//!   returning exit code, captured output, and parsed per-task outcomes.
//!   A failing build is data for the test to assert on, not an error.
//!
//! ## Execution Flow
//!
//! A test resolves a [`config::Config`] once, builds a
//! [`fixture::ProjectFixture`] with a unique name, customizes the tree, runs
//! the tool via [`runner::ToolRunner`], and asserts on the returned
//! [`runner::RunResult`]. Data flows one direction; no state is shared
//! between fixtures beyond the read-only configuration cache.

pub mod config;
pub mod error;
pub mod files;
pub mod fixture;
pub mod output;
pub mod path;
pub mod runner;
pub mod scope;

#[cfg(test)]
mod path_proptest;
