//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `buildbox` command-line tool. Each subcommand is defined in its own file:
//! an `Args` struct derived with `clap` plus an `execute` function that
//! performs the command's logic by calling into the `buildbox` library.

pub mod run;
pub mod scaffold;

use clap::ValueEnum;

use buildbox::fixture::Dialect;

/// CLI-facing descriptor dialect selection.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialectArg {
    /// Kotlin DSL descriptors (`*.gradle.kts`)
    Kotlin,
    /// Groovy DSL descriptors (`*.gradle`)
    Groovy,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Kotlin => Dialect::Kotlin,
            DialectArg::Groovy => Dialect::Groovy,
        }
    }
}
