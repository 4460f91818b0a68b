//! # External Runner Adapter
//!
//! Thin binding that launches the external build tool against a fixture's
//! root directory. The adapter is bound to a working directory at
//! construction, accepts environment-variable overrides, and performs a
//! single blocking invocation per [`ToolRunner::run`] call — no retries, no
//! timeout, no cancellation (timeout policy belongs to the invoking harness).
//!
//! A non-zero exit from the tool is *not* an error of this layer. It is
//! reported as data in [`RunResult`] for the caller to assert on; only the
//! inability to launch the process at all surfaces as
//! [`crate::error::Error::Launch`].
//!
//! [`BuildTool`] is the substitution seam: production code uses
//! [`CliBuildTool`] (a subprocess launcher), while unit tests supply a mock
//! returning canned output.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use regex::Regex;

use crate::error::{Error, Result};

/// Raw captured output of one tool invocation.
#[derive(Debug, Clone)]
pub struct RawOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// The mechanism that actually executes the external build tool.
pub trait BuildTool {
    /// Execute the tool in `workdir` with `args`, merging `env` into the
    /// invocation environment, and block until it exits.
    fn launch(
        &self,
        workdir: &Path,
        args: &[String],
        env: &BTreeMap<String, String>,
    ) -> Result<RawOutput>;
}

/// `BuildTool` that launches the tool as a subprocess via the system shell
/// search path.
#[derive(Debug, Clone)]
pub struct CliBuildTool {
    program: PathBuf,
}

impl CliBuildTool {
    /// Use an arbitrary program as the build tool.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The conventional `gradle` executable from the search path.
    pub fn gradle() -> Self {
        Self::new("gradle")
    }
}

impl BuildTool for CliBuildTool {
    fn launch(
        &self,
        workdir: &Path,
        args: &[String],
        env: &BTreeMap<String, String>,
    ) -> Result<RawOutput> {
        log::info!(
            "launching {} {:?} in {}",
            self.program.display(),
            args,
            workdir.display()
        );

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(workdir)
            .envs(env)
            .output()
            .map_err(|e| Error::Launch {
                program: self.program.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(RawOutput {
            // Termination by signal carries no code; report -1 rather than
            // inventing a fake exit status.
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Outcome of one declared unit of work, as reported by the tool's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Executed and succeeded.
    Success,
    /// Executed and failed.
    Failed,
    /// Skipped because outputs were already current.
    UpToDate,
    /// Outputs restored from the tool's build cache.
    FromCache,
    /// Explicitly skipped.
    Skipped,
    /// Skipped because no input sources were present.
    NoSource,
}

/// One task line reported by the tool, e.g. `> Task :compile FAILED`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    /// The task path as reported, including the leading `:`.
    pub path: String,
    pub outcome: Outcome,
}

/// Immutable result of a single external-tool invocation.
///
/// Owned solely by the calling test; tool failure is encoded here as a
/// non-zero `exit_code`, never as an `Error`.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    /// Per-task outcome metadata parsed from `stdout`.
    pub tasks: Vec<TaskOutcome>,
}

impl RunResult {
    /// Whether the tool exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// The reported outcome for a task path, if present.
    pub fn task(&self, path: &str) -> Option<&TaskOutcome> {
        self.tasks.iter().find(|t| t.path == path)
    }

    /// All tasks the tool reported as failed.
    pub fn failed_tasks(&self) -> Vec<&TaskOutcome> {
        self.tasks
            .iter()
            .filter(|t| t.outcome == Outcome::Failed)
            .collect()
    }
}

/// Parse per-task outcome lines from captured tool output.
///
/// Lines of the form `> Task :path` report success; a trailing token names
/// one of the other outcomes. Unrecognized lines are ignored.
fn parse_task_outcomes(stdout: &str) -> Result<Vec<TaskOutcome>> {
    let pattern =
        Regex::new(r"^> Task (:[\w:.-]+)(?: (FAILED|UP-TO-DATE|FROM-CACHE|SKIPPED|NO-SOURCE))?\s*$")?;

    let mut tasks = Vec::new();
    for line in stdout.lines() {
        if let Some(captures) = pattern.captures(line) {
            let outcome = match captures.get(2).map(|m| m.as_str()) {
                None => Outcome::Success,
                Some("FAILED") => Outcome::Failed,
                Some("UP-TO-DATE") => Outcome::UpToDate,
                Some("FROM-CACHE") => Outcome::FromCache,
                Some("SKIPPED") => Outcome::Skipped,
                Some("NO-SOURCE") => Outcome::NoSource,
                Some(_) => continue,
            };
            tasks.push(TaskOutcome {
                path: captures[1].to_string(),
                outcome,
            });
        }
    }
    Ok(tasks)
}

/// Runner handle bound to one fixture root.
pub struct ToolRunner {
    workdir: PathBuf,
    env: BTreeMap<String, String>,
    tool: Box<dyn BuildTool>,
}

impl ToolRunner {
    /// A runner for `workdir` using the conventional `gradle` executable.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self::with_tool(workdir, Box::new(CliBuildTool::gradle()))
    }

    /// A runner for `workdir` using an explicit tool implementation.
    pub fn with_tool(workdir: impl Into<PathBuf>, tool: Box<dyn BuildTool>) -> Self {
        Self {
            workdir: workdir.into(),
            env: BTreeMap::new(),
            tool,
        }
    }

    /// The working directory every invocation runs in.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Add an environment-variable override merged into each invocation.
    pub fn env(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// The currently configured environment overrides.
    pub fn env_overrides(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Invoke the tool once with `args`, blocking until it exits.
    pub fn run<I, S>(&self, args: I) -> Result<RunResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let raw = self.tool.launch(&self.workdir, &args, &self.env)?;

        log::debug!(
            "tool exited with status {} ({} stdout bytes, {} stderr bytes)",
            raw.exit_code,
            raw.stdout.len(),
            raw.stderr.len()
        );

        let tasks = parse_task_outcomes(&raw.stdout)?;
        Ok(RunResult {
            exit_code: raw.exit_code,
            stdout: raw.stdout,
            stderr: raw.stderr,
            tasks,
        })
    }
}

impl std::fmt::Debug for ToolRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRunner")
            .field("workdir", &self.workdir)
            .field("env", &self.env)
            .finish_non_exhaustive()
    }
}
