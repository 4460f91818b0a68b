//! Run command implementation
//!
//! Scaffolds a fixture and invokes the external build tool against it,
//! echoing captured output and exiting with the tool's own status code.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use buildbox::config::Config;
use buildbox::fixture::FixtureBuilder;
use buildbox::output::{emoji, OutputConfig};
use buildbox::runner::{CliBuildTool, Outcome};

use super::DialectArg;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Fixture name (becomes the directory name under the base directory)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Arguments/tasks forwarded to the build tool
    #[arg(value_name = "ARGS", trailing_var_arg = true)]
    pub args: Vec<String>,

    /// Descriptor dialect to pre-populate
    #[arg(long, value_enum, default_value_t = DialectArg::Kotlin)]
    pub dialect: DialectArg,

    /// Base directory (defaults to the functional-test root under BUILDBOX_TMP_ROOT)
    #[arg(long, value_name = "PATH")]
    pub base: Option<PathBuf>,

    /// Seed the fixture from a template project directory
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Program used to invoke the build tool
    #[arg(long, value_name = "PROGRAM", default_value = "gradle")]
    pub tool: String,

    /// Environment override passed to the tool (repeatable)
    #[arg(long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Suppress all output except the tool's own
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the run command
pub fn execute(args: RunArgs, output: &OutputConfig) -> Result<()> {
    let config = Config::from_env();

    let mut builder = FixtureBuilder::with_dialect(&config, &args.name, args.dialect.into())
        .tool(Box::new(CliBuildTool::new(&args.tool)));
    if let Some(base) = &args.base {
        builder = builder.base_dir(base);
    }

    let template = args.template.clone();
    let env_overrides = parse_env_overrides(&args.env)?;
    let fixture = builder.build(|fixture| {
        if let Some(template) = &template {
            fixture.import_tree(template)?;
        }
        for (key, value) in &env_overrides {
            fixture.runner_mut().env(key, value);
        }
        Ok(())
    })?;

    if !args.quiet {
        println!(
            "{} Running '{}' {:?} in {}",
            emoji(output, "🚀", "[RUN]"),
            args.tool,
            args.args,
            fixture.root().display()
        );
    }

    let result = fixture
        .runner()
        .run(args.args.iter().cloned())
        .with_context(|| format!("failed to launch '{}'", args.tool))?;

    print!("{}", result.stdout);
    eprint!("{}", result.stderr);

    if !args.quiet && !result.tasks.is_empty() {
        let failed = result
            .tasks
            .iter()
            .filter(|t| t.outcome == Outcome::Failed)
            .count();
        println!(
            "{} {} task(s) reported, {} failed",
            emoji(output, "🧾", "[TASKS]"),
            result.tasks.len(),
            failed
        );
    }

    if !result.success() {
        std::process::exit(result.exit_code.max(1));
    }
    Ok(())
}

/// Parse repeated `KEY=VALUE` flags into pairs.
fn parse_env_overrides(raw: &[String]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .with_context(|| format!("invalid --env value '{}': expected KEY=VALUE", entry))
        })
        .collect()
}
