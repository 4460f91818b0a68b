//! Scaffold command implementation
//!
//! Materializes a fixture tree on disk without invoking the build tool,
//! so the generated descriptors can be inspected or tweaked by hand.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use buildbox::config::Config;
use buildbox::fixture::{FixtureBuilder, ProjectFixture};
use buildbox::output::{emoji, OutputConfig};

use super::DialectArg;

/// Arguments for the scaffold command
#[derive(Args, Debug)]
pub struct ScaffoldArgs {
    /// Fixture name (becomes the directory name under the base directory)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Descriptor dialect to pre-populate
    #[arg(long, value_enum, default_value_t = DialectArg::Kotlin)]
    pub dialect: DialectArg,

    /// Base directory (defaults to the functional-test root under BUILDBOX_TMP_ROOT)
    #[arg(long, value_name = "PATH")]
    pub base: Option<PathBuf>,

    /// Seed the fixture from a template project directory
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the scaffold command
pub fn execute(args: ScaffoldArgs, output: &OutputConfig) -> Result<()> {
    let config = Config::from_env();
    let fixture = build_fixture(&config, &args)?;

    if !args.quiet {
        println!(
            "{} Scaffolded fixture '{}' at {}",
            emoji(output, "📦", "[OK]"),
            fixture.name(),
            fixture.root().display()
        );
        println!("  shared repository: {}", fixture.dev_repo_path());
    }

    Ok(())
}

fn build_fixture(config: &Config, args: &ScaffoldArgs) -> Result<ProjectFixture> {
    let mut builder = FixtureBuilder::with_dialect(config, &args.name, args.dialect.into());
    if let Some(base) = &args.base {
        builder = builder.base_dir(base);
    }
    let template = args.template.clone();
    let fixture = builder.build(|fixture| {
        if let Some(template) = &template {
            fixture.import_tree(template)?;
        }
        Ok(())
    })?;
    Ok(fixture)
}
