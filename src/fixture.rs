//! # Project Fixtures
//!
//! A [`ProjectFixture`] is a disposable, isolated directory tree
//! pre-populated with the conventional descriptor files the external build
//! tool expects, plus a runner handle bound to its root. One fixture is
//! created per test case; its root is `base/name` where `base` defaults to
//! the resolved functional-test temp root. Fixtures are never reused across
//! tests — name uniqueness is the caller's responsibility.
//!
//! [`FixtureBuilder`] has two dialect variants. Both establish the same
//! boilerplate: the root project name, dependency-repository declarations
//! naming the public registry and the shared local dev repository (addressed
//! by a portable forward-slash relative path from the fixture root),
//! equivalent plugin-repository declarations, and a properties file with two
//! fixed stability/caching flags. A caller-supplied closure then customizes
//! the tree before the fixture is returned ready for use.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::files::FileBinding;
use crate::path::relative_to;
use crate::runner::{BuildTool, CliBuildTool, ToolRunner};
use crate::scope::DirectoryScope;

/// Properties-file boilerplate: caching on, first-run chatter off.
const DEFAULT_PROPERTIES: &str = "\
org.gradle.caching=true
org.gradle.welcome=never
";

/// Directory names excluded when seeding a fixture from a template project.
const TEMPLATE_STATE_DIRS: [&str; 3] = ["build", ".gradle", ".git"];

/// The two descriptor dialects the external tool accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Kotlin DSL: `settings.gradle.kts` / `build.gradle.kts`.
    Kotlin,
    /// Groovy DSL: `settings.gradle` / `build.gradle`.
    Groovy,
}

/// A materialized fixture: root scope, shared-repository relative path, and
/// a runner bound to the root.
pub struct ProjectFixture {
    name: String,
    scope: DirectoryScope,
    dev_repo_path: String,
    runner: ToolRunner,
}

impl ProjectFixture {
    /// The fixture name (the final segment of the root path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scope rooted at this fixture's directory.
    pub fn scope(&self) -> &DirectoryScope {
        &self.scope
    }

    /// The fixture's root directory.
    pub fn root(&self) -> &Path {
        self.scope.root()
    }

    /// The forward-slash relative path from the fixture root to the shared
    /// local dependency repository, as embedded in the descriptor files.
    pub fn dev_repo_path(&self) -> &str {
        &self.dev_repo_path
    }

    /// The runner bound to this fixture's root.
    pub fn runner(&self) -> &ToolRunner {
        &self.runner
    }

    /// Mutable access to the runner, e.g. to add environment overrides.
    pub fn runner_mut(&mut self) -> &mut ToolRunner {
        &mut self.runner
    }

    /// Write a file under the fixture root. See [`DirectoryScope::write`].
    pub fn write(&self, relative: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        self.scope.write(relative, content)
    }

    /// Read a file under the fixture root. See [`DirectoryScope::read`].
    pub fn read(&self, relative: impl AsRef<Path>) -> Result<String> {
        self.scope.read(relative)
    }

    /// Copy a reference project tree into the fixture root.
    ///
    /// Skips tool and VCS state directories (`build/`, `.gradle/`, `.git/`)
    /// so a previously-built template seeds a clean fixture. Existing files
    /// in the fixture are overwritten.
    pub fn import_tree(&self, template: &Path) -> Result<()> {
        let walker = WalkDir::new(template).into_iter().filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            !(entry.file_type().is_dir() && TEMPLATE_STATE_DIRS.contains(&name.as_ref()))
        });

        for entry in walker {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(template).map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidData, e.to_string())
            })?;
            let dest = self.scope.resolve(relative);
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &dest)?;
        }

        log::debug!(
            "imported template {} into {}",
            template.display(),
            self.root().display()
        );
        Ok(())
    }

    /// Copy the named reference example project into the fixture root.
    ///
    /// The project is looked up under the configured example-projects
    /// directory; the key must be present.
    pub fn import_example(&self, config: &Config, name: &str) -> Result<()> {
        self.import_tree(&config.example_projects_dir()?.join(name))
    }

    /// Copy the named reference integration project into the fixture root.
    pub fn import_integration(&self, config: &Config, name: &str) -> Result<()> {
        self.import_tree(&config.integration_projects_dir()?.join(name))
    }
}

impl std::fmt::Debug for ProjectFixture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectFixture")
            .field("name", &self.name)
            .field("root", &self.scope.root())
            .field("dev_repo_path", &self.dev_repo_path)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ProjectFixture`] values.
pub struct FixtureBuilder<'a> {
    config: &'a Config,
    name: String,
    dialect: Dialect,
    base: Option<PathBuf>,
    tool: Option<Box<dyn BuildTool>>,
}

impl<'a> FixtureBuilder<'a> {
    /// A fixture using Kotlin-dialect descriptors.
    pub fn kotlin(config: &'a Config, name: impl Into<String>) -> Self {
        Self::with_dialect(config, name, Dialect::Kotlin)
    }

    /// A fixture using Groovy-dialect descriptors.
    pub fn groovy(config: &'a Config, name: impl Into<String>) -> Self {
        Self::with_dialect(config, name, Dialect::Groovy)
    }

    /// A fixture with an explicit dialect.
    pub fn with_dialect(config: &'a Config, name: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            config,
            name: name.into(),
            dialect,
            base: None,
            tool: None,
        }
    }

    /// Override the base directory (default: the functional-test temp root).
    #[must_use]
    pub fn base_dir(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Override the build tool bound to the fixture's runner (default:
    /// `gradle` from the search path).
    #[must_use]
    pub fn tool(mut self, tool: Box<dyn BuildTool>) -> Self {
        self.tool = Some(tool);
        self
    }

    /// Materialize the fixture: write the descriptor boilerplate, then hand
    /// the fixture to `configure` for arbitrary further customization.
    pub fn build(
        self,
        configure: impl FnOnce(&mut ProjectFixture) -> Result<()>,
    ) -> Result<ProjectFixture> {
        let base = match self.base {
            Some(base) => base,
            None => self.config.functional_test_root()?,
        };
        let root = base.join(&self.name);
        if root.exists() {
            log::warn!("fixture root {} already exists; overwriting", root.display());
        }
        let scope = DirectoryScope::new(&root);

        let dev_repo = self.config.dev_repo()?;
        let dev_repo_path = relative_to(&root, &dev_repo)?;

        let (settings, build_script) = match self.dialect {
            Dialect::Kotlin => (FileBinding::settings_kts(), FileBinding::build_script_kts()),
            Dialect::Groovy => (FileBinding::settings(), FileBinding::build_script()),
        };
        settings.write(&scope, &settings_boilerplate(self.dialect, &self.name, &dev_repo_path))?;
        build_script.write(&scope, &build_boilerplate(self.dialect, &dev_repo_path))?;
        FileBinding::gradle_properties().write(&scope, DEFAULT_PROPERTIES)?;

        let runner = ToolRunner::with_tool(
            &root,
            self.tool.unwrap_or_else(|| Box::new(CliBuildTool::gradle())),
        );

        let mut fixture = ProjectFixture {
            name: self.name,
            scope,
            dev_repo_path,
            runner,
        };
        configure(&mut fixture)?;

        log::info!("built fixture {} at {}", fixture.name, root.display());
        Ok(fixture)
    }
}

/// Settings-descriptor boilerplate: project name plus repository declarations
/// for both plugin and dependency resolution.
fn settings_boilerplate(dialect: Dialect, name: &str, dev_repo_path: &str) -> String {
    match dialect {
        Dialect::Kotlin => format!(
            r#"rootProject.name = "{name}"

pluginManagement {{
    repositories {{
        mavenCentral()
        gradlePluginPortal()
        maven(file("{dev_repo_path}"))
    }}
}}

dependencyResolutionManagement {{
    repositories {{
        mavenCentral()
        maven(file("{dev_repo_path}"))
    }}
}}
"#
        ),
        Dialect::Groovy => format!(
            r#"rootProject.name = '{name}'

pluginManagement {{
    repositories {{
        mavenCentral()
        gradlePluginPortal()
        maven {{ url = uri('{dev_repo_path}') }}
    }}
}}

dependencyResolutionManagement {{
    repositories {{
        mavenCentral()
        maven {{ url = uri('{dev_repo_path}') }}
    }}
}}
"#
        ),
    }
}

/// Build-descriptor boilerplate: a repository block mirroring the settings
/// declarations, ready for the caller's closure to extend or replace.
fn build_boilerplate(dialect: Dialect, dev_repo_path: &str) -> String {
    match dialect {
        Dialect::Kotlin => format!(
            r#"repositories {{
    mavenCentral()
    maven(file("{dev_repo_path}"))
}}
"#
        ),
        Dialect::Groovy => format!(
            r#"repositories {{
    mavenCentral()
    maven {{ url = uri('{dev_repo_path}') }}
}}
"#
        ),
    }
}
