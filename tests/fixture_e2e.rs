//! End-to-end scenario tests for the fixture library
//!
//! These exercise the whole flow a functional test would: resolve
//! configuration, build a fixture, customize its descriptor files, and hand
//! the tree to the runner — asserting that a failing tool run is reported as
//! data rather than as an error.

use buildbox::config::{Config, MapSource, DEV_REPO, TMP_ROOT};
use buildbox::files::FileBinding;
use buildbox::fixture::FixtureBuilder;
use buildbox::runner::{CliBuildTool, Outcome};
use tempfile::TempDir;

fn test_config(temp: &TempDir) -> Config {
    Config::new(
        MapSource::new()
            .with(TMP_ROOT, temp.path().display().to_string())
            .with(DEV_REPO, temp.path().join("dev-repo").display().to_string()),
    )
}

#[test]
fn descriptor_set_then_get_round_trips_exactly() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);

    let fixture = FixtureBuilder::kotlin(&config, "proj1").build(|_| Ok(())).unwrap();

    let build_script = FileBinding::build_script_kts();
    let content = "plugins { id(\"org.example.docs\") version \"1.0\" }\n";
    build_script.write(fixture.scope(), content).unwrap();
    assert_eq!(build_script.read(fixture.scope()).unwrap(), content);
}

#[cfg(unix)]
#[test]
fn failing_tool_run_is_reported_as_data() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);

    let fixture = FixtureBuilder::kotlin(&config, "proj1")
        .tool(Box::new(CliBuildTool::new("sh")))
        .build(|_| Ok(()))
        .unwrap();

    // The stand-in tool prints a task line and fails, like a real build.
    let result = fixture
        .runner()
        .run(["-c", "echo '> Task :check FAILED'; echo 'went wrong' >&2; exit 1"])
        .unwrap();

    assert_eq!(result.exit_code, 1);
    assert!(!result.success());
    assert!(result.stdout.contains("> Task :check"));
    assert!(result.stderr.contains("went wrong"));
    assert_eq!(result.task(":check").unwrap().outcome, Outcome::Failed);
}

#[cfg(unix)]
#[test]
fn runner_operates_inside_the_fixture_root() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);

    let fixture = FixtureBuilder::kotlin(&config, "proj2")
        .tool(Box::new(CliBuildTool::new("sh")))
        .build(|f| {
            f.write("marker.txt", "here")?;
            Ok(())
        })
        .unwrap();

    let result = fixture.runner().run(["-c", "cat marker.txt"]).unwrap();
    assert!(result.success());
    assert_eq!(result.stdout, "here");
}

#[test]
fn fixtures_with_distinct_names_are_isolated() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);

    let first = FixtureBuilder::kotlin(&config, "proj1")
        .build(|f| {
            f.write("data.txt", "first")?;
            Ok(())
        })
        .unwrap();
    let second = FixtureBuilder::kotlin(&config, "proj2")
        .build(|f| {
            f.write("data.txt", "second")?;
            Ok(())
        })
        .unwrap();

    assert_ne!(first.root(), second.root());
    assert_eq!(first.read("data.txt").unwrap(), "first");
    assert_eq!(second.read("data.txt").unwrap(), "second");
}
