//! Path manipulation utilities for buildbox
//!
//! Descriptor boilerplate embeds the location of the shared dependency
//! repository as a *relative* path from the fixture root, and the external
//! build tool consumes that path on whatever host the suite runs on. The
//! helpers here therefore always emit forward-slash separators, regardless of
//! the host convention.

use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Render a path with forward-slash separators.
///
/// Prefix and root components are preserved; only separators are normalized.
pub fn to_forward_slashes(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::RootDir => out.push('/'),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}

/// Compute the relative path from `base` (a directory) to `target`, rendered
/// with forward-slash separators.
///
/// The result may climb through `..` segments when `target` lies outside
/// `base` — the typical case for a repository shared across many fixture
/// roots. Returns `"."` when the paths are identical.
///
/// Fails with [`Error::Relativize`] when the two paths share no common root:
/// one absolute and one relative, different Windows drive prefixes, or a
/// `..` segment in the non-shared part of `base` (which cannot be inverted
/// without consulting the filesystem). No platform-dependent guessing is
/// attempted.
pub fn relative_to(base: &Path, target: &Path) -> Result<String> {
    let base_components: Vec<Component> = base.components().collect();
    let target_components: Vec<Component> = target.components().collect();

    let relativize_error = || Error::Relativize {
        base: base.to_path_buf(),
        target: target.to_path_buf(),
    };

    let anchored = |components: &[Component]| {
        matches!(
            components.first(),
            Some(Component::RootDir | Component::Prefix(_))
        )
    };
    if anchored(&base_components) != anchored(&target_components) {
        return Err(relativize_error());
    }
    if let (Some(Component::Prefix(a)), Some(Component::Prefix(b))) =
        (base_components.first(), target_components.first())
    {
        if a != b {
            return Err(relativize_error());
        }
    }

    let common = base_components
        .iter()
        .zip(target_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    for component in &base_components[common..] {
        match component {
            Component::Normal(_) => segments.push("..".to_string()),
            Component::CurDir => {}
            _ => return Err(relativize_error()),
        }
    }
    for component in &target_components[common..] {
        match component {
            Component::Normal(name) => segments.push(name.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => return Err(relativize_error()),
        }
    }

    if segments.is_empty() {
        Ok(".".to_string())
    } else {
        Ok(segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    #[test]
    fn test_sibling_directory() {
        assert_eq!(
            relative_to(Path::new("/tmp/fixtures/proj1"), Path::new("/tmp/dev-repo")).unwrap(),
            "../../dev-repo"
        );
    }

    #[test]
    fn test_descendant() {
        assert_eq!(
            relative_to(Path::new("/tmp/fixtures"), Path::new("/tmp/fixtures/proj1/libs")).unwrap(),
            "proj1/libs"
        );
    }

    #[test]
    fn test_identical_paths() {
        assert_eq!(
            relative_to(Path::new("/tmp/fixtures"), Path::new("/tmp/fixtures")).unwrap(),
            "."
        );
    }

    #[test]
    fn test_ancestor() {
        assert_eq!(
            relative_to(Path::new("/tmp/fixtures/proj1"), Path::new("/tmp")).unwrap(),
            "../.."
        );
    }

    #[test]
    fn test_mixed_anchoring_fails() {
        let err = relative_to(Path::new("fixtures/proj1"), Path::new("/tmp/dev-repo")).unwrap_err();
        assert!(matches!(err, Error::Relativize { .. }));
    }

    #[test]
    fn test_result_resolves_back_to_target() {
        let base = Path::new("/srv/ci/tmp/functional-tests/proj1");
        let target = Path::new("/srv/ci/dev-repo");
        let relative = relative_to(base, target).unwrap();

        let mut resolved = base.to_path_buf();
        for segment in relative.split('/') {
            if segment == ".." {
                resolved.pop();
            } else {
                resolved.push(segment);
            }
        }
        assert_eq!(resolved, PathBuf::from("/srv/ci/dev-repo"));
    }

    #[test]
    fn test_to_forward_slashes_relative() {
        assert_eq!(
            to_forward_slashes(&Path::new("a").join("b").join("c.txt")),
            "a/b/c.txt"
        );
    }

    #[test]
    fn test_to_forward_slashes_absolute() {
        #[cfg(unix)]
        assert_eq!(to_forward_slashes(Path::new("/tmp/a/b")), "/tmp/a/b");
    }
}
