//! Property-based tests for path manipulation functions.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use std::path::PathBuf;

    use proptest::prelude::*;

    use crate::path::{relative_to, to_forward_slashes};

    /// A single path segment: short, alphanumeric, never `.` or `..`.
    fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_-]{1,8}"
    }

    /// A vector of 0..6 path segments.
    fn segments() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(segment(), 0..6)
    }

    fn absolute_path(parts: &[String]) -> PathBuf {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    }

    /// Resolve a forward-slash relative path against a base directory by
    /// walking segments, the way the external tool would.
    fn resolve(base: &PathBuf, relative: &str) -> PathBuf {
        let mut resolved = base.clone();
        for part in relative.split('/') {
            match part {
                "." => {}
                ".." => {
                    resolved.pop();
                }
                other => resolved.push(other),
            }
        }
        resolved
    }

    proptest! {
        /// Property: relative_to output uses only forward slashes and the
        /// segments are either `..` or plain names.
        #[test]
        fn relative_to_emits_portable_segments(base in segments(), target in segments()) {
            let base = absolute_path(&base);
            let target = absolute_path(&target);
            let relative = relative_to(&base, &target).unwrap();

            prop_assert!(!relative.contains('\\'));
            for part in relative.split('/') {
                prop_assert!(
                    part == ".." || part == "." || !part.is_empty(),
                    "unexpected segment {:?} in {:?}",
                    part,
                    relative
                );
            }
        }

        /// Property: resolving the relative path from the base always lands
        /// back on the target (round-trip).
        #[test]
        fn relative_to_round_trips(base in segments(), target in segments()) {
            let base = absolute_path(&base);
            let target = absolute_path(&target);
            let relative = relative_to(&base, &target).unwrap();

            prop_assert_eq!(resolve(&base, &relative), target);
        }

        /// Property: a path relative to itself is always `.`.
        #[test]
        fn relative_to_self_is_dot(path in segments()) {
            let path = absolute_path(&path);
            prop_assert_eq!(relative_to(&path, &path).unwrap(), ".");
        }

        /// Property: relative_to is deterministic.
        #[test]
        fn relative_to_is_deterministic(base in segments(), target in segments()) {
            let base = absolute_path(&base);
            let target = absolute_path(&target);
            prop_assert_eq!(
                relative_to(&base, &target).unwrap(),
                relative_to(&base, &target).unwrap()
            );
        }

        /// Property: mixed anchoring (relative base, absolute target) always
        /// fails rather than guessing.
        #[test]
        fn relative_to_rejects_mixed_anchoring(base in prop::collection::vec(segment(), 1..6), target in segments()) {
            let mut relative_base = PathBuf::new();
            for part in &base {
                relative_base.push(part);
            }
            let target = absolute_path(&target);
            prop_assert!(relative_to(&relative_base, &target).is_err());
        }

        /// Property: to_forward_slashes of a segments-built relative path
        /// equals the segments joined with '/'.
        #[test]
        fn to_forward_slashes_joins_segments(parts in prop::collection::vec(segment(), 1..6)) {
            let mut path = PathBuf::new();
            for part in &parts {
                path.push(part);
            }
            prop_assert_eq!(to_forward_slashes(&path), parts.join("/"));
        }
    }
}
