//! Checks that the unit test tree under tests/unit mirrors the src tree

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    fn manifest_path(relative: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
    }

    // Crate roots and module declaration files carry no logic of their own
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut paths = BTreeSet::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_stripped| io::Error::other("path outside of base directory"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.extend(collect_relative_paths(&path, base)?);
                paths.insert(relative);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }

        Ok(paths)
    }

    fn src_and_unit_paths() -> (BTreeSet<String>, BTreeSet<String>) {
        let src_dir = manifest_path("src");
        let unit_dir = manifest_path("tests/unit");

        let src_paths = collect_relative_paths(&src_dir, &src_dir).unwrap_or_default();
        let unit_paths = collect_relative_paths(&unit_dir, &unit_dir).unwrap_or_default();
        assert!(!src_paths.is_empty(), "src directory should not be empty");

        (src_paths, unit_paths)
    }

    // Tests every src module has a unit test file at the same relative path
    // Verified by deleting tests/unit/options.rs
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let (src_paths, unit_paths) = src_and_unit_paths();

        let missing: Vec<_> = src_paths
            .iter()
            .filter(|path| !is_exempt(path) && !unit_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives the module it covers
    // Verified by adding tests/unit/render/palette.rs
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let (src_paths, unit_paths) = src_and_unit_paths();

        let orphaned: Vec<_> = unit_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .map(|path| format!("  - tests/unit/{path}"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a src counterpart:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every non-module test file declares at least one test
    // Verified by emptying tests/unit/io/progress.rs
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = manifest_path("tests");
        let files = collect_relative_paths(&tests_dir, &tests_dir).unwrap_or_default();

        let without_tests: Vec<_> = files
            .iter()
            .filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(tests_dir.join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            without_tests.is_empty(),
            "Test files without any #[test] function:\n{}",
            without_tests.join("\n")
        );
    }
}
