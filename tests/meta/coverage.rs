//! Checks that the unit tests mirror the src/ layout

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    /// Files that only declare modules or start a crate
    fn is_root_file(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("main.rs" | "lib.rs" | "mod.rs")
        )
    }

    /// Every `.rs` file below `dir`, relative to it
    fn rust_files(dir: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            for entry in fs::read_dir(&current)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(dir)
                        .map_err(io::Error::other)?;
                    found.insert(relative.to_path_buf());
                }
            }
        }

        Ok(found)
    }

    fn mirrored_files(dir: &str) -> BTreeSet<PathBuf> {
        let root = Path::new(dir);
        let files = rust_files(root).expect("source and unit test trees are readable");
        files.into_iter().filter(|path| !is_root_file(path)).collect()
    }

    fn listing(paths: &[&PathBuf]) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests that every source file has a unit test file at the same path
    // Verified by adding an untested source file
    #[test]
    fn test_every_source_file_has_unit_tests() {
        let sources = mirrored_files(SRC);
        let tests = mirrored_files(UNIT);

        let untested: Vec<_> = sources.difference(&tests).collect();

        assert!(
            untested.is_empty(),
            "Source files without tests/unit counterparts:\n{}",
            listing(&untested)
        );
    }

    // Tests that no unit test file outlives its source file
    // Verified by deleting a source file
    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let sources = mirrored_files(SRC);
        let tests = mirrored_files(UNIT);

        let orphans: Vec<_> = tests.difference(&sources).collect();

        assert!(
            orphans.is_empty(),
            "Unit test files without src counterparts:\n{}",
            listing(&orphans)
        );
    }

    // Tests that no test file is empty of test functions
    // Verified by removing every test from one file
    #[test]
    fn test_every_test_file_has_tests() {
        let root = Path::new("tests");
        let files = rust_files(root).expect("tests tree is readable");

        let empty: Vec<_> = files
            .iter()
            .filter(|path| !is_root_file(path))
            .filter(|path| {
                fs::read_to_string(root.join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            listing(&empty)
        );
    }

    // Tests that every unit test file is compiled into the unit test crate
    // Verified by deleting a module declaration from a mod.rs
    #[test]
    fn test_every_unit_test_is_declared() {
        let root = Path::new(UNIT);
        let mut undeclared = Vec::new();

        for path in mirrored_files(UNIT) {
            let mut child = path.as_path();
            while let Some(parent) = child.parent() {
                let declaring = if parent.as_os_str().is_empty() {
                    root.join("main.rs")
                } else {
                    root.join(parent).join("mod.rs")
                };
                let name = child
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or_default();
                let declared = fs::read_to_string(&declaring)
                    .is_ok_and(|content| content.contains(&format!("mod {name};")));
                if !declared {
                    undeclared.push(format!("  - {} (in {})", path.display(), declaring.display()));
                    break;
                }
                child = parent;
            }
        }

        assert!(
            undeclared.is_empty(),
            "Unit test modules that are never declared:\n{}",
            undeclared.join("\n")
        );
    }
}
