//! Checks that every source module has a unit test file and vice versa

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Entry points and module organization files don't require separate test files
    fn is_organizational(relative_path: &str) -> bool {
        relative_path == "main.rs" || relative_path == "lib.rs" || relative_path.ends_with("mod.rs")
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src_paths = collect_relative_paths(Path::new("src"), Path::new("src"))
            .unwrap_or_else(|error| panic!("Failed to read src directory: {error}"));
        let test_paths = collect_relative_paths(Path::new("tests/unit"), Path::new("tests/unit"))
            .unwrap_or_else(|error| panic!("Failed to read tests/unit directory: {error}"));

        let mut missing_tests: Vec<&String> = src_paths
            .iter()
            .filter(|src_path| !is_organizational(src_path) && !test_paths.contains(*src_path))
            .collect();
        missing_tests.sort();

        assert!(
            missing_tests.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing_tests
                .iter()
                .map(|src_path| format!("  - src/{src_path} -> tests/unit/{src_path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = collect_relative_paths(Path::new("src"), Path::new("src"))
            .unwrap_or_else(|error| panic!("Failed to read src directory: {error}"));
        let test_paths = collect_relative_paths(Path::new("tests/unit"), Path::new("tests/unit"))
            .unwrap_or_else(|error| panic!("Failed to read tests/unit directory: {error}"));

        let mut orphaned_tests: Vec<&String> = test_paths
            .iter()
            .filter(|test_path| !is_organizational(test_path) && !src_paths.contains(*test_path))
            .collect();
        orphaned_tests.sort();

        assert!(
            orphaned_tests.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned_tests
                .iter()
                .map(|test_path| format!("  - tests/unit/{test_path} -> src/{test_path} (missing)"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let mut files_without_tests = Vec::new();
        check_test_files(Path::new("tests"), &mut files_without_tests)
            .unwrap_or_else(|error| panic!("Failed to scan tests directory: {error}"));
        files_without_tests.sort();

        assert!(
            files_without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            files_without_tests.join("\n")
        );
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<HashSet<String>, io::Error> {
        let mut paths = HashSet::new();

        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();

            let relative_path = path
                .strip_prefix(base)
                .map_err(|_original_error| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.extend(collect_relative_paths(&path, base)?);
                paths.insert(relative_path);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative_path);
            }
        }

        Ok(paths)
    }

    fn check_test_files(dir: &Path, files_without_tests: &mut Vec<String>) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();

            if path.is_dir() {
                check_test_files(&path, files_without_tests)?;
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }

            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default();
            if file_name == "main.rs" || file_name == "mod.rs" {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                files_without_tests.push(format!("  - {}", path.display()));
            }
        }

        Ok(())
    }
}
