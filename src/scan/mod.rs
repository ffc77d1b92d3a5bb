//! Project discovery and file inventory traversal.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::domain::ScanTarget;

pub mod tree;
pub mod walker;

pub use walker::FileInventoryWalker;

/// Build one `ScanTarget` per top-level subdirectory of `input_dir`,
/// sorted by name. When the input directory contains no subdirectories it
/// is treated as a single project itself.
pub fn discover_projects(
    input_dir: &Path,
    output_dir: &Path,
    suffix: &str,
) -> Result<Vec<ScanTarget>> {
    let input_dir = input_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve input directory: {}", input_dir.display()))?;

    let mut roots: Vec<_> = fs::read_dir(&input_dir)
        .with_context(|| format!("Failed to list input directory: {}", input_dir.display()))?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            path.is_dir().then_some(path)
        })
        .collect();
    roots.sort();

    if roots.is_empty() {
        roots.push(input_dir.clone());
    }

    Ok(roots
        .into_iter()
        .map(|root| {
            let name = root
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("project")
                .to_string();
            let output_path = output_dir.join(format!("{}{}", name, suffix));
            ScanTarget { root, name, output_path }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn each_subdirectory_becomes_a_project() {
        let tmp = TempDir::new().expect("tmp");
        let input = tmp.path().join("input");
        fs::create_dir_all(input.join("beta")).expect("mkdir beta");
        fs::create_dir_all(input.join("alpha")).expect("mkdir alpha");
        fs::write(input.join("stray.txt"), "not a project").expect("write stray");

        let targets =
            discover_projects(&input, Path::new("/out"), "_project_code.txt").expect("discover");

        let names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
        assert_eq!(
            targets[0].output_path,
            Path::new("/out").join("alpha_project_code.txt")
        );
    }

    #[test]
    fn input_dir_without_subdirs_is_one_project() {
        let tmp = TempDir::new().expect("tmp");
        let input = tmp.path().join("solo");
        fs::create_dir_all(&input).expect("mkdir");
        fs::write(input.join("main.py"), "pass").expect("write");

        let targets = discover_projects(&input, Path::new("/out"), ".txt").expect("discover");
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].name, "solo");
        assert_eq!(targets[0].output_path, Path::new("/out").join("solo.txt"));
    }

    #[test]
    fn missing_input_dir_is_an_error() {
        assert!(discover_projects(Path::new("/no/such/dir"), Path::new("/out"), ".txt").is_err());
    }
}
