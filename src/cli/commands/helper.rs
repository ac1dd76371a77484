use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use glob::Pattern;
use rayon::prelude::*;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::core::PhraseDocument;

/// Load and validate the config for the current directory.
pub fn current_config() -> Result<Config> {
    let loaded = load_config(&env::current_dir()?)?;
    debug!(from_file = loaded.from_file, "loaded config");
    Ok(loaded.config)
}

/// Expand inputs into document paths.
///
/// Files are taken as given. Directories are walked for `*.json` files in
/// file-name order, skipping anything matching `ignores` and the config file.
pub fn collect_document_paths(inputs: &[PathBuf], ignores: &[Pattern]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        if input.is_file() {
            paths.push(input.clone());
            continue;
        }
        if !input.is_dir() {
            bail!("Path '{}' does not exist.", input.display());
        }

        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || !is_document_file(path) {
                continue;
            }
            let path_str = path.to_string_lossy();
            if ignores.iter().any(|pattern| pattern.matches(&path_str)) {
                debug!(path = %path_str, "ignored");
                continue;
            }
            paths.push(path.to_path_buf());
        }
    }

    Ok(paths)
}

fn is_document_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
        && path.file_name().and_then(|n| n.to_str()) != Some(CONFIG_FILE_NAME)
}

/// Parse documents in parallel; results keep the order of `paths`.
pub fn load_documents(paths: &[PathBuf]) -> Result<Vec<(PathBuf, PhraseDocument)>> {
    paths
        .par_iter()
        .map(|path| PhraseDocument::load(path).map(|document| (path.clone(), document)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    const DOCUMENT: &str = r#"{"k": {"class": "StringArray", "values": ["a"]}}"#;

    #[test]
    fn test_collect_walks_directories_in_name_order() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("values-de")).unwrap();
        fs::write(dir.path().join("values-de/b.json"), DOCUMENT).unwrap();
        fs::write(dir.path().join("a.json"), DOCUMENT).unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();

        let paths = collect_document_paths(&[dir.path().to_path_buf()], &[]).unwrap();
        assert_eq!(
            paths,
            vec![dir.path().join("a.json"), dir.path().join("values-de/b.json")]
        );
    }

    #[test]
    fn test_collect_skips_ignored() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("drafts/x.json"), DOCUMENT).unwrap();
        fs::write(dir.path().join("en.json"), DOCUMENT).unwrap();

        let ignores = vec![Pattern::new("**/drafts/**").unwrap()];
        let paths = collect_document_paths(&[dir.path().to_path_buf()], &ignores).unwrap();
        assert_eq!(paths, vec![dir.path().join("en.json")]);
    }

    #[test]
    fn test_collect_missing_path() {
        let dir = tempdir().unwrap();
        let err = collect_document_paths(&[dir.path().join("nope")], &[]).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_load_documents_keeps_order() {
        let dir = tempdir().unwrap();
        let paths: Vec<PathBuf> = (0..8)
            .map(|i| {
                let path = dir.path().join(format!("{i}.json"));
                fs::write(&path, DOCUMENT).unwrap();
                path
            })
            .collect();

        let loaded = load_documents(&paths).unwrap();
        let loaded_paths: Vec<PathBuf> = loaded.into_iter().map(|(path, _)| path).collect();
        assert_eq!(loaded_paths, paths);
    }

    #[test]
    fn test_load_documents_reports_bad_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{").unwrap();
        assert!(load_documents(&[path]).is_err());
    }
}
