//! Locating source files and deriving their language identifiers.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::CliError;

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules", "target", "dist", "vendor"];

/// The editor language identifier for `path`, from its extension.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use headwind_cli::files::language_for_path;
/// assert_eq!(language_for_path(Path::new("src/App.tsx")), Some("typescriptreact"));
/// assert_eq!(language_for_path(Path::new("README.md")), None);
/// ```
#[must_use]
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension().and_then(OsStr::to_str)?.to_ascii_lowercase();
    let language = match extension.as_str() {
        "html" | "htm" => "html",
        "vue" => "vue",
        "svelte" => "svelte",
        "astro" => "astro",
        "php" => "php",
        "twig" => "twig",
        "erb" => "erb",
        "hbs" | "handlebars" => "handlebars",
        "css" => "css",
        "scss" => "scss",
        "sass" => "sass",
        "less" => "less",
        "pcss" | "postcss" => "postcss",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "typescriptreact",
        _ => return None,
    };
    Some(language)
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
}

/// Expand `paths` into the files to process.
///
/// Files named explicitly are always included. Directories are walked
/// recursively, keeping files with a known language and skipping hidden and
/// dependency directories. The result is sorted and free of duplicates.
///
/// # Errors
///
/// Returns [`CliError::Io`] when a named path does not exist.
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    for path in paths {
        let metadata = fs::metadata(path).map_err(|source| CliError::io(path, source))?;
        if !metadata.is_dir() {
            files.push(path.clone());
            continue;
        }
        let walker = WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_skipped(entry));
        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    if language_for_path(entry.path()).is_some() {
                        files.push(entry.into_path());
                    }
                }
                Ok(_) => {}
                Err(err) => tracing::warn!(error = %err, "skipping unreadable entry"),
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("index.html", Some("html"))]
    #[case("page.HTM", Some("html"))]
    #[case("styles/site.scss", Some("scss"))]
    #[case("App.jsx", Some("javascriptreact"))]
    #[case("main.ts", Some("typescript"))]
    #[case("Component.vue", Some("vue"))]
    #[case("Makefile", None)]
    #[case("notes.txt", None)]
    fn maps_extensions(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(language_for_path(Path::new(path)), expected);
    }

    #[test]
    fn walks_directories_for_known_languages() {
        let dir = tempfile::tempdir().expect("temp dir");
        let root = dir.path();
        fs::create_dir_all(root.join("src/components")).expect("create dirs");
        fs::create_dir_all(root.join("node_modules/pkg")).expect("create dirs");
        fs::create_dir_all(root.join(".cache")).expect("create dirs");
        for file in [
            "index.html",
            "notes.txt",
            "src/components/Button.tsx",
            "node_modules/pkg/index.js",
            ".cache/page.html",
        ] {
            fs::write(root.join(file), "").expect("write file");
        }

        let files = collect_files(&[root.to_path_buf()]).expect("walk succeeds");
        assert_eq!(
            files,
            [root.join("index.html"), root.join("src/components/Button.tsx")]
        );
    }

    #[test]
    fn explicit_files_are_kept_whatever_their_extension() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = dir.path().join("template.txt");
        fs::write(&file, "").expect("write file");
        let files = collect_files(&[file.clone(), file.clone()]).expect("file exists");
        assert_eq!(files, [file]);
    }

    #[test]
    fn missing_paths_are_errors() {
        let err = collect_files(&[PathBuf::from("/no/such/dir")]).expect_err("must fail");
        assert!(matches!(err, CliError::Io { .. }));
    }
}
