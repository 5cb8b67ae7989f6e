//! Sorting documents and files with one set of settings.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};

use headwind::defaults::FALLBACK_LANGUAGE;
use headwind::{Edit, LineIndex, Position, Settings, Transformer, apply_edits};

use crate::error::CliError;
use crate::files::language_for_path;

/// What to do with a file whose classes are out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Rewrite the file in place.
    Write,
    /// Leave the file untouched and report the unsorted spans.
    Check,
}

/// The result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// The processed file.
    pub path: PathBuf,
    /// Positions of class strings that were, or would be, rewritten.
    pub unsorted: Vec<Position>,
}

impl FileOutcome {
    /// Whether every class string was already in order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.unsorted.is_empty()
    }
}

/// Settings plus a cache of prepared transformers per language.
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    transformers: HashMap<String, Transformer>,
}

impl Session {
    /// Create a session using `settings`.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            transformers: HashMap::new(),
        }
    }

    /// Create a session from an optional JSON settings file.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Settings`] when the file cannot be loaded.
    pub fn load(config: Option<&Path>) -> Result<Self, CliError> {
        let settings = config
            .map(Settings::from_path)
            .transpose()?
            .unwrap_or_default();
        Ok(Self::new(settings))
    }

    fn transformer(&mut self, language: &str) -> Result<&Transformer, CliError> {
        match self.transformers.entry(language.to_owned()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(Transformer::new(&self.settings, language)?)),
        }
    }

    /// The edits that change `text`. Edits that would leave their class
    /// string as it is are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Pattern`] when the language's patterns do not
    /// compile.
    pub fn edits(&mut self, language: &str, text: &str) -> Result<Vec<Edit>, CliError> {
        let transformer = self.transformer(language)?;
        if transformer.is_empty() {
            tracing::debug!(language, "no class patterns for language");
            return Ok(Vec::new());
        }
        let edits = transformer.edits(text);
        Ok(edits.into_iter().filter(|edit| !edit.is_noop(text)).collect())
    }

    /// `text` with every class string sorted.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Pattern`] when the language's patterns do not
    /// compile.
    pub fn sort_text(&mut self, language: &str, text: &str) -> Result<String, CliError> {
        let edits = self.edits(language, text)?;
        Ok(apply_edits(text, &edits))
    }

    /// Sort or check one file. The language is `language` when given, else
    /// derived from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Io`] when the file cannot be read or written and
    /// [`CliError::Pattern`] when the language's patterns do not compile.
    pub fn process_file(
        &mut self,
        path: &Path,
        language: Option<&str>,
        mode: Mode,
    ) -> Result<FileOutcome, CliError> {
        let language = language
            .or_else(|| language_for_path(path))
            .unwrap_or(FALLBACK_LANGUAGE);
        let text = fs::read_to_string(path).map_err(|source| CliError::io(path, source))?;
        let edits = self.edits(language, &text)?;
        tracing::debug!(
            path = %path.display(),
            language,
            changes = edits.len(),
            "processed file"
        );

        let index = LineIndex::new(&text);
        let unsorted = edits.iter().map(|edit| index.position_at(edit.start)).collect();
        if mode == Mode::Write && !edits.is_empty() {
            fs::write(path, apply_edits(&text, &edits))
                .map_err(|source| CliError::io(path, source))?;
            tracing::info!(path = %path.display(), "sorted");
        }
        Ok(FileOutcome {
            path: path.to_path_buf(),
            unsorted,
        })
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn session() -> Session {
        Session::new(Settings::default())
    }

    #[rstest]
    fn sorts_text(mut session: Session) {
        let sorted = session
            .sort_text("html", r#"<a class="p-4 flex">"#)
            .expect("defaults compile");
        assert_eq!(sorted, r#"<a class="flex p-4">"#);
    }

    #[rstest]
    fn sorted_text_yields_no_edits(mut session: Session) {
        let edits = session
            .edits("html", r#"<a class="flex p-4">"#)
            .expect("defaults compile");
        assert!(edits.is_empty());
    }

    #[rstest]
    fn check_mode_reports_positions_without_writing(mut session: Session) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("index.html");
        let original = "<div>\n  <a class=\"p-4 flex\"></a>\n</div>\n";
        fs::write(&path, original).expect("write file");

        let outcome = session
            .process_file(&path, None, Mode::Check)
            .expect("file processed");
        assert_eq!(
            outcome.unsorted,
            [Position {
                line: 1,
                character: 12
            }]
        );
        assert_eq!(fs::read_to_string(&path).expect("read file"), original);
    }

    #[rstest]
    fn write_mode_rewrites_the_file(mut session: Session) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("Button.jsx");
        fs::write(&path, "<b className=\"p-4 flex\" />").expect("write file");

        let outcome = session
            .process_file(&path, None, Mode::Write)
            .expect("file processed");
        assert!(!outcome.is_sorted());
        assert_eq!(
            fs::read_to_string(&path).expect("read file"),
            "<b className=\"flex p-4\" />"
        );
    }

    #[rstest]
    fn language_override_wins(mut session: Session) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("styles.txt");
        fs::write(&path, ".a { @apply p-4 flex; }").expect("write file");

        let outcome = session
            .process_file(&path, Some("css"), Mode::Check)
            .expect("file processed");
        assert_eq!(outcome.unsorted.len(), 1);
    }

    #[test]
    fn load_without_config_uses_defaults() {
        let mut session = Session::load(None).expect("defaults load");
        let sorted = session
            .sort_text("css", ".a { @apply p-4 flex; }")
            .expect("defaults compile");
        assert_eq!(sorted, ".a { @apply flex p-4; }");
    }

    #[test]
    fn disabled_language_yields_no_edits() {
        let settings =
            Settings::from_json_str(r#"{"classRegex": {"html": null}}"#).expect("settings parse");
        let mut session = Session::new(settings);
        let edits = session
            .edits("html", r#"<a class="p-4 flex">"#)
            .expect("no patterns to compile");
        assert!(edits.is_empty());
    }

    #[rstest]
    fn sorted_file_reports_nothing(mut session: Session) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("index.html");
        fs::write(&path, r#"<a class="flex p-4">"#).expect("write file");

        let outcome = session
            .process_file(&path, None, Mode::Check)
            .expect("file processed");
        assert!(outcome.is_sorted());
    }
}
