//! User-facing settings, read from JSON.
//!
//! Keys follow the editor-extension naming (`classRegex`,
//! `defaultSortOrder`, …). Every key is optional and falls back to the
//! built-in default. `classRegex` entries are merged over the defaults per
//! language, so overriding one language keeps the others.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use headwind_patterns::LangConfig;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::defaults::{FALLBACK_LANGUAGE, default_class_regex, default_sort_order};
use crate::modifiers::default_variant_order;

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The settings were not valid JSON or had an unexpected shape.
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Formatting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Extraction patterns keyed by language identifier.
    #[serde(deserialize_with = "merge_class_regex")]
    pub class_regex: BTreeMap<String, LangConfig>,
    /// Canonical class order.
    pub default_sort_order: Vec<String>,
    /// Canonical variant order.
    pub variant_order: Vec<String>,
    /// Drop repeated tokens.
    pub remove_duplicates: bool,
    /// Put unranked classes first.
    pub prepend_custom_classes: bool,
    /// Prefix configured for every utility class.
    pub custom_tailwind_prefix: String,
    /// Whether hosts should sort on save.
    pub run_on_save: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            class_regex: default_class_regex(),
            default_sort_order: default_sort_order(),
            variant_order: default_variant_order(),
            remove_duplicates: true,
            prepend_custom_classes: false,
            custom_tailwind_prefix: String::new(),
            run_on_save: true,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document.
    ///
    /// # Errors
    /// Returns [`SettingsError::Json`] when the text is not a valid settings
    /// object.
    ///
    /// # Examples
    /// ```
    /// use headwind::Settings;
    /// let settings = Settings::from_json_str(r#"{ "removeDuplicates": false }"#).unwrap();
    /// assert!(!settings.remove_duplicates);
    /// assert!(settings.class_regex.contains_key("html"));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file.
    ///
    /// # Errors
    /// Returns [`SettingsError::Io`] when the file cannot be read and
    /// [`SettingsError::Json`] when its content is invalid.
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// The extraction configuration for `language_id`, falling back to the
    /// default language when it has no entry.
    #[must_use]
    pub fn lang_config(&self, language_id: &str) -> Option<&LangConfig> {
        self.class_regex.get(language_id).or_else(|| {
            log::debug!("no classRegex entry for `{language_id}`, using `{FALLBACK_LANGUAGE}`");
            self.class_regex.get(FALLBACK_LANGUAGE)
        })
    }
}

fn merge_class_regex<'de, D>(deserializer: D) -> Result<BTreeMap<String, LangConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<String, LangConfig>::deserialize(deserializer)?;
    let mut merged = default_class_regex();
    merged.extend(overrides);
    Ok(merged)
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require descriptive panic messages"
)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_object_yields_defaults() {
        let settings = Settings::from_json_str("{}").expect("empty settings parse");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn class_regex_overrides_merge_per_language() {
        let json = r#"{ "classRegex": { "html": "x(y)", "rust": null } }"#;
        let settings = Settings::from_json_str(json).expect("settings parse");
        assert_eq!(settings.class_regex.get("html"), Some(&LangConfig::from("x(y)")));
        assert_eq!(settings.class_regex.get("rust"), Some(&LangConfig::Empty));
        assert!(settings.class_regex.contains_key("typescriptreact"));
    }

    #[test]
    fn reads_flags_and_orders() {
        let settings = Settings::from_json_str(
            r#"{
                "defaultSortOrder": ["flex", "p-4"],
                "variantOrder": ["md", "hover"],
                "prependCustomClasses": true,
                "customTailwindPrefix": "tw-",
                "runOnSave": false
            }"#,
        )
        .expect("settings parse");
        assert_eq!(settings.default_sort_order, ["flex", "p-4"]);
        assert_eq!(settings.variant_order, ["md", "hover"]);
        assert!(settings.prepend_custom_classes);
        assert_eq!(settings.custom_tailwind_prefix, "tw-");
        assert!(!settings.run_on_save);
    }

    #[test]
    fn rejects_malformed_class_regex() {
        let err = Settings::from_json_str(r#"{ "classRegex": { "html": 3 } }"#)
            .expect_err("numbers are not configurations");
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn unknown_languages_fall_back_to_html() {
        let settings = Settings::default();
        assert_eq!(
            settings.lang_config("no-such-language"),
            settings.class_regex.get(FALLBACK_LANGUAGE)
        );
    }

    #[test]
    fn loads_settings_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(br#"{ "removeDuplicates": false }"#)
            .expect("write settings");
        let settings = Settings::from_path(file.path()).expect("settings load");
        assert!(!settings.remove_duplicates);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Settings::from_path(Path::new("/definitely/not/here.json"))
            .expect_err("missing file must fail");
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
