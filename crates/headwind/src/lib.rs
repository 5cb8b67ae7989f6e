//! Canonical ordering of utility class strings.
//!
//! `headwind` finds class-attribute-like strings in source text and rewrites
//! each one with its tokens in a canonical order: known classes first, ranked
//! by the configured class order; then classes behind known variants such as
//! `hover:` or `lg:`, grouped by variant; then everything else.
//!
//! The crate is an editor-agnostic text transform. Given a document and its
//! language identifier it produces a list of [`Edit`]s; applying them is up to
//! the host.
//!
//! # Example
//!
//! ```
//! use headwind::{Settings, apply_edits, transform};
//!
//! let settings = Settings::default();
//! let document = r#"<div class="p-4 flex container"></div>"#;
//! let edits = transform(document, "html", &settings).unwrap();
//! assert_eq!(apply_edits(document, &edits), r#"<div class="container flex p-4"></div>"#);
//! ```

pub mod defaults;
pub mod modifiers;
pub mod options;
pub mod order;
pub mod position;
pub mod settings;
pub mod sort;
pub mod token;
pub mod transform;

pub use headwind_patterns::{LangConfig, Matcher, PatternError, build_matchers};
pub use options::FormatOptions;
pub use order::OrderIndex;
pub use position::{LineIndex, Position};
pub use settings::{Settings, SettingsError};
pub use sort::{Sorter, sort_class_string, sort_tokens};
pub use token::ClassToken;
pub use transform::{Edit, Transformer, apply_edits, transform};
