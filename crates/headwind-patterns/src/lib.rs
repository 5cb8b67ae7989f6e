//! Class-string extraction patterns for headwind.
//!
//! A language's `classRegex` setting is turned into one or more [`Matcher`]s.
//! Each matcher holds a chain of compiled regular expressions; every stage
//! narrows the capture produced by the previous one until only the class
//! string itself remains. Extraction reports each of those leaf captures
//! together with its byte offset in the original document.

mod capture;
mod config;
mod errors;
mod extract;
mod matcher;

pub use capture::first_capture;
pub use config::{LangConfig, MatcherSpec, RegexSpec};
pub use errors::PatternError;
pub use extract::{TextMatch, extract, for_each_match};
pub use matcher::{DEFAULT_REPLACEMENT, Matcher, build_matchers};
