//! Built-in class order and per-language extraction patterns.

mod languages;

use std::sync::LazyLock;

pub use languages::{FALLBACK_LANGUAGE, default_class_regex};

static CLASS_ORDER_SOURCE: &str = include_str!("class_order.txt");

/// The built-in class order. Blank lines and `#` section headings in the
/// bundled list are skipped.
pub static CLASS_ORDER: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    CLASS_ORDER_SOURCE
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
});

/// The built-in class order as owned strings.
#[must_use]
pub fn default_sort_order() -> Vec<String> {
    CLASS_ORDER.iter().map(|class| (*class).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn class_order_has_no_duplicates() {
        let unique: HashSet<_> = CLASS_ORDER.iter().collect();
        assert_eq!(unique.len(), CLASS_ORDER.len());
    }

    #[test]
    fn class_order_skips_headings() {
        assert_eq!(CLASS_ORDER.first(), Some(&"container"));
        assert!(CLASS_ORDER.iter().all(|class| !class.starts_with('#')));
    }

    #[test]
    fn display_precedes_position_precedes_spacing() {
        let position = |name| CLASS_ORDER.iter().position(|c| *c == name);
        assert!(position("inline-block") < position("inline"));
        assert!(position("flex") < position("absolute"));
        assert!(position("relative") < position("px-0.5"));
        assert!(position("pt-10") < position("mt-4"));
        assert!(position("mt-4") < position("mb-0.5"));
    }
}
