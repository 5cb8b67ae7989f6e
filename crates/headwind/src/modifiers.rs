//! The closed vocabulary of variant prefixes.
//!
//! Families are listed in canonical priority order and concatenated into
//! [`MODIFIERS`], which doubles as the default variant order.

use std::collections::HashMap;
use std::sync::LazyLock;

/// State pseudo-classes such as `hover:` and `disabled:`.
pub const PSEUDO_CLASSES: &[&str] = &[
    "hover",
    "focus",
    "focus-within",
    "focus-visible",
    "active",
    "visited",
    "target",
    "first",
    "last",
    "only",
    "odd",
    "even",
    "first-of-type",
    "last-of-type",
    "only-of-type",
    "empty",
    "disabled",
    "checked",
    "indeterminate",
    "default",
    "required",
    "valid",
    "invalid",
    "in-range",
    "out-of-range",
    "placeholder-shown",
    "autofill",
    "read-only",
];

/// Pseudo-elements such as `before:` and `placeholder:`.
pub const PSEUDO_ELEMENTS: &[&str] = &[
    "before",
    "after",
    "placeholder",
    "file",
    "marker",
    "selection",
    "first-line",
    "first-letter",
];

/// Responsive breakpoints, smallest first.
pub const RESPONSIVE_BREAKPOINTS: &[&str] = &["sm", "md", "lg", "xl", "2xl"];

/// Media-query variants.
pub const MEDIA_QUERIES: &[&str] = &[
    "dark",
    "motion-reduce",
    "motion-safe",
    "portrait",
    "landscape",
    "print",
];

/// Direction and open-state variants.
pub const OTHER_MODIFIERS: &[&str] = &["ltr", "rtl", "open"];

/// A family of variant prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierFamily {
    /// `hover`, `focus`, `disabled`, …
    PseudoClass,
    /// `before`, `after`, `placeholder`, …
    PseudoElement,
    /// `sm`, `md`, `lg`, …
    Breakpoint,
    /// `dark`, `print`, `motion-safe`, …
    MediaQuery,
    /// `ltr`, `rtl`, `open`.
    Other,
}

impl ModifierFamily {
    /// Every family in canonical order.
    pub const ALL: [Self; 5] = [
        Self::PseudoClass,
        Self::PseudoElement,
        Self::Breakpoint,
        Self::MediaQuery,
        Self::Other,
    ];

    /// The modifiers belonging to this family, in priority order.
    #[must_use]
    pub const fn members(self) -> &'static [&'static str] {
        match self {
            Self::PseudoClass => PSEUDO_CLASSES,
            Self::PseudoElement => PSEUDO_ELEMENTS,
            Self::Breakpoint => RESPONSIVE_BREAKPOINTS,
            Self::MediaQuery => MEDIA_QUERIES,
            Self::Other => OTHER_MODIFIERS,
        }
    }
}

/// Every known modifier in canonical priority order.
pub static MODIFIERS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    ModifierFamily::ALL
        .iter()
        .flat_map(|family| family.members().iter().copied())
        .collect()
});

static MODIFIER_RANKS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    MODIFIERS
        .iter()
        .enumerate()
        .map(|(rank, name)| (*name, rank))
        .collect()
});

/// Whether `name` is a known variant prefix.
///
/// # Examples
/// ```
/// use headwind::modifiers::is_modifier;
/// assert!(is_modifier("hover"));
/// assert!(is_modifier("2xl"));
/// assert!(!is_modifier("group-hover"));
/// ```
#[must_use]
pub fn is_modifier(name: &str) -> bool {
    MODIFIER_RANKS.contains_key(name)
}

/// Position of `name` in [`MODIFIERS`], if it is a known modifier.
///
/// # Examples
/// ```
/// use headwind::modifiers::canonical_rank;
/// assert_eq!(canonical_rank("hover"), Some(0));
/// assert_eq!(canonical_rank("group-hover"), None);
/// ```
#[must_use]
pub fn canonical_rank(name: &str) -> Option<usize> {
    MODIFIER_RANKS.get(name).copied()
}

/// The family `name` belongs to, if it is a known modifier.
#[must_use]
pub fn family_of(name: &str) -> Option<ModifierFamily> {
    ModifierFamily::ALL
        .into_iter()
        .find(|family| family.members().iter().any(|m| *m == name))
}

/// The default variant order as owned strings.
#[must_use]
pub fn default_variant_order() -> Vec<String> {
    MODIFIERS.iter().map(|m| (*m).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn modifiers_follow_family_order() {
        assert_eq!(MODIFIERS.first(), Some(&"hover"));
        assert_eq!(MODIFIERS.last(), Some(&"open"));
        let total: usize = ModifierFamily::ALL.iter().map(|f| f.members().len()).sum();
        assert_eq!(MODIFIERS.len(), total);
    }

    #[test]
    fn modifiers_are_unique() {
        assert_eq!(MODIFIER_RANKS.len(), MODIFIERS.len());
        for (rank, name) in MODIFIERS.iter().enumerate() {
            assert_eq!(canonical_rank(name), Some(rank));
        }
    }

    #[test]
    fn breakpoints_precede_media_queries() {
        let position = |name| MODIFIERS.iter().position(|m| *m == name);
        assert!(position("2xl") < position("dark"));
        assert!(position("hover") < position("sm"));
    }

    #[rstest]
    #[case("focus-visible", Some(ModifierFamily::PseudoClass))]
    #[case("first-letter", Some(ModifierFamily::PseudoElement))]
    #[case("lg", Some(ModifierFamily::Breakpoint))]
    #[case("motion-safe", Some(ModifierFamily::MediaQuery))]
    #[case("rtl", Some(ModifierFamily::Other))]
    #[case("peer-hover", None)]
    fn classifies_families(#[case] name: &str, #[case] expected: Option<ModifierFamily>) {
        assert_eq!(family_of(name), expected);
        assert_eq!(is_modifier(name), expected.is_some());
    }
}
