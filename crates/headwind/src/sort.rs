//! The token sort engine.
//!
//! Tokens fall into three groups. Plain known classes are ranked by the
//! class order. Classes behind known variants are grouped by variant path,
//! following the variant order level by level, and ranked by class order
//! within a group. Everything else keeps its relative order and goes after
//! the known groups, or before them when unknown tokens are prepended.

use std::collections::HashSet;

use crate::modifiers::{canonical_rank, family_of, is_modifier};
use crate::options::FormatOptions;
use crate::order::OrderIndex;
use crate::token::ClassToken;

/// Where a token ends up after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Placement {
    Plain(usize),
    Variant(VariantKey),
    Unknown,
}

/// Ordering key for a variant-qualified token.
///
/// Paths compare level by level; a path that ends earlier sorts before one
/// that continues, and identical paths fall back to the base class rank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct VariantKey {
    path: Vec<usize>,
    class: usize,
}

/// Prepared order lists plus the sort flags of one invocation.
///
/// # Examples
/// ```
/// use headwind::{FormatOptions, Sorter};
/// let sorter = Sorter::new(["flex", "p-4"], ["hover", "md"], &FormatOptions::default());
/// assert_eq!(
///     sorter.sort(&["md:p-4", "custom", "hover:flex", "p-4", "flex"]),
///     ["flex", "p-4", "hover:flex", "md:p-4", "custom"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Sorter {
    classes: OrderIndex,
    variants: OrderIndex,
    remove_duplicates: bool,
    prepend_unknown: bool,
}

impl Sorter {
    /// Prepare a sorter. The custom prefix of `options` is applied to every
    /// class-order entry here, once.
    #[must_use]
    pub fn new<C, V, S, T>(class_order: C, variant_order: V, options: &FormatOptions) -> Self
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
        V: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let classes = OrderIndex::with_prefix(class_order, &options.custom_prefix);
        if classes.is_empty() {
            log::debug!("class order is empty; every token is unknown");
        }
        Self {
            classes,
            variants: OrderIndex::new(variant_order),
            remove_duplicates: options.remove_duplicates,
            prepend_unknown: options.prepend_unknown,
        }
    }

    /// Reorder `tokens`.
    #[must_use]
    pub fn sort<'t>(&self, tokens: &[&'t str]) -> Vec<&'t str> {
        let tokens = if self.remove_duplicates {
            dedup(tokens)
        } else {
            tokens.to_vec()
        };

        let mut plain = Vec::new();
        let mut qualified = Vec::new();
        let mut unknown = Vec::new();
        for token in tokens {
            match self.place(token) {
                Placement::Plain(rank) => plain.push((rank, token)),
                Placement::Variant(key) => qualified.push((key, token)),
                Placement::Unknown => unknown.push(token),
            }
        }

        plain.sort_by_key(|(rank, _)| *rank);
        qualified.sort_by(|(a, _), (b, _)| a.cmp(b));

        let known = plain
            .into_iter()
            .map(|(_, token)| token)
            .chain(qualified.into_iter().map(|(_, token)| token));
        if self.prepend_unknown {
            unknown.into_iter().chain(known).collect()
        } else {
            known.chain(unknown).collect()
        }
    }

    /// Split, reorder and rejoin one class string.
    #[must_use]
    pub fn sort_class_string(&self, class_string: &str, options: &FormatOptions) -> String {
        let tokens = options.split(class_string);
        self.sort(&tokens)
            .join(&options.replacement)
            .trim()
            .to_owned()
    }

    fn place(&self, token: &str) -> Placement {
        let parsed = ClassToken::parse(token);
        if !parsed.has_variants() {
            return self
                .classes
                .position(token)
                .map_or(Placement::Unknown, Placement::Plain);
        }
        let Some(class) = self.classes.position(parsed.base_class_name()) else {
            return Placement::Unknown;
        };
        if !parsed.variants().iter().all(|variant| is_modifier(variant)) {
            return Placement::Unknown;
        }
        if log::log_enabled!(log::Level::Trace) {
            let families: Vec<_> = parsed.variants().iter().map(|v| family_of(v)).collect();
            log::trace!("`{token}` grouped under {families:?}");
        }
        let path = parsed
            .variants()
            .iter()
            .map(|variant| self.variant_rank(variant))
            .collect();
        Placement::Variant(VariantKey { path, class })
    }

    /// Rank of a known modifier. Modifiers missing from the variant order
    /// follow every listed one, in their canonical order.
    fn variant_rank(&self, variant: &str) -> usize {
        self.variants.position(variant).unwrap_or_else(|| {
            self.variants.len() + canonical_rank(variant).unwrap_or_default()
        })
    }
}

fn dedup<'t>(tokens: &[&'t str]) -> Vec<&'t str> {
    let mut seen = HashSet::with_capacity(tokens.len());
    tokens
        .iter()
        .copied()
        .filter(|token| seen.insert(*token))
        .collect()
}

/// Reorder `tokens` against the given order lists.
///
/// With empty order lists every token is unknown and the result is the
/// input, deduplicated when requested.
///
/// # Examples
/// ```
/// use headwind::{FormatOptions, sort_tokens};
/// let sorted = sort_tokens(&["random", "container", "random"], &["container"], &["hover"],
///     &FormatOptions { remove_duplicates: false, ..FormatOptions::default() });
/// assert_eq!(sorted, ["container", "random", "random"]);
/// ```
#[must_use]
pub fn sort_tokens<S, T>(
    tokens: &[&str],
    class_order: &[S],
    variant_order: &[T],
    options: &FormatOptions,
) -> Vec<String>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    Sorter::new(class_order, variant_order, options)
        .sort(tokens)
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Split, reorder and rejoin a class string using `options`' separator and
/// replacement.
///
/// # Examples
/// ```
/// use headwind::{FormatOptions, sort_class_string};
/// let options = FormatOptions::default();
/// let sorted = sort_class_string("  p-4 flex\n", &["flex", "p-4"], &["hover"], &options);
/// assert_eq!(sorted, "flex p-4");
/// ```
#[must_use]
pub fn sort_class_string<S, T>(
    class_string: &str,
    class_order: &[S],
    variant_order: &[T],
    options: &FormatOptions,
) -> String
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    Sorter::new(class_order, variant_order, options).sort_class_string(class_string, options)
}

#[cfg(test)]
mod tests;
