//! Position lookup for order lists.

use std::collections::HashMap;

/// Priority lookup for an order list: priority is position in the list.
///
/// Names absent from the list are unranked. When a list repeats a name, its
/// first position wins.
///
/// # Examples
/// ```
/// use headwind::OrderIndex;
/// let order = OrderIndex::with_prefix(["flex", "p-4"], "tw-");
/// assert_eq!(order.position("tw-p-4"), Some(1));
/// assert_eq!(order.position("p-4"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderIndex {
    positions: HashMap<String, usize>,
    len: usize,
}

impl OrderIndex {
    /// Index the given list as-is.
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_prefix(entries, "")
    }

    /// Index the list with `prefix` prepended to every entry.
    #[must_use]
    pub fn with_prefix<I, S>(entries: I, prefix: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positions = HashMap::new();
        let mut len = 0;
        for (index, entry) in entries.into_iter().enumerate() {
            positions
                .entry(format!("{prefix}{}", entry.as_ref()))
                .or_insert(index);
            len = index + 1;
        }
        Self { positions, len }
    }

    /// Priority of `name`, or `None` when it is unranked.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Length of the indexed list, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the indexed list was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
