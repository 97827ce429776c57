use std::fmt;

use crate::errors::SelectionError;

use super::group::SelectionGroup;

/// Grouped container of selectable items with an injected key function.
///
/// The key function supplies the string label used for sorting the listing
/// and for equality-based matching; it must be deterministic and free of
/// side effects, since it runs once per comparison. Two distinct items with
/// the same key are indistinguishable to the matching operations.
pub struct GroupedSelector<I> {
    label: String,
    item_key: Box<dyn Fn(&I) -> String>,
    groups: Vec<SelectionGroup<I>>,
}

impl<I> GroupedSelector<I> {
    /// Creates an empty selector titled `label`, extracting item keys with
    /// `item_key`.
    pub fn new(label: impl Into<String>, item_key: impl Fn(&I) -> String + 'static) -> Self {
        Self {
            label: label.into(),
            item_key: Box::new(item_key),
            groups: Vec::new(),
        }
    }

    /// Heading printed above the whole listing.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Groups in insertion order.
    pub fn groups(&self) -> &[SelectionGroup<I>] {
        &self.groups
    }

    /// Extracted key of `item`.
    pub fn item_key(&self, item: &I) -> String {
        (self.item_key)(item)
    }

    /// Appends a new group entry. A name already in use is appended as an
    /// independent entry, never merged.
    pub fn add_group_items(
        &mut self,
        name: impl Into<String>,
        items: impl IntoIterator<Item = I>,
    ) {
        self.groups
            .push(SelectionGroup::new(name, items.into_iter().collect()));
    }

    /// Item count across all groups.
    pub fn total_items(&self) -> usize {
        self.groups.iter().map(SelectionGroup::count).sum()
    }

    /// True if any stored group carries exactly this name (case-sensitive).
    pub fn has_group(&self, name: &str) -> bool {
        self.groups.iter().any(|group| group.name == name)
    }

    /// Name of the first group, in insertion order, holding an item whose
    /// key equals the key of `item`.
    pub fn first_group_containing(&self, item: &I) -> Option<&str> {
        let key = self.item_key(item);
        self.groups
            .iter()
            .find(|group| group.contains_by(|candidate| self.item_key(candidate) == key))
            .map(|group| group.name.as_str())
    }

    /// Names of every group, in insertion order, holding an item whose key
    /// equals the key of `item`. Duplicate group names stay duplicated.
    pub fn groups_containing(&self, item: &I) -> Vec<&str> {
        let key = self.item_key(item);
        self.groups
            .iter()
            .filter(|group| group.contains_by(|candidate| self.item_key(candidate) == key))
            .map(|group| group.name.as_str())
            .collect()
    }

    /// Groups and items in display order: groups by name, then items by
    /// extracted key, both case-insensitive and stable.
    ///
    /// Rendering and number resolution both walk this enumeration, which
    /// keeps the printed numbers and the lookups in agreement. The order is
    /// recomputed from current contents on every call, so numbers are only
    /// valid against an unmodified selector.
    fn sorted_entries(&self) -> Vec<(&SelectionGroup<I>, Vec<&I>)> {
        let mut groups: Vec<&SelectionGroup<I>> = self.groups.iter().collect();
        groups.sort_by_key(|group| group.name.to_lowercase());

        groups
            .into_iter()
            .map(|group| {
                let mut items: Vec<&I> = group.items.iter().collect();
                items.sort_by_key(|item| self.item_key(item).to_lowercase());
                (group, items)
            })
            .collect()
    }

    /// Resolves a 1-based listing number back to its group name and item.
    ///
    /// Numbers outside `1..=total_items()` yield
    /// [`SelectionError::OutOfRange`]; callers are expected to re-prompt.
    pub fn resolve(&self, number: usize) -> Result<(&str, &I), SelectionError> {
        let mut current = 0usize;
        for (group, items) in self.sorted_entries() {
            for item in items {
                current += 1;
                if current == number {
                    return Ok((group.name.as_str(), item));
                }
            }
        }
        Err(SelectionError::OutOfRange {
            number,
            total: current,
        })
    }

    /// Renders the numbered listing: the selection label, then each group
    /// heading with its items prefixed by a running 1-based index shared
    /// across the entire listing. Empty groups render as a bare heading.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("\n{}:\n", self.label));

        let mut index = 0usize;
        for (group, items) in self.sorted_entries() {
            out.push_str(&format!("\n{}\n\n", group.name));
            for item in items {
                index += 1;
                out.push_str(&format!("\t[{}]\t{}\n", index, self.item_key(item)));
            }
        }
        out
    }

    /// Prints the listing to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }
}

impl GroupedSelector<String> {
    /// Selector over plain strings: each item is its own key.
    pub fn of_strings(label: impl Into<String>) -> Self {
        Self::new(label, |item: &String| item.clone())
    }
}

impl<I: fmt::Debug> fmt::Debug for GroupedSelector<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupedSelector")
            .field("label", &self.label)
            .field("groups", &self.groups)
            .finish_non_exhaustive()
    }
}
