/// A named bucket of items, displayed together under one heading.
///
/// Group names carry no uniqueness requirement: two groups with the same
/// name stay separate entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionGroup<I> {
    pub name: String,
    pub items: Vec<I>,
}

impl<I> SelectionGroup<I> {
    pub fn new(name: impl Into<String>, items: Vec<I>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Number of items held by this group.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if any item satisfies `predicate`, scanning in group
    /// order and stopping at the first match.
    pub fn contains_by<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&I) -> bool,
    {
        self.items.iter().any(predicate)
    }
}
