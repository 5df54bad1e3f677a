//! Move Ordering
//!
//! Alpha-beta prunes more when good actions are searched first. Between
//! depth-limited passes, root actions are re-ranked by the value each one
//! achieved in the previous pass, so the next pass starts from the best
//! candidate found so far.

/// Ranks actions by utility value, highest first.
///
/// Entries with equal values stay in the order they were added.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionStore<A> {
    entries: Vec<(A, f64)>,
}

impl<A> ActionStore<A> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert an action behind every entry with a value greater or equal to `value`.
    pub fn add(&mut self, action: A, value: f64) {
        let mut index = 0;
        while index < self.entries.len() && value <= self.entries[index].1 {
            index += 1;
        }
        self.entries.insert(index, (action, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest ranked entry.
    pub fn first(&self) -> Option<&(A, f64)> {
        self.entries.first()
    }

    /// Entries from highest to lowest value.
    pub fn iter(&self) -> impl Iterator<Item = &(A, f64)> {
        self.entries.iter()
    }

    /// Actions from highest to lowest value.
    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.entries.iter().map(|(action, _)| action)
    }

    /// Values from highest to lowest.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, value)| *value)
    }
}

impl<A> Default for ActionStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> IntoIterator for ActionStore<A> {
    type Item = (A, f64);
    type IntoIter = std::vec::IntoIter<(A, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
