//! Count-then-first-seen ranking shared by keyword, community and hour summaries.

use ahash::AHashMap;
use std::hash::Hash;

/// Occurrence counter that remembers first-seen order so ties rank stably.
#[derive(Clone, Debug)]
pub struct FrequencyTable<T> {
    index: AHashMap<T, usize>,
    entries: Vec<(T, u64)>,
}

impl<T> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self { index: AHashMap::new(), entries: Vec::new() }
    }
}

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        match self.index.get(&item) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(item.clone(), self.entries.len());
                self.entries.push((item, 1));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct items with their counts, in first-seen order.
    pub fn entries(&self) -> &[(T, u64)] {
        &self.entries
    }

    /// Up to `n` items with counts, descending by count; ties keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(T, u64)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable, so equal counts stay in insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    pub fn top(&self, n: usize) -> Vec<T> {
        self.most_common(n).into_iter().map(|(item, _)| item).collect()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        for item in iter {
            table.add(item);
        }
        table
    }
}

/// Top `n` distinct items by occurrence count, ties broken by first occurrence.
pub fn top_n<T, I>(items: I, n: usize) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect::<FrequencyTable<T>>().top(n)
}
