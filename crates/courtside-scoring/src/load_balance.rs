//! LoadBalance - appearance counts and their population standard deviation.

use std::collections::BTreeMap;

/// Appearance counts per key.
///
/// Only keys that were actually seen are present. The spread is the
/// population standard deviation of the counts (divide by the number of
/// keys, not by one less). Zero means every key appeared equally often.
///
/// # Example
///
/// ```
/// use courtside_scoring::LoadBalance;
///
/// let balance: LoadBalance<char> = "aab".chars().collect();
/// assert_eq!(balance.load(&'a'), 2);
/// assert_eq!(balance.load(&'z'), 0);
/// assert!((balance.std_dev() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LoadBalance<K: Ord> {
    loads: BTreeMap<K, usize>,
}

impl<K: Ord> LoadBalance<K> {
    pub fn new() -> Self {
        LoadBalance {
            loads: BTreeMap::new(),
        }
    }

    /// Counts one more appearance of `key`.
    pub fn record(&mut self, key: K) {
        *self.loads.entry(key).or_insert(0) += 1;
    }

    /// Returns the map of seen keys to their counts.
    pub fn loads(&self) -> &BTreeMap<K, usize> {
        &self.loads
    }

    /// Count for `key`, zero if it never appeared.
    pub fn load(&self, key: &K) -> usize {
        self.loads.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.loads.values().sum()
    }

    pub fn mean(&self) -> f64 {
        if self.loads.is_empty() {
            return 0.0;
        }
        self.total() as f64 / self.loads.len() as f64
    }

    /// Population standard deviation of the counts; zero when empty.
    pub fn std_dev(&self) -> f64 {
        if self.loads.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let squared_deviation: f64 = self
            .loads
            .values()
            .map(|&load| {
                let diff = load as f64 - mean;
                diff * diff
            })
            .sum();
        (squared_deviation / self.loads.len() as f64).sqrt()
    }

    pub fn into_loads(self) -> BTreeMap<K, usize> {
        self.loads
    }
}

impl<K: Ord> Default for LoadBalance<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for LoadBalance<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut balance = LoadBalance::new();
        for key in iter {
            balance.record(key);
        }
        balance
    }
}
