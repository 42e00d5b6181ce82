//! Frequency counting helpers shared by the reporters.
//!
//! Ties are always broken by first appearance in input order, so every mode and
//! every top-N listing is deterministic for a given table.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Count occurrences, keeping distinct values in first-seen order.
pub fn tally<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for v in values {
        match index.get(&v) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(v.clone(), counts.len());
                counts.push((v, 1));
            }
        }
    }

    counts
}

/// Most frequent value with its count; the first-seen value wins a tie.
pub fn mode_with_count<T, I>(values: I) -> Option<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    tally(values)
        .into_iter()
        .fold(None, |best: Option<(T, usize)>, (v, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((v, n)),
        })
}

pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    mode_with_count(values).map(|(v, _)| v)
}

/// The `n` most frequent values, descending by count.
pub fn top_n<T, I>(values: I, n: usize) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts = tally(values);
    // stable: equal counts keep first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// Counts per distinct value, in ascending value order.
pub fn grouped_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut groups: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *groups.entry(v).or_default() += 1;
    }
    groups.into_iter().collect()
}

pub fn distinct_count<T, I>(values: I) -> usize
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect::<std::collections::HashSet<_>>().len()
}
