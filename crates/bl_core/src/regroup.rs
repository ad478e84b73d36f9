//! Regrouping: collect keys that share an identical value, in descending (or
//! ascending) order of that value. Ranked Pairs, Beatpath, River and Minimax all use
//! this to process pairwise margins strongest-first while treating exact ties as a
//! single batch, so the order edges are added within a tie never matters.

use std::collections::BTreeMap;
use std::hash::Hash;

/// Group the keys of `mapping` by value, yielding each group's keys in order of value,
/// strongest (greatest) first when `reverse` is true.
pub fn regrouped<K, V>(mapping: impl IntoIterator<Item = (K, V)>, reverse: bool) -> Vec<Vec<K>>
where
    K: Clone + Eq + Hash,
    V: Ord,
{
    let mut by_value: BTreeMap<V, Vec<K>> = BTreeMap::new();
    for (key, value) in mapping {
        by_value.entry(value).or_default().push(key);
    }

    let mut groups: Vec<Vec<K>> = by_value.into_values().collect();
    if reverse {
        groups.reverse();
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_identical_value_descending() {
        let mapping = vec![("a", 3), ("b", 1), ("c", 3), ("d", 2)];
        let groups = regrouped(mapping, true);
        assert_eq!(groups.len(), 3);
        let mut first = groups[0].clone();
        first.sort();
        assert_eq!(first, vec!["a", "c"]);
        assert_eq!(groups[1], vec!["d"]);
        assert_eq!(groups[2], vec!["b"]);
    }

    #[test]
    fn ascending_order_when_not_reversed() {
        let mapping = vec![("a", 1), ("b", 2)];
        let groups = regrouped(mapping, false);
        assert_eq!(groups, vec![vec!["a"], vec!["b"]]);
    }
}
