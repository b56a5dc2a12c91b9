use std::collections::HashSet;

use crate::model::ids::{ActivityKey, ParseKeyError};

/// The set of activities marked complete.
///
/// Backed by a set, so marking the same activity twice cannot inflate
/// counts. The set itself is agnostic of the curriculum; attribution and
/// membership filtering happen during aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    keys: HashSet<ActivityKey>,
}

/// Outcome of parsing raw string ids into a `CompletionSet`.
///
/// Malformed ids are reported instead of silently counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCompletions {
    pub set: CompletionSet,
    pub rejected: Vec<(String, ParseKeyError)>,
}

impl CompletionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw id strings (`p<phase>-d<day>-a<index>`), collecting the
    /// well-formed keys and reporting the rest.
    pub fn parse_raw<I, S>(raw: I) -> ParsedCompletions
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = ParsedCompletions::default();
        for id in raw {
            let id = id.as_ref();
            match id.parse::<ActivityKey>() {
                Ok(key) => {
                    parsed.set.insert(key);
                }
                Err(err) => parsed.rejected.push((id.to_owned(), err)),
            }
        }
        parsed
    }

    /// Returns true if the key was not already present.
    pub fn insert(&mut self, key: ActivityKey) -> bool {
        self.keys.insert(key)
    }

    /// Returns true if the key was present.
    pub fn remove(&mut self, key: ActivityKey) -> bool {
        self.keys.remove(&key)
    }

    #[must_use]
    pub fn contains(&self, key: ActivityKey) -> bool {
        self.keys.contains(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ActivityKey> + '_ {
        self.keys.iter().copied()
    }
}

impl FromIterator<ActivityKey> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = ActivityKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl Extend<ActivityKey> for CompletionSet {
    fn extend<I: IntoIterator<Item = ActivityKey>>(&mut self, iter: I) {
        self.keys.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::{DayId, PhaseId};

    fn key(phase: u32, day: u32, index: u32) -> ActivityKey {
        ActivityKey::new(PhaseId::new(phase), DayId::new(day), index)
    }

    #[test]
    fn duplicate_inserts_collapse() {
        let mut set = CompletionSet::new();
        assert!(set.insert(key(1, 1, 0)));
        assert!(!set.insert(key(1, 1, 0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_reports_presence() {
        let mut set = CompletionSet::new();
        set.insert(key(1, 1, 0));
        assert!(set.remove(key(1, 1, 0)));
        assert!(!set.remove(key(1, 1, 0)));
        assert!(set.is_empty());
    }

    #[test]
    fn parse_raw_separates_malformed_ids() {
        let parsed =
            CompletionSet::parse_raw(["p1-d1-a0", "p1-d1-a0", "p1", "garbage", "p10-d40-a2"]);
        assert_eq!(parsed.set.len(), 2);
        assert!(parsed.set.contains(key(1, 1, 0)));
        assert!(parsed.set.contains(key(10, 40, 2)));
        assert_eq!(parsed.rejected.len(), 2);
        assert_eq!(parsed.rejected[0].0, "p1");
    }
}
