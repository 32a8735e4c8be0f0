//! Separator frequency statistics

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Separator characters in priority order (ties go to the earlier one)
pub const SEPARATORS: [char; 5] = ['_', '-', '.', '/', '\\'];

/// Occurrence count of every separator character in an input.
///
/// All five counts are kept even though only the dominant separator drives
/// splitting, so callers can inspect secondary separators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeparatorStatistics {
    counts: [usize; SEPARATORS.len()],
}

impl SeparatorStatistics {
    /// Count separators over the whole input
    pub fn collect(input: &str) -> Self {
        let mut counts = [0; SEPARATORS.len()];
        for ch in input.chars() {
            if let Some(slot) = SEPARATORS.iter().position(|&sep| sep == ch) {
                counts[slot] += 1;
            }
        }
        Self { counts }
    }

    /// Number of occurrences of `separator` (0 for non-separator chars)
    pub fn count(&self, separator: char) -> usize {
        SEPARATORS
            .iter()
            .position(|&sep| sep == separator)
            .map_or(0, |slot| self.counts[slot])
    }

    /// Separators that occur at least once, in priority order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        SEPARATORS
            .iter()
            .zip(self.counts.iter())
            .filter(|(_, count)| **count > 0)
            .map(|(&sep, &count)| (sep, count))
    }

    /// True when no separator occurs
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Most frequent separator; ties resolved by [`SEPARATORS`] order
    pub fn dominant(&self) -> Option<char> {
        let mut best: Option<(char, usize)> = None;
        for (sep, count) in self.iter() {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((sep, count));
            }
        }
        best.map(|(sep, _)| sep)
    }
}

impl Serialize for SeparatorStatistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present: Vec<_> = self.iter().collect();
        let mut map = serializer.serialize_map(Some(present.len()))?;
        for (sep, count) in present {
            map.serialize_entry(&sep, &count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_counts_every_separator() {
        let stats = SeparatorStatistics::collect(r"a_b_c-d.e/f\g");
        assert_eq!(stats.count('_'), 2);
        assert_eq!(stats.count('-'), 1);
        assert_eq!(stats.count('.'), 1);
        assert_eq!(stats.count('/'), 1);
        assert_eq!(stats.count('\\'), 1);
        assert_eq!(stats.count('x'), 0);
    }

    #[test]
    fn test_dominant_by_count() {
        let stats = SeparatorStatistics::collect("a-b-c_d");
        assert_eq!(stats.dominant(), Some('-'));
    }

    #[test]
    fn test_dominant_tie_uses_priority() {
        assert_eq!(SeparatorStatistics::collect("a_b-c_d-e").dominant(), Some('_'));
        assert_eq!(SeparatorStatistics::collect("a/b.c").dominant(), Some('.'));
        assert_eq!(SeparatorStatistics::collect(r"a\b/c").dominant(), Some('/'));
    }

    #[test]
    fn test_empty_statistics() {
        let stats = SeparatorStatistics::collect("plain");
        assert!(stats.is_empty());
        assert_eq!(stats.dominant(), None);
        assert_eq!(stats.iter().count(), 0);
    }
}
