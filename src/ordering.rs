//! Day 5: print-queue ordering rules.

use rustc_hash::{FxHashMap, FxHashSet};

/// The `X|Y` precedence rules, keyed by the page that must come first.
#[derive(Clone, Debug, Default)]
pub struct OrderingRules {
    must_follow: FxHashMap<u32, Vec<u32>>,
}

impl OrderingRules {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let mut must_follow: FxHashMap<u32, Vec<u32>> = FxHashMap::default();
        for (before, after) in pairs {
            must_follow.entry(before).or_default().push(after);
        }
        Self { must_follow }
    }

    /// An update is valid if no page appears after one it must precede.
    ///
    /// Walk the update keeping the set of pages already printed; a page whose
    /// must-follow list intersects that set violates a rule.
    pub fn is_valid_update(&self, update: &[u32]) -> bool {
        let mut seen: FxHashSet<u32> = FxHashSet::default();

        for &page in update {
            if let Some(followers) = self.must_follow.get(&page) {
                if followers.iter().any(|f| seen.contains(f)) {
                    return false;
                }
            }
            seen.insert(page);
        }
        true
    }

    /// Sum of the middle page of every valid update.
    pub fn middle_page_sum(&self, updates: &[Vec<u32>]) -> u32 {
        updates
            .iter()
            .filter(|update| self.is_valid_update(update))
            .map(|update| update[(update.len() - 1) / 2])
            .sum()
    }
}
