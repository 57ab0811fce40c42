// File: crates/tierstack-core/src/bounds.rs
// Summary: Lowest/highest tier carrying a real sample for one item.

use crate::dataset::TierSamples;
use crate::types::{is_present, Tier};

/// Tier range with measured samples. Contract: `lo <= hi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub lo: Tier,
    pub hi: Tier,
}

impl Bounds {
    /// `lo < tier < hi`.
    #[inline]
    pub const fn strictly_contains(&self, tier: Tier) -> bool {
        self.lo < tier && tier < self.hi
    }

    #[inline]
    pub const fn above_lo(&self, tier: Tier) -> bool {
        tier > self.lo
    }
}

/// Bounds of the non-missing samples, or `None` when every sample is missing.
pub fn sample_bounds(samples: &TierSamples) -> Option<Bounds> {
    let mut present = samples.iter().filter(|(_, s)| is_present(**s)).map(|(t, _)| *t);
    let first = present.next()?;
    let (lo, hi) = present.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
    Some(Bounds { lo, hi })
}
