// File: crates/tierstack-core/src/series.rs
// Summary: Converts absolute per-tier samples into stacked per-tier delta series.
// Notes:
// - The chart stacks tiers on top of each other, so every ordinary tier carries
//   its marginal gain over the next tier in the ordering. The last tier is the
//   baseline and carries its raw sample.
// - Missing samples (zero) inside an item's measured range are estimated from
//   neighbors; outside that range they contribute nothing.

use tracing::debug;

use crate::bounds::{sample_bounds, Bounds};
use crate::config::TierOrdering;
use crate::dataset::{Dataset, TierSamples};
use crate::error::{ChartError, Result};
use crate::types::{is_present, Sample, Tier, MISSING};

/// One chart layer: a value per item, in category order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierSeries {
    pub tier: Tier,
    pub data: Vec<Sample>,
}

/// Everything the assembler needs: the special tier's raw values and one
/// delta series per ordinary tier, in ordering order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierSeriesSet {
    pub special: TierSeries,
    pub tiers: Vec<TierSeries>,
}

impl TierSeriesSet {
    pub fn get(&self, tier: Tier) -> Option<&TierSeries> {
        if tier == self.special.tier {
            return Some(&self.special);
        }
        self.tiers.iter().find(|s| s.tier == tier)
    }
}

/// Build the special series and one delta series per tier of `ordering` for
/// `items`, in the given order.
pub fn build_series<S: AsRef<str>>(
    dataset: &Dataset,
    ordering: &TierOrdering,
    items: &[S],
) -> Result<TierSeriesSet> {
    let mut rows: Vec<(&str, &TierSamples)> = Vec::with_capacity(items.len());
    for item in items {
        let name = item.as_ref();
        let samples = dataset
            .samples(name)
            .ok_or_else(|| ChartError::UnknownItem(name.to_string()))?;
        rows.push((name, samples));
    }

    let special = TierSeries {
        tier: ordering.special(),
        data: rows.iter().map(|(_, s)| lookup(s, ordering.special())).collect(),
    };

    let mut tiers = Vec::with_capacity(ordering.len());
    for (i, &tier) in ordering.tiers().iter().enumerate() {
        let data = rows
            .iter()
            .map(|&(name, samples)| tier_value(name, samples, ordering.tiers(), i))
            .collect::<Result<Vec<_>>>()?;
        tiers.push(TierSeries { tier, data });
    }

    debug!(items = rows.len(), tiers = tiers.len(), "built tier series");
    Ok(TierSeriesSet { special, tiers })
}

/// Value of tier `ordering[i]` for one item.
fn tier_value(item: &str, samples: &TierSamples, ordering: &[Tier], i: usize) -> Result<Sample> {
    let tier = ordering[i];
    let current = lookup(samples, tier);
    if i + 1 == ordering.len() {
        return Ok(current);
    }

    let bounds = sample_bounds(samples);
    // One step back from the first tier reads the baseline (last) tier.
    // Looking past the end of the ordering is an error.
    let neighbor = |offset: isize| -> Result<Sample> {
        let n = ordering.len() as isize;
        let j = match i as isize + offset {
            j if j < 0 => j + n,
            j => j,
        };
        if j < 0 || j >= n {
            return Err(ChartError::NeighborOutOfRange { item: item.to_string(), tier, offset });
        }
        Ok(lookup(samples, ordering[j as usize]))
    };

    if !is_present(current) {
        if bounds.is_some_and(|b: Bounds| b.strictly_contains(tier)) {
            let v = halve(neighbor(-1)? - neighbor(1)?);
            debug!(item, tier, value = v, "interpolated missing interior sample");
            return Ok(v);
        }
        return Ok(0);
    }

    let next_tier = ordering[i + 1];
    let next = lookup(samples, next_tier);
    let diff = current - next;
    if diff < 0 {
        return Ok(0);
    }
    if !is_present(next) && bounds.is_some_and(|b| b.above_lo(next_tier)) {
        let v = halve(current - neighbor(2)?);
        debug!(item, tier, value = v, "bridged missing next tier");
        return Ok(v);
    }
    Ok(diff)
}

#[inline]
fn lookup(samples: &TierSamples, tier: Tier) -> Sample {
    samples.get(&tier).copied().unwrap_or(MISSING)
}

/// Half of `v`, truncated toward zero.
#[inline]
fn halve(v: Sample) -> Sample { v / 2 }
