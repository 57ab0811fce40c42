// File: crates/tierstack-core/src/types.rs
// Summary: Shared scalar types and constants (tiers, samples).

/// Tier identifier, e.g. an item level.
pub type Tier = u32;

/// One measured value for an (item, tier) pair.
/// Contract: loaded samples are non-negative; zero doubles as "missing".
pub type Sample = i64;

/// Sentinel sample value meaning "not measured".
pub const MISSING: Sample = 0;

/// True when `s` carries a real measurement.
#[inline]
pub const fn is_present(s: Sample) -> bool { s != MISSING }
