// File: crates/tierstack-core/src/config.rs
// Summary: Chart configuration (tier ordering, colors, titles) loaded from JSON.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::types::Tier;

/// Ordered tiers plus the special tier rendered as raw values.
/// Contract: `tiers` is non-empty, duplicate-free and does not contain `special`.
/// The last tier is the baseline the other tiers are differenced against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierOrdering {
    tiers: Vec<Tier>,
    special: Tier,
}

impl TierOrdering {
    pub fn new(tiers: Vec<Tier>, special: Tier) -> Result<Self> {
        if tiers.is_empty() {
            return Err(ChartError::EmptyOrdering);
        }
        for (i, t) in tiers.iter().enumerate() {
            if tiers[..i].contains(t) {
                return Err(ChartError::InvalidConfig(format!("tier {} listed twice", t)));
            }
        }
        if tiers.contains(&special) {
            return Err(ChartError::InvalidConfig(format!(
                "special tier {} is also an ordinary tier",
                special
            )));
        }
        Ok(Self { tiers, special })
    }

    pub fn tiers(&self) -> &[Tier] { &self.tiers }

    pub fn special(&self) -> Tier { self.special }

    pub fn len(&self) -> usize { self.tiers.len() }

    pub fn is_empty(&self) -> bool { self.tiers.is_empty() }
}

fn default_y_axis_title() -> String {
    "\u{0394} Damage per second".to_string()
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    pub tiers: Vec<Tier>,
    pub special_tier: Tier,
    pub special_label: String,
    pub special_color: String,
    pub tier_colors: BTreeMap<Tier, String>,
    #[serde(default = "default_y_axis_title")]
    pub y_axis_title: String,
    /// Category order; ranked from the dataset when absent.
    #[serde(default)]
    pub item_order: Option<Vec<String>>,
}

impl ChartConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.ordering()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// Validated tier ordering for this config.
    pub fn ordering(&self) -> Result<TierOrdering> {
        TierOrdering::new(self.tiers.clone(), self.special_tier)
    }

    /// Category order for `dataset`: the configured order when present,
    /// otherwise items ranked by their sample at the first ordinary tier.
    pub fn resolve_items(&self, dataset: &Dataset) -> Result<Vec<String>> {
        match &self.item_order {
            Some(order) => {
                if let Some(missing) = order.iter().find(|name| !dataset.contains(name.as_str())) {
                    return Err(ChartError::UnknownItem(missing.clone()));
                }
                Ok(order.clone())
            }
            None => {
                let first = *self.tiers.first().ok_or(ChartError::EmptyOrdering)?;
                Ok(dataset.rank_items(first))
            }
        }
    }
}
