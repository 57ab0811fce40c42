// File: crates/tierstack-core/src/dataset.rs
// Summary: Item -> tier -> sample table with CSV and nested-JSON loaders.
// Notes:
// - A tier absent from an item's map reads as MISSING; the series builder
//   treats it exactly like a recorded zero.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ChartError, Result};
use crate::types::{Sample, Tier, MISSING};

/// Samples of one item keyed by tier.
pub type TierSamples = BTreeMap<Tier, Sample>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    items: BTreeMap<String, TierSamples>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `sample` for `(item, tier)`, replacing any earlier value.
    pub fn insert(&mut self, item: impl Into<String>, tier: Tier, sample: Sample) {
        self.items.entry(item.into()).or_default().insert(tier, sample);
    }

    /// Builder-style variant of [`Dataset::insert`] for one whole item.
    pub fn with_item<I>(mut self, item: impl Into<String>, samples: I) -> Self
    where
        I: IntoIterator<Item = (Tier, Sample)>,
    {
        self.items.entry(item.into()).or_default().extend(samples);
        self
    }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn contains(&self, item: &str) -> bool { self.items.contains_key(item) }

    pub fn samples(&self, item: &str) -> Option<&TierSamples> {
        self.items.get(item)
    }

    /// Sample for `(item, tier)`; unknown items and tiers read as MISSING.
    pub fn sample(&self, item: &str, tier: Tier) -> Sample {
        self.items
            .get(item)
            .and_then(|s| s.get(&tier).copied())
            .unwrap_or(MISSING)
    }

    /// Items ordered by their sample at `tier`, highest first; ties by name.
    pub fn rank_items(&self, tier: Tier) -> Vec<String> {
        let mut names: Vec<(&str, Sample)> = self
            .items
            .keys()
            .map(|name| (name.as_str(), self.sample(name, tier)))
            .collect();
        names.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        names.into_iter().map(|(n, _)| n.to_string()).collect()
    }

    /// Load a dataset, picking the loader by file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Self::from_csv_path(path),
            "json" => {
                let text = std::fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
                Self::from_json_str(&text)
            }
            _ => Err(ChartError::UnsupportedInput(path.to_path_buf())),
        }
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| ChartError::io(path, e))?;
        Self::from_csv_reader(file)
    }

    /// Read `item,tier,value` rows. Header names are matched case-insensitively
    /// and extra columns are ignored.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>();
        tracing::debug!(?headers, "dataset csv headers");

        let idx = |names: &[&str]| -> Option<usize> {
            headers.iter().position(|h| names.iter().any(|want| h == want))
        };
        let (i_item, i_tier, i_value) = match (
            idx(&["item", "name"]),
            idx(&["tier", "ilevel", "level"]),
            idx(&["value", "sample", "dps"]),
        ) {
            (Some(a), Some(b), Some(c)) => (a, b, c),
            _ => {
                return Err(ChartError::InvalidConfig(format!(
                    "csv needs item, tier and value columns, found {:?}",
                    headers
                )))
            }
        };

        let mut out = Self::new();
        for rec in rdr.records() {
            let rec = rec?;
            let item = rec.get(i_item).unwrap_or_default();
            let tier = parse_tier(item, rec.get(i_tier).unwrap_or_default())?;
            let value = parse_sample(item, rec.get(i_value).unwrap_or_default())?;
            out.insert(item, tier, value);
        }
        Ok(out)
    }

    /// Read the nested `{ item: { tier: value } }` shape. Values may be
    /// integers or numeric strings.
    pub fn from_json_str(text: &str) -> Result<Self> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawSample {
            Int(i64),
            Text(String),
        }

        let raw: BTreeMap<String, BTreeMap<String, RawSample>> = serde_json::from_str(text)?;
        let mut out = Self::new();
        for (item, tiers) in raw {
            for (tier, value) in tiers {
                let tier = parse_tier(&item, &tier)?;
                let value = match value {
                    RawSample::Int(v) => check_sample(&item, v)?,
                    RawSample::Text(s) => parse_sample(&item, &s)?,
                };
                out.insert(item.as_str(), tier, value);
            }
        }
        Ok(out)
    }
}

fn parse_tier(item: &str, raw: &str) -> Result<Tier> {
    raw.trim().parse::<Tier>().map_err(|_| ChartError::InvalidSample {
        item: item.to_string(),
        reason: format!("tier '{}' is not an unsigned integer", raw),
    })
}

fn parse_sample(item: &str, raw: &str) -> Result<Sample> {
    let v = raw.trim().parse::<Sample>().map_err(|_| ChartError::InvalidSample {
        item: item.to_string(),
        reason: format!("value '{}' is not an integer", raw),
    })?;
    check_sample(item, v)
}

fn check_sample(item: &str, v: Sample) -> Result<Sample> {
    if v < 0 {
        return Err(ChartError::InvalidSample {
            item: item.to_string(),
            reason: format!("negative value {}", v),
        });
    }
    Ok(v)
}
