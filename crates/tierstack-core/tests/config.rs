// File: crates/tierstack-core/tests/config.rs
// Purpose: Chart config parsing, ordering validation and category resolution.

use tierstack_core::{ChartConfig, ChartError, Dataset, TierOrdering};

const CONFIG: &str = r##"{
    "title": "Trinkets",
    "tiers": [940, 930, 920],
    "special_tier": 1000,
    "special_label": "Legendary",
    "special_color": "#ff8000",
    "tier_colors": { "940": "#7cb5ec", "930": "#434348", "920": "#90ed7d" }
}"##;

#[test]
fn parses_with_defaults() {
    let cfg = ChartConfig::from_json_str(CONFIG).expect("config");
    assert_eq!(cfg.tiers, vec![940, 930, 920]);
    assert_eq!(cfg.tier_colors.get(&930).map(String::as_str), Some("#434348"));
    assert_eq!(cfg.y_axis_title, "\u{0394} Damage per second");
    assert!(cfg.item_order.is_none());

    let ord = cfg.ordering().expect("ordering");
    assert_eq!(ord.tiers(), &[940, 930, 920]);
    assert_eq!(ord.special(), 1000);
}

#[test]
fn ordering_rejects_bad_tier_lists() {
    assert!(matches!(TierOrdering::new(vec![], 1), Err(ChartError::EmptyOrdering)));
    assert!(matches!(TierOrdering::new(vec![2, 1, 2], 9), Err(ChartError::InvalidConfig(_))));
    assert!(matches!(TierOrdering::new(vec![2, 1], 1), Err(ChartError::InvalidConfig(_))));
}

#[test]
fn invalid_config_fails_at_load() {
    let text = CONFIG.replace("\"special_tier\": 1000", "\"special_tier\": 930");
    assert!(matches!(ChartConfig::from_json_str(&text), Err(ChartError::InvalidConfig(_))));
    assert!(matches!(ChartConfig::from_json_str("{"), Err(ChartError::Json(_))));
}

#[test]
fn item_order_defaults_to_ranking_at_first_tier() {
    let cfg = ChartConfig::from_json_str(CONFIG).expect("config");
    let ds = Dataset::new()
        .with_item("Low", [(940, 100)])
        .with_item("High", [(940, 800)]);
    assert_eq!(cfg.resolve_items(&ds).unwrap(), vec!["High", "Low"]);
}

#[test]
fn explicit_item_order_is_kept_and_checked() {
    let mut cfg = ChartConfig::from_json_str(CONFIG).expect("config");
    let ds = Dataset::new()
        .with_item("Low", [(940, 100)])
        .with_item("High", [(940, 800)]);

    cfg.item_order = Some(vec!["Low".into(), "High".into()]);
    assert_eq!(cfg.resolve_items(&ds).unwrap(), vec!["Low", "High"]);

    cfg.item_order = Some(vec!["Low".into(), "Ghost".into()]);
    assert!(matches!(cfg.resolve_items(&ds), Err(ChartError::UnknownItem(n)) if n == "Ghost"));
}
