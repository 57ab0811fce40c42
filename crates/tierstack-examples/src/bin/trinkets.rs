// File: crates/tierstack-examples/src/bin/trinkets.rs
// Summary: Minimal example that turns an in-memory sample table into a Highcharts file.

use std::collections::BTreeMap;

use tierstack_core::{
    assemble_chart, build_series, target_name, write_chart, ChartConfig, Dataset, TARGET_PREFIX_LEN,
};

fn main() {
    // Three item levels per trinket; 0 marks a level the simulation skipped.
    let dataset = Dataset::new()
        .with_item("Whispering Idol", [(1000, 0), (940, 41_200), (930, 40_100), (920, 38_900)])
        .with_item("Eye of Command", [(1000, 44_800), (940, 0), (930, 0), (920, 0)])
        .with_item("Tarnished Orb", [(1000, 0), (940, 39_700), (930, 0), (920, 37_500)]);

    let config = ChartConfig {
        title: "Example trinket ranking".into(),
        tiers: vec![940, 930, 920],
        special_tier: 1000,
        special_label: "Legendary".into(),
        special_color: "#ff8000".into(),
        tier_colors: BTreeMap::from([
            (940, "#7cb5ec".to_string()),
            (930, "#434348".to_string()),
            (920, "#90ed7d".to_string()),
        ]),
        y_axis_title: "\u{0394} Damage per second".into(),
        item_order: None,
    };

    let ordering = config.ordering().expect("valid tier ordering");
    let items = config.resolve_items(&dataset).expect("items");
    let series = build_series(&dataset, &ordering, &items).expect("series");
    let doc = assemble_chart(&series, &items, &config, chrono::Local::now().naive_local()).expect("assemble");

    let out = std::path::PathBuf::from("target/out/highchart_example_trinkets.js");
    let target = target_name(&out, TARGET_PREFIX_LEN).expect("target name");
    write_chart(&out, &target, &doc).expect("write chart");
    println!("Wrote {}", out.display());
}
