// File: crates/tierstack-cli/tests/cli.rs
// Purpose: End-to-end run of the binary: CSV + config in, chart file out; failures exit non-zero.

use std::path::PathBuf;
use std::process::Command;

const CONFIG: &str = r##"{
    "title": "CLI trinkets",
    "tiers": [300, 200, 100],
    "special_tier": 1000,
    "special_label": "Legendary",
    "special_color": "#ff8000",
    "tier_colors": { "300": "#7cb5ec", "200": "#434348", "100": "#90ed7d" },
    "item_order": ["Charm", "Amulet"]
}"##;

const CSV: &str = "item,tier,value\n\
Amulet,1000,0\nAmulet,300,900\nAmulet,200,700\nAmulet,100,500\n\
Charm,1000,1400\nCharm,300,600\nCharm,200,0\nCharm,100,300\n";

fn workdir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/cli").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn writes_chart_from_csv_and_config() {
    let dir = workdir("ok");
    std::fs::write(dir.join("samples.csv"), CSV).unwrap();
    std::fs::write(dir.join("chart.json"), CONFIG).unwrap();
    let out = dir.join("highchart_shaman.js");

    let status = Command::new(env!("CARGO_BIN_EXE_tierstack"))
        .arg("--data").arg(dir.join("samples.csv"))
        .arg("--config").arg(dir.join("chart.json"))
        .arg("--out").arg(&out)
        .status()
        .expect("run tierstack");
    assert!(status.success());

    let text = std::fs::read_to_string(&out).expect("chart written");
    assert!(text.starts_with("Highcharts.chart('shaman', \n"));
    assert!(text.contains("text: \"CLI trinkets\""));
    assert!(text.contains("categories: [\n            \"Charm\",\n            \"Amulet\"\n        ]"));
    assert!(text.contains("legendItemClick: function() { return false; }"));
}

#[test]
fn explicit_target_overrides_file_name() {
    let dir = workdir("target");
    std::fs::write(dir.join("samples.csv"), CSV).unwrap();
    std::fs::write(dir.join("chart.json"), CONFIG).unwrap();
    let out = dir.join("x.js");

    let status = Command::new(env!("CARGO_BIN_EXE_tierstack"))
        .arg("--data").arg(dir.join("samples.csv"))
        .arg("--config").arg(dir.join("chart.json"))
        .arg("--out").arg(&out)
        .arg("--target").arg("mage_fire")
        .status()
        .expect("run tierstack");
    assert!(status.success());
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("Highcharts.chart('mage_fire', \n"));
}

#[test]
fn missing_input_exits_non_zero() {
    let dir = workdir("missing");
    std::fs::write(dir.join("chart.json"), CONFIG).unwrap();
    let out = dir.join("highchart_none.js");

    let status = Command::new(env!("CARGO_BIN_EXE_tierstack"))
        .arg("--data").arg(dir.join("nope.csv"))
        .arg("--config").arg(dir.join("chart.json"))
        .arg("--out").arg(&out)
        .status()
        .expect("run tierstack");
    assert!(!status.success());
    assert!(!out.exists());
}
