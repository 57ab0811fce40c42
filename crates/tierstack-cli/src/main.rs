// File: crates/tierstack-cli/src/main.rs
// Summary: Loads simulated samples and chart config, writes a stacked-bar Highcharts file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tierstack_core::{
    assemble_chart, build_series, target_name, write_chart, ChartConfig, Dataset, TARGET_PREFIX_LEN,
};

/// Turn per-tier simulation results into a stacked Highcharts bar chart.
#[derive(Parser, Debug)]
#[command(name = "tierstack")]
#[command(about = "Build a stacked per-tier delta bar chart (Highcharts JS) from simulated samples")]
struct Args {
    /// Sample table (.csv with item,tier,value columns or nested .json)
    #[arg(short, long)]
    data: PathBuf,

    /// Chart config (.json): tier ordering, colors, titles
    #[arg(short, long)]
    config: PathBuf,

    /// Output .js file (default: target/out/highchart_<data stem>.js)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Chart target element id (default: output file stem minus the prefix)
    #[arg(short, long)]
    target: Option<String>,

    /// Characters stripped from the output file stem to derive the target
    #[arg(long, default_value_t = TARGET_PREFIX_LEN)]
    prefix_len: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    let dataset = Dataset::load(&args.data)
        .with_context(|| format!("failed to load samples '{}'", args.data.display()))?;
    println!("Loaded {} items from {}", dataset.len(), args.data.display());
    if dataset.is_empty() {
        anyhow::bail!("no samples loaded; check headers/format of {}", args.data.display());
    }

    let config = ChartConfig::load(&args.config)
        .with_context(|| format!("failed to load config '{}'", args.config.display()))?;
    let ordering = config.ordering()?;
    let items = config.resolve_items(&dataset)?;
    info!(items = items.len(), tiers = ordering.len(), special = ordering.special(), "building chart");

    let series = build_series(&dataset, &ordering, &items).context("building tier series")?;
    let doc = assemble_chart(&series, &items, &config, Local::now().naive_local())
        .context("assembling chart options")?;

    let out = args.out.clone().unwrap_or_else(|| out_name_for(&args.data));
    let target = match &args.target {
        Some(t) => t.clone(),
        None => target_name(&out, args.prefix_len)?,
    };
    write_chart(&out, &target, &doc)
        .with_context(|| format!("failed to write chart '{}'", out.display()))?;
    println!("Wrote {} (target '{}')", out.display(), target);

    Ok(())
}

/// Produce output file name like target/out/highchart_<stem>.js
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("highchart_{}.js", stem))
}
