// File: crates/tierstack-core/src/assemble.rs
// Summary: Builds the Highcharts stacked-bar options document from tier series and config.

use chrono::NaiveDateTime;

use crate::config::ChartConfig;
use crate::document::{ChartDocument, ChartValue};
use crate::error::{ChartError, Result};
use crate::series::{TierSeries, TierSeriesSet};

/// Tooltip formatter: walks the stack bottom-up and prints the running total
/// at every non-zero segment.
pub const TOOLTIP_FORMATTER: &str = r#"function() {
    var s = '<b>'+ this.x +'</b>';
    var cumulative_amount = 0;
    for (var i = this.points.length - 1 ; i >= 0 ; i--) {
        cumulative_amount += this.points[i].y;
        if (this.points[i].y !== 0){
            s += '<br/><span style="color: ' + this.points[i].series.color + '; font-weight: bold;">' + this.points[i].series.name +'</span>: ' + cumulative_amount;
        }
    }
    return s;
}"#;

/// Legend clicks never toggle series visibility.
pub const LEGEND_ITEM_CLICK: &str = "function() { return false; }";

const THEME_TEXT_COLOR: &str = "(Highcharts.theme && Highcharts.theme.textColor) || 'white'";
const THEME_BACKGROUND: &str = "(Highcharts.theme && Highcharts.theme.background2) || 'white'";
const THEME_DATA_LABELS_COLOR: &str =
    "(Highcharts.theme && Highcharts.theme.dataLabelsColor) || 'white'";

/// Assemble the chart options. `items` is the category axis and is used in
/// the given order; `generated_at` is stamped into the subtitle.
pub fn assemble_chart<S: AsRef<str>>(
    series: &TierSeriesSet,
    items: &[S],
    config: &ChartConfig,
    generated_at: NaiveDateTime,
) -> Result<ChartDocument> {
    let mut entries = Vec::with_capacity(series.tiers.len() + 1);
    entries.push(series_entry(config.special_label.clone(), &config.special_color, &series.special));
    for s in &series.tiers {
        let color = config
            .tier_colors
            .get(&s.tier)
            .ok_or(ChartError::MissingTierColor(s.tier))?;
        entries.push(series_entry(s.tier.to_string(), color, s));
    }

    let categories: Vec<ChartValue> = items.iter().map(|i| ChartValue::text(i.as_ref())).collect();
    let subtitle = format!("Last generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));

    Ok(ChartValue::object([
        ("chart", ChartValue::object([("type", ChartValue::text("bar"))])),
        ("title", ChartValue::object([("text", ChartValue::text(config.title.as_str()))])),
        ("subtitle", ChartValue::object([("text", ChartValue::Text(subtitle))])),
        ("xAxis", ChartValue::object([("categories", ChartValue::Array(categories))])),
        ("yAxis", y_axis(&config.y_axis_title)),
        ("legend", legend()),
        ("tooltip", tooltip()),
        ("plotOptions", plot_options()),
        ("series", ChartValue::Array(entries)),
    ]))
}

fn series_entry(name: String, color: &str, series: &TierSeries) -> ChartValue {
    ChartValue::object([
        ("name", ChartValue::Text(name)),
        ("color", ChartValue::text(color)),
        ("data", ChartValue::from(series.data.clone())),
    ])
}

fn y_axis(title: &str) -> ChartValue {
    ChartValue::object([
        ("min", ChartValue::Int(0)),
        ("title", ChartValue::object([("text", ChartValue::text(title))])),
        ("labels", ChartValue::object([("enabled", ChartValue::Bool(true))])),
        (
            "stackLabels",
            ChartValue::object([
                ("enabled", ChartValue::Bool(false)),
                (
                    "style",
                    ChartValue::object([
                        ("fontWeight", ChartValue::text("bold")),
                        ("color", ChartValue::raw(THEME_TEXT_COLOR)),
                    ]),
                ),
            ]),
        ),
    ])
}

fn legend() -> ChartValue {
    ChartValue::object([
        ("align", ChartValue::text("right")),
        ("x", ChartValue::Int(0)),
        ("verticalAlign", ChartValue::text("bottom")),
        ("y", ChartValue::Int(0)),
        ("floating", ChartValue::Bool(false)),
        ("backgroundColor", ChartValue::raw(THEME_BACKGROUND)),
        ("borderColor", ChartValue::text("#CCC")),
        ("borderWidth", ChartValue::Int(1)),
        ("shadow", ChartValue::Bool(false)),
        ("reversed", ChartValue::Bool(true)),
    ])
}

fn tooltip() -> ChartValue {
    ChartValue::object([
        ("headerFormat", ChartValue::text("<b>{point.x}</b>")),
        ("formatter", ChartValue::raw(TOOLTIP_FORMATTER)),
        ("shared", ChartValue::Bool(true)),
        ("backgroundColor", ChartValue::text("#eee")),
        ("borderColor", ChartValue::text("#bbb")),
        ("style", ChartValue::object([("color", ChartValue::text("black"))])),
    ])
}

fn plot_options() -> ChartValue {
    ChartValue::object([
        (
            "series",
            ChartValue::object([
                ("borderColor", ChartValue::text("#151515")),
                (
                    "events",
                    ChartValue::object([("legendItemClick", ChartValue::raw(LEGEND_ITEM_CLICK))]),
                ),
            ]),
        ),
        (
            "bar",
            ChartValue::object([
                ("stacking", ChartValue::text("normal")),
                (
                    "dataLabels",
                    ChartValue::object([
                        ("enabled", ChartValue::Bool(false)),
                        ("color", ChartValue::raw(THEME_DATA_LABELS_COLOR)),
                    ]),
                ),
            ]),
        ),
    ])
}
