// File: crates/tierstack-core/src/emit.rs
// Summary: Serializes a chart document as JavaScript source and writes the chart file.
// Notes:
// - Layout follows a 4-space indented JSON dump so diffs against older chart
//   files stay small, but keys are bare identifiers and `Raw` nodes are code.
// - Strings are escaped by serde_json, then kept ASCII-only: every char
//   outside printable ASCII becomes a `\uXXXX` escape (UTF-16 units), so
//   "Δ" is written as `\u0394`.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::document::{ChartDocument, ChartValue};
use crate::error::{ChartError, Result};

/// Characters stripped from the output file stem to get the chart target,
/// i.e. the length of a `highchart_` prefix.
pub const TARGET_PREFIX_LEN: usize = 10;

const INDENT: &str = "    ";

/// Serialize `doc` as a JavaScript object literal.
pub fn render_document(doc: &ChartDocument) -> Result<String> {
    let mut out = String::new();
    write_value(&mut out, doc, 0)?;
    Ok(out)
}

/// Full chart file body: `Highcharts.chart('<target>', { ... });`.
pub fn render_chart(target: &str, doc: &ChartDocument) -> Result<String> {
    let mut out = String::from("Highcharts.chart('");
    for c in target.chars() {
        if c == '\'' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push_str("', \n");
    write_value(&mut out, doc, 0)?;
    out.push_str(");\n");
    Ok(out)
}

/// Chart target (DOM element id) for an output path: the file stem without
/// its first `prefix_len` characters.
pub fn target_name(path: impl AsRef<Path>, prefix_len: usize) -> Result<String> {
    let path = path.as_ref();
    let err = |reason: &str| ChartError::TargetName { path: path.to_path_buf(), reason: reason.to_string() };
    let stem = path
        .file_stem()
        .ok_or_else(|| err("no file name"))?
        .to_str()
        .ok_or_else(|| err("file name is not valid UTF-8"))?;
    let target: String = stem.chars().skip(prefix_len).collect();
    if target.is_empty() {
        return Err(err(&format!("file stem '{}' is not longer than the {}-character prefix", stem, prefix_len)));
    }
    Ok(target)
}

/// Render `doc` for `target` and write it to `path`, creating parent directories.
pub fn write_chart(path: impl AsRef<Path>, target: &str, doc: &ChartDocument) -> Result<()> {
    let path = path.as_ref();
    let body = render_chart(target, doc)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ChartError::io(parent, e))?;
    }
    std::fs::write(path, body.as_bytes()).map_err(|e| ChartError::io(path, e))?;
    info!(path = %path.display(), chart = target, bytes = body.len(), "wrote chart");
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn write_value(out: &mut String, value: &ChartValue, level: usize) -> Result<()> {
    match value {
        ChartValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        ChartValue::Int(n) => out.push_str(&n.to_string()),
        ChartValue::Text(s) => write_string(out, s)?,
        ChartValue::Raw(code) => out.push_str(code),
        ChartValue::Array(items) => write_array(out, items, level)?,
        ChartValue::Object(map) => write_object(out, map, level)?,
    }
    Ok(())
}

fn write_array(out: &mut String, items: &[ChartValue], level: usize) -> Result<()> {
    if items.is_empty() {
        out.push_str("[]");
        return Ok(());
    }
    out.push_str("[\n");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        push_indent(out, level + 1);
        write_value(out, item, level + 1)?;
    }
    out.push('\n');
    push_indent(out, level);
    out.push(']');
    Ok(())
}

fn write_object(out: &mut String, map: &BTreeMap<String, ChartValue>, level: usize) -> Result<()> {
    if map.is_empty() {
        out.push_str("{}");
        return Ok(());
    }
    out.push_str("{\n");
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        push_indent(out, level + 1);
        write_key(out, key)?;
        out.push_str(": ");
        write_value(out, value, level + 1)?;
    }
    out.push('\n');
    push_indent(out, level);
    out.push('}');
    Ok(())
}

/// Bare identifier when the key is one, quoted string otherwise.
fn write_key(out: &mut String, key: &str) -> Result<()> {
    if is_identifier(key) {
        out.push_str(key);
        Ok(())
    } else {
        write_string(out, key)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// JSON string literal. serde_json escapes quotes, backslashes and control
/// characters; what is left outside printable ASCII (DEL included) becomes
/// UTF-16 `\uXXXX` escapes.
fn write_string(out: &mut String, s: &str) -> Result<()> {
    let quoted = serde_json::to_string(s)?;
    for c in quoted.chars() {
        if c.is_ascii() && c != '\u{7f}' {
            out.push(c);
            continue;
        }
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{:04x}", unit));
        }
    }
    Ok(())
}

#[inline]
fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}
