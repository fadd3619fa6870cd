// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV (first column = categories, remaining columns = series) and
// renders the finished chart to PNGs at a wide and a square size.

use anyhow::{Context, Result};
use linechart_core::format::{date_label, thousands};
use linechart_core::{record, ChartOptions, ChartSurface, Record};
use linechart_render_skia::{render_to_png, RenderOptions};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const SIZES: [(f64, f64); 2] = [(800.0, 400.0), (400.0, 400.0)];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Args: [data.csv] [options.json]
    let mut args = std::env::args().skip(1);
    let csv_path = args.next().map(PathBuf::from);
    let options_path = args.next().map(PathBuf::from);

    let (stem, data, columns) = match &csv_path {
        Some(path) => {
            let (data, columns) = load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "chart".into());
            (stem, data, columns)
        }
        None => {
            info!("no CSV given; using built-in sample data");
            let (data, columns) = sample_data();
            ("sample".to_string(), data, columns)
        }
    };
    info!(records = data.len(), columns = columns.len(), "loaded data");
    if data.is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }

    let options = match &options_path {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            ChartOptions::from_json(&text).with_context(|| format!("parsing options {}", p.display()))?
        }
        None => options_from_columns(&columns),
    };
    // Formatters are code, not JSON: ISO dates get short labels, values get digit grouping.
    let options = options.with_format_x(date_label("%b %d")).with_format_y(thousands);
    if !columns.iter().any(|c| *c == options.x_key) {
        warn!(x_key = %options.x_key, "x key not found in CSV header; chart will be empty");
    }

    let out_dir = PathBuf::from("target/out");
    for (w, h) in SIZES {
        let mut chart = ChartSurface::new(options.clone()).with_data(data.clone());
        chart.mount();
        chart.resize(w, h);
        chart.finish_animation();

        let out = out_dir.join(format!("{stem}_{}x{}.png", w as u32, h as u32));
        render_to_png(&chart, &RenderOptions::default(), &out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

/// First column becomes the category key; every other column a series.
fn options_from_columns(columns: &[String]) -> ChartOptions {
    let mut cols = columns.iter();
    let x_key = cols.next().cloned().unwrap_or_else(|| "x".to_string());
    ChartOptions::default().with_x_key(x_key).with_y_keys(cols.cloned())
}

fn load_csv(path: &Path) -> Result<(Vec<Record>, Vec<String>)> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_path(path)?;
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = match rec {
            Ok(r) => r,
            Err(e) => {
                warn!(row, error = %e, "skipping unreadable row");
                continue;
            }
        };
        let fields = headers
            .iter()
            .zip(rec.iter())
            .filter_map(|(h, cell)| parse_cell(cell).map(|v| (h.clone(), v)));
        out.push(record(fields));
    }
    Ok((out, headers))
}

/// Numbers become JSON numbers; empty cells are left out of the record.
fn parse_cell(cell: &str) -> Option<Value> {
    if cell.is_empty() {
        return None;
    }
    match cell.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(json!(n)),
        _ => Some(Value::String(cell.to_string())),
    }
}

fn sample_data() -> (Vec<Record>, Vec<String>) {
    let rows = [
        ("Jan", 120.0, Some(80.0)),
        ("Feb", 135.0, Some(95.0)),
        ("Mar", 128.0, None),
        ("Apr", 160.0, Some(110.0)),
        ("May", 152.0, Some(130.0)),
        ("Jun", 175.0, Some(125.0)),
    ];
    let data = rows
        .iter()
        .map(|&(m, sales, returns)| {
            let mut fields = vec![("month", json!(m)), ("sales", json!(sales))];
            if let Some(r) = returns {
                fields.push(("returns", json!(r)));
            }
            record(fields)
        })
        .collect();
    let columns = ["month", "sales", "returns"].map(String::from).to_vec();
    (data, columns)
}
