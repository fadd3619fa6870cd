// File: crates/linechart-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests.
#![allow(dead_code)]

use linechart_core::{record, ChartOptions, ChartSurface, Record};
use serde_json::{json, Value};

pub fn months(values: &[(&str, f64)]) -> Vec<Record> {
    values.iter().map(|&(m, v)| record([("m", json!(m)), ("v", json!(v))])).collect()
}

pub fn rec(fields: &[(&str, Value)]) -> Record {
    record(fields.iter().cloned())
}

pub fn opts(y_keys: &[&str]) -> ChartOptions {
    ChartOptions::default().with_x_key("m").with_y_keys(y_keys.iter().copied())
}

/// Mounted, measured chart.
pub fn mounted(options: ChartOptions, data: Vec<Record>, w: f64, h: f64) -> ChartSurface {
    let mut chart = ChartSurface::new(options).with_data(data);
    chart.mount();
    chart.resize(w, h);
    chart
}
