// File: crates/linechart-core/src/series.rs
// Summary: Series model derived from records, and the geometry builder (smoothed path + markers).
// Notes:
// - A value that is missing or non-numeric ends the current run of the path; the next defined
//   value starts a new subpath, so gaps stay visible instead of being bridged.
// - Records without an x value are not on the axis at all and are skipped without breaking a run.

use crate::curve::monotone_x;
use crate::geometry::Point2D;
use crate::options::ChartOptions;
use crate::path::Path;
use crate::record::{x_label, y_value, Record};
use crate::scale::{LinearScale, PointScale};
use crate::types::Color;

/// Identity and styling of one series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSpec {
    pub key: String,
    pub label: String,
    pub color: Color,
}

impl SeriesSpec {
    /// One spec per configured y-key, with label fallback and color cycling applied.
    pub fn from_options(opts: &ChartOptions) -> Vec<SeriesSpec> {
        opts.y_keys
            .iter()
            .enumerate()
            .map(|(i, key)| SeriesSpec {
                key: key.clone(),
                label: opts.series_label(i),
                color: opts.series_color(i),
            })
            .collect()
    }
}

/// A defined value of a series. `slot` is the record's position among records carrying an x value.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub x: String,
    pub value: f64,
    pub slot: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub spec: SeriesSpec,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn from_records(spec: SeriesSpec, data: &[Record], x_key: &str) -> Self {
        let points: Vec<SeriesPoint> = data
            .iter()
            .filter_map(|r| x_label(r, x_key).map(|x| (x, r)))
            .enumerate()
            .filter_map(|(slot, (x, r))| y_value(r, &spec.key).map(|value| SeriesPoint { x, value, slot }))
            .collect();
        Self { spec, points }
    }

    /// Defined points split wherever a slot was skipped.
    pub fn runs(&self) -> Vec<&[SeriesPoint]> {
        let mut runs = Vec::new();
        let mut start = 0;
        for i in 1..=self.points.len() {
            let broken = i == self.points.len() || self.points[i].slot != self.points[i - 1].slot + 1;
            if broken {
                runs.push(&self.points[start..i]);
                start = i;
            }
        }
        runs
    }
}

/// A drawn marker, in inner-area pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub raw_value: f64,
    pub x_label: String,
    /// Position of the source record among records carrying an x value.
    pub slot: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesGeometry {
    pub spec: SeriesSpec,
    pub path: Path,
    pub points: Vec<PlotPoint>,
}

/// Project a series through the scales and fit a monotone curve through each run.
pub fn build_geometry(series: &Series, x: &PointScale, y: &LinearScale) -> SeriesGeometry {
    let mut path = Path::new();
    let mut points = Vec::with_capacity(series.points.len());
    for run in series.runs() {
        let projected: Vec<PlotPoint> = run
            .iter()
            .filter_map(|p| {
                x.map(&p.x).map(|px| PlotPoint {
                    x: px,
                    y: y.map(p.value),
                    raw_value: p.value,
                    x_label: p.x.clone(),
                    slot: p.slot,
                })
            })
            .collect();
        let coords: Vec<Point2D> = projected.iter().map(|p| Point2D::new(p.x, p.y)).collect();
        monotone_x(&coords, &mut path);
        points.extend(projected);
    }
    SeriesGeometry { spec: series.spec.clone(), path, points }
}
