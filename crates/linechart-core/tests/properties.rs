// File: crates/linechart-core/tests/properties.rs
// Purpose: Pipeline invariants: point counts, scale monotonicity and endpoints, determinism, no overshoot.

mod common;

use common::{months, mounted, opts, rec};
use linechart_core::{build_scene, ChartOptions, PathCommand, Point2D, Viewport};
use serde_json::json;

fn wavy() -> Vec<linechart_core::Record> {
    let values = [5.0, 20.0, 18.0, 2.0, 2.0, 30.0, 29.0, 31.0, 0.5, 12.0];
    values
        .iter()
        .enumerate()
        .map(|(i, v)| rec(&[("m", json!(format!("d{i}"))), ("v", json!(v)), ("w", json!(v * 0.5))]))
        .collect()
}

#[test]
fn rendered_points_equal_defined_values() {
    let mut data = wavy();
    data[3].remove("v");
    data[7].insert("w".into(), json!(null));
    let chart = mounted(opts(&["v", "w"]), data, 640.0, 480.0);
    let scene = chart.scene().expect("scene");
    assert_eq!(scene.series[0].points.len(), 9);
    assert_eq!(scene.series[1].points.len(), 9);
}

#[test]
fn x_positions_strictly_increase_in_insertion_order() {
    let chart = mounted(opts(&["v"]), wavy(), 640.0, 480.0);
    let scene = chart.scene().expect("scene");
    let xs: Vec<f64> = (0..scene.scales.x.len()).map(|i| scene.scales.x.position(i)).collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
    assert!(xs.iter().all(|&x| x >= 0.0 && x <= scene.scales.inner_width));
}

#[test]
fn value_scale_endpoints_are_exact() {
    for max in [5e-13, 1e-9, 0.3, 7.0, 20.0, 1234.5] {
        let chart = mounted(opts(&["v"]), months(&[("a", max / 2.0), ("b", max)]), 800.0, 400.0);
        let s = chart.scene().expect("scene").scales.clone();
        assert_eq!(s.y.map(0.0), s.inner_height);
        assert_eq!(s.y.map(s.y_max * 1.1), 0.0);
    }
}

#[test]
fn all_zero_values_render_a_flat_baseline() {
    let chart = mounted(opts(&["v"]), months(&[("a", 0.0), ("b", 0.0), ("c", 0.0)]), 800.0, 400.0);
    let scene = chart.scene().expect("scene");
    assert_eq!(scene.scales.y_max, 0.0);
    assert!(scene.scales.y.domain().1 > 0.0);
    for p in &scene.series[0].points {
        assert_eq!(p.y, scene.scales.inner_height);
    }
    assert!(!scene.axes.y_ticks.is_empty());
}

#[test]
fn single_category_sits_in_the_middle() {
    let chart = mounted(opts(&["v"]), months(&[("only", 3.0)]), 800.0, 400.0);
    let scene = chart.scene().expect("scene");
    assert_eq!(scene.series[0].points[0].x, scene.scales.inner_width / 2.0);
    assert_eq!(scene.series[0].path.segment_count(), 0);
}

#[test]
fn identical_inputs_give_identical_geometry() {
    let o = opts(&["v", "w"]);
    let vp = Viewport::new(900.0, 500.0);
    let first = build_scene(&wavy(), &o, vp).expect("scene");
    let second = build_scene(&wavy(), &o, vp).expect("scene");
    assert_eq!(first, second);

    let a = mounted(o.clone(), wavy(), 900.0, 500.0);
    let b = mounted(o, wavy(), 900.0, 500.0);
    assert_eq!(a.scene(), b.scene());
    assert_eq!(a.scene(), Some(&first));
}

#[test]
fn curve_never_overshoots_neighbouring_points() {
    let scene = build_scene(&wavy(), &opts(&["v"]), Viewport::new(800.0, 400.0)).expect("scene");
    let mut cur = Point2D::default();
    let mut cubics = 0;
    for cmd in scene.series[0].path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => cur = p,
            PathCommand::CubicTo { c1, c2, to } => {
                let (lo, hi) = (cur.y.min(to.y) - 1e-9, cur.y.max(to.y) + 1e-9);
                assert!(c1.y >= lo && c1.y <= hi, "c1 {c1:?} outside [{lo}, {hi}]");
                assert!(c2.y >= lo && c2.y <= hi, "c2 {c2:?} outside [{lo}, {hi}]");
                assert!(c1.x >= cur.x && c2.x <= to.x);
                cubics += 1;
                cur = to;
            }
        }
    }
    assert_eq!(cubics, 9);
}

#[test]
fn axes_follow_scales_and_formatters() {
    let o = ChartOptions::default()
        .with_x_key("m")
        .with_y_keys(["v"])
        .with_format_x(|s| s.to_uppercase())
        .with_format_y(|v| format!("${v}"));
    let scene = build_scene(&months(&[("jan", 10.0), ("feb", 20.0)]), &o, Viewport::new(800.0, 400.0)).expect("scene");
    let labels: Vec<&str> = scene.axes.x_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["JAN", "FEB"]);
    let y_labels: Vec<&str> = scene.axes.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(y_labels, ["$0", "$5", "$10", "$15", "$20"]);
    assert_eq!(scene.gridlines.len(), scene.axes.y_ticks.len());
    assert!(scene.gridlines.iter().all(|g| g.x0 == 0.0 && g.x1 == scene.scales.inner_width));

    let no_grid = build_scene(&months(&[("jan", 10.0)]), &o.clone().with_grid(false), Viewport::new(800.0, 400.0)).expect("scene");
    assert!(no_grid.gridlines.is_empty());
}

#[test]
fn legend_only_for_multiple_series() {
    let vp = Viewport::new(800.0, 400.0);
    let single = build_scene(&wavy(), &opts(&["v"]), vp).expect("scene");
    assert!(single.legend.is_empty());

    let multi = build_scene(&wavy(), &opts(&["v", "w"]).with_labels(["Bookings"]), vp).expect("scene");
    assert_eq!(multi.legend.len(), 2);
    assert_eq!(multi.legend[0].label, "Bookings");
    assert_eq!(multi.legend[1].label, "w");
    assert_eq!(multi.legend[0].position.x, multi.legend[1].position.x);
    assert_eq!(multi.legend[1].position.y - multi.legend[0].position.y, 20.0);

    let hidden = build_scene(&wavy(), &opts(&["v", "w"]).with_legend(false), vp).expect("scene");
    assert!(hidden.legend.is_empty());
}
