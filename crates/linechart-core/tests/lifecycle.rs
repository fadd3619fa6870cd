// File: crates/linechart-core/tests/lifecycle.rs
// Purpose: Mount/measure/unmount races, animation restarts and frame sampling.

mod common;

use common::{months, mounted, opts};
use linechart_core::{ChartSurface, DisplayList, Viewport};

fn sample() -> Vec<linechart_core::Record> {
    months(&[("Jan", 10.0), ("Feb", 20.0), ("Mar", 15.0), ("Apr", 12.0)])
}

#[test]
fn measurement_before_mount_or_after_unmount_is_ignored() {
    let mut chart = ChartSurface::new(opts(&["v"])).with_data(sample());
    chart.resize(800.0, 400.0);
    assert_eq!(chart.viewport(), None);

    chart.mount();
    let ticket = chart.request_measure();
    chart.unmount();
    chart.on_measured(ticket, 800.0, 400.0);
    chart.resize(800.0, 400.0);
    assert_eq!(chart.viewport(), None);
    assert!(chart.scene().is_none());

    chart.mount();
    chart.on_measured(ticket, 800.0, 400.0);
    assert_eq!(chart.viewport(), None);
    let fresh = chart.request_measure();
    chart.on_measured(fresh, 800.0, 400.0);
    assert_eq!(chart.viewport(), Some(Viewport::new(800.0, 400.0)));
    assert!(chart.scene().is_some());
}

#[test]
fn older_measurement_arriving_late_is_dropped() {
    let mut chart = ChartSurface::new(opts(&["v"])).with_data(sample());
    chart.mount();
    let first = chart.request_measure();
    let second = chart.request_measure();
    chart.on_measured(second, 800.0, 400.0);
    chart.on_measured(first, 300.0, 200.0);
    assert_eq!(chart.viewport(), Some(Viewport::new(800.0, 400.0)));
}

#[test]
fn unknown_or_zero_size_renders_nothing() {
    let chart = mounted(opts(&["v"]), sample(), 0.0, 0.0);
    assert!(chart.scene().is_none());
    let tiny = mounted(opts(&["v"]), sample(), 50.0, 40.0);
    assert!(tiny.scene().is_none());
}

#[test]
fn same_size_does_not_rerender() {
    let mut chart = mounted(opts(&["v"]), sample(), 800.0, 400.0);
    let n = chart.render_count();
    chart.resize(800.0, 400.0);
    assert_eq!(chart.render_count(), n);
    chart.resize(801.0, 400.0);
    assert_eq!(chart.render_count(), n + 1);
}

#[test]
fn animation_starts_empty_and_ends_complete() {
    let mut chart = mounted(opts(&["v"]).with_animation_duration(1000.0), sample(), 800.0, 400.0);
    assert!(chart.is_animating());
    let start = chart.frame().expect("frame");
    assert_eq!(start.series[0].reveal_length, 0.0);
    assert!(start.series[0].radii.iter().all(|&r| r == 0.0));

    chart.advance(500.0);
    let mid = chart.frame().expect("frame");
    let full = chart.scene().expect("scene").series[0].path.length();
    assert!((mid.series[0].reveal_length - full / 2.0).abs() < 1e-9);
    // first point is grown, last has not started (starts at 750ms)
    assert_eq!(mid.series[0].radii[0], 4.0);
    assert_eq!(mid.series[0].radii[3], 0.0);

    chart.advance(1000.0);
    assert!(!chart.is_animating());
    let end = chart.frame().expect("frame");
    assert_eq!(end.series[0].reveal_length, full);
    assert!(end.series[0].radii.iter().all(|&r| r == 4.0));
}

#[test]
fn finishing_animation_grows_every_staggered_point() {
    let data = months(&[("a", 1.0), ("b", 4.0), ("c", 2.0), ("d", 6.0), ("e", 3.0), ("f", 5.0)]);
    let mut chart = mounted(opts(&["v"]).with_animation_duration(1000.0), data, 800.0, 400.0);
    // the last point starts at 5/6 of the total and grows for half of it
    chart.advance(1000.0);
    assert!(chart.is_animating());
    assert!(chart.frame().expect("frame").series[0].radii[5] < 4.0);

    chart.finish_animation();
    assert!(!chart.is_animating());
    let end = chart.frame().expect("frame");
    assert_eq!(end.series[0].reveal_length, chart.scene().expect("scene").series[0].path.length());
    assert!(end.series[0].radii.iter().all(|&r| r == 4.0));
}

#[test]
fn new_data_restarts_animation() {
    let mut chart = mounted(opts(&["v"]).with_animation_duration(400.0), sample(), 800.0, 400.0);
    chart.advance(10_000.0);
    assert!(!chart.is_animating());
    chart.set_data(months(&[("Jan", 1.0), ("Feb", 2.0)]));
    assert!(chart.is_animating());
    assert_eq!(chart.frame().expect("frame").series[0].reveal_length, 0.0);
}

#[test]
fn options_change_reruns_pipeline() {
    let mut chart = mounted(opts(&["v"]), sample(), 800.0, 400.0);
    assert!(chart.scene().expect("scene").legend.is_empty());
    let n = chart.render_count();
    chart.set_options(opts(&["v", "v"]).with_theme("dark"));
    assert_eq!(chart.render_count(), n + 1);
    assert_eq!(chart.theme().name, "dark");
    assert_eq!(chart.scene().expect("scene").legend.len(), 2);
}

#[test]
fn drawing_mid_animation_emits_partial_geometry() {
    let mut chart = mounted(opts(&["v"]).with_animation_duration(1000.0), sample(), 800.0, 400.0);
    let mut before = DisplayList::new();
    chart.draw(&mut before);
    assert_eq!(before.circles().count(), 0);

    chart.advance(2000.0);
    let mut after = DisplayList::new();
    chart.draw(&mut after);
    assert_eq!(after.circles().count(), 4);
    assert_eq!(after.hit_regions().count(), 4);
    assert!(after.texts().any(|t| t == "Mar"));
}
