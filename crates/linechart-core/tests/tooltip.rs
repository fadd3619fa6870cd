// File: crates/linechart-core/tests/tooltip.rs
// Purpose: Hover state machine transitions, both standalone and driven through the chart surface.

mod common;

use common::{months, mounted, opts};
use linechart_core::{
    Color, DisplayList, HoverTarget, Point2D, TooltipContent, TooltipController, TooltipState,
};

fn target(x: &str, slot: usize) -> HoverTarget {
    HoverTarget { series_key: "v".into(), x_label: x.into(), slot }
}

fn content(x: &str) -> TooltipContent {
    TooltipContent { title: x.into(), series_label: "v".into(), value: "1".into(), color: Color::from_rgb(0, 0, 0) }
}

#[test]
fn hide_when_hidden_is_a_no_op() {
    let mut t = TooltipController::new(true);
    t.hide();
    t.leave(&target("Jan", 0));
    assert_eq!(t.state(), &TooltipState::Hidden);
}

#[test]
fn moving_between_markers_needs_no_hidden_frame() {
    let mut t = TooltipController::new(true);
    t.enter(target("Jan", 0), content("Jan"), Point2D::new(10.0, 50.0));
    assert!(t.is_visible());
    t.enter(target("Feb", 1), content("Feb"), Point2D::new(14.0, 50.0));
    assert_eq!(t.target(), Some(&target("Feb", 1)));
    // late leave event for the previous marker must not hide the new one
    t.leave(&target("Jan", 0));
    assert_eq!(t.target(), Some(&target("Feb", 1)));
    t.leave(&target("Feb", 1));
    assert!(!t.is_visible());
}

#[test]
fn view_is_offset_right_and_up() {
    let mut t = TooltipController::new(true);
    t.enter(target("Jan", 0), content("Jan"), Point2D::new(100.0, 100.0));
    t.moved(Point2D::new(120.0, 90.0));
    let v = t.view().expect("visible");
    assert_eq!((v.x, v.y), (130.0, 60.0));
    assert_eq!(v.content.title, "Jan");
}

#[test]
fn disabled_controller_never_shows() {
    let mut t = TooltipController::new(false);
    t.enter(target("Jan", 0), content("Jan"), Point2D::new(1.0, 1.0));
    assert!(!t.is_visible());
}

#[test]
fn surface_hover_shows_formatted_content() {
    let o = opts(&["v"]).with_labels(["Bookings"]).with_format_y(|v| format!("{v:.1}"));
    let mut chart = mounted(o, months(&[("Jan", 10.0), ("Feb", 20.0), ("Mar", 15.0)]), 800.0, 400.0);
    let feb = chart
        .scene()
        .and_then(|s| s.hit_regions.iter().find(|r| r.target.x_label == "Feb"))
        .map(|r| r.center)
        .expect("feb marker");

    chart.pointer_move(feb.x + 2.0, feb.y - 1.0);
    match chart.tooltip() {
        TooltipState::Visible { target, content, .. } => {
            assert_eq!(target.x_label, "Feb");
            assert_eq!(content.title, "Feb");
            assert_eq!(content.series_label, "Bookings");
            assert_eq!(content.value, "20.0");
        }
        TooltipState::Hidden => panic!("tooltip should be visible"),
    }

    let mut list = DisplayList::new();
    chart.draw(&mut list);
    assert!(list.texts().any(|t| t == "Bookings: 20.0"));

    chart.pointer_move(feb.x + 200.0, feb.y + 200.0);
    assert_eq!(chart.tooltip(), &TooltipState::Hidden);
    chart.pointer_leave();
    chart.pointer_leave();
    assert_eq!(chart.tooltip(), &TooltipState::Hidden);
}

#[test]
fn tooltips_off_attaches_no_hit_areas() {
    let mut chart = mounted(opts(&["v"]).with_tooltip(false), months(&[("Jan", 10.0)]), 800.0, 400.0);
    let scene = chart.scene().expect("scene");
    assert!(scene.hit_regions.is_empty());
    let p = scene.series[0].points[0].clone();
    chart.pointer_move(p.x + 40.0, p.y + 20.0);
    assert_eq!(chart.tooltip(), &TooltipState::Hidden);
    let mut list = DisplayList::new();
    chart.draw(&mut list);
    assert_eq!(list.hit_regions().count(), 0);
}

#[test]
fn hover_survives_rerender_only_if_point_remains() {
    let mut chart = mounted(opts(&["v"]), months(&[("Jan", 10.0), ("Feb", 20.0)]), 800.0, 400.0);
    let center = chart.scene().expect("scene").hit_regions[1].center;
    chart.pointer_move(center.x, center.y);
    assert!(chart.tooltip_controller().is_visible());

    chart.set_data(months(&[("Jan", 11.0), ("Feb", 25.0)]));
    match chart.tooltip() {
        TooltipState::Visible { content, .. } => assert_eq!(content.value, "25"),
        TooltipState::Hidden => panic!("hovered point still present"),
    }

    chart.set_data(months(&[("Jan", 11.0)]));
    assert_eq!(chart.tooltip(), &TooltipState::Hidden);
}

#[test]
fn repeated_category_markers_show_their_own_values() {
    let mut chart = mounted(opts(&["v"]), months(&[("Jan", 5.0), ("Feb", 10.0), ("Feb", 40.0)]), 800.0, 400.0);
    let regions = chart.scene().expect("scene").hit_regions.clone();
    assert_eq!(regions.len(), 3);
    assert_ne!(regions[1].target, regions[2].target);

    chart.pointer_move(regions[2].center.x, regions[2].center.y);
    match chart.tooltip() {
        TooltipState::Visible { target, content, .. } => {
            assert_eq!(target.slot, 2);
            assert_eq!(content.title, "Feb");
            assert_eq!(content.value, "40");
        }
        TooltipState::Hidden => panic!("tooltip should be visible"),
    }

    chart.pointer_move(regions[1].center.x, regions[1].center.y);
    match chart.tooltip() {
        TooltipState::Visible { content, .. } => assert_eq!(content.value, "10"),
        TooltipState::Hidden => panic!("tooltip should be visible"),
    }
}
