use scale_anchor::api::{Adjustment, ConstraintGroup, GroupOutcome, enforce_axis_constraints};
use scale_anchor::core::{Axis, AxisId, AxisLayout, PlotArea, ShrinkState};
use scale_anchor::error::ConstraintError;

fn id(raw: &str) -> AxisId {
    AxisId::parse(raw).expect("axis id")
}

fn layout_with(axes: Vec<Axis>) -> AxisLayout {
    let mut layout = AxisLayout::new(PlotArea::new(1000.0, 1000.0).expect("plot area"));
    for axis in axes {
        layout.insert(axis).expect("insert axis");
    }
    layout
}

fn axis(raw: &str, range: (f64, f64)) -> Axis {
    Axis::new(id(raw), (0.0, 1.0), range).expect("axis")
}

fn group(members: &[(&str, f64)]) -> ConstraintGroup {
    members
        .iter()
        .map(|(raw, weight)| (id(raw), *weight))
        .collect()
}

#[test]
fn range_mode_widens_the_finer_axis() {
    // x at 100px/unit, y at 200px/unit
    let mut layout = layout_with(vec![axis("x", (0.0, 10.0)), axis("y", (0.0, 5.0))]);
    let groups = [group(&[("x", 1.0), ("y", 1.0)])];

    let report = enforce_axis_constraints(&mut layout, &groups).expect("enforce");

    let x = layout.axis(&id("x")).expect("x");
    let y = layout.axis(&id("y")).expect("y");
    assert_eq!(x.range(), (0.0, 10.0));
    assert_eq!(y.range(), (-2.5, 7.5));
    assert_eq!(y.domain(), (0.0, 1.0));
    assert_eq!(y.applied().range, (-2.5, 7.5));
    assert_eq!(x.scale(), 100.0);
    assert_eq!(y.scale(), -100.0);

    assert_eq!(
        report.adjustment_for(&id("y")),
        Some(Adjustment::RangeZoom { factor: 2.0 })
    );
    assert_eq!(report.adjustment_for(&id("x")), None);
    assert_eq!(report.groups[0].match_scale, 100.0);
}

#[test]
fn second_enforcement_is_a_noop() {
    let mut layout = layout_with(vec![axis("x", (0.0, 10.0)), axis("y", (0.0, 5.0))]);
    let groups = [group(&[("x", 1.0), ("y", 1.0)])];

    enforce_axis_constraints(&mut layout, &groups).expect("first enforce");
    let after_first = layout.snapshot();
    let report = enforce_axis_constraints(&mut layout, &groups).expect("second enforce");

    assert!(report.is_noop());
    assert_eq!(layout.snapshot(), after_first);
}

#[test]
fn weights_set_the_relative_scale() {
    let mut layout = layout_with(vec![axis("x", (0.0, 10.0)), axis("y", (0.0, 10.0))]);
    let groups = [group(&[("x", 1.0), ("y", 2.0)])];

    enforce_axis_constraints(&mut layout, &groups).expect("enforce");

    let x = layout.axis(&id("x")).expect("x");
    let y = layout.axis(&id("y")).expect("y");
    assert_eq!(x.range(), (-5.0, 15.0));
    assert_eq!(y.range(), (0.0, 10.0));
    assert_eq!(y.scale().abs(), 2.0 * x.scale().abs());
}

#[test]
fn inverted_ranges_stay_inverted() {
    let mut layout = layout_with(vec![axis("x", (10.0, 0.0)), axis("y", (0.0, 20.0))]);
    let groups = [group(&[("x", 1.0), ("y", 1.0)])];

    enforce_axis_constraints(&mut layout, &groups).expect("enforce");

    let x = layout.axis(&id("x")).expect("x");
    assert_eq!(x.range(), (15.0, -5.0));
    assert_eq!(x.scale(), -50.0);
}

#[test]
fn provisionally_shrunk_axes_do_not_set_the_target() {
    let mut layout = layout_with(vec![axis("x", (0.0, 10.0)), axis("y", (0.0, 20.0))]);
    layout
        .mark_provisionally_shrunk(&id("y"))
        .expect("mark y shrunk");
    let groups = [group(&[("x", 1.0), ("y", 1.0)])];

    let report = enforce_axis_constraints(&mut layout, &groups).expect("enforce");

    let x = layout.axis(&id("x")).expect("x");
    let y = layout.axis(&id("y")).expect("y");
    assert_eq!(report.groups[0].match_scale, 100.0);
    assert_eq!(x.range(), (0.0, 10.0));
    assert_eq!(y.range(), (5.0, 15.0));
    assert_eq!(y.shrink_state(), ShrinkState::Fresh);
}

#[test]
fn shrink_marker_is_consumed_even_when_group_is_satisfied() {
    let mut layout = layout_with(vec![axis("x", (0.0, 10.0)), axis("y", (0.0, 10.0))]);
    layout.mark_provisionally_shrunk(&id("x")).expect("mark x");
    let groups = [group(&[("x", 1.0), ("y", 1.0)])];

    let report = enforce_axis_constraints(&mut layout, &groups).expect("enforce");

    assert!(report.is_noop());
    let x = layout.axis(&id("x")).expect("x");
    assert_eq!(x.shrink_state(), ShrinkState::Fresh);
}

#[test]
fn fully_shrunk_group_matches_its_minimum() {
    let mut layout = layout_with(vec![axis("x", (0.0, 10.0)), axis("y", (0.0, 20.0))]);
    layout.mark_provisionally_shrunk(&id("x")).expect("mark x");
    layout.mark_provisionally_shrunk(&id("y")).expect("mark y");
    let groups = [group(&[("x", 1.0), ("y", 1.0)])];

    let report = enforce_axis_constraints(&mut layout, &groups).expect("enforce");

    assert_eq!(report.groups[0].match_scale, 50.0);
    let x = layout.axis(&id("x")).expect("x");
    assert_eq!(x.range(), (-5.0, 15.0));
}

#[test]
fn empty_and_single_member_groups_are_noops() {
    let mut layout = layout_with(vec![axis("x", (0.0, 10.0)), axis("y", (0.0, 5.0))]);
    let groups = [ConstraintGroup::new(), group(&[("x", 1.0)])];

    let report = enforce_axis_constraints(&mut layout, &groups).expect("enforce");

    assert!(report.is_noop());
    assert!(
        report
            .groups
            .iter()
            .all(|group| group.outcome == GroupOutcome::Satisfied)
    );
    assert_eq!(layout.axis(&id("x")).expect("x").range(), (0.0, 10.0));
}

#[test]
fn independent_groups_are_enforced_separately() {
    let mut layout = layout_with(vec![
        axis("x", (0.0, 10.0)),
        axis("y", (0.0, 5.0)),
        axis("x2", (0.0, 4.0)),
        axis("y2", (0.0, 8.0)),
    ]);
    let groups = [
        group(&[("x", 1.0), ("y", 1.0)]),
        group(&[("x2", 1.0), ("y2", 1.0)]),
    ];

    let report = enforce_axis_constraints(&mut layout, &groups).expect("enforce");

    let adjusted: Vec<&str> = report.adjusted_axes().map(AxisId::as_str).collect();
    assert_eq!(adjusted, vec!["y", "x2"]);
    assert_eq!(layout.axis(&id("x2")).expect("x2").range(), (-2.0, 6.0));
}

#[test]
fn unknown_axis_fails_before_any_mutation() {
    let mut layout = layout_with(vec![axis("x", (0.0, 10.0)), axis("y", (0.0, 5.0))]);
    let groups = [
        group(&[("x", 1.0), ("y", 1.0)]),
        group(&[("x2", 1.0), ("y", 1.0)]),
    ];

    let result = enforce_axis_constraints(&mut layout, &groups);

    assert!(matches!(
        result,
        Err(ConstraintError::UnknownAxis { id: ref missing }) if missing == "x2"
    ));
    let y = layout.axis(&id("y")).expect("y");
    assert_eq!(y.range(), (0.0, 5.0));
    assert_eq!(y.pass_snapshot(), None);
}

#[test]
fn non_positive_weights_are_rejected() {
    let mut layout = layout_with(vec![axis("x", (0.0, 10.0)), axis("y", (0.0, 5.0))]);
    for weight in [0.0, -1.0, f64::NAN] {
        let groups = [group(&[("x", 1.0), ("y", weight)])];
        let result = enforce_axis_constraints(&mut layout, &groups);
        assert!(matches!(result, Err(ConstraintError::InvalidWeight { .. })));
    }
}

#[test]
fn an_axis_may_only_join_one_group() {
    let mut layout = layout_with(vec![
        axis("x", (0.0, 10.0)),
        axis("y", (0.0, 5.0)),
        axis("y2", (0.0, 5.0)),
    ]);
    let groups = [
        group(&[("x", 1.0), ("y", 1.0)]),
        group(&[("x", 1.0), ("y2", 1.0)]),
    ];

    let result = enforce_axis_constraints(&mut layout, &groups);
    assert!(matches!(result, Err(ConstraintError::InvalidData(_))));
}
