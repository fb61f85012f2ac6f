use super::*;
use boxcontrol::{BoxControlConfig, BoxValue};

// =============================================================
// Labels and ids
// =============================================================

#[test]
fn target_labels_name_the_addressed_sides() {
    assert_eq!(target_label(ActiveSide::All), "All sides");
    assert_eq!(target_label(Axis::Horizontal.into()), "Left and right");
    assert_eq!(target_label(Side::Bottom.into()), "Bottom");
}

#[test]
fn input_id_appends_target() {
    assert_eq!(input_id("box-control-3", ActiveSide::All), "box-control-3-all");
    assert_eq!(input_id("padding", Axis::Vertical.into()), "padding-vertical");
    assert_eq!(input_id("padding", Side::Left.into()), "padding-left");
}

// =============================================================
// Input text
// =============================================================

#[test]
fn magnitude_text_drops_unit_and_trailing_zero() {
    assert_eq!(magnitude_text(Some(&Quantity::new(10.0, "px"))), "10");
    assert_eq!(magnitude_text(Some(&Quantity::new(1.5, "em"))), "1.5");
}

#[test]
fn magnitude_text_is_empty_for_unset_and_mixed() {
    assert_eq!(magnitude_text(Some(&Quantity::UNSET)), "");
    assert_eq!(magnitude_text(None), "");
}

#[test]
fn placeholder_marks_mixed_only() {
    assert_eq!(placeholder(None), MIXED_PLACEHOLDER);
    assert_eq!(placeholder(Some(&Quantity::UNSET)), "");
}

#[test]
fn should_commit_ignores_whitespace_only_edits() {
    assert!(!should_commit(" 10 ", "10"));
    assert!(should_commit("12", "10"));
    assert!(should_commit("", "10"));
}

fn quiet_controller(start: BoxValue) -> BoxValueController<impl FnMut(&BoxValue)> {
    BoxValueController::new(Some(start), BoxControlConfig::default(), |_: &BoxValue| {})
}

#[test]
fn clamped_commit_settles_draft_so_blur_does_not_recommit() {
    let mut notified = Vec::new();
    let mut c = BoxValueController::new(
        Some(BoxValue::uniform(Quantity::new(0.0, "px"))),
        BoxControlConfig::default(),
        |next: &BoxValue| notified.push(next.clone()),
    );

    // Enter: "-5" clamps back to 0, the text the field already showed.
    let settled = commit_draft(&mut c, ActiveSide::All, "-5");
    assert_eq!(settled, "0");
    // Blur right after commits the settled draft, which is a no-op.
    assert_eq!(commit_draft(&mut c, ActiveSide::All, &settled), "0");
    drop(c);
    assert_eq!(notified, vec![BoxValue::uniform(Quantity::new(0.0, "px"))]);
}

#[test]
fn commit_draft_with_typed_unit_settles_to_magnitude() {
    let mut c = quiet_controller(BoxValue::uniform(Quantity::new(10.0, "px")));
    assert_eq!(commit_draft(&mut c, ActiveSide::All, "10em"), "10");
    assert_eq!(c.value(), &BoxValue::uniform(Quantity::new(10.0, "em")));
}

#[test]
fn commit_draft_matching_display_does_not_notify() {
    let mut notified = 0;
    let mut c = BoxValueController::new(None, BoxControlConfig::default(), |_: &BoxValue| notified += 1);
    c.commit_input(ActiveSide::All, "4");
    assert_eq!(commit_draft(&mut c, ActiveSide::All, " 4 "), "4");
    drop(c);
    assert_eq!(notified, 1);
}

// =============================================================
// Layout and highlighting
// =============================================================

#[test]
fn axes_for_skips_axes_without_configured_sides() {
    assert_eq!(axes_for(SideSet::all()), vec![Axis::Vertical, Axis::Horizontal]);
    assert_eq!(axes_for(SideSet::only(Side::Left)), vec![Axis::Horizontal]);
    assert!(axes_for(SideSet::empty()).is_empty());
}

#[test]
fn side_highlighted_follows_active_coverage() {
    let sides = SideSet::all();
    assert!(side_highlighted(Side::Left, ActiveSide::All, sides));
    assert!(side_highlighted(Side::Top, Axis::Vertical.into(), sides));
    assert!(!side_highlighted(Side::Left, Axis::Vertical.into(), sides));
    assert!(!side_highlighted(Side::Right, Side::Top.into(), sides));
}

#[test]
fn side_highlighted_ignores_unconfigured_sides() {
    let sides = SideSet::from_sides([Side::Top, Side::Bottom]);
    assert!(!side_highlighted(Side::Left, ActiveSide::All, sides));
}

#[test]
fn class_names_carry_modifiers() {
    assert_eq!(input_row_class(false), "box-control__input-row");
    assert!(input_row_class(true).ends_with("--active"));
    assert_eq!(
        visualizer_side_class(Side::Top, true),
        "box-control__visualizer-side box-control__visualizer-side--top box-control__visualizer-side--active"
    );
    assert_eq!(link_button_class(false), "box-control__link");
    assert_eq!(link_button_title(true), "Unlink sides");
}
