//! Pure presentation helpers for the box control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components stay thin: labels, class names, and input text are derived here
//! from controller queries so they can be unit-tested without a browser.

#[cfg(test)]
#[path = "box_view_test.rs"]
mod box_view_test;

use boxcontrol::edit::covered_sides;
use boxcontrol::{ActiveSide, Axis, BoxValueController, Quantity, Side, SideSet, ValueOwner};

/// Placeholder shown when the covered sides disagree.
pub const MIXED_PLACEHOLDER: &str = "Mixed";

/// Human label for an input addressing `target`.
pub fn target_label(target: ActiveSide) -> &'static str {
    match target {
        ActiveSide::All => "All sides",
        ActiveSide::Axis(Axis::Vertical) => "Top and bottom",
        ActiveSide::Axis(Axis::Horizontal) => "Left and right",
        ActiveSide::Side(Side::Top) => "Top",
        ActiveSide::Side(Side::Right) => "Right",
        ActiveSide::Side(Side::Bottom) => "Bottom",
        ActiveSide::Side(Side::Left) => "Left",
    }
}

/// DOM id for an input, derived from the control's instance id.
pub fn input_id(base: &str, target: ActiveSide) -> String {
    format!("{base}-{target}")
}

/// Text for the magnitude field. Unset and mixed values both render empty.
pub fn magnitude_text(value: Option<&Quantity>) -> String {
    value.and_then(|q| q.magnitude).map(|m| Quantity::unitless(m).to_string()).unwrap_or_default()
}

/// Placeholder for the magnitude field.
pub fn placeholder(value: Option<&Quantity>) -> &'static str {
    if value.is_none() { MIXED_PLACEHOLDER } else { "" }
}

/// Commit only when the draft differs from what the field last displayed.
///
/// Enter followed by blur would otherwise notify the owner twice.
pub fn should_commit(draft: &str, displayed: &str) -> bool {
    draft.trim() != displayed.trim()
}

/// Commit `draft` for `target` and return the text the field should show next.
///
/// The returned text always mirrors the stored value, so a draft that was
/// clamped or re-united does not linger and commit again on the next blur.
pub fn commit_draft<O: ValueOwner>(controller: &mut BoxValueController<O>, target: ActiveSide, draft: &str) -> String {
    let displayed = magnitude_text(controller.display_value(target).as_ref());
    if !should_commit(draft, &displayed) {
        return displayed;
    }
    controller.commit_input(target, draft);
    magnitude_text(controller.display_value(target).as_ref())
}

/// Axes that have at least one configured side, in display order.
pub fn axes_for(sides: SideSet) -> Vec<Axis> {
    [Axis::Vertical, Axis::Horizontal]
        .into_iter()
        .filter(|axis| !covered_sides(ActiveSide::Axis(*axis), sides).is_empty())
        .collect()
}

/// Whether the visualizer should highlight `side` for the active affordance.
pub fn side_highlighted(side: Side, active: ActiveSide, sides: SideSet) -> bool {
    covered_sides(active, sides).contains(side)
}

pub fn input_row_class(active: bool) -> &'static str {
    if active { "box-control__input-row box-control__input-row--active" } else { "box-control__input-row" }
}

pub fn visualizer_side_class(side: Side, highlighted: bool) -> String {
    let mut class = format!("box-control__visualizer-side box-control__visualizer-side--{side}");
    if highlighted {
        class.push_str(" box-control__visualizer-side--active");
    }
    class
}

pub fn link_button_class(linked: bool) -> &'static str {
    if linked { "box-control__link box-control__link--linked" } else { "box-control__link" }
}

pub fn link_button_title(linked: bool) -> &'static str {
    if linked { "Unlink sides" } else { "Link sides" }
}
