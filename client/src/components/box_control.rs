//! Four-sided dimension editor (padding, margin, border width).
//!
//! ARCHITECTURE
//! ============
//! The component owns a `BoxValueController` inside a `RwSignal`. DOM events
//! map one-to-one onto controller operations; every visual state (layout,
//! highlighted side, reset availability) is read back from controller queries.
//! When the parent supplies `values`, an effect re-synchronizes the controller
//! whenever that signal changes.

use boxcontrol::{ActiveSide, BoxControlConfig, BoxValue, BoxValueController, LayoutMode, Side, SideSet, ValueOwner};
use leptos::prelude::*;

use crate::util::box_view::{
    axes_for, commit_draft, input_id, input_row_class, link_button_class, link_button_title, magnitude_text, placeholder,
    should_commit, side_highlighted, target_label, visualizer_side_class,
};

/// Forwards controller notifications to the parent's callback.
#[derive(Clone, Copy)]
pub struct ChangeNotifier(Callback<BoxValue>);

impl ValueOwner for ChangeNotifier {
    fn on_change(&mut self, next: &BoxValue) {
        self.0.run(next.clone());
    }
}

pub type Controller = BoxValueController<ChangeNotifier>;

/// Box control with linked, axis-split, and per-side editing.
#[component]
pub fn BoxControl(
    /// Current value when the parent controls it.
    #[prop(into, optional)]
    values: MaybeProp<BoxValue>,
    #[prop(into)] on_change: Callback<BoxValue>,
    #[prop(optional)] config: Option<BoxControlConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let sides = config.sides;
    let label = config.label.clone();
    let controller = RwSignal::new(BoxValueController::new(
        values.get_untracked(),
        config,
        ChangeNotifier(on_change),
    ));

    Effect::new(move || {
        let external = values.get();
        controller.maybe_update(|c| c.sync_external(external));
    });

    let id = controller.with_untracked(|c| c.id().to_owned());
    let all_id = input_id(&id, ActiveSide::All);
    let reset_visible = controller.with_untracked(Controller::reset_visible);
    let shows_link_toggle = controller.with_untracked(Controller::shows_link_toggle);

    let inputs = move || match controller.with(Controller::layout) {
        LayoutMode::Linked => view! { <QuantityInput controller=controller target=ActiveSide::All /> }.into_any(),
        LayoutMode::Axial => axes_for(sides)
            .into_iter()
            .map(|axis| view! { <QuantityInput controller=controller target=axis.into() /> })
            .collect_view()
            .into_any(),
        LayoutMode::PerSide => sides
            .iter()
            .map(|side| view! { <QuantityInput controller=controller target=side.into() /> })
            .collect_view()
            .into_any(),
    };

    view! {
        <fieldset class="box-control" id=id>
            <div class="box-control__header">
                <label class="box-control__label" for=all_id>{label}</label>
                {reset_visible.then(move || view! {
                    <button
                        class="box-control__reset"
                        disabled=move || !controller.with(Controller::can_reset)
                        on:click=move |_| controller.update(Controller::reset)
                    >
                        "Reset"
                    </button>
                })}
            </div>
            <div class="box-control__body">
                <SideVisualizer
                    sides=sides
                    active=Signal::derive(move || controller.with(Controller::active_side))
                />
                <div class="box-control__inputs">{inputs}</div>
                {shows_link_toggle.then(move || view! { <LinkToggle controller=controller /> })}
            </div>
        </fieldset>
    }
}

/// Magnitude field plus unit dropdown for one target.
#[component]
fn QuantityInput(controller: RwSignal<Controller>, target: ActiveSide) -> impl IntoView {
    let id = controller.with_untracked(|c| input_id(c.id(), target));
    let units: Vec<String> = controller.with_untracked(|c| c.config().units.iter().map(str::to_owned).collect());

    let displayed = Memo::new(move |_| controller.with(|c| magnitude_text(c.display_value(target).as_ref())));
    let draft = RwSignal::new(String::new());
    Effect::new(move || draft.set(displayed.get()));

    let commit = move || {
        let raw = draft.get_untracked();
        if should_commit(&raw, &displayed.get_untracked()) {
            let settled = controller.try_update(|c| commit_draft(c, target, &raw)).unwrap_or_default();
            draft.set(settled);
        }
    };
    let is_active = move || controller.with(|c| c.active_side() == target);
    let mixed_placeholder = move || controller.with(|c| placeholder(c.display_value(target).as_ref()));
    let selected_unit = move || controller.with(|c| c.unit_for(target)).unwrap_or_default();

    view! {
        <div class=move || input_row_class(is_active())>
            <label class="box-control__input-label" for=id.clone()>{target_label(target)}</label>
            <input
                id=id
                class="box-control__input"
                inputmode="decimal"
                placeholder=mixed_placeholder
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:focus=move |_| controller.update(|c| c.focus_side(target))
                on:change=move |_| commit()
                on:blur=move |_| commit()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        commit();
                    }
                }
            />
            <select
                class="box-control__unit"
                aria-label="Select unit"
                prop:value=selected_unit
                on:change=move |ev| {
                    let unit = event_target_value(&ev);
                    controller.update(|c| c.select_unit(target, &unit));
                }
            >
                {units
                    .into_iter()
                    .map(|unit| {
                        let text = unit.clone();
                        view! { <option value=unit>{text}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Four-edge diagram highlighting the sides the active input edits.
#[component]
fn SideVisualizer(sides: SideSet, active: Signal<ActiveSide>) -> impl IntoView {
    view! {
        <div class="box-control__visualizer" aria-hidden="true">
            {Side::ALL
                .into_iter()
                .map(|side| {
                    view! {
                        <span class=move || visualizer_side_class(side, side_highlighted(side, active.get(), sides))></span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn LinkToggle(controller: RwSignal<Controller>) -> impl IntoView {
    let linked = move || controller.with(Controller::is_linked);
    view! {
        <button
            class=move || link_button_class(linked())
            title=move || link_button_title(linked())
            aria-pressed=move || linked().to_string()
            on:click=move |_| controller.update(Controller::toggle_link)
        >
            {move || if linked() { "🔗" } else { "⛓" }}
        </button>
    }
}
