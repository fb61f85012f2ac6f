//! Demo sidebar hosting box controls and the preferences modal.
//!
//! Padding is controlled by the page; margin is left uncontrolled and only
//! mirrored into a readout through `on_change`.

use boxcontrol::prefs::{ModalHost, ModalStack};
use boxcontrol::{BoxControlConfig, BoxValue, InputConstraints, Side, SideSet};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::box_control::BoxControl;
use crate::components::preferences_modal::{PREFERENCES_MODAL_ID, PreferencesModal};
use crate::util::ui_persistence::LocalStoragePreferences;

fn describe(value: &BoxValue) -> String {
    value.iter().map(|(side, q)| format!("{side}: {q}")).collect::<Vec<_>>().join(", ")
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let padding = RwSignal::new(BoxValue::parse("8px", "8px", "8px", "8px"));
    let margin = RwSignal::new(BoxValue::default());
    let modals = RwSignal::new(ModalStack::new());
    let prefs = RwSignal::new(LocalStoragePreferences::new());

    let padding_config = BoxControlConfig { label: "Padding".to_owned(), ..BoxControlConfig::default() };
    let margin_config = BoxControlConfig {
        label: "Margin".to_owned(),
        split_on_axis: true,
        input_constraints: InputConstraints::unbounded(),
        ..BoxControlConfig::default()
    };
    let border_config = BoxControlConfig {
        label: "Border bottom".to_owned(),
        sides: SideSet::only(Side::Bottom),
        allow_reset: false,
        ..BoxControlConfig::default()
    };

    let preferences_open = move || modals.with(|m| m.is_open(PREFERENCES_MODAL_ID));
    let close_preferences = Callback::new(move |()| modals.update(|m| m.close(PREFERENCES_MODAL_ID)));

    view! {
        <Title text="Box control" />
        <main class="sidebar">
            <BoxControl
                values=Signal::derive(move || Some(padding.get()))
                on_change=Callback::new(move |next: BoxValue| padding.set(next))
                config=padding_config
            />
            <div class="sidebar__readout">{move || padding.with(describe)}</div>
            <BoxControl on_change=Callback::new(move |next: BoxValue| margin.set(next)) config=margin_config />
            <div class="sidebar__readout">{move || margin.with(describe)}</div>
            <BoxControl on_change=Callback::new(|_: BoxValue| {}) config=border_config />
            <button class="sidebar__preferences" on:click=move |_| modals.update(|m| m.open(PREFERENCES_MODAL_ID))>
                "Preferences"
            </button>
            <Show when=preferences_open>
                <PreferencesModal prefs=prefs on_close=close_preferences />
            </Show>
        </main>
    }
}
