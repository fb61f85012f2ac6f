//! Modal listing editor preference toggles.
//!
//! Each row is bound to one `(scope, name)` entry of the shared
//! `PreferenceStore`; flipping the checkbox writes through immediately.

use boxcontrol::prefs::PreferenceStore;
use leptos::prelude::*;

#[cfg(test)]
#[path = "preferences_modal_test.rs"]
mod preferences_modal_test;

/// Modal identifier used with the modal host.
pub const PREFERENCES_MODAL_ID: &str = "editor/preferences";

const EDITOR_SCOPE: &str = "core/edit-post";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreferencesTab {
    #[default]
    General,
    Appearance,
}

impl PreferencesTab {
    pub const ALL: [PreferencesTab; 2] = [PreferencesTab::General, PreferencesTab::Appearance];

    pub fn title(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Appearance => "Appearance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceRow {
    pub tab: PreferencesTab,
    pub scope: &'static str,
    pub name: &'static str,
    pub label: &'static str,
    pub help: &'static str,
    pub default: bool,
}

pub const PREFERENCES: &[PreferenceRow] = &[
    PreferenceRow {
        tab: PreferencesTab::General,
        scope: EDITOR_SCOPE,
        name: "fixedToolbar",
        label: "Top toolbar",
        help: "Access all block and document tools in a single place.",
        default: false,
    },
    PreferenceRow {
        tab: PreferencesTab::General,
        scope: EDITOR_SCOPE,
        name: "focusMode",
        label: "Spotlight mode",
        help: "Highlights the current block and fades other content.",
        default: false,
    },
    PreferenceRow {
        tab: PreferencesTab::General,
        scope: "core",
        name: "keepCaretInsideBlock",
        label: "Contain text cursor inside block",
        help: "Aids screen readers by stopping text caret from leaving blocks.",
        default: false,
    },
    PreferenceRow {
        tab: PreferencesTab::Appearance,
        scope: EDITOR_SCOPE,
        name: "showBlockBreadcrumbs",
        label: "Display block breadcrumbs",
        help: "Shows block breadcrumbs at the bottom of the editor.",
        default: true,
    },
    PreferenceRow {
        tab: PreferencesTab::Appearance,
        scope: EDITOR_SCOPE,
        name: "showIconLabels",
        label: "Show button text labels",
        help: "Show text instead of icons on buttons.",
        default: false,
    },
];

/// Rows shown under `tab`, in declaration order.
pub fn rows_for(tab: PreferencesTab) -> impl Iterator<Item = &'static PreferenceRow> {
    PREFERENCES.iter().filter(move |row| row.tab == tab)
}

/// Fullscreen modal with tabbed preference toggles.
#[component]
pub fn PreferencesModal<S>(prefs: RwSignal<S>, on_close: Callback<()>) -> impl IntoView
where
    S: PreferenceStore + Send + Sync + 'static,
{
    let tab = RwSignal::new(PreferencesTab::default());
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.focus();
        }
    });
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let rows = move || {
        rows_for(tab.get())
            .map(|row| {
                let checked = move || prefs.with(|p| p.get_bool(row.scope, row.name, row.default));
                let on_toggle = move |_| {
                    prefs.update(|p| {
                        p.toggle(row.scope, row.name, row.default);
                    });
                };
                view! {
                    <label class="preferences-modal__row">
                        <input type="checkbox" prop:checked=checked on:change=on_toggle />
                        <span class="preferences-modal__label">{row.label}</span>
                        <span class="preferences-modal__help">{row.help}</span>
                    </label>
                }
            })
            .collect_view()
    };

    view! {
        <div class="preferences-modal__backdrop" on:click=on_backdrop>
            <div
                class="preferences-modal"
                node_ref=dialog_ref
                role="dialog"
                aria-label="Preferences"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="preferences-modal__header">
                    <h2>"Preferences"</h2>
                    <button class="preferences-modal__close" on:click=on_close_click title="Close preferences">
                        "✕"
                    </button>
                </div>
                <div class="preferences-modal__tabs" role="tablist">
                    {PreferencesTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    role="tab"
                                    class="preferences-modal__tab"
                                    class:preferences-modal__tab--active=move || tab.get() == t
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="preferences-modal__rows">{rows}</div>
            </div>
        </div>
    }
}
