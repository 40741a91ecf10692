//! Tabs component.
//!
//! Every panel is rendered; inactive panels carry `hidden`. `static/tabs.js`
//! switches panels in the browser by toggling `data-state` and `hidden`, and
//! each trigger also links to `?tab=<value>` for clients without scripts.

use leptos::prelude::*;

fn data_state(active: bool) -> &'static str {
    if active { "active" } else { "inactive" }
}

/// Tabs root.
#[component]
pub fn Tabs(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Trigger list and panels.
    children: Children,
) -> impl IntoView {
    let classes = format!("space-y-6 {}", class);

    view! {
        <div class=classes data-tabs="">
            {children()}
        </div>
    }
}

/// Row of tab triggers.
#[component]
pub fn TabsList(children: Children) -> impl IntoView {
    view! {
        <div
            role="tablist"
            class="inline-flex h-10 items-center justify-center rounded-md bg-slate-100 p-1 text-slate-500"
        >
            {children()}
        </div>
    }
}

/// A single tab trigger.
#[component]
pub fn TabsTrigger(
    /// Tab value, matched against [`TabsContent`] `value`.
    value: &'static str,
    /// Whether this tab is selected.
    active: bool,
    /// Trigger label.
    children: Children,
) -> impl IntoView {
    let href = format!("?tab={value}");

    view! {
        <a
            role="tab"
            href=href
            class="inline-flex items-center justify-center whitespace-nowrap rounded-sm px-3 py-1.5 text-sm font-medium transition-all data-[state=active]:bg-white data-[state=active]:text-slate-900 data-[state=active]:shadow-sm"
            data-tab-trigger=value
            data-state=data_state(active)
            aria-selected={if active { "true" } else { "false" }}
        >
            {children()}
        </a>
    }
}

/// Panel shown while its tab is selected.
#[component]
pub fn TabsContent(
    /// Tab value.
    value: &'static str,
    /// Whether this panel is visible.
    active: bool,
    /// Panel content.
    children: Children,
) -> impl IntoView {
    view! {
        <div
            role="tabpanel"
            data-tab-panel=value
            data-state=data_state(active)
            hidden={!active}
        >
            {children()}
        </div>
    }
}
