//! Separator component for visual division.

use leptos::prelude::*;

/// Horizontal separator line.
#[component]
pub fn Separator(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("shrink-0 bg-slate-200 h-[1px] w-full {}", class);

    view! {
        <div role="separator" class=classes />
    }
}
