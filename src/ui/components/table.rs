//! Data table components.

use leptos::prelude::*;

/// Table wrapper with horizontal scrolling.
#[component]
pub fn Table(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Table sections.
    children: Children,
) -> impl IntoView {
    let classes = format!("w-full caption-bottom text-sm {}", class);

    view! {
        <div class="relative w-full overflow-auto">
            <table class=classes>
                {children()}
            </table>
        </div>
    }
}

#[component]
pub fn TableHeader(children: Children) -> impl IntoView {
    view! { <thead class="[&_tr]:border-b">{children()}</thead> }
}

#[component]
pub fn TableBody(children: Children) -> impl IntoView {
    view! { <tbody class="[&_tr:last-child]:border-0">{children()}</tbody> }
}

#[component]
pub fn TableRow(children: Children) -> impl IntoView {
    view! {
        <tr class="border-b border-slate-200 transition-colors hover:bg-slate-50">
            {children()}
        </tr>
    }
}

/// Column heading cell.
#[component]
pub fn TableHead(children: Children) -> impl IntoView {
    view! {
        <th class="h-12 px-4 text-left align-middle font-medium text-slate-500">
            {children()}
        </th>
    }
}

#[component]
pub fn TableCell(children: Children) -> impl IntoView {
    view! { <td class="p-4 align-middle">{children()}</td> }
}
