//! Form field components.

use leptos::prelude::*;

const FIELD_CLASSES: &str = "flex w-full rounded-lg border border-slate-300 bg-white \
                             px-3 py-2 text-sm text-slate-900 placeholder:text-slate-400 \
                             focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-blue-500 \
                             disabled:cursor-not-allowed disabled:opacity-50";

/// Text input component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input input_type="email" name="email" placeholder="your@email.com" />
/// }
/// ```
#[component]
pub fn Input(
    /// Input type (text, email, tel, date, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Whether the input is required.
    #[prop(default = false)]
    required: bool,
    /// Autocomplete attribute.
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    let classes = format!("{} h-10", FIELD_CLASSES);

    view! {
        <input
            type=input_type
            class=classes
            placeholder=placeholder
            name=name
            required=required
            autocomplete=autocomplete
        />
    }
}

/// Textarea component for multi-line input.
#[component]
pub fn Textarea(
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Number of rows.
    #[prop(default = 3)]
    rows: u32,
) -> impl IntoView {
    let classes = format!("{} min-h-[80px] resize-none", FIELD_CLASSES);

    view! {
        <textarea class=classes placeholder=placeholder name=name rows=rows></textarea>
    }
}

/// Labelled form field. The control is nested inside the label.
#[component]
pub fn Field(
    /// Label text.
    label: &'static str,
    /// The form control.
    children: Children,
) -> impl IntoView {
    view! {
        <label class="block space-y-1 text-left">
            <span class="text-sm font-medium">{label}</span>
            {children()}
        </label>
    }
}
