//! Avatar component with image and initials fallback.

use leptos::prelude::*;

/// Avatar component for displaying user images.
///
/// Renders the image when `src` is present, otherwise the `fallback` text.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar src=None alt="Jane Smith".to_string() fallback="JS".to_string() />
/// }
/// ```
#[component]
pub fn Avatar(
    /// Image source URL.
    src: Option<String>,
    /// Alt text for the image.
    alt: String,
    /// Fallback text (initials) when there is no image.
    fallback: String,
    /// Size class (e.g., "h-10 w-10").
    #[prop(default = "h-10 w-10")]
    size: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let container_classes =
        format!("relative flex shrink-0 overflow-hidden rounded-full {size} {class}");

    view! {
        <span class=container_classes>
            {match src.filter(|s| !s.is_empty()) {
                Some(src) => view! {
                    <img
                        class="aspect-square h-full w-full object-cover"
                        src=src
                        alt=alt
                    />
                }.into_any(),
                None => view! {
                    <span class="avatar-fallback flex h-full w-full items-center justify-center rounded-full bg-slate-100 text-slate-600 text-lg font-medium">
                        {fallback}
                    </span>
                }.into_any(),
            }}
        </span>
    }
}
