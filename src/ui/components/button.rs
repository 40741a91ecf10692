//! Button component with variants and sizes.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Subtle ghost button.
    Ghost,
    /// Outline button.
    Outline,
    /// Gradient call-to-action used on the landing page.
    Hero,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-blue-600 text-white hover:bg-blue-700",
            Self::Ghost => "bg-transparent hover:bg-slate-100/10",
            Self::Outline => "bg-transparent border border-slate-300 hover:bg-slate-100",
            Self::Hero => {
                "bg-gradient-to-r from-blue-600 to-green-600 text-white font-semibold \
                 hover:from-blue-700 hover:to-green-700"
            }
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-xs",
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "h-12 px-8 text-base",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 rounded-lg font-medium \
                            transition-colors focus-visible:outline-none focus-visible:ring-2 \
                            focus-visible:ring-blue-500 focus-visible:ring-offset-2 \
                            disabled:pointer-events-none disabled:opacity-50";

fn button_classes(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    format!(
        "{} {} {} {}",
        BASE_CLASSES,
        variant.classes(),
        size.classes(),
        class
    )
}

/// ShadCN-style button component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm>
///         "Edit"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Whether the button is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Accessible label for icon-only buttons.
    #[prop(default = "")]
    label: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, size, class);

    view! {
        <button type=button_type class=classes disabled=disabled aria-label=label>
            {children()}
        </button>
    }
}

/// Navigation link styled as a button.
#[component]
pub fn ButtonLink(
    /// Link target.
    href: &'static str,
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Link content.
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, size, class);

    view! {
        <a href=href class=classes>
            {children()}
        </a>
    }
}
