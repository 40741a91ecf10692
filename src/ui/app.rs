//! Document shell and shared pages.

use leptos::prelude::*;

use crate::ui::components::{ButtonLink, ButtonVariant};

/// Full HTML document around a page body.
#[component]
pub fn Document(
    /// Page title, shown before the practice name.
    title: String,
    /// Seconds after which the browser reloads the page.
    #[prop(default = None)]
    refresh_after: Option<u32>,
    /// Body classes.
    #[prop(default = "min-h-screen bg-gray-50 text-slate-900 antialiased")]
    body_class: &'static str,
    /// Page body.
    children: Children,
) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Expert medical care with compassion and modern technology"/>
                {refresh_after.map(|secs| view! { <meta http-equiv="refresh" content=secs.to_string()/> })}
                <title>{title}</title>
                <script src="https://cdn.tailwindcss.com"></script>
                <link rel="stylesheet" href="/static/app.css"/>
                <script defer src="/static/tabs.js"></script>
            </head>
            <body class=body_class>
                {children()}
            </body>
        </html>
    }
}

/// 404 Not Found page body.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center py-20">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-slate-500 mb-6">"Page not found"</p>
            <ButtonLink href="/" variant=ButtonVariant::Primary>
                "Go Home"
            </ButtonLink>
        </div>
    }
}
