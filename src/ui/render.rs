//! Server-side rendering of full pages to HTML strings.

use leptos::prelude::*;

use crate::state::NavVariant;
use crate::ui::app::{Document, NotFoundPage};
use crate::ui::pages::{
    AccessDenied, AuthForm, AuthPage, DashboardLoading, DashboardWorkspace, LandingPage,
    WorkspaceData,
};

const LIGHT_BODY: &str = "min-h-screen bg-gray-50 text-slate-900 antialiased";
const DARK_BODY: &str = "min-h-screen bg-blue-950 text-white antialiased";

/// Seconds before the loading placeholder asks again.
const LOADING_REFRESH_SECS: u32 = 1;

/// Dashboard page content, one variant per view state.
#[derive(Debug, Clone)]
pub enum DashboardView {
    Loading,
    Unauthorized,
    Authorized(Box<WorkspaceData>),
}

fn render_document<F, V>(
    title: String,
    refresh_after: Option<u32>,
    body_class: &'static str,
    body: F,
) -> String
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + 'static,
{
    let owner = Owner::new();
    owner.with(|| {
        view! {
            <Document title=title refresh_after=refresh_after body_class=body_class>
                {body()}
            </Document>
        }
        .to_html()
    })
}

fn page_title(page: &str, practice_name: &str) -> String {
    format!("{page} | {practice_name}")
}

pub fn render_landing(practice_name: &str, variant: NavVariant) -> String {
    let name = practice_name.to_string();
    render_document(page_title("Home", practice_name), None, DARK_BODY, move || {
        view! { <LandingPage practice_name=name variant=variant/> }
    })
}

pub fn render_dashboard(practice_name: &str, page: DashboardView) -> String {
    let title = page_title("Dashboard", practice_name);
    match page {
        DashboardView::Loading => {
            render_document(title, Some(LOADING_REFRESH_SECS), LIGHT_BODY, || {
                view! { <DashboardLoading/> }
            })
        }
        DashboardView::Unauthorized => {
            render_document(title, None, LIGHT_BODY, || view! { <AccessDenied/> })
        }
        DashboardView::Authorized(data) => render_document(title, None, LIGHT_BODY, move || {
            view! { <DashboardWorkspace data=*data/> }
        }),
    }
}

pub fn render_auth(practice_name: &str, form: AuthForm, error: Option<String>) -> String {
    render_document(
        page_title(form.title(), practice_name),
        None,
        LIGHT_BODY,
        move || view! { <AuthPage form=form error=error/> },
    )
}

pub fn render_not_found(practice_name: &str) -> String {
    render_document(
        page_title("Not Found", practice_name),
        None,
        LIGHT_BODY,
        || view! { <NotFoundPage/> },
    )
}
