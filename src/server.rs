use axum::{
    Json, Router,
    extract::{Form, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::AppState;
use crate::auth::{NewAccount, SessionSnapshot, SessionToken};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::{DashboardState, Workspace, nav_variant};
use crate::ui::pages::{AuthForm, WorkspaceData};
use crate::ui::{DashboardView, render_auth, render_dashboard, render_landing, render_not_found};

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::in_memory(Arc::clone(&config)).await;
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let timeout_duration = state.config.server.request_timeout();
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route("/", get(landing_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/login", get(login_page).post(login_submit))
        .route("/register", get(register_page).post(register_submit))
        .route("/logout", post(logout_handler))
        .route("/api/session", get(api_session))
        .route("/healthz", get(|| async { "ok" }))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| {
                let duration = timeout_duration;
                async move {
                    match tokio::time::timeout(duration, next.run(req)).await {
                        Ok(res) => res,
                        Err(_) => {
                            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                        }
                    }
                }
            },
        ))
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Session helpers
// ─────────────────────────────────────────────────────────────────────────────

fn session_token(state: &AppState, jar: &CookieJar) -> Option<SessionToken> {
    jar.get(&state.config.session.cookie_name)
        .map(|c| c.value().to_string())
}

fn session_cookie(state: &AppState, token: SessionToken) -> Cookie<'static> {
    Cookie::build((state.config.session.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

fn removal_cookie(state: &AppState) -> Cookie<'static> {
    Cookie::build((state.config.session.cookie_name.clone(), ""))
        .path("/")
        .build()
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Landing page.
async fn landing_handler(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let snapshot = state.snapshot(session_token(&state, &jar).as_deref()).await;
    let variant = nav_variant(snapshot.session());
    Html(render_landing(&state.config.site.practice_name, variant))
}

#[derive(Debug, Deserialize)]
struct DashboardQuery {
    #[serde(default)]
    tab: Option<String>,
}

/// GET /dashboard - Session-gated dashboard.
async fn dashboard_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let snapshot = state.snapshot(session_token(&state, &jar).as_deref()).await;
    let view_state = DashboardState::from(snapshot);
    debug!(state = view_state.as_str(), "Rendering dashboard");

    let (status, page) = match view_state {
        DashboardState::Loading => (StatusCode::OK, DashboardView::Loading),
        DashboardState::Unauthorized => (StatusCode::UNAUTHORIZED, DashboardView::Unauthorized),
        DashboardState::Authorized(session) => {
            let data = WorkspaceData {
                session,
                workspace: Workspace::from_query(query.tab.as_deref()),
                clients: state.clients.list().await,
                appointments: state.appointments.list().await,
            };
            (StatusCode::OK, DashboardView::Authorized(Box::new(data)))
        }
    };

    let html = render_dashboard(&state.config.site.practice_name, page);
    (status, Html(html)).into_response()
}

/// GET /login - Login form.
async fn login_page(State(state): State<AppState>) -> Html<String> {
    Html(render_auth(
        &state.config.site.practice_name,
        AuthForm::Login,
        None,
    ))
}

/// GET /register - Register form.
async fn register_page(State(state): State<AppState>) -> Html<String> {
    Html(render_auth(
        &state.config.site.practice_name,
        AuthForm::Register,
        None,
    ))
}

#[derive(Debug, Deserialize)]
struct LoginForm {
    email: String,
}

#[derive(Debug, Deserialize)]
struct RegisterForm {
    #[serde(default)]
    name: Option<String>,
    email: String,
}

/// Re-render an account form with the error that stopped it.
fn form_error(state: &AppState, form: AuthForm, err: AppError) -> Response {
    let html = render_auth(
        &state.config.site.practice_name,
        form,
        Some(err.to_string()),
    );
    (err.status(), Html(html)).into_response()
}

/// POST /login - Start a session and go to the dashboard.
async fn login_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.sessions.sign_in(&form.email).await {
        Ok(token) => {
            let jar = jar.add(session_cookie(&state, token));
            (jar, Redirect::to("/dashboard")).into_response()
        }
        Err(e) => {
            info!(email = %form.email, error = %e, "Login rejected");
            form_error(&state, AuthForm::Login, e.into())
        }
    }
}

/// POST /register - Create an account, start a session and go to the dashboard.
async fn register_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Response {
    let account = NewAccount {
        name: form.name,
        email: form.email,
    };
    match state.sessions.register(account).await {
        Ok(token) => {
            let jar = jar.add(session_cookie(&state, token));
            (jar, Redirect::to("/dashboard")).into_response()
        }
        Err(e) => {
            info!(error = %e, "Registration rejected");
            form_error(&state, AuthForm::Register, e.into())
        }
    }
}

/// POST /logout - Sign out and go home.
///
/// A failed sign-out is logged and the user stays on the dashboard with the
/// session cookie untouched.
async fn logout_handler(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    let Some(token) = session_token(&state, &jar) else {
        return (jar, Redirect::to("/"));
    };

    match state.sessions.sign_out(&token).await {
        Ok(()) => {
            info!(name: "auth.sign_out", "Session ended");
            (jar.remove(removal_cookie(&state)), Redirect::to("/"))
        }
        Err(e) => {
            error!(error = %e, "Logout failed");
            (jar, Redirect::to("/dashboard"))
        }
    }
}

/// Fallback - 404 page.
async fn not_found_handler(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(render_not_found(&state.config.site.practice_name)),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/session - Current `{ data, isPending }` snapshot.
async fn api_session(State(state): State<AppState>, jar: CookieJar) -> Json<SessionSnapshot> {
    Json(state.snapshot(session_token(&state, &jar).as_deref()).await)
}
