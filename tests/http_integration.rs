use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::{HeaderValue, StatusCode, header};
use axum_test::{TestResponse, TestServer};
use serde_json::Value;

use practice_portal::AppState;
use practice_portal::auth::{
    AuthError, InMemorySessionProvider, NewAccount, SessionProvider, SessionToken,
};
use practice_portal::config::AppConfig;
use practice_portal::domain::{Session, User};
use practice_portal::server::build_router;

const DEMO_EMAIL: &str = "doctor@example.com";

fn config() -> Arc<AppConfig> {
    let mut config = AppConfig::default();
    config.session.lookup_timeout_ms = 50;
    Arc::new(config)
}

async fn demo_server() -> (TestServer, AppState) {
    let state = AppState::in_memory(config()).await;
    let server = TestServer::new(build_router(state.clone())).expect("test server");
    (server, state)
}

fn server_with(provider: Arc<dyn SessionProvider>) -> TestServer {
    TestServer::new(build_router(AppState::new(provider, config()))).expect("test server")
}

fn cookie(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("practice_session={token}")).expect("cookie header")
}

/// Session token from the `Set-Cookie` header of `response`.
fn issued_token(response: &TestResponse) -> String {
    let set_cookie = response.header(header::SET_COOKIE);
    let set_cookie = set_cookie.to_str().expect("ascii cookie");
    let pair = set_cookie.split(';').next().expect("cookie pair");
    pair.strip_prefix("practice_session=")
        .expect("session cookie")
        .to_string()
}

/// The `data-state` value on the panel for `tab`.
fn panel_state<'a>(html: &'a str, tab: &str) -> &'a str {
    let start = html
        .find(&format!("data-tab-panel=\"{tab}\""))
        .expect("panel rendered");
    let rest = &html[start..];
    let state = rest.find("data-state=\"").expect("panel has state") + "data-state=\"".len();
    let end = rest[state..].find('"').expect("closing quote");
    &rest[state..state + end]
}

async fn sign_in(server: &TestServer) -> String {
    let response = server.post("/login").form(&[("email", DEMO_EMAIL)]).await;
    response.assert_status(StatusCode::SEE_OTHER);
    issued_token(&response)
}

/// Provider whose lookups never finish in time.
#[derive(Debug)]
struct SlowProvider;

#[async_trait]
impl SessionProvider for SlowProvider {
    async fn session(&self, _token: &str) -> Result<Option<Session>, AuthError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(None)
    }

    async fn sign_in(&self, _email: &str) -> Result<SessionToken, AuthError> {
        Ok("slow".to_string())
    }

    async fn register(&self, _account: NewAccount) -> Result<SessionToken, AuthError> {
        Ok("slow".to_string())
    }

    async fn sign_out(&self, _token: &str) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Provider that signs in normally but cannot sign out.
#[derive(Debug)]
struct StuckSignOut(InMemorySessionProvider);

#[async_trait]
impl SessionProvider for StuckSignOut {
    async fn session(&self, token: &str) -> Result<Option<Session>, AuthError> {
        self.0.session(token).await
    }

    async fn sign_in(&self, email: &str) -> Result<SessionToken, AuthError> {
        self.0.sign_in(email).await
    }

    async fn register(&self, account: NewAccount) -> Result<SessionToken, AuthError> {
        self.0.register(account).await
    }

    async fn sign_out(&self, _token: &str) -> Result<(), AuthError> {
        Err(AuthError::Unavailable("sign-out backend down".to_string()))
    }
}

#[tokio::test]
async fn landing_page_for_visitor() {
    let (server, _) = demo_server().await;

    let response = server.get("/").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Doctor Mike"));
    assert!(html.contains("href=\"/login\""));
    assert!(html.contains("Request Appointment"));
    assert!(!html.contains("Go to Dashboard"));
}

#[tokio::test]
async fn landing_page_for_signed_in_user() {
    let (server, _) = demo_server().await;
    let token = sign_in(&server).await;

    let html = server
        .get("/")
        .add_header(header::COOKIE, cookie(&token))
        .await
        .text();
    assert!(html.contains("Welcome, Mike!"));
    assert!(html.contains("Go to Dashboard"));
    assert_eq!(html.matches("data-auth=\"authenticated\"").count(), 2);
}

#[tokio::test]
async fn dashboard_without_session_is_denied() {
    let (server, _) = demo_server().await;

    let response = server.get("/dashboard").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let html = response.text();
    assert!(html.contains("Access Denied"));
    assert!(!html.contains("data-tab-panel"));

    let response = server
        .get("/dashboard")
        .add_header(header::COOKIE, cookie("not-a-session"))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dashboard_with_session_shows_workspace() {
    let (server, _) = demo_server().await;
    let token = sign_in(&server).await;

    let response = server
        .get("/dashboard")
        .add_header(header::COOKIE, cookie(&token))
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("data-dashboard=\"authorized\""));
    assert!(html.contains(">MJ<"));
    assert!(html.contains("Welcome back, Mike!"));
    assert!(html.contains("Verified"));
    assert_eq!(html.matches("data-row=\"client\"").count(), 2);
    assert_eq!(html.matches("data-row=\"appointment\"").count(), 2);
}

#[tokio::test]
async fn dashboard_tab_query_selects_panel() {
    let (server, _) = demo_server().await;
    let token = sign_in(&server).await;

    let html = server
        .get("/dashboard")
        .add_query_param("tab", "clients")
        .add_header(header::COOKIE, cookie(&token))
        .await
        .text();
    assert_eq!(panel_state(&html, "clients"), "active");
    assert_eq!(panel_state(&html, "profile"), "inactive");

    // Unknown tabs fall back to the profile panel.
    let html = server
        .get("/dashboard")
        .add_query_param("tab", "billing")
        .add_header(header::COOKIE, cookie(&token))
        .await
        .text();
    assert_eq!(panel_state(&html, "profile"), "active");
}

#[tokio::test]
async fn slow_lookup_renders_loading_state() {
    let server = server_with(Arc::new(SlowProvider));

    let response = server
        .get("/dashboard")
        .add_header(header::COOKIE, cookie("any"))
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Loading your dashboard..."));
    assert!(html.contains("http-equiv=\"refresh\""));
    assert!(!html.contains("Access Denied"));

    let json: Value = server
        .get("/api/session")
        .add_header(header::COOKIE, cookie("any"))
        .await
        .json();
    assert_eq!(json["isPending"], Value::Bool(true));
    assert_eq!(json["data"], Value::Null);
}

#[tokio::test]
async fn login_sets_session_cookie() {
    let (server, _) = demo_server().await;

    let response = server.post("/login").form(&[("email", DEMO_EMAIL)]).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header(header::LOCATION), "/dashboard");

    let set_cookie = response.header(header::SET_COOKIE);
    let set_cookie = set_cookie.to_str().expect("ascii cookie");
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
}

#[tokio::test]
async fn login_with_unknown_email_is_rejected() {
    let (server, _) = demo_server().await;

    let response = server
        .post("/login")
        .form(&[("email", "stranger@example.com")])
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let html = response.text();
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("no account found for stranger@example.com"));
}

#[tokio::test]
async fn register_opens_unverified_session() {
    let (server, _) = demo_server().await;

    let response = server
        .post("/register")
        .form(&[("name", "Ada Lovelace"), ("email", "ada@example.com")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    let token = issued_token(&response);

    let html = server
        .get("/dashboard")
        .add_header(header::COOKIE, cookie(&token))
        .await
        .text();
    assert!(html.contains(">AL<"));
    assert!(html.contains("Unverified"));

    let response = server
        .post("/register")
        .form(&[("name", ""), ("email", DEMO_EMAIL)])
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn logout_ends_session() {
    let (server, _) = demo_server().await;
    let token = sign_in(&server).await;

    let response = server
        .post("/logout")
        .add_header(header::COOKIE, cookie(&token))
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header(header::LOCATION), "/");
    let set_cookie = response.header(header::SET_COOKIE);
    assert!(set_cookie.to_str().expect("ascii cookie").contains("Max-Age=0"));

    let response = server
        .get("/dashboard")
        .add_header(header::COOKIE, cookie(&token))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn failed_logout_keeps_user_on_dashboard() {
    let mut user = User::new(Some("Mike Johnson".to_string()), DEMO_EMAIL);
    user.email_verified = true;
    let server = server_with(Arc::new(StuckSignOut(
        InMemorySessionProvider::with_account(user),
    )));
    let token = sign_in(&server).await;

    let response = server
        .post("/logout")
        .add_header(header::COOKIE, cookie(&token))
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header(header::LOCATION), "/dashboard");
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let response = server
        .get("/dashboard")
        .add_header(header::COOKIE, cookie(&token))
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn api_session_reports_snapshot() {
    let (server, _) = demo_server().await;

    let json: Value = server.get("/api/session").await.json();
    assert_eq!(json["isPending"], Value::Bool(false));
    assert_eq!(json["data"], Value::Null);

    let token = sign_in(&server).await;
    let json: Value = server
        .get("/api/session")
        .add_header(header::COOKIE, cookie(&token))
        .await
        .json();
    assert_eq!(json["data"]["user"]["email"], DEMO_EMAIL);
    assert_eq!(json["data"]["user"]["emailVerified"], Value::Bool(true));
}

#[tokio::test]
async fn health_and_not_found() {
    let (server, state) = demo_server().await;

    let response = server.get("/healthz").await;
    response.assert_status_ok();
    response.assert_text("ok");

    let response = server.get("/no/such/page").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Go Home"));

    assert_eq!(state.clients.count().await, 2);
}
