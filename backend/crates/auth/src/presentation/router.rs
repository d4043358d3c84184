//! Auth Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any repository implementation
///
/// Serves `/`, `/login`, `/logout` and `/register`.
pub fn auth_router<U>(repo: Arc<U>, config: Arc<AuthConfig>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState::new(repo, config);

    Router::new()
        .route("/", get(handlers::index::<U>))
        .route(
            "/login",
            get(handlers::login_page::<U>).post(handlers::login::<U>),
        )
        .route("/logout", get(handlers::logout::<U>))
        .route(
            "/register",
            get(handlers::register_page::<U>).post(handlers::register::<U>),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryUserRepository;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    const FORM: &str = "application/x-www-form-urlencoded";

    fn app() -> Router {
        auth_router(
            Arc::new(MemoryUserRepository::new()),
            Arc::new(AuthConfig::development()),
        )
    }

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, FORM)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    const REGISTER_BOB: &str = "fields.username=bob12&fields.password=pw123\
        &fields.verifyPass=pw123&fields.email=bob%40x.com";

    #[tokio::test]
    async fn test_front_page_for_anonymous() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["view"], "index");
    }

    #[tokio::test]
    async fn test_register_sets_cookie_and_redirects_home() {
        let response = app().oneshot(post("/register", REGISTER_BOB)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/homepage");
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("userId="));
        assert!(cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn test_rejected_registration_renders_errors() {
        let body = "fields.username=bob12&fields.password=pw123\
            &fields.verifyPass=other&fields.email=bob%40x.com";
        let response = app().oneshot(post("/register", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let body = json(response).await;
        assert_eq!(body["view"], "register");
        assert_eq!(body["errors"]["verifyPass"], "Passwords do not match");
        assert_eq!(body["fields"]["username"], "bob12");
        assert!(body["fields"].get("password").is_none());
    }

    #[tokio::test]
    async fn test_login_after_register() {
        let app = app();
        app.clone().oneshot(post("/register", REGISTER_BOB)).await.unwrap();

        let response = app
            .clone()
            .oneshot(post("/login", "fields.email=bob%40x.com&fields.password=pw123"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert!(response.headers().contains_key(header::SET_COOKIE));

        let response = app
            .oneshot(post("/login", "fields.email=bob%40x.com&fields.password=wrong"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json(response).await["errors"]["credentials"], "Invalid email/password");
    }

    #[tokio::test]
    async fn test_signed_in_visitor_skips_login_page() {
        let app = app();
        let response = app.clone().oneshot(post("/register", REGISTER_BOB)).await.unwrap();
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        let cookie = set_cookie.split(';').next().unwrap().to_string();

        for path in ["/", "/login", "/register"] {
            let response = app
                .clone()
                .oneshot(
                    Request::get(path)
                        .header(header::COOKIE, &cookie)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers()[header::LOCATION], "/homepage");
        }
    }

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let response = app()
            .oneshot(Request::get("/logout").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("userId=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
