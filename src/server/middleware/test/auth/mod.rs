use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
    service::auth::token::TokenIssuer,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn issuer() -> TokenIssuer {
    TokenIssuer::new("test-secret", Duration::minutes(15), Duration::days(30))
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn token_for(issuer: &TokenIssuer, user: entity::user::Model) -> String {
    let user = User::from_entity(user).unwrap();
    issuer.issue_access_token(&user, Utc::now()).unwrap()
}
