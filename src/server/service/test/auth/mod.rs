use super::*;
use crate::server::{
    model::user::RegisterParams,
    service::auth::{password::hash_password, token::TokenIssuer, AuthService},
};

mod login;
mod refresh;
mod register;

fn issuer() -> TokenIssuer {
    TokenIssuer::new("test-secret", Duration::minutes(15), Duration::days(30))
}

fn register_params(email: &str) -> RegisterParams {
    RegisterParams {
        email: email.to_string(),
        password: "correct horse".to_string(),
        name: "Мария".to_string(),
        phone: None,
    }
}
