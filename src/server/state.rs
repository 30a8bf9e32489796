//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token issuer holding the JWT keys and token lifetimes
//! - Media storage location and upload limits
//! - Whether the refresh cookie requires HTTPS

use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::{auth::token::TokenIssuer, media::MediaStorage},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle, the
/// JWT keys are small byte buffers and the rest are plain values.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies access tokens, knows both token lifetimes.
    pub tokens: TokenIssuer,

    /// Upload directory, public URL prefix and size limit for the media library.
    pub media: MediaStorage,

    /// Sets the `Secure` attribute on the refresh token cookie.
    pub cookie_secure: bool,
}

impl AppState {
    /// Creates the application state from a connected database and configuration.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            tokens: TokenIssuer::new(
                &config.jwt_secret,
                Duration::minutes(config.access_token_ttl_minutes),
                Duration::days(config.refresh_token_ttl_days),
            ),
            media: MediaStorage::from_config(config),
            cookie_secure: config.cookie_secure,
        }
    }
}
