use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::AppError, service::auth::AuthService, state::AppState};

/// Connects to the Postgres database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema is up to date before
/// the server accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the upload directory if it does not exist yet.
pub async fn prepare_upload_dir(config: &Config) -> Result<(), AppError> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    tracing::info!("Serving uploads from {}", config.upload_dir);

    Ok(())
}

/// Makes sure an administrator can sign in.
///
/// When the database has no admin, one is created from `ADMIN_EMAIL` and
/// `ADMIN_PASSWORD`; without those a warning is logged instead.
pub async fn check_for_admin(state: &AppState, config: &Config) -> Result<(), AppError> {
    AuthService::new(&state.db, &state.tokens)
        .ensure_admin(config.admin_email.as_deref(), config.admin_password.as_deref())
        .await
}
