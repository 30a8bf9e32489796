use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::refresh_token::RefreshTokenRepository, error::AppError};

/// Starts the refresh token cleanup scheduler
///
/// Runs at the top of every hour and deletes refresh tokens whose expiry has
/// passed. Expired tokens are already rejected at refresh time, so the job
/// only keeps the table from growing.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = delete_expired_tokens(&db).await {
                tracing::error!("Error deleting expired refresh tokens: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Refresh token cleanup scheduler started");

    Ok(scheduler)
}

/// Deletes every refresh token that has expired by now.
///
/// # Returns
/// - `Ok(u64)` - Number of deleted tokens
pub async fn delete_expired_tokens(db: &DatabaseConnection) -> Result<u64, AppError> {
    let deleted = RefreshTokenRepository::new(db)
        .delete_expired(Utc::now())
        .await?;

    if deleted > 0 {
        tracing::info!("Deleted {} expired refresh tokens", deleted);
    }

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    #[tokio::test]
    async fn deletes_only_expired_tokens() {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await.unwrap();
        let repo = RefreshTokenRepository::new(db);

        repo.create(user.id, "expired".to_string(), Utc::now() - Duration::hours(1))
            .await
            .unwrap();
        repo.create(user.id, "valid".to_string(), Utc::now() + Duration::days(1))
            .await
            .unwrap();

        let deleted = delete_expired_tokens(db).await.unwrap();

        assert_eq!(deleted, 1);
        assert!(repo.find_valid("valid", Utc::now()).await.unwrap().is_some());
    }
}
