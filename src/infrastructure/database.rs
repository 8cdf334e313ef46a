use crate::config::AppConfig;
use sqlx::{PgPool, postgres::PgPoolOptions};

pub async fn init_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections())
        .acquire_timeout(config.context_timeout())
        .connect(config.database_url())
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}
