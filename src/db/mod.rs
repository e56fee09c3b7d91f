pub mod classroom;
#[cfg(test)]
pub mod memory;

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub use classroom::{ClassroomGateway, ClassroomRepository};

pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
}
