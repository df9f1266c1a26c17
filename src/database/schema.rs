use super::Database;
use crate::Result;

impl Database {
    /// Initialize the route store schema.
    ///
    /// Idempotent; called on every invocation before the command runs.
    pub async fn init_schema(&self) -> Result<()> {
        // Deduplicated starting points
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS start (
                name_id INTEGER PRIMARY KEY AUTOINCREMENT,
                start_point TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // One row per recorded route
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS route (
                route_id INTEGER PRIMARY KEY AUTOINCREMENT,
                name_id INTEGER NOT NULL,
                first_station TEXT NOT NULL,
                second_station TEXT NOT NULL,
                FOREIGN KEY(name_id) REFERENCES start(name_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        tracing::debug!("Schema ensured");

        Ok(())
    }
}
