use super::Database;
use crate::models::RouteListing;
use crate::models::StoreStats;
use crate::Result;

impl Database {
    /// Look up an origin id by exact start point name
    pub async fn find_origin(&self, start_point: &str) -> Result<Option<i64>> {
        let name_id =
            sqlx::query_scalar::<_, i64>("SELECT name_id FROM start WHERE start_point = ?")
                .bind(start_point)
                .fetch_optional(&self.pool)
                .await?;

        Ok(name_id)
    }

    /// Add a route, creating the origin row on first use of a start point.
    ///
    /// Origins are deduplicated by lookup-before-insert; the table carries
    /// no uniqueness constraint.
    pub async fn add_route(&self, first: &str, second: &str) -> Result<()> {
        let name_id = match self.find_origin(first).await? {
            Some(name_id) => name_id,
            None => {
                sqlx::query("INSERT INTO start (start_point) VALUES (?)")
                    .bind(first)
                    .execute(&self.pool)
                    .await?
                    .last_insert_rowid()
            }
        };

        sqlx::query("INSERT INTO route (name_id, first_station, second_station) VALUES (?, ?, ?)")
            .bind(name_id)
            .bind(first)
            .bind(second)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Route added: {} -> {} (origin id {})", first, second, name_id);

        Ok(())
    }

    /// List every route joined with its origin.
    ///
    /// No ORDER BY: rows come back in insertion order in practice, but the
    /// ordering is not part of the contract.
    pub async fn list_routes(&self) -> Result<Vec<RouteListing>> {
        let routes = sqlx::query_as::<_, RouteListing>(
            r"
            SELECT start.start_point, route.first_station, route.second_station
            FROM route
            INNER JOIN start ON start.name_id = route.name_id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    /// List routes whose destination equals the given name (exact,
    /// case-sensitive match)
    pub async fn find_routes_by_destination(&self, second: &str) -> Result<Vec<RouteListing>> {
        let routes = sqlx::query_as::<_, RouteListing>(
            r"
            SELECT start.start_point, route.first_station, route.second_station
            FROM route
            INNER JOIN start ON start.name_id = route.name_id
            WHERE route.second_station = ?
            ",
        )
        .bind(second)
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    /// Row counts for the stats command
    pub async fn stats(&self) -> Result<StoreStats> {
        let origins = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM start")
            .fetch_one(&self.pool)
            .await?;

        let routes = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM route")
            .fetch_one(&self.pool)
            .await?;

        Ok(StoreStats { origins, routes })
    }
}
