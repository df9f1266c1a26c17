use serde::Deserialize;
use serde::Serialize;
use sqlx::FromRow;

/// A deduplicated starting point for one or more routes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Origin {
    pub name_id: i64,
    pub start_point: String,
}

/// One directed travel record tied to an origin
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub route_id: i64,
    pub name_id: i64,
    pub first_station: String,
    pub second_station: String,
}

/// Read-side tuple produced by joining routes with their origins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RouteListing {
    pub start_point: String,
    pub first_station: String,
    pub second_station: String,
}

/// Row counts reported by the stats command
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StoreStats {
    pub origins: i64,
    pub routes: i64,
}
