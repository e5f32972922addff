use crate::db::DbPool;
use crate::error::AppError;
use crate::models::ride::{NewRide, Ride};

/// Gateway for all reads and writes against the `rides` table.
#[derive(Clone)]
pub struct RideStore {
    db: DbPool,
}

impl RideStore {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Inserts a ride and returns the store-assigned id.
    pub async fn create(&self, ride: &NewRide) -> Result<i64, AppError> {
        let result = sqlx::query(
            "INSERT INTO rides (startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(ride.start_lat)
        .bind(ride.start_long)
        .bind(ride.end_lat)
        .bind(ride.end_long)
        .bind(&ride.rider_name)
        .bind(&ride.driver_name)
        .bind(&ride.driver_vehicle)
        .execute(&self.db)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Zero rows is a valid outcome here; callers decide whether that is an error.
    pub async fn get_by_id(&self, id: i64) -> Result<Vec<Ride>, AppError> {
        let rows = sqlx::query_as::<_, Ride>("SELECT * FROM rides WHERE rideID = ?1")
            .bind(id)
            .fetch_all(&self.db)
            .await?;
        Ok(rows)
    }

    pub async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<Ride>, AppError> {
        let rows =
            sqlx::query_as::<_, Ride>("SELECT * FROM rides ORDER BY rideID ASC LIMIT ?1 OFFSET ?2")
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.db)
                .await?;
        Ok(rows)
    }
}
