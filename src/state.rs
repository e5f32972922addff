use crate::{config::AppConfig, db::DbPool, services::rides::RideStore};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DbPool,
    pub rides: RideStore,
}

impl AppState {
    pub fn new(config: AppConfig, db: DbPool, rides: RideStore) -> Self {
        Self { config, db, rides }
    }
}
