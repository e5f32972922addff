use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    models::ride::{Ride, RideCreateRequest},
    state::AppState,
    validation,
};

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 50;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/rides", get(list_rides).post(create_ride))
        .route("/rides/:id", get(get_ride))
}

async fn health() -> &'static str {
    "Healthy"
}

async fn create_ride(
    State(state): State<AppState>,
    Json(request): Json<RideCreateRequest>,
) -> Result<Json<Vec<Ride>>, AppError> {
    let ride = validation::validate(&request).map_err(AppError::Validation)?;
    let ride_id = state.rides.create(&ride).await?;
    // The response comes from a read-back of the inserted row, so the
    // store-assigned id and timestamp are taken straight from the table.
    let rows = state.rides.get_by_id(ride_id).await?;
    Ok(Json(rows))
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    page: Option<String>,
    limit: Option<String>,
}

impl PageQuery {
    /// Returns `(limit, offset)`. Out-of-range or unparseable values fall
    /// back to the defaults rather than erroring: a limit outside 1..=50
    /// resets to 10, a page below 1 resets to 1.
    fn normalize(&self) -> (i64, i64) {
        let limit = match parse_param(self.limit.as_deref()) {
            Some(limit) if (1..=MAX_LIMIT).contains(&limit) => limit,
            _ => DEFAULT_LIMIT,
        };
        let page = match parse_param(self.page.as_deref()) {
            Some(page) if page >= DEFAULT_PAGE => page,
            _ => DEFAULT_PAGE,
        };
        (limit, (page - 1) * limit)
    }
}

fn parse_param(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}

async fn list_rides(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<Ride>>, AppError> {
    let (limit, offset) = query.normalize();
    let rows = state.rides.list_page(limit, offset).await?;
    if rows.is_empty() {
        return Err(AppError::RidesNotFound);
    }
    Ok(Json(rows))
}

async fn get_ride(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Ride>>, AppError> {
    // A non-numeric id cannot match any row, which reads as not-found
    // rather than a malformed request.
    let Ok(id) = id.parse::<i64>() else {
        return Err(AppError::RidesNotFound);
    };
    let rows = state.rides.get_by_id(id).await?;
    if rows.is_empty() {
        return Err(AppError::RidesNotFound);
    }
    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use super::PageQuery;

    fn query(page: Option<&str>, limit: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(str::to_owned),
            limit: limit.map(str::to_owned),
        }
    }

    #[test]
    fn absent_params_use_defaults() {
        assert_eq!(query(None, None).normalize(), (10, 0));
    }

    #[test]
    fn negative_params_reset_to_defaults() {
        assert_eq!(query(Some("-1"), Some("-1")).normalize(), (10, 0));
    }

    #[test]
    fn oversized_limit_resets_to_default() {
        assert_eq!(query(Some("2"), Some("51")).normalize(), (10, 10));
    }

    #[test]
    fn limit_at_the_cap_is_kept() {
        assert_eq!(query(Some("1"), Some("50")).normalize(), (50, 0));
    }

    #[test]
    fn offset_is_computed_after_normalization() {
        assert_eq!(query(Some("3"), Some("20")).normalize(), (20, 40));
    }

    #[test]
    fn unparseable_params_count_as_absent() {
        assert_eq!(query(Some("two"), Some("ten")).normalize(), (10, 0));
    }

    #[test]
    fn page_has_no_upper_bound() {
        assert_eq!(query(Some("1000"), None).normalize(), (10, 9990));
    }
}
