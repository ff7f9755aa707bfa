//! Unit routes: public listing and admin edit.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::UnitData;

use crate::routes::auth::AdminUser;
use crate::services::unit::{self, UnitError};
use crate::state::AppState;

pub(crate) fn unit_error_to_status(err: &UnitError) -> StatusCode {
    match err {
        UnitError::NotFound(_) => StatusCode::NOT_FOUND,
        UnitError::InvalidSecInRate(_) => StatusCode::BAD_REQUEST,
        UnitError::DuplicateIdentifier(_) => StatusCode::CONFLICT,
        UnitError::CorruptRow { .. } | UnitError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/units`: every unit, ordered by id.
pub async fn list_units(State(state): State<AppState>) -> Result<Json<Vec<UnitData>>, StatusCode> {
    unit::list_units(&state.pool).await.map(Json).map_err(|e| {
        tracing::error!(error = %e, "unit listing failed");
        unit_error_to_status(&e)
    })
}

/// `POST /api/units/edit`: admin-only update of one unit; returns the stored row.
pub async fn edit_unit(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(body): Json<UnitData>,
) -> Result<Json<UnitData>, StatusCode> {
    let unit_id = body.id;
    unit::update_unit(&state.pool, body).await.map(Json).map_err(|e| {
        let status = unit_error_to_status(&e);
        if status.is_server_error() {
            tracing::error!(error = %e, unit_id, user_id = %admin.id, "unit edit failed");
        } else {
            tracing::info!(error = %e, unit_id, user_id = %admin.id, "unit edit rejected");
        }
        status
    })
}

#[cfg(test)]
#[path = "units_test.rs"]
mod tests;
