//! Unit service: list and admin edit of measurement units.
//!
//! DESIGN
//! ======
//! Units travel as `client::net::types::UnitData`, the same DTO the browser
//! deserializes, so the JSON shape cannot drift between the two crates.
//! Enum columns are stored as their wire tags and parsed on read.
//!
//! ERROR HANDLING
//! ==============
//! Validation runs before any write. A unique-constraint violation on
//! `identifier` is reported as `DuplicateIdentifier` rather than a raw
//! database error so routes can answer 409.

use client::net::types::{DisplayableType, UnitData, UnitRepresentType, UnitType};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::info;

const UNIT_COLUMNS: &str = "id, name, identifier, unit_represent, sec_in_rate, type_of_unit, unit_index, \
                            suffix, displayable, preferred_display, note";

#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("unit not found: {0}")]
    NotFound(i32),
    #[error("sec_in_rate must be positive, got {0}")]
    InvalidSecInRate(i32),
    #[error("identifier already in use: {0}")]
    DuplicateIdentifier(String),
    #[error("unrecognized {column} value in database: {value}")]
    CorruptRow { column: &'static str, value: String },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Check an incoming edit and trim its free-text fields.
///
/// An identifier that trims to empty stays empty here; `update_unit`
/// replaces it with the stored name.
///
/// # Errors
///
/// Returns `InvalidSecInRate` when `sec_in_rate` is zero or negative.
pub fn validate_edit(mut unit: UnitData) -> Result<UnitData, UnitError> {
    if unit.sec_in_rate <= 0 {
        return Err(UnitError::InvalidSecInRate(unit.sec_in_rate));
    }
    unit.identifier = unit.identifier.trim().to_owned();
    unit.suffix = unit.suffix.trim().to_owned();
    Ok(unit)
}

fn parse_column<T>(column: &'static str, value: String, parse: fn(&str) -> Option<T>) -> Result<T, UnitError> {
    parse(&value).ok_or(UnitError::CorruptRow { column, value })
}

fn unit_from_row(row: &PgRow) -> Result<UnitData, UnitError> {
    Ok(UnitData {
        id: row.get("id"),
        name: row.get("name"),
        identifier: row.get("identifier"),
        unit_represent: parse_column("unit_represent", row.get("unit_represent"), UnitRepresentType::from_tag)?,
        sec_in_rate: row.get("sec_in_rate"),
        type_of_unit: parse_column("type_of_unit", row.get("type_of_unit"), UnitType::from_tag)?,
        unit_index: row.get("unit_index"),
        suffix: row.get("suffix"),
        displayable: parse_column("displayable", row.get("displayable"), DisplayableType::from_tag)?,
        preferred_display: row.get("preferred_display"),
        note: row.get("note"),
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

/// All units ordered by id.
///
/// # Errors
///
/// Returns a database error or `CorruptRow` for an unparseable enum column.
pub async fn list_units(pool: &PgPool) -> Result<Vec<UnitData>, UnitError> {
    let rows = sqlx::query(&format!("SELECT {UNIT_COLUMNS} FROM units ORDER BY id"))
        .fetch_all(pool)
        .await?;
    rows.iter().map(unit_from_row).collect()
}

/// Apply an admin edit. `name` and `unit_index` are server-owned and never
/// changed here. Returns the stored row.
///
/// # Errors
///
/// Returns `InvalidSecInRate`, `NotFound`, `DuplicateIdentifier`, or a
/// database error.
pub async fn update_unit(pool: &PgPool, unit: UnitData) -> Result<UnitData, UnitError> {
    let unit = validate_edit(unit)?;
    let result = sqlx::query(&format!(
        r"UPDATE units
          SET identifier = CASE WHEN $2 = '' THEN name ELSE $2 END,
              unit_represent = $3,
              sec_in_rate = $4,
              type_of_unit = $5,
              suffix = $6,
              displayable = $7,
              preferred_display = $8,
              note = $9
          WHERE id = $1
          RETURNING {UNIT_COLUMNS}"
    ))
    .bind(unit.id)
    .bind(&unit.identifier)
    .bind(unit.unit_represent.as_str())
    .bind(unit.sec_in_rate)
    .bind(unit.type_of_unit.as_str())
    .bind(&unit.suffix)
    .bind(unit.displayable.as_str())
    .bind(unit.preferred_display)
    .bind(&unit.note)
    .fetch_optional(pool)
    .await;

    let row = match result {
        Ok(Some(row)) => row,
        Ok(None) => return Err(UnitError::NotFound(unit.id)),
        Err(e) if is_unique_violation(&e) => return Err(UnitError::DuplicateIdentifier(unit.identifier)),
        Err(e) => return Err(e.into()),
    };
    let stored = unit_from_row(&row)?;
    info!(unit_id = stored.id, identifier = %stored.identifier, "unit updated");
    Ok(stored)
}

#[cfg(test)]
#[path = "unit_test.rs"]
mod tests;
