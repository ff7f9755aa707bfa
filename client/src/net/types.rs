//! Shared REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads (camelCase unit fields,
//! lowercase enum tags) so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// How a unit's readings are represented and aggregated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitRepresentType {
    /// Readings sum over time (e.g. kWh).
    #[default]
    Quantity,
    /// Readings are a rate (e.g. kW).
    Flow,
    /// Readings are instantaneous values (e.g. temperature).
    Raw,
    /// Not yet assigned.
    Unused,
}

impl UnitRepresentType {
    /// Parse a wire tag; `None` for anything unrecognized.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "quantity" => Some(Self::Quantity),
            "flow" => Some(Self::Flow),
            "raw" => Some(Self::Raw),
            "unused" => Some(Self::Unused),
            _ => None,
        }
    }

    /// Wire tag, also used as the message id for its label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quantity => "quantity",
            Self::Flow => "flow",
            Self::Raw => "raw",
            Self::Unused => "unused",
        }
    }
}

/// Where a unit sits in the conversion graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    /// A unit users graph in.
    #[default]
    Unit,
    /// A unit that meters report in.
    Meter,
    /// A unit generated from a suffix conversion.
    Suffix,
}

impl UnitType {
    /// Parse a wire tag; `None` for anything unrecognized.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "unit" => Some(Self::Unit),
            "meter" => Some(Self::Meter),
            "suffix" => Some(Self::Suffix),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Meter => "meter",
            Self::Suffix => "suffix",
        }
    }
}

/// Which viewers may see a unit in graphic selectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayableType {
    /// Hidden from everyone.
    None,
    /// Visible to every viewer.
    #[default]
    All,
    /// Visible to admins only.
    Admin,
}

impl DisplayableType {
    /// Parse a wire tag; `None` for anything unrecognized.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "none" => Some(Self::None),
            "all" => Some(Self::All),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::All => "all",
            Self::Admin => "admin",
        }
    }
}

/// A measurement unit as returned by `GET /api/units`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitData {
    /// Database identifier.
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub id: i32,
    /// Unique internal name.
    pub name: String,
    /// Name shown to users; the one field editable inline.
    pub identifier: String,
    pub unit_represent: UnitRepresentType,
    /// Seconds in the rate period for flow units (3600 for per-hour).
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub sec_in_rate: i32,
    pub type_of_unit: UnitType,
    /// Row/column index in the conversion matrix, assigned by the server.
    #[serde(default)]
    pub unit_index: Option<i32>,
    /// Suffix appended when generating derived units.
    #[serde(default)]
    pub suffix: String,
    pub displayable: DisplayableType,
    /// Whether the unit is offered as a default choice.
    pub preferred_display: bool,
    /// Free-form admin note.
    #[serde(default)]
    pub note: String,
}

/// Role granted to a user account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative access, including unit edits.
    Admin,
    /// May upload CSV readings.
    Csv,
    /// May export data.
    Export,
    /// May push readings from Obvius devices.
    Obvius,
    /// Read-only access.
    #[default]
    Observer,
}

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, when the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Unknown roles degrade to `Observer`.
    #[serde(default, deserialize_with = "deserialize_role_lenient")]
    pub role: UserRole,
}

fn deserialize_role_lenient<'de, D>(deserializer: D) -> Result<UserRole, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn deserialize_i32_from_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return i32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for i32")));
            }
            #[allow(clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= f64::from(i32::MIN)
                && float <= f64::from(i32::MAX)
            {
                return Ok(float as i32);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
