//! REST DTOs for the users, tutors, and animals resources.
//!
//! DESIGN
//! ======
//! Field names follow the REST service's JSON (camelCase for animals). Ids
//! are accepted as integers or numeric strings because json-server style
//! backends emit either depending on version.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An identity record as returned by `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    /// Display name.
    pub name: String,
    pub email: String,
}

/// A pet owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutor {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Tutor body for create/update requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorInput {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Species the hotel boards. Wire values are the service's Portuguese names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    #[serde(rename = "gato")]
    Cat,
    #[serde(rename = "cachorro")]
    Dog,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Cat, Species::Dog];

    /// Wire value (`"gato"` / `"cachorro"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Species::Cat => "gato",
            Species::Dog => "cachorro",
        }
    }

    /// Human-readable label for selects and tables.
    pub fn label(self) -> &'static str {
        match self {
            Species::Cat => "Gato",
            Species::Dog => "Cachorro",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// A boarded pet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    pub species: Species,
    pub breed: String,
    /// Age in whole years.
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub age: u32,
    /// Owning tutor.
    #[serde(deserialize_with = "deserialize_id")]
    pub tutor_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Animal body for create/update requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalInput {
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub age: u32,
    pub tutor_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected numeric id, got {raw:?}"))),
        other => integer_from_value(&other).map_err(D::Error::custom),
    }
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let value = integer_from_value(&value).map_err(D::Error::custom)?;
    u32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u32")))
}

fn integer_from_value(value: &serde_json::Value) -> Result<i64, &'static str> {
    let serde_json::Value::Number(number) = value else {
        return Err("expected number");
    };
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Ok(float as i64);
    }
    Err("expected integer-compatible number")
}
