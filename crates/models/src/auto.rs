use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Oldest model year accepted (first production automobile).
pub const MIN_YEAR: i32 = 1886;
/// Longest VIN accepted; modern VINs are exactly this long.
pub const MAX_VIN_LEN: usize = 17;
/// Column widths of the `autos` table; the migration uses the same values.
pub const MAX_COLOR_LEN: usize = 64;
pub const MAX_MAKE_LEN: usize = 128;
pub const MAX_MODEL_LEN: usize = 128;
pub const MAX_OWNER_LEN: usize = 256;

/// A vehicle record keyed by its VIN.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Auto {
    pub color: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    #[serde(default)]
    pub owner: Option<String>,
}

impl Auto {
    pub fn new(color: &str, make: &str, model: &str, year: i32, vin: &str) -> Self {
        Self {
            color: color.to_string(),
            make: make.to_string(),
            model: model.to_string(),
            year,
            vin: vin.to_string(),
            owner: None,
        }
    }

    pub fn with_owner(mut self, owner: &str) -> Self {
        self.owner = Some(owner.to_string());
        self
    }

    /// Trim text fields, upper-case the VIN and drop a blank owner.
    pub fn normalized(self) -> Self {
        Self {
            color: self.color.trim().to_string(),
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            year: self.year,
            vin: normalize_vin(&self.vin),
            owner: normalize_owner(self.owner),
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        validate_vin(&self.vin)?;
        require("make", &self.make, MAX_MAKE_LEN)?;
        require("model", &self.model, MAX_MODEL_LEN)?;
        require("color", &self.color, MAX_COLOR_LEN)?;
        if let Some(owner) = &self.owner {
            max_len("owner", owner, MAX_OWNER_LEN)?;
        }
        validate_year(self.year)
    }
}

/// List-response envelope.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutosList {
    #[serde(rename = "autosList")]
    pub autos: Vec<Auto>,
}

impl AutosList {
    pub fn new(autos: Vec<Auto>) -> Self { Self { autos } }

    pub fn is_empty(&self) -> bool { self.autos.is_empty() }

    pub fn len(&self) -> usize { self.autos.len() }
}

/// PATCH payload; only color and owner are mutable.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateAuto {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
}

impl UpdateAuto {
    pub fn new(color: &str, owner: &str) -> Self {
        Self { color: Some(color.to_string()), owner: Some(owner.to_string()) }
    }

    /// At least one field present; a present color must not be blank.
    /// A blank owner is allowed and clears the owner.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.color.is_none() && self.owner.is_none() {
            return Err(ModelError::Validation("update must set color or owner".into()));
        }
        if let Some(color) = &self.color {
            require("color", color, MAX_COLOR_LEN)?;
        }
        if let Some(owner) = &self.owner {
            max_len("owner", owner, MAX_OWNER_LEN)?;
        }
        Ok(())
    }

    /// Trim both fields. An owner that trims to empty stays `Some("")`
    /// and still means "clear the owner".
    pub fn normalized(self) -> Self {
        Self {
            color: self.color.map(|c| c.trim().to_string()),
            owner: self.owner.map(|o| o.trim().to_string()),
        }
    }

    /// Apply the present fields to `auto`.
    pub fn apply_to(&self, auto: &mut Auto) {
        if let Some(color) = &self.color {
            auto.color = color.clone();
        }
        if let Some(owner) = &self.owner {
            auto.owner = normalize_owner(Some(owner.clone()));
        }
    }
}

pub fn normalize_vin(vin: &str) -> String {
    vin.trim().to_ascii_uppercase()
}

fn normalize_owner(owner: Option<String>) -> Option<String> {
    owner
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
}

pub fn validate_vin(vin: &str) -> Result<(), ModelError> {
    let vin = vin.trim();
    if vin.is_empty() {
        return Err(ModelError::Validation("vin required".into()));
    }
    if vin.len() > MAX_VIN_LEN {
        return Err(ModelError::Validation(format!("vin longer than {MAX_VIN_LEN} characters")));
    }
    if !vin.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ModelError::Validation("vin must be alphanumeric".into()));
    }
    Ok(())
}

pub fn validate_year(year: i32) -> Result<(), ModelError> {
    let max = Utc::now().year() + 1;
    if !(MIN_YEAR..=max).contains(&year) {
        return Err(ModelError::Validation(format!("year must be within {MIN_YEAR}..={max}")));
    }
    Ok(())
}

fn require(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    max_len(field, value, max)
}

fn max_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.trim().chars().count() > max {
        return Err(ModelError::Validation(format!("{field} longer than {max} characters")));
    }
    Ok(())
}
