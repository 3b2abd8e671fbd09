use async_trait::async_trait;
use models::{Auto, UpdateAuto};

use crate::errors::ServiceError;

/// Case-insensitive exact-match filter on color and/or make.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AutoFilter {
    pub color: Option<String>,
    pub make: Option<String>,
}

impl AutoFilter {
    pub fn all() -> Self { Self::default() }

    pub fn color(color: &str) -> Self { Self { color: Some(color.trim().to_string()), make: None } }

    pub fn make(make: &str) -> Self { Self { color: None, make: Some(make.trim().to_string()) } }

    pub fn color_and_make(color: &str, make: &str) -> Self {
        Self { color: Some(color.trim().to_string()), make: Some(make.trim().to_string()) }
    }

    pub fn matches(&self, auto: &Auto) -> bool {
        let eq = |want: &Option<String>, have: &str| {
            want.as_deref().map_or(true, |w| w.eq_ignore_ascii_case(have))
        };
        eq(&self.color, &auto.color) && eq(&self.make, &auto.make)
    }
}

/// Persistence for autos keyed by (normalised) VIN.
///
/// Implementations return listings ordered by VIN.
#[async_trait]
pub trait AutoRepository: Send + Sync {
    async fn list(&self, filter: &AutoFilter) -> Result<Vec<Auto>, ServiceError>;
    async fn find_by_vin(&self, vin: &str) -> Result<Option<Auto>, ServiceError>;
    /// Fails with `InvalidAuto` when the VIN is already taken.
    async fn insert(&self, auto: Auto) -> Result<Auto, ServiceError>;
    /// Apply the present fields of `change` in one atomic step; `None` if the VIN is absent.
    async fn update(&self, vin: &str, change: &UpdateAuto) -> Result<Option<Auto>, ServiceError>;
    async fn delete(&self, vin: &str) -> Result<bool, ServiceError>;
}
