use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};
use models::{Auto, UpdateAuto};

use crate::autos::repository::{AutoFilter, AutoRepository};
use crate::errors::ServiceError;

/// Process-local repository; contents are lost on restart.
#[derive(Default)]
pub struct MemoryAutoRepository {
    autos: DashMap<String, Auto>,
}

impl MemoryAutoRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl AutoRepository for MemoryAutoRepository {
    async fn list(&self, filter: &AutoFilter) -> Result<Vec<Auto>, ServiceError> {
        let autos = self
            .autos
            .iter()
            .filter(|e| filter.matches(e.value()))
            .map(|e| e.value().clone())
            .collect();
        Ok(super::sorted_by_vin(autos))
    }

    async fn find_by_vin(&self, vin: &str) -> Result<Option<Auto>, ServiceError> {
        Ok(self.autos.get(vin).map(|e| e.value().clone()))
    }

    async fn insert(&self, auto: Auto) -> Result<Auto, ServiceError> {
        match self.autos.entry(auto.vin.clone()) {
            Entry::Occupied(_) => Err(ServiceError::duplicate(&auto.vin)),
            Entry::Vacant(slot) => {
                slot.insert(auto.clone());
                Ok(auto)
            }
        }
    }

    async fn update(&self, vin: &str, change: &UpdateAuto) -> Result<Option<Auto>, ServiceError> {
        // get_mut 持有分片写锁，读改写在锁内完成
        Ok(self.autos.get_mut(vin).map(|mut e| {
            change.apply_to(e.value_mut());
            e.value().clone()
        }))
    }

    async fn delete(&self, vin: &str) -> Result<bool, ServiceError> {
        Ok(self.autos.remove(vin).is_some())
    }
}
