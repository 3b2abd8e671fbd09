use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::{Auto, UpdateAuto};

use crate::autos::repository::{AutoFilter, AutoRepository};
use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;

/// Repository persisting autos as a JSON object keyed by VIN.
pub struct FileAutoRepository {
    store: Arc<JsonMapStore<String, Auto>>,
}

impl FileAutoRepository {
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let store = JsonMapStore::open(path).await?;
        Ok(Self { store })
    }
}

#[async_trait]
impl AutoRepository for FileAutoRepository {
    async fn list(&self, filter: &AutoFilter) -> Result<Vec<Auto>, ServiceError> {
        let autos = self
            .store
            .values()
            .await
            .into_iter()
            .filter(|a| filter.matches(a))
            .collect();
        Ok(super::sorted_by_vin(autos))
    }

    async fn find_by_vin(&self, vin: &str) -> Result<Option<Auto>, ServiceError> {
        Ok(self.store.get(&vin.to_string()).await)
    }

    async fn insert(&self, auto: Auto) -> Result<Auto, ServiceError> {
        self.store
            .mutate(|map| {
                if map.contains_key(&auto.vin) {
                    return Err(ServiceError::duplicate(&auto.vin));
                }
                map.insert(auto.vin.clone(), auto.clone());
                Ok(auto)
            })
            .await
    }

    async fn update(&self, vin: &str, change: &UpdateAuto) -> Result<Option<Auto>, ServiceError> {
        self.store
            .mutate(|map| {
                Ok(map.get_mut(vin).map(|stored| {
                    change.apply_to(stored);
                    stored.clone()
                }))
            })
            .await
    }

    async fn delete(&self, vin: &str) -> Result<bool, ServiceError> {
        self.store.remove(&vin.to_string()).await
    }
}
