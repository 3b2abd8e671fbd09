use std::sync::Arc;

use async_trait::async_trait;
use models::{auto::normalize_vin, Auto, AutosList, UpdateAuto};
use tracing::{debug, info, instrument};

use super::repository::{AutoFilter, AutoRepository};
use crate::errors::ServiceError;

/// Operations the HTTP layer consumes.
///
/// Lookups and updates report a missing VIN as `Ok(None)`; only
/// `delete_auto` treats it as an error.
#[async_trait]
pub trait AutoService: Send + Sync {
    async fn get_all_autos(&self) -> Result<AutosList, ServiceError>;
    async fn get_all_autos_filtered(&self, color: &str, make: &str) -> Result<AutosList, ServiceError>;
    async fn get_all_autos_by_color(&self, color: &str) -> Result<AutosList, ServiceError>;
    async fn get_all_autos_by_make(&self, make: &str) -> Result<AutosList, ServiceError>;
    async fn get_auto(&self, vin: &str) -> Result<Option<Auto>, ServiceError>;
    /// Fails with `InvalidAuto` on malformed input or a taken VIN.
    async fn add_auto(&self, auto: Auto) -> Result<Auto, ServiceError>;
    /// Fails with `InvalidUpdateAuto` on malformed input.
    async fn update_auto(&self, vin: &str, color: Option<&str>, owner: Option<&str>) -> Result<Option<Auto>, ServiceError>;
    /// Fails with `AutoNotFound` when the VIN is absent.
    async fn delete_auto(&self, vin: &str) -> Result<(), ServiceError>;
}

/// Default `AutoService`: validation and VIN normalisation on top of a repository.
pub struct AutoManager<R: AutoRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: AutoRepository + ?Sized> AutoManager<R> {
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::Auto;
    /// use service::{AutoManager, AutoService};
    /// use service::autos::repo::MemoryAutoRepository;
    ///
    /// let svc = AutoManager::new(Arc::new(MemoryAutoRepository::new()));
    /// let auto = tokio_test::block_on(svc.add_auto(Auto::new("red", "Honda", "Civic", 2000, "xx89dm"))).unwrap();
    /// assert_eq!(auto.vin, "XX89DM");
    /// ```
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    async fn list(&self, filter: AutoFilter) -> Result<AutosList, ServiceError> {
        let autos = self.repo.list(&filter).await?;
        debug!(color = ?filter.color, make = ?filter.make, count = autos.len(), "autos listed");
        Ok(AutosList::new(autos))
    }
}

#[async_trait]
impl<R: AutoRepository + ?Sized> AutoService for AutoManager<R> {
    async fn get_all_autos(&self) -> Result<AutosList, ServiceError> {
        self.list(AutoFilter::all()).await
    }

    async fn get_all_autos_filtered(&self, color: &str, make: &str) -> Result<AutosList, ServiceError> {
        self.list(AutoFilter::color_and_make(color, make)).await
    }

    async fn get_all_autos_by_color(&self, color: &str) -> Result<AutosList, ServiceError> {
        self.list(AutoFilter::color(color)).await
    }

    async fn get_all_autos_by_make(&self, make: &str) -> Result<AutosList, ServiceError> {
        self.list(AutoFilter::make(make)).await
    }

    async fn get_auto(&self, vin: &str) -> Result<Option<Auto>, ServiceError> {
        self.repo.find_by_vin(&normalize_vin(vin)).await
    }

    #[instrument(skip(self, auto), fields(vin = %auto.vin))]
    async fn add_auto(&self, auto: Auto) -> Result<Auto, ServiceError> {
        let auto = auto.normalized();
        auto.validate().map_err(ServiceError::invalid_auto)?;
        let created = self.repo.insert(auto).await?;
        info!(event = "auto_created", vin = %created.vin, make = %created.make, year = created.year, "auto created");
        Ok(created)
    }

    #[instrument(skip(self, color, owner))]
    async fn update_auto(&self, vin: &str, color: Option<&str>, owner: Option<&str>) -> Result<Option<Auto>, ServiceError> {
        let update = UpdateAuto { color: color.map(str::to_string), owner: owner.map(str::to_string) }.normalized();
        update.validate().map_err(ServiceError::invalid_update)?;

        let updated = self.repo.update(&normalize_vin(vin), &update).await?;
        match &updated {
            Some(a) => info!(event = "auto_updated", vin = %a.vin, color = %a.color, "auto updated"),
            None => debug!("update skipped, vin absent"),
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_auto(&self, vin: &str) -> Result<(), ServiceError> {
        let vin = normalize_vin(vin);
        if !self.repo.delete(&vin).await? {
            return Err(ServiceError::not_found(&vin));
        }
        info!(event = "auto_deleted", vin = %vin, "auto deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autos::repo::MemoryAutoRepository;

    fn svc() -> AutoManager<MemoryAutoRepository> {
        AutoManager::new(Arc::new(MemoryAutoRepository::new()))
    }

    async fn seeded() -> AutoManager<MemoryAutoRepository> {
        let s = svc();
        for (i, (color, make)) in [("red", "Honda"), ("red", "Ford"), ("blue", "Honda")].iter().enumerate() {
            s.add_auto(Auto::new(color, make, "Model", 2000 + i as i32, &format!("VIN{i}")))
                .await
                .unwrap();
        }
        s
    }

    #[tokio::test]
    async fn lists_and_filters() {
        let s = seeded().await;
        assert_eq!(s.get_all_autos().await.unwrap().len(), 3);
        assert_eq!(s.get_all_autos_by_color("RED").await.unwrap().len(), 2);
        assert_eq!(s.get_all_autos_by_make("honda").await.unwrap().len(), 2);
        let both = s.get_all_autos_filtered("red", "Honda").await.unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both.autos[0].vin, "VIN0");
        assert!(s.get_all_autos_by_make("Tesla").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_normalizes_and_rejects_invalid() {
        let s = svc();
        let created = s.add_auto(Auto::new(" red ", "Honda", "Civic", 2000, " xx89dm ")).await.unwrap();
        assert_eq!(created.vin, "XX89DM");
        assert_eq!(created.color, "red");

        let dup = s.add_auto(Auto::new("blue", "Honda", "Civic", 2001, "XX89DM")).await;
        assert!(matches!(dup, Err(ServiceError::InvalidAuto(_))));

        let bad_year = s.add_auto(Auto::new("red", "Honda", "Civic", 1700, "AB12")).await;
        assert!(matches!(bad_year, Err(ServiceError::InvalidAuto(_))));

        let no_make = s.add_auto(Auto::new("red", "", "Civic", 2000, "AB12")).await;
        assert!(matches!(no_make, Err(ServiceError::InvalidAuto(_))));
    }

    #[tokio::test]
    async fn get_is_case_insensitive_on_vin() {
        let s = seeded().await;
        assert!(s.get_auto("vin1").await.unwrap().is_some());
        assert!(s.get_auto("NOPE").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_applies_only_given_fields() {
        let s = seeded().await;
        let a = s.update_auto("VIN0", Some("blue"), Some("David")).await.unwrap().unwrap();
        assert_eq!((a.color.as_str(), a.owner.as_deref()), ("blue", Some("David")));

        let a = s.update_auto("VIN0", None, Some("  ")).await.unwrap().unwrap();
        assert_eq!(a.color, "blue");
        assert_eq!(a.owner, None);

        let a = s.update_auto("vin0", Some("green"), None).await.unwrap().unwrap();
        assert_eq!(a.color, "green");
        assert_eq!(a.make, "Honda");
    }

    #[tokio::test]
    async fn update_errors_and_missing() {
        let s = seeded().await;
        let empty = s.update_auto("VIN0", None, None).await;
        assert!(matches!(empty, Err(ServiceError::InvalidUpdateAuto(_))));
        let blank_color = s.update_auto("VIN0", Some(" "), None).await;
        assert!(matches!(blank_color, Err(ServiceError::InvalidUpdateAuto(_))));
        assert!(s.update_auto("MISSING", Some("blue"), None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn overlong_fields_are_client_errors() {
        let s = seeded().await;
        let long = "x".repeat(models::auto::MAX_COLOR_LEN + 1);
        let add = s.add_auto(Auto::new(&long, "Honda", "Civic", 2000, "LONG1")).await;
        assert!(matches!(add, Err(ServiceError::InvalidAuto(_))));
        let upd = s.update_auto("VIN0", Some(&long), None).await;
        assert!(matches!(upd, Err(ServiceError::InvalidUpdateAuto(_))));
    }

    /// Memory repository whose reads are slow, widening any read-modify-write window.
    #[derive(Default)]
    struct SlowReads {
        inner: MemoryAutoRepository,
    }

    #[async_trait]
    impl AutoRepository for SlowReads {
        async fn list(&self, filter: &AutoFilter) -> Result<Vec<Auto>, ServiceError> {
            self.inner.list(filter).await
        }

        async fn find_by_vin(&self, vin: &str) -> Result<Option<Auto>, ServiceError> {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            self.inner.find_by_vin(vin).await
        }

        async fn insert(&self, auto: Auto) -> Result<Auto, ServiceError> {
            self.inner.insert(auto).await
        }

        async fn update(&self, vin: &str, change: &UpdateAuto) -> Result<Option<Auto>, ServiceError> {
            self.inner.update(vin, change).await
        }

        async fn delete(&self, vin: &str) -> Result<bool, ServiceError> {
            self.inner.delete(vin).await
        }
    }

    #[tokio::test]
    async fn concurrent_partial_updates_do_not_overwrite_each_other() {
        let s = AutoManager::new(Arc::new(SlowReads::default()));
        s.add_auto(Auto::new("red", "Honda", "Civic", 2000, "XX89DM")).await.unwrap();

        let (color, owner) = tokio::join!(
            s.update_auto("XX89DM", Some("blue"), None),
            s.update_auto("xx89dm", None, Some("David")),
        );
        assert!(color.unwrap().is_some());
        assert!(owner.unwrap().is_some());

        let stored = s.get_auto("XX89DM").await.unwrap().unwrap();
        assert_eq!((stored.color.as_str(), stored.owner.as_deref()), ("blue", Some("David")));
    }

    #[tokio::test]
    async fn delete_reports_missing() {
        let s = seeded().await;
        s.delete_auto("vin2").await.unwrap();
        assert!(matches!(s.delete_auto("VIN2").await, Err(ServiceError::AutoNotFound(_))));
        assert_eq!(s.get_all_autos().await.unwrap().len(), 2);
    }
}
