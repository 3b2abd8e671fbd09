//! Runtime wiring
//!
//! Builds the configured `AutoRepository` backend and the service on top of it.

use std::sync::Arc;

use configs::{AppConfig, StoreBackend};
use migration::MigratorTrait;
use tracing::info;

use crate::autos::repo::{FileAutoRepository, MemoryAutoRepository, SeaOrmAutoRepository};
use crate::autos::repository::AutoRepository;
use crate::{AutoManager, AutoService};

pub async fn build_repository(cfg: &AppConfig) -> anyhow::Result<Arc<dyn AutoRepository>> {
    let repo: Arc<dyn AutoRepository> = match cfg.store.backend {
        StoreBackend::Memory => Arc::new(MemoryAutoRepository::new()),
        StoreBackend::File => {
            common::env::ensure_data_dir(&cfg.store.file_path).await?;
            Arc::new(FileAutoRepository::open(&cfg.store.file_path).await?)
        }
        StoreBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None).await?;
            Arc::new(SeaOrmAutoRepository::new(db))
        }
    };
    info!(backend = ?cfg.store.backend, "auto repository ready");
    Ok(repo)
}

pub async fn build_auto_service(cfg: &AppConfig) -> anyhow::Result<Arc<dyn AutoService>> {
    let repo = build_repository(cfg).await?;
    Ok(Arc::new(AutoManager::new(repo)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Auto;

    #[tokio::test]
    async fn memory_backend_by_default() -> anyhow::Result<()> {
        let svc = build_auto_service(&AppConfig::default()).await?;
        assert!(svc.get_all_autos().await?.is_empty());
        svc.add_auto(Auto::new("red", "Honda", "Civic", 2000, "XX89DM")).await?;
        assert_eq!(svc.get_all_autos().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn file_backend_creates_store() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("autos_rt_{}", uuid::Uuid::new_v4()));
        let mut cfg = AppConfig::default();
        cfg.store.backend = StoreBackend::File;
        cfg.store.file_path = dir.join("autos.json").to_string_lossy().into_owned();
        let svc = build_auto_service(&cfg).await?;
        svc.add_auto(Auto::new("red", "Honda", "Civic", 2000, "XX89DM")).await?;
        assert!(tokio::fs::metadata(&cfg.store.file_path).await.is_ok());
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
