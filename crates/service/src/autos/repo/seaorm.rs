use async_trait::async_trait;
use models::{auto_record, Auto, UpdateAuto};
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::autos::repository::{AutoFilter, AutoRepository};
use crate::errors::ServiceError;

/// SeaORM-backed repository over the `autos` table.
pub struct SeaOrmAutoRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAutoRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn lower_eq(col: auto_record::Column, value: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).eq(value.to_lowercase())
}

#[async_trait]
impl AutoRepository for SeaOrmAutoRepository {
    async fn list(&self, filter: &AutoFilter) -> Result<Vec<Auto>, ServiceError> {
        let mut query = auto_record::Entity::find();
        if let Some(color) = filter.color.as_deref() {
            query = query.filter(lower_eq(auto_record::Column::Color, color));
        }
        if let Some(make) = filter.make.as_deref() {
            query = query.filter(lower_eq(auto_record::Column::Make, make));
        }
        let rows = query
            .order_by_asc(auto_record::Column::Vin)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(rows.into_iter().map(Auto::from).collect())
    }

    async fn find_by_vin(&self, vin: &str) -> Result<Option<Auto>, ServiceError> {
        Ok(auto_record::find(&self.db, vin).await?.map(Auto::from))
    }

    async fn insert(&self, auto: Auto) -> Result<Auto, ServiceError> {
        let taken = auto_record::Entity::find()
            .filter(auto_record::Column::Vin.eq(auto.vin.clone()))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if taken.is_some() {
            return Err(ServiceError::duplicate(&auto.vin));
        }
        match auto_record::create(&self.db, &auto).await {
            Ok(row) => Ok(Auto::from(row)),
            // 并发插入同一 VIN 时由唯一约束兜底
            Err(models::errors::ModelError::Duplicate(_)) => Err(ServiceError::duplicate(&auto.vin)),
            Err(e) => Err(ServiceError::invalid_auto(e)),
        }
    }

    async fn update(&self, vin: &str, change: &UpdateAuto) -> Result<Option<Auto>, ServiceError> {
        Ok(auto_record::update_partial(&self.db, vin, change).await?.map(Auto::from))
    }

    async fn delete(&self, vin: &str) -> Result<bool, ServiceError> {
        Ok(auto_record::delete(&self.db, vin).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;

    #[tokio::test]
    async fn seaorm_repo_filters_case_insensitively() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
            return Ok(());
        }
        let db = models::db::connect().await?;
        migration::Migrator::up(&db, None).await?;
        let repo = SeaOrmAutoRepository::new(db);

        let suffix = uuid::Uuid::new_v4().simple().to_string()[..8].to_uppercase();
        let vin = format!("S{suffix}");
        let color = format!("Teal{suffix}");
        repo.insert(Auto::new(&color, "Honda", "Civic", 2000, &vin)).await?;

        let hits = repo.list(&AutoFilter::color_and_make(&color.to_lowercase(), "HONDA")).await?;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].vin, vin);

        let dup = repo.insert(Auto::new("red", "Kia", "Rio", 2015, &vin)).await;
        assert!(matches!(dup, Err(ServiceError::InvalidAuto(_))));

        let color = UpdateAuto { color: Some("blue".into()), owner: None };
        let owner = UpdateAuto { color: None, owner: Some("David".into()) };
        let (a, b) = tokio::join!(repo.update(&vin, &color), repo.update(&vin, &owner));
        a?;
        b?;
        let stored = repo.find_by_vin(&vin).await?.expect("row exists");
        assert_eq!((stored.color.as_str(), stored.owner.as_deref()), ("blue", Some("David")));

        assert!(repo.delete(&vin).await?);
        assert!(repo.update(&vin, &color).await?.is_none());
        Ok(())
    }
}
