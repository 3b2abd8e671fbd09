//! 颜色/品牌过滤走 `LOWER(col) = $1`，因此建表达式索引。
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("CREATE INDEX IF NOT EXISTS idx_autos_lower_color ON autos (lower(color))")
            .await?;
        db.execute_unprepared("CREATE INDEX IF NOT EXISTS idx_autos_lower_make ON autos (lower(make))")
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP INDEX IF EXISTS idx_autos_lower_make").await?;
        db.execute_unprepared("DROP INDEX IF EXISTS idx_autos_lower_color").await?;
        Ok(())
    }
}
