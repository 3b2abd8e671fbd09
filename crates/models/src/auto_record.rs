use chrono::Utc;
use sea_orm::{entity::prelude::*, sea_query::Expr, DatabaseConnection, QueryOrder, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::auto::{Auto, UpdateAuto};
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "autos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vin: String,
    pub color: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub owner: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Auto {
    fn from(m: Model) -> Self {
        Auto { color: m.color, make: m.make, model: m.model, year: m.year, vin: m.vin, owner: m.owner }
    }
}

fn db_err(e: DbErr) -> errors::ModelError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => errors::ModelError::Duplicate(msg),
        _ => errors::ModelError::Db(e.to_string()),
    }
}

/// All rows ordered by VIN.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find().order_by_asc(Column::Vin).all(db).await.map_err(db_err)
}

pub async fn find(db: &DatabaseConnection, vin: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(vin.to_string()).one(db).await.map_err(db_err)
}

pub async fn create(db: &DatabaseConnection, auto: &Auto) -> Result<Model, errors::ModelError> {
    auto.validate()?;
    let now = Utc::now().into();
    let am = ActiveModel {
        vin: Set(auto.vin.clone()),
        color: Set(auto.color.clone()),
        make: Set(auto.make.clone()),
        model: Set(auto.model.clone()),
        year: Set(auto.year),
        owner: Set(auto.owner.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(db_err)
}

/// Apply the present fields of `change` in a single `UPDATE ... WHERE vin = $1`.
/// `None` when no row matched.
pub async fn update_partial(
    db: &DatabaseConnection,
    vin: &str,
    change: &UpdateAuto,
) -> Result<Option<Model>, errors::ModelError> {
    let mut stmt = Entity::update_many()
        .col_expr(Column::UpdatedAt, Expr::value(DateTimeWithTimeZone::from(Utc::now())))
        .filter(Column::Vin.eq(vin));
    if let Some(color) = &change.color {
        stmt = stmt.col_expr(Column::Color, Expr::value(color.trim().to_string()));
    }
    if let Some(owner) = &change.owner {
        let owner = owner.trim();
        let owner = (!owner.is_empty()).then(|| owner.to_string());
        stmt = stmt.col_expr(Column::Owner, Expr::value(owner));
    }
    let rows = stmt.exec_with_returning(db).await.map_err(db_err)?;
    Ok(rows.into_iter().next())
}

pub async fn delete(db: &DatabaseConnection, vin: &str) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(vin.to_string()).exec(db).await.map_err(db_err)?;
    Ok(res.rows_affected > 0)
}
