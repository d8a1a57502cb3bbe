//! Network database entity for SeaORM.
//!
//! The (name, code) pair also carries a composite unique index in the
//! storage schema.

use sea_orm::entity::prelude::*;

use domain::{AuditMeta, Network};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "networks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub country_id: Option<Uuid>,
    #[sea_orm(indexed)]
    pub name: String,
    pub code: String,
    pub is_active: bool,
    pub created_at: Option<DateTimeUtc>,
    pub created_by: Option<Uuid>,
    pub updated_at: Option<DateTimeUtc>,
    pub updated_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::CountryId",
        to = "super::country::Column::Id"
    )]
    Country,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Network {
    fn from(model: Model) -> Self {
        Network {
            id: Some(model.id),
            country_id: model.country_id,
            name: model.name,
            code: model.code,
            is_active: model.is_active,
            audit: AuditMeta {
                created_at: model.created_at,
                created_by: model.created_by,
                updated_at: model.updated_at,
                updated_by: model.updated_by,
            },
        }
    }
}
