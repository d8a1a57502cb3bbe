//! User account database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{AuditMeta, ImageAttachment, Role, UserAccount, IMAGE_CONTENT_TYPE};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    /// Role storage code (1, 2, 101)
    pub role: i16,
    pub country_id: Option<Uuid>,
    pub mobile_id: Option<Uuid>,
    pub email_id: Option<Uuid>,
    pub image_name: Option<String>,
    pub image_data: Option<Vec<u8>>,
    pub is_active: bool,
    pub is_deleted: bool,
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
impl From<Model> for UserAccount {
    fn from(model: Model) -> Self {
        let image = match (model.image_name, model.image_data) {
            (Some(filename), Some(bytes)) => {
                Some(ImageAttachment::new(filename, IMAGE_CONTENT_TYPE, bytes))
            }
            _ => None,
        };

        UserAccount {
            id: Some(model.id),
            username: model.username,
            role: Role::from_code(model.role).unwrap_or_default(),
            country_id: model.country_id,
            mobile_id: model.mobile_id,
            email_id: model.email_id,
            image,
            is_active: model.is_active,
            is_deleted: model.is_deleted,
            audit: AuditMeta {
                created_at: model.created_at,
                created_by: model.created_by,
                updated_at: model.updated_at,
                updated_by: model.updated_by,
            },
        }
    }
}
