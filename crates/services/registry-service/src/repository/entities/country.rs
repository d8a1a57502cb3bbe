//! Country database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{AuditMeta, Country, ImageAttachment, IMAGE_CONTENT_TYPE};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    #[sea_orm(unique)]
    pub phone_prefix: String,
    pub number_length: i16,
    #[sea_orm(unique)]
    pub currency: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub image_name: Option<String>,
    pub image_data: Option<Vec<u8>>,
    pub is_active: bool,
    pub created_at: Option<DateTimeUtc>,
    pub created_by: Option<Uuid>,
    pub updated_at: Option<DateTimeUtc>,
    pub updated_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Country {
    fn from(model: Model) -> Self {
        let image = match (model.image_name, model.image_data) {
            (Some(filename), Some(bytes)) => {
                Some(ImageAttachment::new(filename, IMAGE_CONTENT_TYPE, bytes))
            }
            _ => None,
        };

        Country {
            id: Some(model.id),
            name: model.name,
            code: model.code,
            phone_prefix: model.phone_prefix,
            number_length: model.number_length,
            currency: model.currency,
            latitude: model.latitude,
            longitude: model.longitude,
            timezone: model.timezone,
            image,
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
