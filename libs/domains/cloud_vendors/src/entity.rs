use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the cloud_vendor_info table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cloud_vendor_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "vendor_id")]
    pub id: String,
    pub vendor_name: String,
    pub vendor_address: String,
    pub vendor_phone_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::CloudVendor {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            vendor_name: model.vendor_name,
            vendor_address: model.vendor_address,
            vendor_phone_number: model.vendor_phone_number,
        }
    }
}

impl From<crate::models::CloudVendor> for ActiveModel {
    fn from(vendor: crate::models::CloudVendor) -> Self {
        ActiveModel {
            id: Set(vendor.id),
            vendor_name: Set(vendor.vendor_name),
            vendor_address: Set(vendor.vendor_address),
            vendor_phone_number: Set(vendor.vendor_phone_number),
        }
    }
}
