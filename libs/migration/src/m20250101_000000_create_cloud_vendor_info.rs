use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CloudVendorInfo::Table)
                    .if_not_exists()
                    // Byte-order collation keeps id ordering locale independent
                    .col(
                        string(CloudVendorInfo::VendorId)
                            .extra("COLLATE \"C\"")
                            .primary_key(),
                    )
                    .col(string(CloudVendorInfo::VendorName))
                    .col(string(CloudVendorInfo::VendorAddress).default(""))
                    .col(string(CloudVendorInfo::VendorPhoneNumber).default(""))
                    .to_owned(),
            )
            .await?;

        // Vendor name lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_cloud_vendor_info_vendor_name")
                    .table(CloudVendorInfo::Table)
                    .col(CloudVendorInfo::VendorName)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CloudVendorInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CloudVendorInfo {
    Table,
    VendorId,
    VendorName,
    VendorAddress,
    VendorPhoneNumber,
}
