use async_trait::async_trait;
use database::common::RetryConfig;
use database::postgres::{self, HealthStatus, PostgresConfig};
use database::BaseRepository;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};

use crate::{
    entity,
    error::CloudVendorResult,
    models::{CloudVendor, Page, PageRequest},
    repository::CloudVendorRepository,
};

pub struct PgCloudVendorRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgCloudVendorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Open a pool from `config`, retrying while the server comes up.
    ///
    /// The schema is expected to exist already (see the `migration` crate).
    pub async fn connect(
        config: PostgresConfig,
        retry: Option<RetryConfig>,
    ) -> CloudVendorResult<Self> {
        let db = postgres::connect_from_config_with_retry(config, retry).await?;
        Ok(Self::new(db))
    }

    pub async fn health(&self) -> HealthStatus {
        postgres::check_health_detailed(self.base.db()).await
    }

    fn by_vendor_name(vendor_name: &str) -> Select<entity::Entity> {
        entity::Entity::find()
            .filter(entity::Column::VendorName.eq(vendor_name))
            .order_by_asc(entity::Column::Id)
    }

    async fn fetch_page(
        &self,
        select: Select<entity::Entity>,
        request: PageRequest,
    ) -> CloudVendorResult<Page<CloudVendor>> {
        let slice = self
            .base
            .fetch_page(select, request.page_number, request.page_size)
            .await?;

        let items = slice.items.into_iter().map(Into::into).collect();
        Ok(Page::new(items, request, slice.total_items))
    }
}

#[async_trait]
impl CloudVendorRepository for PgCloudVendorRepository {
    async fn save(&self, vendor: CloudVendor) -> CloudVendorResult<CloudVendor> {
        let active_model: entity::ActiveModel = vendor.into();

        let on_conflict = OnConflict::column(entity::Column::Id)
            .update_columns([
                entity::Column::VendorName,
                entity::Column::VendorAddress,
                entity::Column::VendorPhoneNumber,
            ])
            .to_owned();

        let model = self.base.upsert(active_model, on_conflict).await?;

        tracing::info!(vendor_id = %model.id, "Saved cloud vendor");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: &str) -> CloudVendorResult<Option<CloudVendor>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> CloudVendorResult<Vec<CloudVendor>> {
        let models = self.base.find_all_ordered(entity::Column::Id).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_all_paged(&self, request: PageRequest) -> CloudVendorResult<Page<CloudVendor>> {
        let select = entity::Entity::find().order_by_asc(entity::Column::Id);
        self.fetch_page(select, request).await
    }

    async fn find_by_vendor_name(&self, vendor_name: &str) -> CloudVendorResult<Vec<CloudVendor>> {
        let models = Self::by_vendor_name(vendor_name)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_vendor_name_paged(
        &self,
        vendor_name: &str,
        request: PageRequest,
    ) -> CloudVendorResult<Page<CloudVendor>> {
        self.fetch_page(Self::by_vendor_name(vendor_name), request).await
    }

    async fn delete_by_id(&self, id: &str) -> CloudVendorResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(vendor_id = %id, "Deleted cloud vendor");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
