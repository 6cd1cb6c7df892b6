use std::sync::Arc;
use tracing::instrument;

use crate::error::{CloudVendorError, CloudVendorResult};
use crate::models::{CloudVendor, Page, PageRequest};
use crate::repository::CloudVendorRepository;

/// Service layer for cloud vendors.
///
/// Writes go straight to the repository: `update` has no existence
/// precondition and `delete` of an unknown id succeeds. Only
/// [`get_cloud_vendor`](Self::get_cloud_vendor) turns a missing record into
/// [`CloudVendorError::NotFound`].
pub struct CloudVendorService<R: CloudVendorRepository> {
    repository: Arc<R>,
}

impl<R: CloudVendorRepository> CloudVendorService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, vendor), fields(vendor_id = %vendor.id))]
    pub async fn create_cloud_vendor(&self, vendor: CloudVendor) -> CloudVendorResult<CloudVendor> {
        self.repository.save(vendor).await
    }

    #[instrument(skip(self, vendor), fields(vendor_id = %vendor.id))]
    pub async fn update_cloud_vendor(&self, vendor: CloudVendor) -> CloudVendorResult<CloudVendor> {
        self.repository.save(vendor).await
    }

    #[instrument(skip(self))]
    pub async fn delete_cloud_vendor(&self, vendor_id: &str) -> CloudVendorResult<()> {
        self.repository.delete_by_id(vendor_id).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_cloud_vendor(&self, vendor_id: &str) -> CloudVendorResult<CloudVendor> {
        self.repository
            .find_by_id(vendor_id)
            .await?
            .ok_or(CloudVendorError::NotFound)
    }

    #[instrument(skip(self))]
    pub async fn get_all_cloud_vendors(&self) -> CloudVendorResult<Vec<CloudVendor>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_all_cloud_vendors_paged(
        &self,
        page: u64,
        size: u64,
    ) -> CloudVendorResult<Page<CloudVendor>> {
        let request = PageRequest::of(page, size)?;
        self.repository.find_all_paged(request).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_vendor_name(&self, vendor_name: &str) -> CloudVendorResult<Vec<CloudVendor>> {
        self.repository.find_by_vendor_name(vendor_name).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_vendor_name_paged(
        &self,
        vendor_name: &str,
        page: u64,
        size: u64,
    ) -> CloudVendorResult<Page<CloudVendor>> {
        let request = PageRequest::of(page, size)?;
        self.repository
            .find_by_vendor_name_paged(vendor_name, request)
            .await
    }
}

impl<R: CloudVendorRepository> Clone for CloudVendorService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
