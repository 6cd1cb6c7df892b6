use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CloudVendorResult;
use crate::models::{CloudVendor, Page, PageRequest};

/// Storage port for cloud vendor records.
///
/// Listings are ordered by id ascending so consecutive pages never overlap.
/// Name lookups are exact and case-sensitive.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CloudVendorRepository: Send + Sync {
    /// Insert the vendor, or replace the stored one with the same id
    async fn save(&self, vendor: CloudVendor) -> CloudVendorResult<CloudVendor>;

    async fn find_by_id(&self, id: &str) -> CloudVendorResult<Option<CloudVendor>>;

    async fn find_all(&self) -> CloudVendorResult<Vec<CloudVendor>>;

    async fn find_all_paged(&self, request: PageRequest) -> CloudVendorResult<Page<CloudVendor>>;

    async fn find_by_vendor_name(&self, vendor_name: &str) -> CloudVendorResult<Vec<CloudVendor>>;

    async fn find_by_vendor_name_paged(
        &self,
        vendor_name: &str,
        request: PageRequest,
    ) -> CloudVendorResult<Page<CloudVendor>>;

    /// Remove the vendor if present; returns whether anything was removed
    async fn delete_by_id(&self, id: &str) -> CloudVendorResult<bool>;
}

/// In-memory implementation of CloudVendorRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCloudVendorRepository {
    vendors: Arc<RwLock<BTreeMap<String, CloudVendor>>>,
}

impl InMemoryCloudVendorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn matching_name(&self, vendor_name: &str) -> Vec<CloudVendor> {
        let vendors = self.vendors.read().await;
        vendors
            .values()
            .filter(|v| v.vendor_name == vendor_name)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CloudVendorRepository for InMemoryCloudVendorRepository {
    async fn save(&self, vendor: CloudVendor) -> CloudVendorResult<CloudVendor> {
        let mut vendors = self.vendors.write().await;
        let replaced = vendors.insert(vendor.id.clone(), vendor.clone()).is_some();

        tracing::info!(vendor_id = %vendor.id, replaced, "Saved cloud vendor");
        Ok(vendor)
    }

    async fn find_by_id(&self, id: &str) -> CloudVendorResult<Option<CloudVendor>> {
        let vendors = self.vendors.read().await;
        Ok(vendors.get(id).cloned())
    }

    async fn find_all(&self) -> CloudVendorResult<Vec<CloudVendor>> {
        let vendors = self.vendors.read().await;
        Ok(vendors.values().cloned().collect())
    }

    async fn find_all_paged(&self, request: PageRequest) -> CloudVendorResult<Page<CloudVendor>> {
        let all = self.find_all().await?;
        Ok(Page::from_all(all, request))
    }

    async fn find_by_vendor_name(&self, vendor_name: &str) -> CloudVendorResult<Vec<CloudVendor>> {
        Ok(self.matching_name(vendor_name).await)
    }

    async fn find_by_vendor_name_paged(
        &self,
        vendor_name: &str,
        request: PageRequest,
    ) -> CloudVendorResult<Page<CloudVendor>> {
        let matching = self.matching_name(vendor_name).await;
        Ok(Page::from_all(matching, request))
    }

    async fn delete_by_id(&self, id: &str) -> CloudVendorResult<bool> {
        let mut vendors = self.vendors.write().await;

        if vendors.remove(id).is_some() {
            tracing::info!(vendor_id = %id, "Deleted cloud vendor");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
