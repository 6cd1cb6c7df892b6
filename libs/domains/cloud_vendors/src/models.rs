use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CloudVendorError, CloudVendorResult};

/// A cloud vendor record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudVendor {
    /// Unique identifier, supplied by the caller
    #[serde(rename = "vendorId")]
    pub id: String,
    /// Vendor name (not unique)
    pub vendor_name: String,
    #[serde(default)]
    pub vendor_address: String,
    #[serde(default)]
    pub vendor_phone_number: String,
}

impl CloudVendor {
    /// Create a vendor with a freshly generated id
    pub fn new(
        vendor_name: impl Into<String>,
        vendor_address: impl Into<String>,
        vendor_phone_number: impl Into<String>,
    ) -> Self {
        Self::with_id(
            Uuid::now_v7().to_string(),
            vendor_name,
            vendor_address,
            vendor_phone_number,
        )
    }

    pub fn with_id(
        id: impl Into<String>,
        vendor_name: impl Into<String>,
        vendor_address: impl Into<String>,
        vendor_phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            vendor_name: vendor_name.into(),
            vendor_address: vendor_address.into(),
            vendor_phone_number: vendor_phone_number.into(),
        }
    }
}

/// Zero-based page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_number: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// A page must hold at least one element.
    pub fn of(page_number: u64, page_size: u64) -> CloudVendorResult<Self> {
        if page_size == 0 {
            return Err(CloudVendorError::InvalidPageRequest(
                "Page size must not be less than one".to_string(),
            ));
        }

        Ok(Self {
            page_number,
            page_size,
        })
    }

    /// Number of elements preceding this page
    pub fn offset(&self) -> u64 {
        self.page_number.saturating_mul(self.page_size)
    }
}

/// A bounded slice of a result set plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_number: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_count: u64) -> Self {
        Self {
            items,
            total_count,
            page_number: request.page_number,
            page_size: request.page_size,
        }
    }

    /// Slice `page` out of an already complete, ordered result set
    pub fn from_all(all: Vec<T>, request: PageRequest) -> Self {
        let total_count = all.len() as u64;
        let items = all
            .into_iter()
            .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(request.page_size).unwrap_or(usize::MAX))
            .collect();

        Self::new(items, request, total_count)
    }

    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }

    pub fn is_first(&self) -> bool {
        self.page_number == 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn has_next(&self) -> bool {
        self.page_number.saturating_add(1) < self.total_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }
}
