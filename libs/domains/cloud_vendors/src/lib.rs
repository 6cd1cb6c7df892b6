//! Cloud Vendors Domain
//!
//! CRUD over cloud vendor records.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Not-found guard, page request construction
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Storage port (trait + PostgreSQL / in-memory adapters)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← CloudVendor, PageRequest, Page
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_cloud_vendors::{CloudVendor, CloudVendorService, PgCloudVendorRepository};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//!
//! let service = CloudVendorService::new(PgCloudVendorRepository::new(db));
//! let vendor = service
//!     .create_cloud_vendor(CloudVendor::with_id("c1", "AWS", "Seattle", "206-266-1000"))
//!     .await?;
//!
//! let page = service.get_by_vendor_name_paged("AWS", 0, 20).await?;
//! assert!(page.total_count >= 1);
//! # let _ = vendor;
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CloudVendorError, CloudVendorResult};
pub use models::{CloudVendor, Page, PageRequest};
pub use postgres::PgCloudVendorRepository;
pub use repository::{CloudVendorRepository, InMemoryCloudVendorRepository};
pub use service::CloudVendorService;
