//! Integration tests for the cloud vendor domain against real PostgreSQL
//!
//! Each test starts its own container through `test_utils::TestDatabase`.

use domain_cloud_vendors::{
    CloudVendor, CloudVendorError, CloudVendorRepository, CloudVendorService,
    PgCloudVendorRepository,
};
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn service(db: &TestDatabase) -> CloudVendorService<PgCloudVendorRepository> {
    CloudVendorService::new(PgCloudVendorRepository::new(db.connection()))
}

fn vendor(id: &str, name: &str) -> CloudVendor {
    CloudVendor::with_id(id, name, "410 Terry Ave N, Seattle", "206-266-1000")
}

#[tokio::test]
async fn test_create_then_get_returns_equal_record() {
    let db = TestDatabase::new().await;
    let service = service(&db);
    let builder = TestDataBuilder::from_test_name("test_create_then_get_returns_equal_record");

    let expected = vendor(&builder.vendor_id("c1"), &builder.name("vendor", "aws"));
    let created = service.create_cloud_vendor(expected.clone()).await.unwrap();
    assert_eq!(created, expected);

    let fetched = service.get_cloud_vendor(&expected.id).await.unwrap();
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn test_get_absent_vendor_is_not_found() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    let err = service.get_cloud_vendor("does-not-exist").await.unwrap_err();

    assert!(matches!(err, CloudVendorError::NotFound));
    assert_eq!(err.to_string(), "Requested Cloud Vendor does not exist");
}

#[tokio::test]
async fn test_update_replaces_stored_record() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    service.create_cloud_vendor(vendor("c1", "AWS")).await.unwrap();

    let changed = CloudVendor::with_id("c1", "Amazon Web Services", "Arlington", "703-000-0000");
    service.update_cloud_vendor(changed.clone()).await.unwrap();

    assert_eq!(service.get_cloud_vendor("c1").await.unwrap(), changed);
    assert_eq!(service.get_all_cloud_vendors().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_of_unknown_id_inserts() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    service.update_cloud_vendor(vendor("fresh", "GCP")).await.unwrap();

    let stored = assert_some(
        PgCloudVendorRepository::new(db.connection())
            .find_by_id("fresh")
            .await
            .unwrap(),
        "upserted vendor",
    );
    assert_eq!(stored.vendor_name, "GCP");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    service.create_cloud_vendor(vendor("c1", "Azure")).await.unwrap();
    service.delete_cloud_vendor("c1").await.unwrap();

    assert!(matches!(
        service.get_cloud_vendor("c1").await,
        Err(CloudVendorError::NotFound)
    ));
}

#[tokio::test]
async fn test_delete_twice_does_not_error() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    service.create_cloud_vendor(vendor("c1", "Azure")).await.unwrap();

    assert!(service.delete_cloud_vendor("c1").await.is_ok());
    assert!(service.delete_cloud_vendor("c1").await.is_ok());
    assert!(service.delete_cloud_vendor("never-existed").await.is_ok());
}

#[tokio::test]
async fn test_get_by_vendor_name_returns_exact_matches() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    for (id, name) in [("1", "AWS"), ("2", "Azure"), ("3", "AWS"), ("4", "GCP")] {
        service.create_cloud_vendor(vendor(id, name)).await.unwrap();
    }

    let aws = service.get_by_vendor_name("AWS").await.unwrap();
    assert_same_ids(aws.into_iter().map(|v| v.id), ["1", "3"], "AWS lookup");

    assert!(service.get_by_vendor_name("aws").await.unwrap().is_empty());
    assert!(service.get_by_vendor_name("Oracle").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_all_paged_reports_total_count() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    for i in 1..=5 {
        service
            .create_cloud_vendor(vendor(&format!("v{}", i), "AWS"))
            .await
            .unwrap();
    }

    let first = service.get_all_cloud_vendors_paged(0, 2).await.unwrap();
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.total_count, 5);
    assert_eq!(first.total_pages(), 3);
    assert!(first.has_next());

    let last = service.get_all_cloud_vendors_paged(2, 2).await.unwrap();
    assert_eq!(last.items.len(), 1);
    assert!(last.is_last());

    let past_end = service.get_all_cloud_vendors_paged(7, 2).await.unwrap();
    assert!(past_end.is_empty());
    assert_eq!(past_end.total_count, 5);
}

#[tokio::test]
async fn test_pages_do_not_overlap() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    for i in 1..=5 {
        service
            .create_cloud_vendor(vendor(&format!("v{}", i), "AWS"))
            .await
            .unwrap();
    }

    let mut seen = Vec::new();
    for page in 0..3 {
        let result = service.get_all_cloud_vendors_paged(page, 2).await.unwrap();
        seen.extend(result.items.into_iter().map(|v| v.id));
    }

    assert_eq!(seen, ["v1", "v2", "v3", "v4", "v5"]);
}

#[tokio::test]
async fn test_get_by_vendor_name_paged() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    for (id, name) in [("1", "AWS"), ("2", "Azure"), ("3", "AWS"), ("4", "AWS")] {
        service.create_cloud_vendor(vendor(id, name)).await.unwrap();
    }

    let page = service.get_by_vendor_name_paged("AWS", 1, 2).await.unwrap();

    assert_eq!(page.total_count, 3);
    assert_eq!(page.page_number, 1);
    assert_same_ids(page.items.into_iter().map(|v| v.id), ["4"], "second AWS page");
}

#[tokio::test]
async fn test_zero_page_size_is_rejected() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    let result = service.get_by_vendor_name_paged("AWS", 0, 0).await;

    assert!(matches!(result, Err(CloudVendorError::InvalidPageRequest(_))));
}

#[tokio::test]
async fn test_repository_health_is_reported() {
    let db = TestDatabase::new().await;
    let repo = PgCloudVendorRepository::new(db.connection());

    assert!(repo.health().await.healthy);
}

#[tokio::test]
async fn test_listing_orders_ids_bytewise() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    for id in ["b", "B", "a", "C"] {
        service.create_cloud_vendor(vendor(id, "AWS")).await.unwrap();
    }

    let ids: Vec<String> = service
        .get_all_cloud_vendors()
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.id)
        .collect();

    assert_eq!(ids, ["B", "C", "a", "b"]);
}
