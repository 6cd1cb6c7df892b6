//! Shared test utilities for the cloud vendor crates
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied
//! - `TestDataBuilder`: deterministic test data derived from the test name
//! - `assertions`: small assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let vendor_id = builder.vendor_id("primary");
//!     let vendor_name = builder.name("vendor", "main");
//! }
//! ```

mod postgres;

pub use postgres::TestDatabase;

/// Builder for test data with a deterministic seed
///
/// Ids and names derived from different test names never collide, so tests
/// sharing a database do not trip over each other's rows.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_vendor");
    /// assert_eq!(builder.vendor_id("a"), TestDataBuilder::from_test_name("test_create_vendor").vendor_id("a"));
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Stable vendor id for `suffix`, e.g. `"vendor-1234-primary"`
    pub fn vendor_id(&self, suffix: &str) -> String {
        format!("vendor-{:x}-{}", self.seed, suffix)
    }

    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let name = TestDataBuilder::new(7).name("vendor", "main");
    /// assert_eq!(name, "test-vendor-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    use std::collections::BTreeSet;

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert two id collections hold the same ids, ignoring order
    pub fn assert_same_ids<A, B>(actual: A, expected: B, context: &str)
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        let actual: BTreeSet<String> = actual.into_iter().map(Into::into).collect();
        let expected: BTreeSet<String> = expected.into_iter().map(Into::into).collect();
        assert_eq!(actual, expected, "{}: id sets differ", context);
    }
}
