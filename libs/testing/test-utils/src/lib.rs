//! Shared test utilities for the domain crates.
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: deterministic test data
//! - `assertions`: small assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_postgres_test");
//!
//!     let category_id = db.seed_category(&builder.name("category", "main"), true).await;
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Seeded test data, so the same test always sees the same values.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed derived from the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_save_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Unique name such as `test-product-12345-main`.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("product", "main"), "test-product-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Deterministic barcode of 13 digits
    pub fn barcode(&self) -> String {
        format!("{:013}", self.seed % 10_000_000_000_000)
    }

    /// Deterministic quantity in `0..max`
    pub fn quantity(&self, max: i32) -> i32 {
        if max <= 0 {
            return 0;
        }
        (self.seed % max as u64) as i32
    }
}

pub mod assertions {
    /// Unwrap an `Option` with a readable failure message
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `items` is sorted by `key`
    pub fn assert_sorted_by<T, K: Ord, F: Fn(&T) -> K>(items: &[T], key: F, context: &str) {
        for pair in items.windows(2) {
            assert!(
                key(&pair[0]) <= key(&pair[1]),
                "{}: items are not sorted",
                context
            );
        }
    }
}
