//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic user data generation (always available)
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
//!     let id = builder.user_id_for("main");
//!     let email = builder.email("main");
//! }
//! ```

use uuid::Uuid;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// The same seed and suffix always give the same value, so failures reproduce.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_user");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        Self::new(hash(name))
    }

    /// A user id distinct per `suffix` within the same test
    pub fn user_id_for(&self, suffix: &str) -> Uuid {
        uuid_from(self.seed, hash(suffix))
    }

    /// `test-{seed}-{suffix}@example.com`
    pub fn email(&self, suffix: &str) -> String {
        format!("test-{}-{}@example.com", self.seed, suffix)
    }

    pub fn first_name(&self, suffix: &str) -> String {
        format!("First-{suffix}")
    }

    pub fn last_name(&self, suffix: &str) -> String {
        format!("Last-{}-{}", suffix, self.seed % 10_000)
    }

    pub fn password(&self, suffix: &str) -> String {
        format!("pw-{}-{}", suffix, self.seed % 1_000)
    }
}

fn hash(value: &str) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn uuid_from(high: u64, low: u64) -> Uuid {
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&high.to_le_bytes());
    bytes[8..].copy_from_slice(&low.to_le_bytes());
    Uuid::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.user_id_for("main"), builder2.user_id_for("main"));
        assert_eq!(builder1.email("main"), builder2.email("main"));
        assert_eq!(builder1.password("main"), builder2.password("main"));
    }

    #[test]
    fn test_data_builder_from_name() {
        let builder1 = TestDataBuilder::from_test_name("my_test");
        let builder2 = TestDataBuilder::from_test_name("my_test");

        assert_eq!(builder1.user_id_for("main"), builder2.user_id_for("main"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.user_id_for("main"), builder2.user_id_for("main"));
        assert_ne!(builder1.email("x"), builder2.email("x"));
    }

    #[test]
    fn test_user_id_for_differs_by_suffix() {
        let builder = TestDataBuilder::new(7);

        assert_ne!(builder.user_id_for("a"), builder.user_id_for("b"));
        assert_eq!(builder.user_id_for("a"), builder.user_id_for("a"));
    }

    #[test]
    fn test_email_shape() {
        let email = TestDataBuilder::new(7).email("ada");

        assert_eq!(email, "test-7-ada@example.com");
    }
}
