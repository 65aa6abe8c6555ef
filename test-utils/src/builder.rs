use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Composite unique index the `review` entity cannot express; mirrors the migration.
const REVIEW_UNIQUE_INDEX: &str =
    "CREATE UNIQUE INDEX idx_review_property_user ON review (property_id, user_id)";

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Property};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Property)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Raw SQL statements executed after every table has been created.
    ///
    /// Used for schema objects SeaORM cannot derive from an entity, such as triggers.
    statements: Vec<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables of the rental schema in dependency order, plus the one-review-per-user
    /// index on `review`.
    ///
    /// - User
    /// - AuthToken
    /// - Property
    /// - PropertyImage
    /// - Review
    /// - Booking
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_rental_tables(mut self) -> Self {
        self.statements.push(REVIEW_UNIQUE_INDEX.to_string());
        self.with_table(User)
            .with_table(AuthToken)
            .with_table(Property)
            .with_table(PropertyImage)
            .with_table(Review)
            .with_table(Booking)
    }

    /// Installs the storage-level booking overlap guard used in production.
    ///
    /// Requires the `booking` table, so call after `with_rental_tables()` or
    /// `with_table(Booking)`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_booking_overlap_guard(mut self) -> Self {
        self.statements.extend(
            migration::BOOKING_OVERLAP_GUARD_STATEMENTS
                .iter()
                .map(|statement| statement.to_string()),
        );
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements, then any raw statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_statements(self.statements).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
