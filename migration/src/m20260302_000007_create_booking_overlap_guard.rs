use sea_orm_migration::{prelude::*, sea_orm::ConnectionTrait};

/// Message raised by the guard triggers when a write would double-book a property.
pub const BOOKING_OVERLAP_GUARD: &str = "booking_overlap";

/// Trigger definitions rejecting overlapping blocking bookings at the storage level.
///
/// A booking blocks its dates while `pending` or `confirmed`. Ranges are half-open
/// `[check_in_date, check_out_date)`, so a stay ending on the day another begins is not
/// a conflict. Dates are stored as ISO-8601 text, which compares in calendar order.
pub const BOOKING_OVERLAP_GUARD_STATEMENTS: [&str; 2] = [
    r#"
CREATE TRIGGER IF NOT EXISTS booking_overlap_guard_insert
BEFORE INSERT ON booking
WHEN NEW.status IN ('pending', 'confirmed')
 AND EXISTS (
    SELECT 1 FROM booking AS existing
    WHERE existing.property_id = NEW.property_id
      AND existing.status IN ('pending', 'confirmed')
      AND existing.check_in_date < NEW.check_out_date
      AND existing.check_out_date > NEW.check_in_date
 )
BEGIN
    SELECT RAISE(ABORT, 'booking_overlap');
END;
"#,
    r#"
CREATE TRIGGER IF NOT EXISTS booking_overlap_guard_update
BEFORE UPDATE OF status, check_in_date, check_out_date, property_id ON booking
WHEN NEW.status IN ('pending', 'confirmed')
 AND EXISTS (
    SELECT 1 FROM booking AS existing
    WHERE existing.id <> NEW.id
      AND existing.property_id = NEW.property_id
      AND existing.status IN ('pending', 'confirmed')
      AND existing.check_in_date < NEW.check_out_date
      AND existing.check_out_date > NEW.check_in_date
 )
BEGIN
    SELECT RAISE(ABORT, 'booking_overlap');
END;
"#,
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for statement in BOOKING_OVERLAP_GUARD_STATEMENTS {
            db.execute_unprepared(statement).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("DROP TRIGGER IF EXISTS booking_overlap_guard_update")
            .await?;
        db.execute_unprepared("DROP TRIGGER IF EXISTS booking_overlap_guard_insert")
            .await?;

        Ok(())
    }
}
