//! Database schema definitions and SQL constants.
//!
//! This module contains the booking table definition, the canonical column
//! set used to heal older stores, and the SQL used by the CRUD operations.
//!
//! `row` is always quoted: ROW is an SQLite keyword.

/// Name of the booking table.
pub const BOOKING_TABLE: &str = "booking";

/// The canonical columns of the booking table and their declared types.
///
/// Stores missing any of these columns have them added at open time.
pub const CANONICAL_COLUMNS: [(&str, &str); 6] = [
    ("ref", "TEXT"),
    ("passport", "TEXT"),
    ("first_name", "TEXT"),
    ("last_name", "TEXT"),
    ("row", "INTEGER"),
    ("col", "TEXT"),
];

/// SQL statement to create the booking table.
///
/// The primary key is the seat, so the store can hold at most one booking
/// per seat. References are not constrained here; their uniqueness is
/// enforced when they are generated.
pub const CREATE_BOOKING_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS booking (
        ref TEXT,
        passport TEXT,
        first_name TEXT,
        last_name TEXT,
        "row" INTEGER,
        col TEXT,
        PRIMARY KEY ("row", col)
    )"#;

/// SQL statement to check whether the booking table exists.
pub const SELECT_TABLE_EXISTS: &str =
    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?";

/// Structural check; fails on files that are not SQLite databases.
pub const CHECK_STORE: &str = "SELECT COUNT(*) FROM sqlite_master";

/// SQL statement to list the booking table's columns.
pub const TABLE_INFO: &str = "PRAGMA table_info(booking)";

/// SQL statement to insert one booking.
pub const INSERT_BOOKING: &str = r#"
    INSERT INTO booking (ref, passport, first_name, last_name, "row", col)
    VALUES (?, ?, ?, ?, ?, ?)
"#;

/// SQL statement to delete every booking for a seat.
///
/// The column letter is matched case-insensitively, as hydration reads it.
pub const DELETE_BOOKINGS_FOR_SEAT: &str = r#"
    DELETE FROM booking
    WHERE "row" = ? AND UPPER(TRIM(col)) = ?
"#;

/// SQL statement to replace the reference of one stored row.
///
/// The row is matched on its stored values; `IS` also matches a NULL ref.
pub const REPAIR_REFERENCE: &str = r#"
    UPDATE booking SET ref = ?1
    WHERE "row" = ?2 AND col IS ?3 AND ref IS ?4
"#;

/// SQL statement to check whether a reference is already stored.
pub const CHECK_REFERENCE_EXISTS: &str = "SELECT COUNT(*) FROM booking WHERE ref = ?";

/// SQL statement to read every booking in seat order.
pub const LIST_BOOKINGS: &str = r#"
    SELECT ref, passport, first_name, last_name, "row", col
    FROM booking
    ORDER BY "row", col
"#;

/// SQL statement to read the booking for a seat.
pub const SELECT_BY_SEAT: &str = r#"
    SELECT ref, passport, first_name, last_name, "row", col
    FROM booking
    WHERE "row" = ? AND UPPER(TRIM(col)) = ?
"#;

/// SQL statement to read the booking holding a reference.
pub const SELECT_BY_REFERENCE: &str = r#"
    SELECT ref, passport, first_name, last_name, "row", col
    FROM booking
    WHERE ref = ?
"#;

/// Builds the statement that adds a missing canonical column.
#[must_use]
pub fn add_column_sql(name: &str, declared_type: &str) -> String {
    format!("ALTER TABLE booking ADD COLUMN \"{name}\" {declared_type}")
}
