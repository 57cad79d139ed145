//! Schema healing for existing stores.
//!
//! Stores written by older or newer versions of the program may lack the
//! booking table, lack some of its columns, or carry columns this version
//! does not know about. Healing creates what is missing and leaves everything
//! else alone: unknown columns are reported but never dropped or renamed.

use rusqlite::Connection;

use crate::error::Result;

use super::schema::{
    add_column_sql, BOOKING_TABLE, CANONICAL_COLUMNS, CREATE_BOOKING_TABLE, SELECT_TABLE_EXISTS,
    TABLE_INFO,
};

/// What schema healing did to a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    /// The booking table did not exist and was created.
    pub created_table: bool,
    /// Canonical columns that were missing and have been added.
    pub added_columns: Vec<String>,
    /// Columns present in the store that are not part of the canonical set.
    pub unexpected_columns: Vec<String>,
}

impl SchemaReport {
    /// Returns `true` if the store already had exactly the canonical schema.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.created_table && self.added_columns.is_empty() && self.unexpected_columns.is_empty()
    }
}

/// Returns `true` if the booking table exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn table_exists(conn: &Connection) -> Result<bool> {
    let count: i64 = conn.query_row(SELECT_TABLE_EXISTS, [BOOKING_TABLE], |row| row.get(0))?;
    Ok(count > 0)
}

/// Returns the names of the booking table's columns, in declaration order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn existing_columns(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(TABLE_INFO)?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
    Ok(columns)
}

/// Brings the booking table up to the canonical schema.
///
/// Creates the table if it is missing, adds any missing canonical column
/// with its canonical type, and logs a warning for every column it does not
/// recognise.
///
/// # Errors
///
/// Returns an error if any SQL statement fails.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use seatbook::database::migrations::heal_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// let report = heal_schema(&conn).unwrap();
/// assert!(report.created_table);
///
/// let report = heal_schema(&conn).unwrap();
/// assert!(report.is_clean());
/// ```
pub fn heal_schema(conn: &Connection) -> Result<SchemaReport> {
    let mut report = SchemaReport::default();

    if !table_exists(conn)? {
        conn.execute(CREATE_BOOKING_TABLE, [])?;
        log::info!("Created missing '{BOOKING_TABLE}' table");
        report.created_table = true;
        return Ok(report);
    }

    let existing = existing_columns(conn)?;
    // SQLite column names are case-insensitive.
    let has = |name: &str| existing.iter().any(|c| c.eq_ignore_ascii_case(name));

    for (name, declared_type) in CANONICAL_COLUMNS {
        if !has(name) {
            conn.execute(&add_column_sql(name, declared_type), [])?;
            log::info!("Added missing column '{name}' ({declared_type}) to '{BOOKING_TABLE}'");
            report.added_columns.push(name.to_string());
        }
    }

    for column in &existing {
        let known = CANONICAL_COLUMNS
            .iter()
            .any(|(name, _)| column.eq_ignore_ascii_case(name));
        if !known {
            log::warn!("Ignoring unexpected column '{column}' in '{BOOKING_TABLE}'; it is left in place");
            report.unexpected_columns.push(column.clone());
        }
    }

    Ok(report)
}
