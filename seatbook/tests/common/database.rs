//! Shared database test utilities.

use rusqlite::Connection;

/// SQL creating a trigger that makes every insert into `booking` fail.
#[allow(dead_code)]
pub const FAIL_ALL_INSERTS: &str = "
    CREATE TRIGGER fail_insert BEFORE INSERT ON booking
    BEGIN SELECT RAISE(ABORT, 'injected insert failure'); END;";

/// SQL creating a trigger that makes every delete from `booking` fail.
#[allow(dead_code)]
pub const FAIL_ALL_DELETES: &str = "
    CREATE TRIGGER fail_delete BEFORE DELETE ON booking
    BEGIN SELECT RAISE(ABORT, 'injected delete failure'); END;";

/// Returns SQL creating a trigger that fails inserts for one column letter.
#[allow(dead_code)]
pub fn fail_inserts_for_column(col: char) -> String {
    format!(
        "CREATE TRIGGER fail_insert_{col} BEFORE INSERT ON booking WHEN NEW.col = '{col}'
         BEGIN SELECT RAISE(ABORT, 'injected insert failure'); END;"
    )
}

/// Counts the rows in `booking`.
#[allow(dead_code)]
pub fn count_rows(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM booking", [], |row| row.get(0))
        .unwrap()
}

/// Returns the booking table's column names, in declaration order.
#[allow(dead_code)]
pub fn column_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn.prepare("PRAGMA table_info(booking)").unwrap();
    stmt.query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}
