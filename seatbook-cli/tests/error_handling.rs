//! Integration tests for error handling and exit codes.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Semantic failure (seat taken, no block free, nothing to cancel)
//! - 4: Invalid arguments or input validation
//! - 5: I/O error
//! - 6: Other library errors
//! - 7: Configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Validation (Exit Code 4)
// ============================================================================

#[test]
fn test_malformed_seat_code() {
    let env = TestEnv::new();

    for code in ["A12", "12", "12AB"] {
        env.command()
            .args(["status", code])
            .assert()
            .code(4)
            .stderr(predicate::str::contains("malformed seat code"));
    }
}

#[test]
fn test_out_of_range_seat_code() {
    let env = TestEnv::new();

    for code in ["0A", "81A", "12G"] {
        env.command()
            .args(["status", code])
            .assert()
            .code(4)
            .stderr(predicate::str::contains("outside the valid range"));
    }
}

#[test]
fn test_storage_seat_rejected_everywhere() {
    let env = TestEnv::new();

    env.command()
        .args(["status", "77E"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("storage area"));

    env.command()
        .args(["book", "78F", "--passport", "P1", "--first-name", "A"])
        .args(["--last-name", "B"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("storage area"));

    env.command()
        .args(["free", "77D"])
        .assert()
        .code(4);
}

#[test]
fn test_blank_passenger_field() {
    let env = TestEnv::new();

    env.command()
        .args(["book", "5A", "--passport", "   ", "--first-name", "A"])
        .args(["--last-name", "B"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("passport"));

    // Nothing was written.
    assert!(!env.database_path().exists());
}

#[test]
fn test_invalid_reference() {
    let env = TestEnv::new();

    env.command()
        .args(["lookup", "short"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid booking reference"));
}

// ============================================================================
// Configuration (Exit Code 7)
// ============================================================================

#[test]
fn test_unknown_config_field() {
    let env = TestEnv::new();
    env.write_config("seats_per_row: 9\n");

    env.command()
        .args(["summary"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_zero_busy_timeout() {
    let env = TestEnv::new();

    env.command()
        .args(["--busy-timeout", "0", "summary"])
        .assert()
        .code(7);
}

#[test]
fn test_invalid_environment_override() {
    let env = TestEnv::new();

    env.command()
        .env("SEATBOOK_IN_MEMORY", "perhaps")
        .args(["summary"])
        .assert()
        .code(7);
}

// ============================================================================
// Store failures
// ============================================================================

#[cfg(unix)]
#[test]
fn test_unusable_store_location() {
    let env = TestEnv::new();
    let blocker = env.path().join("not-a-dir");
    std::fs::write(&blocker, "x").unwrap();

    env.command()
        .arg("--database")
        .arg(blocker.join("seatbook.db"))
        .args(["summary"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("booking store unavailable"));
}

#[test]
fn test_corrupt_store_is_recovered() {
    let env = TestEnv::new();
    std::fs::create_dir_all(&env.data_dir).unwrap();
    std::fs::write(
        env.database_path(),
        "this is not a database file, and it is long enough to prove it",
    )
    .unwrap();

    env.command()
        .args(["status", "1A"])
        .assert()
        .success()
        .stdout("AVAILABLE\n")
        .stderr(predicate::str::contains("WARN"));

    let quarantined = std::fs::read_dir(&env.data_dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().contains(".corrupt-"))
        .count();
    assert_eq!(quarantined, 1);
}
