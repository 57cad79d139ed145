//! Property-based tests for seat code parsing.

use super::{normalise, Column, SeatId};
use crate::error::Error;
use crate::layout::SeatLayout;
use proptest::prelude::*;

fn column_strategy() -> impl Strategy<Value = Column> {
    prop::sample::select(Column::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every displayed seat parses back to itself, however it is padded or cased.
    #[test]
    fn display_parses_back(row in 1u8..=SeatLayout::ROWS, column in column_strategy(), pad in "[ \t]{0,3}", lower in any::<bool>()) {
        let seat = SeatId::new(row, column).unwrap();
        let mut code = seat.to_string();
        if lower {
            code = code.to_lowercase();
        }
        let parsed: SeatId = format!("{pad}{code}{pad}").parse().unwrap();
        prop_assert_eq!(parsed, seat);
    }

    // normalise() accepts exactly the non-storage seats
    #[test]
    fn normalise_rejects_only_storage(row in 1u8..=SeatLayout::ROWS, column in column_strategy()) {
        let code = format!("{row}{column}");
        let result = normalise(&code);
        if SeatLayout::is_storage(row, column) {
            prop_assert!(matches!(result, Err(Error::StorageSeat { .. })), "expected StorageSeat error");
        } else {
            prop_assert_eq!(result.unwrap().to_string(), code);
        }
    }

    // Rows past the end of the aircraft are out of range, never malformed
    #[test]
    fn rows_past_the_end_are_out_of_range(row in 81u32..100_000, column in column_strategy()) {
        let result = normalise(&format!("{row}{column}"));
        prop_assert!(matches!(result, Err(Error::OutOfRange { .. })), "expected OutOfRange error");
    }

    // Anything without a trailing letter is malformed
    #[test]
    fn trailing_digit_is_malformed(prefix in "[0-9A-Za-z]{0,4}", digit in 0u8..10) {
        let result = normalise(&format!("{prefix}{digit}"));
        prop_assert!(matches!(result, Err(Error::MalformedCode { .. })), "expected MalformedCode error");
    }

    // The codec never panics on arbitrary input
    #[test]
    fn normalise_never_panics(input in "\\PC{0,12}") {
        let _ = normalise(&input);
    }
}
