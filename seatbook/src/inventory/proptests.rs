//! Property-based tests for `SeatInventory` invariants.

use super::{SeatInventory, SeatStatus};
use crate::layout::SeatLayout;
use crate::reference::ReferenceGenerator;
use crate::seat::SeatId;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Reserve(usize),
    Release(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..SeatLayout::SEAT_COUNT).prop_map(Op::Reserve),
        (0..SeatLayout::SEAT_COUNT).prop_map(Op::Release),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // free + reserved + storage == 480 after any sequence of operations
    #[test]
    fn summary_always_sums_to_seat_count(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut inventory = SeatInventory::new();
        let mut generator = ReferenceGenerator::new();

        for op in ops {
            match op {
                Op::Reserve(i) => {
                    let seat = SeatLayout::seat_at(i);
                    inventory.reserve(seat, generator.candidate());
                }
                Op::Release(i) => {
                    inventory.release(SeatLayout::seat_at(i));
                }
            }
            let summary = inventory.summary();
            prop_assert_eq!(summary.total(), SeatLayout::SEAT_COUNT);
            prop_assert_eq!(summary.storage, 6);
        }
    }

    // Storage seats keep their status no matter what is attempted on them
    #[test]
    fn storage_seats_never_change(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut inventory = SeatInventory::new();
        let mut generator = ReferenceGenerator::new();

        for op in ops {
            match op {
                Op::Reserve(i) => { inventory.reserve(SeatLayout::seat_at(i), generator.candidate()); }
                Op::Release(i) => { inventory.release(SeatLayout::seat_at(i)); }
            }
        }

        for (seat, status) in inventory.iter() {
            let storage = seat.is_storage();
            prop_assert_eq!(storage, *status == SeatStatus::Storage, "seat {}", seat);
        }
    }

    // A reserve succeeds exactly when the seat was free
    #[test]
    fn reserve_succeeds_iff_free(row in 1u8..=SeatLayout::ROWS, col in 0usize..6, twice in any::<bool>()) {
        let mut inventory = SeatInventory::new();
        let mut generator = ReferenceGenerator::new();
        let seat = SeatId::new(row, crate::seat::Column::ALL[col]).unwrap();

        if twice {
            inventory.reserve(seat, generator.candidate());
        }
        let was_free = inventory.status(seat).is_free();
        prop_assert_eq!(inventory.reserve(seat, generator.candidate()), was_free);
    }
}
