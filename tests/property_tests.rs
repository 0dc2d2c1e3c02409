use proptest::prelude::*;
use salon_admin::availability::{merge, TimeInterval};
use salon_admin::utils::time::{to_clock_string, to_minutes, MINUTES_PER_DAY};

fn arb_interval() -> impl Strategy<Value = TimeInterval> {
    (0..MINUTES_PER_DAY - 1)
        .prop_flat_map(|start| (Just(start), start + 1..MINUTES_PER_DAY))
        .prop_map(|(start, end)| TimeInterval::new(start, end).unwrap())
}

fn covered(intervals: &[TimeInterval], minute: u32) -> bool {
    intervals
        .iter()
        .any(|i| i.start() <= minute && minute < i.end())
}

proptest! {
    #[test]
    fn clock_string_round_trips(minutes in 0..MINUTES_PER_DAY) {
        let text = to_clock_string(minutes).unwrap();
        prop_assert_eq!(text.len(), 5);
        prop_assert_eq!(to_minutes(&text).unwrap(), minutes);
    }

    #[test]
    fn merge_is_sorted_and_disjoint(intervals in prop::collection::vec(arb_interval(), 0..12)) {
        let merged = merge(&intervals);
        for pair in merged.windows(2) {
            // Touching intervals would have been joined
            prop_assert!(pair[0].end() < pair[1].start());
        }
        prop_assert!(merged.len() <= intervals.len());
    }

    #[test]
    fn merge_covers_the_same_minutes(intervals in prop::collection::vec(arb_interval(), 1..8)) {
        let merged = merge(&intervals);
        for minute in (0..MINUTES_PER_DAY).step_by(7) {
            prop_assert_eq!(covered(&merged, minute), covered(&intervals, minute));
        }
    }

    #[test]
    fn merge_is_order_independent(intervals in prop::collection::vec(arb_interval(), 0..8)) {
        let mut reversed = intervals.clone();
        reversed.reverse();
        prop_assert_eq!(merge(&intervals), merge(&reversed));
    }
}
