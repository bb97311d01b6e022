//! Property tests: normalization is idempotent and total.
//!
//! Running the pipeline twice must equal running it once, for any input
//! and any locale preference, so a form field can re-submit its own
//! output indefinitely without drift.

use ged_model::{CoordinateAxis, DateOrder};
use ged_normalize::{NormalizeContext, normalize_coordinate, normalize_date};
use proptest::prelude::*;

proptest! {
    #[test]
    fn date_normalization_is_idempotent(
        raw in r"[ A-Za-z0-9~*#<>@.,/()_-]{0,24}",
        order_idx in 0usize..3,
    ) {
        let order = DateOrder::all()[order_idx];
        let ctx = NormalizeContext::new(order, 2024);
        let once = normalize_date(&raw, &ctx);
        let twice = normalize_date(&once, &ctx);
        prop_assert_eq!(&once, &twice, "input {:?} drifted", raw);
    }

    #[test]
    fn date_normalization_never_panics_on_arbitrary_input(
        raw in ".*",
        order_idx in 0usize..3,
    ) {
        let order = DateOrder::all()[order_idx];
        let ctx = NormalizeContext::new(order, 2024);
        let _ = normalize_date(&raw, &ctx);
    }

    #[test]
    fn phrase_suffix_is_always_preserved(
        date in r"[ A-Za-z0-9~*#<>.,/-]{0,16}",
        phrase in r"[ A-Za-z0-9.,-]{1,16}",
        order_idx in 0usize..3,
    ) {
        let order = DateOrder::all()[order_idx];
        let ctx = NormalizeContext::new(order, 2024);
        let raw = format!("{date}({phrase}");
        let value = normalize_date(&raw, &ctx);
        prop_assert!(
            value.ends_with(&format!("({phrase}")),
            "phrase lost: {:?} -> {:?}", raw, value
        );
    }

    #[test]
    fn coordinate_normalization_is_idempotent(
        raw in r"[ 0-9NSEW+,.:°'-]{0,16}",
        axis_is_lat in any::<bool>(),
    ) {
        let axis = if axis_is_lat {
            CoordinateAxis::Latitude
        } else {
            CoordinateAxis::Longitude
        };
        let once = normalize_coordinate(&raw, axis);
        let twice = normalize_coordinate(&once, axis);
        prop_assert_eq!(&once, &twice, "input {:?} drifted", raw);
    }
}
