//! Property-based tests for page boundary math.

use proptest::prelude::*;

use super::bounds::PageBounds;
use super::error::PaginationError;

/// Strategy yielding `(per_page, total, page)` with `page` inside `1..=last_page`.
fn in_bounds_request() -> impl Strategy<Value = (u64, u64, u64)> {
    (1u64..500, 1u64..100_000).prop_flat_map(|(per_page, total)| {
        let last_page = total.div_ceil(per_page);
        (Just(per_page), Just(total), 1..=last_page)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// last_page is the ceiling of total / per_page, and zero only for an empty set.
    #[test]
    fn prop_last_page_is_ceiling(per_page in 1u64..1_000, total in 0u64..1_000_000) {
        let bounds = PageBounds::calculate(1, per_page, total).unwrap();

        prop_assert!(bounds.last_page * per_page >= total);
        if bounds.last_page > 0 {
            prop_assert!((bounds.last_page - 1) * per_page < total);
        }
        prop_assert_eq!(bounds.last_page == 0, total == 0);
    }

    /// from/to follow the offset formulas and the last page is clamped to total.
    #[test]
    fn prop_from_and_to((per_page, total, page) in in_bounds_request()) {
        let bounds = PageBounds::calculate(page, per_page, total).unwrap();

        prop_assert_eq!(bounds.from, 1 + (page - 1) * per_page);
        if page == bounds.last_page {
            prop_assert_eq!(bounds.to, total);
        } else {
            prop_assert_eq!(bounds.to, page * per_page);
        }
        prop_assert!(bounds.from <= bounds.to);
        prop_assert!(bounds.to - bounds.from < per_page);
    }

    /// next/previous stay inside 1..=last_page and wrap at the edges.
    #[test]
    fn prop_next_and_previous_wrap((per_page, total, page) in in_bounds_request()) {
        let bounds = PageBounds::calculate(page, per_page, total).unwrap();

        prop_assert!((1..=bounds.last_page).contains(&bounds.next_page));
        prop_assert!((1..=bounds.last_page).contains(&bounds.previous_page));

        if page == bounds.last_page {
            prop_assert_eq!(bounds.next_page, 1);
        } else {
            prop_assert_eq!(bounds.next_page, page + 1);
        }
        if page == 1 {
            prop_assert_eq!(bounds.previous_page, bounds.last_page);
        } else {
            prop_assert_eq!(bounds.previous_page, page - 1);
        }
    }

    /// Every link that is present points inside 1..=last_page.
    #[test]
    fn prop_links_never_dangle((per_page, total, page) in in_bounds_request()) {
        let bounds = PageBounds::calculate(page, per_page, total).unwrap();
        let links = bounds.links("p");
        let url = |n: u64| format!("p?page={n}&per_page={per_page}");

        prop_assert_eq!(links.first.is_some(), page != 1);
        prop_assert_eq!(links.last.is_some(), page != bounds.last_page);
        prop_assert_eq!(links.next, (page < bounds.last_page).then(|| url(page + 1)));
        prop_assert_eq!(links.previous, (page > 1).then(|| url(page - 1)));
    }

    /// Any page past the last one is rejected.
    #[test]
    fn prop_past_last_page_is_rejected(
        per_page in 1u64..500,
        total in 1u64..100_000,
        beyond in 1u64..1_000,
    ) {
        let last_page = total.div_ceil(per_page);
        let result = PageBounds::calculate(last_page + beyond, per_page, total);

        let is_out_of_bounds = matches!(
            result,
            Err(PaginationError::PageOutOfBounds { last_page: reported, .. }) if reported == last_page
        );
        prop_assert!(is_out_of_bounds);
    }
}
