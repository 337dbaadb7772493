//! Distinct date labels used to build the date filter.

use std::collections::BTreeSet;

use crate::tournament::Tournament;

/// Distinct `date` values across `records`, sorted ascending.
///
/// Sorting is plain string ordering, so labels only come out
/// chronologically when the dataset uses a sortable form such as
/// `YYYY-MM-DD`.
pub fn unique_dates(records: &[Tournament]) -> Vec<String> {
    records
        .iter()
        .map(|t| t.date.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{arb_tournaments, sample_schedule};
    use proptest::prelude::*;

    #[test]
    fn test_unique_dates_of_sample() {
        assert_eq!(
            unique_dates(&sample_schedule()),
            vec!["2025-08-08", "2025-08-09", "2025-08-10", "2025-08-11"]
        );
    }

    #[test]
    fn test_unique_dates_sorts_lexicographically() {
        let records = vec![
            Tournament::new("1", "A", "8/10"),
            Tournament::new("2", "B", "8/9"),
            Tournament::new("3", "C", "8/10"),
        ];

        // Non-ISO labels keep string order, not calendar order
        assert_eq!(unique_dates(&records), vec!["8/10", "8/9"]);
    }

    #[test]
    fn test_unique_dates_of_empty_list() {
        assert!(unique_dates(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn test_unique_dates_sorted_distinct_and_complete(records in arb_tournaments()) {
            let dates = unique_dates(&records);

            prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
            for t in &records {
                prop_assert!(dates.contains(&t.date));
            }
            for d in &dates {
                prop_assert!(records.iter().any(|t| &t.date == d));
            }
        }
    }
}
