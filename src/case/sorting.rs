use dsbench_algo::{Dataset, Sorter, sorting::first_descent};

use crate::{error::MismatchError, report::StrategyReport, timing::Trials};

/// Each trial sorts its own snapshot of `data`.
pub fn compare<A, B>(data: &Dataset, trials: &Trials) -> Result<Vec<StrategyReport>, MismatchError>
where
    A: Sorter,
    B: Sorter,
{
    let (first, first_timing) = trials.measure(A::LABEL, || data.snapshot(), |mut v: Vec<u32>| {
        A::sort(&mut v);
        v
    });
    let (second, second_timing) = trials.measure(B::LABEL, || data.snapshot(), |mut v: Vec<u32>| {
        B::sort(&mut v);
        v
    });

    check(A::LABEL, &first, B::LABEL, &second)?;
    Ok(vec![
        StrategyReport::new(A::LABEL, &first_timing),
        StrategyReport::new(B::LABEL, &second_timing),
    ])
}

/// Both outputs must be non-decreasing and identical element by element.
pub fn check(
    first_label: &'static str,
    first: &[u32],
    second_label: &'static str,
    second: &[u32],
) -> Result<(), MismatchError> {
    if let Some(index) = first_descent(first) {
        return Err(MismatchError::NotSorted {
            label: first_label,
            index,
        });
    }
    if let Some(index) = first_descent(second) {
        return Err(MismatchError::NotSorted {
            label: second_label,
            index,
        });
    }

    let len = first.len().max(second.len());
    match (0..len).find(|&i| first.get(i) != second.get(i)) {
        None => Ok(()),
        Some(index) => Err(MismatchError::Order {
            index,
            first: first.get(index).copied(),
            second: second.get(index).copied(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsbench_algo::{BubbleSort, StdSort};

    #[test]
    fn test_compare_leaves_dataset_untouched() {
        let data = Dataset::from(vec![5, 3, 5, 1]);
        let reports =
            compare::<BubbleSort, StdSort>(&data, &Trials::new(3, 0)).expect("sorts agree");
        assert_eq!(data.as_slice(), &[5, 3, 5, 1]);
        assert_eq!(reports[0].label, BubbleSort::LABEL);
        assert_eq!(reports[1].label, StdSort::LABEL);
    }

    #[test]
    fn test_unsorted_output_is_reported() {
        assert_eq!(
            check("bubble", &[1, 3, 2], "std", &[1, 2, 3]),
            Err(MismatchError::NotSorted {
                label: "bubble",
                index: 2,
            })
        );
    }

    #[test]
    fn test_differing_outputs_are_reported() {
        assert_eq!(
            check("a", &[1, 2, 2], "b", &[1, 2, 3]),
            Err(MismatchError::Order {
                index: 2,
                first: Some(2),
                second: Some(3),
            })
        );
        assert_eq!(
            check("a", &[1, 2], "b", &[1, 2, 3]),
            Err(MismatchError::Order {
                index: 2,
                first: None,
                second: Some(3),
            })
        );
    }

    #[test]
    fn test_equal_outputs_pass() {
        assert_eq!(check("a", &[], "b", &[]), Ok(()));
        assert_eq!(check("a", &[1, 3, 5, 5], "b", &[1, 3, 5, 5]), Ok(()));
    }
}
