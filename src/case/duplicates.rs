use dsbench_algo::{Dataset, DuplicateDetector};

use crate::{error::MismatchError, report::StrategyReport, timing::Trials};

pub fn compare<A, B>(data: &Dataset, trials: &Trials) -> Result<Vec<StrategyReport>, MismatchError>
where
    A: DuplicateDetector,
    B: DuplicateDetector,
{
    let (first, first_timing) =
        trials.measure(A::LABEL, || data.as_slice(), A::has_duplicates::<u32>);
    let (second, second_timing) =
        trials.measure(B::LABEL, || data.as_slice(), B::has_duplicates::<u32>);

    check(A::LABEL, first, B::LABEL, second)?;
    Ok(vec![
        StrategyReport::new(A::LABEL, &first_timing),
        StrategyReport::new(B::LABEL, &second_timing),
    ])
}

pub fn check(
    first_label: &'static str,
    first: bool,
    second_label: &'static str,
    second: bool,
) -> Result<(), MismatchError> {
    if first == second {
        Ok(())
    } else {
        Err(MismatchError::Verdict {
            first_label,
            first,
            second_label,
            second,
        })
    }
}
