use dsbench_algo::{CountTable, Dataset, FrequencyCounter, frequency::first_difference};

use crate::{error::MismatchError, report::StrategyReport, timing::Trials};

pub fn compare<A, B>(data: &Dataset, trials: &Trials) -> Result<Vec<StrategyReport>, MismatchError>
where
    A: FrequencyCounter,
    B: FrequencyCounter,
{
    let (first, first_timing) = trials.measure(A::LABEL, || data.as_slice(), A::count::<u32>);
    let (second, second_timing) = trials.measure(B::LABEL, || data.as_slice(), B::count::<u32>);

    check(&first, &second)?;
    log::debug!("Frequency tables agree on {} distinct keys", first.distinct());
    Ok(vec![
        StrategyReport::new(A::LABEL, &first_timing),
        StrategyReport::new(B::LABEL, &second_timing),
    ])
}

/// Compare as unordered `(key, count)` sets; the error names the smallest
/// differing key.
pub fn check<F, S>(first: &F, second: &S) -> Result<(), MismatchError>
where
    F: CountTable<u32>,
    S: CountTable<u32>,
{
    match first_difference(first, second) {
        None => Ok(()),
        Some((key, first, second)) => Err(MismatchError::Frequency { key, first, second }),
    }
}
