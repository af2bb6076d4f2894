//! Descriptive statistics over a [Samples] container.
//!
//! Every function fails with [StatsError::EmptyContainer] when there is nothing to reduce.
//! See [crate::compat] for the variants returning `0.0` instead.

use crate::{Samples, StatsError};

fn non_empty(samples: &Samples) -> Result<&[f64], StatsError> {
    if samples.is_empty() {
        Err(StatsError::EmptyContainer)
    } else {
        Ok(samples.as_slice())
    }
}

/// Left to right sum starting at `+0.0`.
pub fn sum(samples: &Samples) -> Result<f64, StatsError> {
    // Not Iterator::sum, which starts at -0.0
    Ok(non_empty(samples)?.iter().fold(0.0, |acc, x| acc + x))
}

pub fn product(samples: &Samples) -> Result<f64, StatsError> {
    Ok(non_empty(samples)?.iter().fold(1.0, |acc, x| acc * x))
}

/// Arithmetic mean
pub fn mean(samples: &Samples) -> Result<f64, StatsError> {
    let values = non_empty(samples)?;
    Ok(sum(samples)? / values.len() as f64)
}

/// Population variance (divides by `n`, not `n - 1`).
pub fn variance(samples: &Samples) -> Result<f64, StatsError> {
    let values = non_empty(samples)?;
    let mean = mean(samples)?;
    let squares = values.iter().fold(0.0, |acc, s| {
        let x = *s - mean;
        acc + x * x
    });
    Ok(squares / values.len() as f64)
}

/// Population standard deviation
pub fn std_dev(samples: &Samples) -> Result<f64, StatsError> {
    non_empty(samples)?;
    Ok(variance(samples)?.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(values: &[f64]) -> Samples {
        values.iter().copied().collect()
    }

    #[test]
    fn scenario_spread() {
        let s = samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(sum(&s), Ok(40.0));
        assert_eq!(mean(&s), Ok(5.0));
        assert_eq!(variance(&s), Ok(4.0));
        assert_eq!(std_dev(&s), Ok(2.0));
    }

    #[test]
    fn scenario_single() {
        let s = samples(&[3.0]);
        assert_eq!(sum(&s), Ok(3.0));
        assert_eq!(product(&s), Ok(3.0));
        assert_eq!(mean(&s), Ok(3.0));
        assert_eq!(variance(&s), Ok(0.0));
        assert_eq!(std_dev(&s), Ok(0.0));
    }

    #[test]
    fn scenario_product() {
        let s = samples(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(product(&s), Ok(24.0));
        assert_eq!(mean(&s), Ok(2.5));
    }

    #[test]
    fn empty_fails() {
        let s = Samples::new();
        assert_eq!(sum(&s), Err(StatsError::EmptyContainer));
        assert_eq!(product(&s), Err(StatsError::EmptyContainer));
        assert_eq!(mean(&s), Err(StatsError::EmptyContainer));
        assert_eq!(variance(&s), Err(StatsError::EmptyContainer));
        assert_eq!(std_dev(&s), Err(StatsError::EmptyContainer));
    }

    #[test]
    fn negative_zeros_sum_to_positive_zero() {
        let s = samples(&[-0.0, -0.0]);
        assert!(sum(&s).unwrap().is_sign_positive());
    }

    #[test]
    fn relations_hold() {
        let datasets: [&[f64]; 4] = [
            &[1.0, 2.0, 3.0],
            &[0.1, 0.2, 0.7, -5.5, 12.25],
            &[-3.0, -3.0, -3.0],
            &[1e-3, 1e3, 17.0, 0.5, 2.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0],
        ];
        for values in datasets {
            let s = samples(values);
            let n = values.len() as f64;
            assert_eq!(mean(&s).unwrap(), sum(&s).unwrap() / n);
            let var = variance(&s).unwrap();
            assert!(var >= 0.0);
            assert_eq!(std_dev(&s).unwrap(), var.sqrt());
        }
    }

    #[test]
    fn does_not_mutate() {
        let s = samples(&[1.0, 5.0, 9.0]);
        let before = s.clone();
        let _ = (sum(&s), product(&s), mean(&s), variance(&s), std_dev(&s));
        assert_eq!(s, before);
    }
}
