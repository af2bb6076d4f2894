//! Sentinel flavored API.
//!
//! A missing container is modeled with `None`. Missing or empty inputs are reported on the
//! error log and yield `0.0`, which is not a meaningful statistic for an empty set.
//! Prefer [crate::stats] unless the legacy behavior is needed.

use crate::{stats, Samples, StatsError};
use tracing::error;

/// Rendering of a missing container.
pub const NULL_RENDERING: &str = "Liste NULL";

/// Value returned by every statistic when it can't be computed.
pub const SENTINEL: f64 = 0.0;

pub fn create() -> Samples {
    Samples::new()
}

pub fn append(samples: Option<&mut Samples>, value: f64) {
    match samples {
        Some(samples) => samples.push(value),
        None => error!(value, "Can't append : {}", StatsError::NullContainer),
    }
}

pub fn release(samples: Option<Samples>) {
    if let Some(samples) = samples {
        samples.release();
    }
}

fn reduce(
    name: &'static str,
    samples: Option<&Samples>,
    f: fn(&Samples) -> Result<f64, StatsError>,
) -> f64 {
    match samples.ok_or(StatsError::NullContainer).and_then(f) {
        Ok(value) => value,
        Err(e) => {
            error!(statistic = name, "{e}");
            SENTINEL
        }
    }
}

pub fn sum(samples: Option<&Samples>) -> f64 {
    reduce("sum", samples, stats::sum)
}

pub fn product(samples: Option<&Samples>) -> f64 {
    reduce("product", samples, stats::product)
}

pub fn mean(samples: Option<&Samples>) -> f64 {
    reduce("mean", samples, stats::mean)
}

pub fn variance(samples: Option<&Samples>) -> f64 {
    reduce("variance", samples, stats::variance)
}

pub fn std_dev(samples: Option<&Samples>) -> f64 {
    reduce("std_dev", samples, stats::std_dev)
}

pub fn render(samples: Option<&Samples>) -> String {
    match samples {
        Some(samples) => samples.to_string(),
        None => NULL_RENDERING.to_string(),
    }
}
