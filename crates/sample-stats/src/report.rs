use crate::{compat, stats, Samples, StatsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Compute the sum
    pub sum: bool,
    /// Compute the product
    pub product: bool,
    /// Compute the arithmetic mean
    pub mean: bool,
    /// Compute the population variance
    pub variance: bool,
    /// Compute the population standard deviation
    pub std_dev: bool,
}

impl Selection {
    pub fn all() -> Self {
        Self {
            sum: true,
            product: true,
            mean: true,
            variance: true,
            std_dev: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    pub count: usize,
    pub capacity: usize,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sum: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub product: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub mean: Option<f64>,
    /// Population variance
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub variance: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub std_dev: Option<f64>,
}

impl Report {
    /// Compute the selected statistics, failing on an empty container.
    pub fn compute(samples: &Samples, selection: &Selection) -> Result<Self, StatsError> {
        Ok(Self {
            count: samples.len(),
            capacity: samples.capacity(),
            sum: selection.sum.then(|| stats::sum(samples)).transpose()?,
            product: selection.product.then(|| stats::product(samples)).transpose()?,
            mean: selection.mean.then(|| stats::mean(samples)).transpose()?,
            variance: selection
                .variance
                .then(|| stats::variance(samples))
                .transpose()?,
            std_dev: selection.std_dev.then(|| stats::std_dev(samples)).transpose()?,
        })
    }

    /// Compute the selected statistics, reporting `0.0` for those that can't be computed.
    pub fn compute_lenient(samples: &Samples, selection: &Selection) -> Self {
        let samples_ref = Some(samples);
        Self {
            count: samples.len(),
            capacity: samples.capacity(),
            sum: selection.sum.then(|| compat::sum(samples_ref)),
            product: selection.product.then(|| compat::product(samples_ref)),
            mean: selection.mean.then(|| compat::mean(samples_ref)),
            variance: selection.variance.then(|| compat::variance(samples_ref)),
            std_dev: selection.std_dev.then(|| compat::std_dev(samples_ref)),
        }
    }

    /// Computed statistics in a fixed order, with their display name.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("sum", self.sum),
            ("product", self.product),
            ("mean", self.mean),
            ("variance", self.variance),
            ("std_dev", self.std_dev),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}
