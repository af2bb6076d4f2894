use crate::StatsError;
use std::fmt::{Display, Formatter};
use std::process;
use tracing::{error, trace};

/// Capacity of a freshly created container.
pub const INITIAL_CAPACITY: usize = 10;
/// Capacity multiplier applied when a full container receives a new sample.
pub const GROWTH_FACTOR: usize = 2;

/// Growable, insertion-ordered sequence of samples.
///
/// The logical capacity follows a strict doubling policy: 10, 20, 40, ...
/// It is tracked separately from the allocator's capacity, which is free to over-allocate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Samples {
    values: Vec<f64>,
    capacity: usize,
}

impl Samples {
    pub fn new() -> Self {
        Self {
            values: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Append a sample, doubling the capacity if the container is full.
    ///
    /// Failing to grow the storage is fatal: the error is logged and the process exits.
    /// Use [Samples::try_push] to handle it instead.
    pub fn push(&mut self, value: f64) {
        if let Err(e) = self.try_push(value) {
            error!("{e}");
            process::exit(1);
        }
    }

    /// Append a sample, doubling the capacity if the container is full.
    pub fn try_push(&mut self, value: f64) -> Result<(), StatsError> {
        if self.values.len() >= self.capacity {
            self.grow()?;
        }
        self.values.push(value);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), StatsError> {
        let requested = self
            .capacity
            .checked_mul(GROWTH_FACTOR)
            .ok_or(StatsError::AllocationFailure {
                requested: usize::MAX,
            })?;
        self.values
            .try_reserve_exact(requested - self.values.len())
            .map_err(|_| StatsError::AllocationFailure { requested })?;
        trace!(from = self.capacity, to = requested, "Growing sample storage");
        self.capacity = requested;
        Ok(())
    }

    /// Free the backing storage. The container can't be used afterward.
    pub fn release(self) {
        trace!(len = self.values.len(), "Releasing samples");
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }
}

impl Default for Samples {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<f64> for Samples {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<f64> for Samples {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut samples = Samples::new();
        samples.extend(iter);
        samples
    }
}

impl<'a> IntoIterator for &'a Samples {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Debug rendering: `Liste [taille=2, capacité=10]: [1.00, 2.50]`
impl Display for Samples {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Liste [taille={}, capacité={}]: [",
            self.len(),
            self.capacity
        )?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:.2}")?;
        }
        write!(f, "]")
    }
}
