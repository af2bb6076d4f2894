use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Operation invoked without a container
    NullContainer,
    /// Statistic requested over zero samples
    EmptyContainer,
    /// Backing storage could not grow to the requested capacity
    AllocationFailure { requested: usize },
}

impl Display for StatsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::NullContainer => write!(f, "no sample container"),
            StatsError::EmptyContainer => write!(f, "sample container is empty"),
            StatsError::AllocationFailure { requested } => {
                write!(f, "could not grow sample storage to {requested} elements")
            }
        }
    }
}

impl Error for StatsError {}
