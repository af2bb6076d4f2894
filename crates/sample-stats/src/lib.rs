pub use error::StatsError;
pub use report::{Report, Selection};
pub use samples::{Samples, GROWTH_FACTOR, INITIAL_CAPACITY};

pub mod compat;
mod error;
mod report;
mod samples;
pub mod stats;
