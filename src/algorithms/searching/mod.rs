//! Searching step-trace generators.
//!
//! Search runs use `highlight` for the probe cursor and `sorted` to report
//! the outcome: a singleton on a hit for linear search, the excluded/bounded
//! ranges for binary search, absent on a miss.

pub mod binary;
pub mod linear;
