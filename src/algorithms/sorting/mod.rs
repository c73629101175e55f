//! Sorting step-trace generators, one algorithm per file.
//!
//! Shared protocol: every generator copies its input, emits a step per
//! comparison/swap with the currently settled indices in `sorted`, and ends
//! with a single step marking the full index range sorted.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
