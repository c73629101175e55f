//! Instrumented algorithm implementations
//!
//! Every algorithm here is a pure function of `(values, [target])` that
//! defensively copies its input, runs to completion, and records a
//! [`Trace`] of [`Step`](crate::trace::Step) records — one per observable
//! event.  All seven generators honor the same instrumentation protocol, so
//! the playback layer can animate any of them without knowing which one ran.
//!
//! The algorithms are reference implementations: clarity over throughput.

pub mod registry;
pub mod searching;
pub mod sorting;

use crate::trace::Trace;

/// The closed set of algorithms known to the engine.
///
/// Variant order is the catalog order presented to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    LinearSearch,
    BinarySearch,
}

impl AlgorithmId {
    /// All known algorithms in catalog order
    pub const ALL: [AlgorithmId; 7] = [
        AlgorithmId::BubbleSort,
        AlgorithmId::SelectionSort,
        AlgorithmId::InsertionSort,
        AlgorithmId::MergeSort,
        AlgorithmId::QuickSort,
        AlgorithmId::LinearSearch,
        AlgorithmId::BinarySearch,
    ];

    /// Stable string identifier used on the CLI and in the registry
    pub fn key(self) -> &'static str {
        match self {
            AlgorithmId::BubbleSort => "bubble-sort",
            AlgorithmId::SelectionSort => "selection-sort",
            AlgorithmId::InsertionSort => "insertion-sort",
            AlgorithmId::MergeSort => "merge-sort",
            AlgorithmId::QuickSort => "quick-sort",
            AlgorithmId::LinearSearch => "linear-search",
            AlgorithmId::BinarySearch => "binary-search",
        }
    }

    /// Resolve a string identifier, or None if unknown
    pub fn from_key(key: &str) -> Option<AlgorithmId> {
        AlgorithmId::ALL.iter().copied().find(|id| id.key() == key)
    }

    /// Whether this algorithm consumes a search target
    pub fn is_searching(self) -> bool {
        matches!(
            self,
            AlgorithmId::LinearSearch | AlgorithmId::BinarySearch
        )
    }

    /// The next algorithm in catalog order (wrapping)
    pub fn next(self) -> Self {
        let pos = AlgorithmId::ALL
            .iter()
            .position(|id| *id == self)
            .unwrap_or(0);
        AlgorithmId::ALL[(pos + 1) % AlgorithmId::ALL.len()]
    }

    /// The previous algorithm in catalog order (wrapping)
    pub fn prev(self) -> Self {
        let pos = AlgorithmId::ALL
            .iter()
            .position(|id| *id == self)
            .unwrap_or(0);
        AlgorithmId::ALL[(pos + AlgorithmId::ALL.len() - 1) % AlgorithmId::ALL.len()]
    }
}

/// Run the selected algorithm over a copy of `values` and drain its steps.
///
/// `target` is consumed by the searching algorithms and ignored by the
/// sorting ones; a missing target defaults to 0, which simply never matches
/// unless 0 is present.  The caller's slice is never mutated.
pub fn generate(id: AlgorithmId, values: &[i32], target: Option<i32>) -> Trace {
    match id {
        AlgorithmId::BubbleSort => sorting::bubble::trace(values),
        AlgorithmId::SelectionSort => sorting::selection::trace(values),
        AlgorithmId::InsertionSort => sorting::insertion::trace(values),
        AlgorithmId::MergeSort => sorting::merge::trace(values),
        AlgorithmId::QuickSort => sorting::quick::trace(values),
        AlgorithmId::LinearSearch => searching::linear::trace(values, target.unwrap_or(0)),
        AlgorithmId::BinarySearch => searching::binary::trace(values, target.unwrap_or(0)),
    }
}

/// Every index of an array of length `n`, in order
pub(crate) fn full_range(n: usize) -> Vec<usize> {
    (0..n).collect()
}
