//! Quick sort: recursive `(low, high)` ranges with Lomuto partitioning
//! around the last element.
//!
//! The settled accumulator is shared by mutable reference across the whole
//! recursion tree: every subrange that collapses to a single index appends
//! that index, which keeps previously finalized singletons marked during
//! later unrelated partitions.

use crate::algorithms::full_range;
use crate::trace::{Step, Trace};

pub fn trace(values: &[i32]) -> Trace {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut trace = Trace::new();
    let mut settled: Vec<usize> = Vec::new();

    if n > 1 {
        sort(&mut arr, 0, n - 1, &mut settled, &mut trace);
    }

    trace.push(Step {
        array: arr,
        sorted: full_range(n),
        ..Step::default()
    });
    trace
}

fn sort(arr: &mut [i32], low: usize, high: usize, settled: &mut Vec<usize>, trace: &mut Trace) {
    if low < high {
        let pivot_idx = partition(arr, low, high, settled, trace);
        if pivot_idx > low {
            sort(arr, low, pivot_idx - 1, settled, trace);
        }
        if pivot_idx < high {
            sort(arr, pivot_idx + 1, high, settled, trace);
        }
    } else {
        // Single-index subrange: this position holds its final value
        settled.push(low);
        trace.push(Step {
            array: arr.to_vec(),
            sorted: settled.clone(),
            ..Step::default()
        });
    }
}

/// Lomuto partition: returns the final pivot index.
///
/// `dest` tracks the next slot for a value smaller than the pivot, so the
/// emitted swap indices match the exchange that just happened.
fn partition(
    arr: &mut [i32],
    low: usize,
    high: usize,
    settled: &[usize],
    trace: &mut Trace,
) -> usize {
    let pivot = arr[high];
    let mut dest = low;

    // Announce the pivot before scanning
    trace.push(Step {
        array: arr.to_vec(),
        highlight: vec![high],
        sorted: settled.to_vec(),
        ..Step::default()
    });

    for j in low..high {
        trace.push(Step {
            array: arr.to_vec(),
            compared: vec![j, high],
            sorted: settled.to_vec(),
            ..Step::default()
        });

        if arr[j] < pivot {
            arr.swap(dest, j);
            trace.push(Step {
                array: arr.to_vec(),
                swapped: vec![dest, j],
                sorted: settled.to_vec(),
                ..Step::default()
            });
            dest += 1;
        }
    }

    arr.swap(dest, high);
    trace.push(Step {
        array: arr.to_vec(),
        swapped: vec![dest, high],
        sorted: settled.to_vec(),
        ..Step::default()
    });

    dest
}
