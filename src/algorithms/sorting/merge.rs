//! Merge sort: recursive divide on `[start, end]`, with steps emitted only
//! during the merge of two sorted halves.
//!
//! The settled accumulator is threaded through the recursion but never
//! populated before the final step, so mid-merge steps carry no `sorted`
//! markers.

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

fn sort(arr: &mut [i32], start: usize, end: usize, settled: &mut Vec<usize>, trace: &mut Trace) {
    if start >= end {
        return;
    }
    let mid = (start + end) / 2;

    sort(arr, start, mid, settled, trace);
    sort(arr, mid + 1, end, settled, trace);
    merge(arr, start, mid, end, settled, trace);
}

fn merge(
    arr: &mut [i32],
    start: usize,
    mid: usize,
    end: usize,
    settled: &mut Vec<usize>,
    trace: &mut Trace,
) {
    let left = arr[start..=mid].to_vec();
    let right = arr[mid + 1..=end].to_vec();
    let (mut i, mut j, mut k) = (0, 0, start);

    while i < left.len() && j < right.len() {
        // Compare the heads of both halves at their positions in the array
        trace.push(Step {
            array: arr.to_vec(),
            compared: vec![start + i, mid + 1 + j],
            sorted: settled.clone(),
            ..Step::default()
        });

        if left[i] <= right[j] {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        k += 1;

        // Post-write snapshot, no compare marker
        trace.push(Step {
            array: arr.to_vec(),
            sorted: settled.clone(),
            ..Step::default()
        });
    }

    while i < left.len() {
        arr[k] = left[i];
        i += 1;
        k += 1;
        trace.push(Step {
            array: arr.to_vec(),
            sorted: settled.clone(),
            ..Step::default()
        });
    }

    while j < right.len() {
        arr[k] = right[j];
        j += 1;
        k += 1;
        trace.push(Step {
            array: arr.to_vec(),
            sorted: settled.clone(),
            ..Step::default()
        });
    }
}
