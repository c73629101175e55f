//! Selection sort: grow a sorted prefix by selecting the minimum of the
//! unsorted suffix and swapping it into place.

use crate::algorithms::full_range;
use crate::trace::{Step, Trace};

pub fn trace(values: &[i32]) -> Trace {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut trace = Trace::new();

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        let prefix: Vec<usize> = (0..i).collect();

        for j in i + 1..n {
            // The comparison is always against the best minimum found so far
            trace.push(Step {
                array: arr.clone(),
                compared: vec![min_idx, j],
                sorted: prefix.clone(),
                ..Step::default()
            });

            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }

        let extended: Vec<usize> = (0..=i).collect();
        if min_idx != i {
            arr.swap(i, min_idx);
            trace.push(Step {
                array: arr.clone(),
                swapped: vec![i, min_idx],
                sorted: extended,
                ..Step::default()
            });
        } else {
            // Position i already held its minimum; mark it settled
            trace.push(Step {
                array: arr.clone(),
                sorted: extended,
                ..Step::default()
            });
        }
    }

    trace.push(Step {
        array: arr,
        sorted: full_range(n),
        ..Step::default()
    });
    trace
}
