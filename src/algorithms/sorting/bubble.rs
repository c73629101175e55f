//! Bubble sort: repeated adjacent-pair passes, largest value bubbling to the
//! back of the unsorted region each pass.

use crate::algorithms::full_range;
use crate::trace::{Step, Trace};

pub fn trace(values: &[i32]) -> Trace {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut trace = Trace::new();

    for pass in 0..n {
        // Trailing indices settled by the completed passes
        let settled: Vec<usize> = (n - pass..n).collect();

        for j in 0..n - pass - 1 {
            trace.push(Step {
                array: arr.clone(),
                compared: vec![j, j + 1],
                sorted: settled.clone(),
                ..Step::default()
            });

            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                trace.push(Step {
                    array: arr.clone(),
                    swapped: vec![j, j + 1],
                    sorted: settled.clone(),
                    ..Step::default()
                });
            }
        }
    }

    trace.push(Step {
        array: arr,
        sorted: full_range(n),
        ..Step::default()
    });
    trace
}
