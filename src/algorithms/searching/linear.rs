//! Linear search: probe each index left to right until the target matches.

use crate::trace::{Step, Trace};

pub fn trace(values: &[i32], target: i32) -> Trace {
    let arr = values.to_vec();
    let mut trace = Trace::new();

    for i in 0..arr.len() {
        trace.push(Step {
            array: arr.clone(),
            highlight: vec![i],
            ..Step::default()
        });

        if arr[i] == target {
            // Terminal hit: remaining indices are never visited
            trace.push(Step {
                array: arr.clone(),
                highlight: vec![i],
                sorted: vec![i],
                ..Step::default()
            });
            return trace;
        }
    }

    // Exhausted without a match; the bare snapshot signals "not found"
    trace.push(Step::snapshot(&arr));
    trace
}
