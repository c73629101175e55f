//! Insertion sort: insert each key into the sorted prefix, shifting larger
//! elements right one slot at a time.

use crate::algorithms::full_range;
use crate::trace::{Step, Trace};

pub fn trace(values: &[i32]) -> Trace {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut trace = Trace::new();

    for i in 1..n {
        let key = arr[i];
        let prefix: Vec<usize> = (0..i).collect();

        // Announce the key about to be inserted
        trace.push(Step {
            array: arr.clone(),
            highlight: vec![i],
            sorted: prefix.clone(),
            ..Step::default()
        });

        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            trace.push(Step {
                array: arr.clone(),
                compared: vec![j - 1, j],
                sorted: prefix.clone(),
                ..Step::default()
            });

            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;

        trace.push(Step {
            array: arr.clone(),
            sorted: (0..=i).collect(),
            ..Step::default()
        });
    }

    trace.push(Step {
        array: arr,
        sorted: full_range(n),
        ..Step::default()
    });
    trace
}
