//! Binary search: halve a `[left, right)` window over a privately sorted
//! copy of the input.
//!
//! The sort means the visualized array for this algorithm differs from the
//! caller's unsorted input; length is unchanged.

use crate::algorithms::full_range;
use crate::trace::{Step, Trace};

pub fn trace(values: &[i32], target: i32) -> Trace {
    let mut arr = values.to_vec();
    arr.sort_unstable();
    let n = arr.len();
    let mut trace = Trace::new();

    let (mut left, mut right) = (0, n);
    while left < right {
        let mid = (left + right) / 2;

        trace.push(Step {
            array: arr.clone(),
            highlight: vec![mid],
            sorted: excluded(left, right, n),
            ..Step::default()
        });

        if arr[mid] == target {
            trace.push(Step {
                array: arr.clone(),
                highlight: vec![mid],
                sorted: full_range(n),
                ..Step::default()
            });
            return trace;
        }

        if arr[mid] < target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    // Not found, but the whole array is now bounded out
    trace.push(Step {
        array: arr,
        sorted: full_range(n),
        ..Step::default()
    });
    trace
}

/// The two tail ranges already excluded from the search window
fn excluded(left: usize, right: usize, n: usize) -> Vec<usize> {
    (0..left).chain(right..n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excluded_covers_both_tails() {
        assert_eq!(excluded(0, 4, 4), Vec::<usize>::new());
        assert_eq!(excluded(2, 3, 4), vec![0, 1, 3]);
        assert_eq!(excluded(4, 4, 4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn probes_are_logarithmic() {
        let t = trace(&[9, 7, 5, 3, 1, 11, 13, 15], 1);

        // The terminal hit step repeats the final probe's highlight
        let probes = t
            .steps()
            .iter()
            .filter(|s| !s.highlight.is_empty())
            .count()
            - 1;

        // 8 elements: at most floor(log2(8)) + 1 = 4 window halvings
        assert!(probes <= 4);
        assert_eq!(t.last().unwrap().sorted, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }
}
