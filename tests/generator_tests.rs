// Integration tests for the step-trace generators

use sortty::algorithms::{generate, registry, AlgorithmId};
use sortty::trace::Trace;

const SORTING: [AlgorithmId; 5] = [
    AlgorithmId::BubbleSort,
    AlgorithmId::SelectionSort,
    AlgorithmId::InsertionSort,
    AlgorithmId::MergeSort,
    AlgorithmId::QuickSort,
];

fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

fn is_subset(smaller: &[usize], larger: &[usize]) -> bool {
    smaller.iter().all(|idx| larger.contains(idx))
}

#[test]
fn sorting_ends_with_ascending_array() {
    let inputs: [&[i32]; 5] = [
        &[5, 3, 8, 1, 9, 2, 7],
        &[3, 3, 1, 2, 3],
        &[9, 8, 7, 6, 5, 4, 3, 2, 1],
        &[1, 2, 3, 4],
        &[42],
    ];

    for id in SORTING {
        for input in inputs {
            let trace = generate(id, input, None);
            let last = trace.last().expect("trace is never empty");

            assert_eq!(
                last.array,
                sorted_copy(input),
                "{} must end sorted for {:?}",
                id.key(),
                input
            );
        }
    }
}

#[test]
fn sorting_preserves_the_element_multiset() {
    let input = [7, 1, 7, 3, 0, -2, 7];

    for id in SORTING {
        let trace = generate(id, &input, None);
        for step in trace.steps() {
            // Every snapshot along the way is a permutation of the input
            assert_eq!(
                sorted_copy(&step.array),
                sorted_copy(&input),
                "{} must not invent or drop elements",
                id.key()
            );
        }
    }
}

#[test]
fn sorting_final_step_marks_the_full_range() {
    let input = [4, 2, 9, 1, 5];

    for id in SORTING {
        let trace = generate(id, &input, None);
        let last = trace.last().expect("trace is never empty");
        let mut sorted = last.sorted.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4], "{} final step", id.key());
    }
}

#[test]
fn array_length_is_constant_across_a_run() {
    let input = [6, 2, 8, 4, 1, 9];

    for id in AlgorithmId::ALL {
        let trace = generate(id, &input, Some(4));
        for step in trace.steps() {
            assert_eq!(step.array.len(), input.len(), "{}", id.key());
        }
    }
}

#[test]
fn sorted_sets_grow_monotonically() {
    let input = [5, 1, 4, 2, 8, 3];

    for id in AlgorithmId::ALL {
        let trace = generate(id, &input, Some(3));
        for pair in trace.steps().windows(2) {
            assert!(
                is_subset(&pair[0].sorted, &pair[1].sorted),
                "{}: sorted index dropped between consecutive steps",
                id.key()
            );
        }
    }
}

#[test]
fn compared_and_swapped_are_mutually_exclusive() {
    let input = [9, 4, 7, 1, 8, 2, 6];

    for id in AlgorithmId::ALL {
        let trace = generate(id, &input, Some(7));
        for step in trace.steps() {
            assert!(
                step.compared.is_empty() || step.swapped.is_empty(),
                "{}: one step must not both compare and swap",
                id.key()
            );
            assert!(step.compared.len() <= 2, "{}", id.key());
            assert!(step.swapped.len() <= 2, "{}", id.key());
        }
    }
}

#[test]
fn linear_search_hit_stops_at_the_match() {
    let trace = generate(AlgorithmId::LinearSearch, &[5, 3, 8, 1], Some(8));

    // Probes indices 0, 1, 2, then the terminal hit step; index 3 is never
    // visited
    assert_eq!(trace.len(), 4);
    for (i, step) in trace.steps().iter().take(3).enumerate() {
        assert_eq!(step.highlight, vec![i]);
        assert!(step.sorted.is_empty());
    }

    let last = trace.last().unwrap();
    assert_eq!(last.highlight, vec![2]);
    assert_eq!(last.sorted, vec![2]);
}

#[test]
fn linear_search_miss_visits_everything() {
    let trace = generate(AlgorithmId::LinearSearch, &[5, 3, 8, 1], Some(99));

    // Four probes plus the bare not-found step
    assert_eq!(trace.len(), 5);
    for (i, step) in trace.steps().iter().take(4).enumerate() {
        assert_eq!(step.highlight, vec![i]);
    }

    let last = trace.last().unwrap();
    assert!(last.highlight.is_empty());
    assert!(last.sorted.is_empty());
}

#[test]
fn binary_search_probes_a_sorted_copy() {
    let trace = generate(AlgorithmId::BinarySearch, &[5, 3, 8, 1], Some(5));

    // The visualized array is the privately sorted copy
    for step in trace.steps() {
        assert_eq!(step.array, vec![1, 3, 5, 8]);
    }

    // ceil(log2(4)) = 2 probes at most; the terminal hit repeats the final
    // probe's highlight
    let probes = trace
        .steps()
        .iter()
        .filter(|s| !s.highlight.is_empty())
        .count()
        - 1;
    assert!(probes <= 2);

    let last = trace.last().unwrap();
    assert_eq!(last.sorted, vec![0, 1, 2, 3]);
    assert_eq!(last.highlight.len(), 1);
}

#[test]
fn binary_search_miss_ends_fully_bounded() {
    let trace = generate(AlgorithmId::BinarySearch, &[5, 3, 8, 1], Some(4));

    let last = trace.last().unwrap();
    assert!(last.highlight.is_empty());
    assert_eq!(last.sorted, vec![0, 1, 2, 3]);
}

#[test]
fn search_target_out_of_range_never_matches() {
    for id in [AlgorithmId::LinearSearch, AlgorithmId::BinarySearch] {
        let trace = generate(id, &[5, 3, 8, 1], Some(-7));
        let last = trace.last().expect("trace is never empty");
        assert!(last.highlight.is_empty(), "{}", id.key());
    }
}

#[test]
fn degenerate_inputs_yield_a_single_final_step() {
    for id in SORTING {
        let empty = generate(id, &[], None);
        assert_eq!(empty.len(), 1, "{} on empty input", id.key());
        let only = empty.last().unwrap();
        assert!(only.array.is_empty());
        assert!(only.sorted.is_empty());
    }

    for id in [AlgorithmId::QuickSort, AlgorithmId::MergeSort] {
        let single = generate(id, &[7], None);
        assert_eq!(single.len(), 1, "{} on single element", id.key());
        let only = single.last().unwrap();
        assert_eq!(only.array, vec![7]);
        assert_eq!(only.sorted, vec![0]);
    }
}

#[test]
fn generation_is_deterministic() {
    let input = [8, 3, 5, 1, 9, 2, 7, 4];

    for id in AlgorithmId::ALL {
        let first: Trace = generate(id, &input, Some(5));
        let second: Trace = generate(id, &input, Some(5));
        assert_eq!(first, second, "{} must replay identically", id.key());
    }
}

#[test]
fn descriptors_cover_every_algorithm() {
    for id in AlgorithmId::ALL {
        let descriptor = registry::descriptor(id);
        assert!(!descriptor.name.is_empty());
        assert!(descriptor.complexity.best.starts_with("O("));
        assert!(descriptor.complexity.average.starts_with("O("));
        assert!(descriptor.complexity.worst.starts_with("O("));
    }

    let (id, descriptor) = registry::lookup("merge-sort").expect("known key");
    assert_eq!(id, AlgorithmId::MergeSort);
    assert_eq!(descriptor.name, "Merge Sort");
    assert!(registry::lookup("bogosort").is_none());
}
