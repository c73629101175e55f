// Integration tests for trace playback and counter derivation

use sortty::algorithms::{generate, AlgorithmId};
use sortty::trace::{Playback, PlaybackError};

/// Counters expected after advancing over every step but the first
fn expected_counters(id: AlgorithmId, input: &[i32], target: Option<i32>) -> (usize, usize) {
    let trace = generate(id, input, target);
    let comparisons = trace
        .steps()
        .iter()
        .skip(1)
        .map(|s| s.compared.len())
        .sum();
    let swaps = trace.steps().iter().skip(1).map(|s| s.swapped.len()).sum();
    (comparisons, swaps)
}

#[test]
fn advancing_accumulates_marker_counts() {
    let input = [5, 3, 8, 1, 9, 2];

    for id in AlgorithmId::ALL {
        let (comparisons, swaps) = expected_counters(id, &input, Some(8));

        let mut playback = Playback::new(generate(id, &input, Some(8)));
        while playback.advance().is_ok() {}

        assert_eq!(playback.comparisons(), comparisons, "{}", id.key());
        assert_eq!(playback.swaps(), swaps, "{}", id.key());
        assert!(playback.is_at_end());
    }
}

#[test]
fn bubble_counters_match_a_hand_trace() {
    // [3, 1, 2]: pass 0 compares (0,1) swap, (1,2) swap; pass 1 compares
    // (0,1); then the final step.  The first compare step is the initial
    // display state and is never advanced over.
    let mut playback = Playback::new(generate(AlgorithmId::BubbleSort, &[3, 1, 2], None));
    assert_eq!(playback.len(), 6);

    playback.seek_end();
    assert_eq!(playback.comparisons(), 4);
    assert_eq!(playback.swaps(), 4);
    assert_eq!(playback.position(), 5);
}

#[test]
fn seek_end_matches_stepping_one_by_one() {
    let input = [7, 2, 9, 4, 1];

    for id in AlgorithmId::ALL {
        let mut stepped = Playback::new(generate(id, &input, Some(9)));
        while stepped.advance().is_ok() {}

        let mut jumped = Playback::new(generate(id, &input, Some(9)));
        jumped.seek_end();

        assert_eq!(jumped.position(), stepped.position(), "{}", id.key());
        assert_eq!(jumped.comparisons(), stepped.comparisons(), "{}", id.key());
        assert_eq!(jumped.swaps(), stepped.swaps(), "{}", id.key());
    }
}

#[test]
fn reset_returns_to_start_without_touching_the_trace() {
    let mut playback = Playback::new(generate(AlgorithmId::SelectionSort, &[4, 1, 3, 2], None));
    let total = playback.len();

    playback.seek_end();
    let comparisons = playback.comparisons();
    assert!(comparisons > 0);

    playback.reset();
    assert!(playback.is_at_start());
    assert_eq!(playback.comparisons(), 0);
    assert_eq!(playback.swaps(), 0);
    assert_eq!(playback.len(), total);

    // Replaying the same trace reproduces the same totals
    playback.seek_end();
    assert_eq!(playback.comparisons(), comparisons);
}

#[test]
fn advancing_past_the_end_is_an_error() {
    let mut playback = Playback::new(generate(AlgorithmId::LinearSearch, &[2, 4], Some(4)));

    playback.seek_end();
    assert_eq!(playback.advance(), Err(PlaybackError::AtEnd));

    // The cursor and counters are unchanged by the failed advance
    assert!(playback.is_at_end());
    let position = playback.position();
    assert_eq!(playback.advance(), Err(PlaybackError::AtEnd));
    assert_eq!(playback.position(), position);
}

#[test]
fn first_step_is_displayed_but_never_counted() {
    // Quick sort on [2, 1] opens with the pivot highlight step; a playback
    // that never advances reports zero work
    let playback = Playback::new(generate(AlgorithmId::QuickSort, &[2, 1], None));

    let first = playback.current().expect("trace is never empty");
    assert_eq!(first.array, vec![2, 1]);
    assert_eq!(playback.comparisons(), 0);
    assert_eq!(playback.swaps(), 0);
    assert!(playback.is_at_start());
}
