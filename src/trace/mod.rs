// Step records and trace playback for forward replay

use std::fmt;

/// One observable snapshot of algorithm state.
///
/// Marker fields hold indices into `array`; an empty vector means the marker
/// is absent for this step.  `compared` and `swapped` carry at most two
/// indices and are never both populated in the same step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    /// Complete array state at this instant (a snapshot, not a diff)
    pub array: Vec<i32>,
    /// Indices currently being compared
    pub compared: Vec<usize>,
    /// Indices whose values were just exchanged
    pub swapped: Vec<usize>,
    /// Indices known to hold their final sorted value
    pub sorted: Vec<usize>,
    /// Indices of interest with no compare/swap semantics (pivot, key, cursor)
    pub highlight: Vec<usize>,
}

impl Step {
    /// A marker-free snapshot of the given array
    pub fn snapshot(array: &[i32]) -> Self {
        Step {
            array: array.to_vec(),
            ..Step::default()
        }
    }
}

/// The complete ordered sequence of steps produced by one algorithm run.
///
/// A trace is finite and immutable once drained; replaying a changed input
/// requires generating a fresh trace rather than mutating this one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Trace { steps: Vec::new() }
    }

    /// Append a step to the trace
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The final step of the run
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// All steps in emission order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl IntoIterator for Trace {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Errors from navigating a [`Playback`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    /// Already positioned on the final step of the trace
    AtEnd,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::AtEnd => write!(f, "already at the final step"),
        }
    }
}

impl std::error::Error for PlaybackError {}

/// Forward-only cursor over a drained [`Trace`].
///
/// Owns the run state the generators have no memory of: the current step
/// index and the accumulated comparison/swap counters.  Counters are derived
/// from the steps advanced over — `compared.len()` comparisons and
/// `swapped.len()` swaps per step, including steps skipped by
/// [`Playback::seek_end`].  The first step is the initial display state and
/// is never advanced over, so it is never counted.
#[derive(Debug)]
pub struct Playback {
    trace: Trace,
    position: usize,
    comparisons: usize,
    swaps: usize,
}

impl Playback {
    pub fn new(trace: Trace) -> Self {
        Playback {
            trace,
            position: 0,
            comparisons: 0,
            swaps: 0,
        }
    }

    /// The step the cursor is positioned on (None only for an empty trace)
    pub fn current(&self) -> Option<&Step> {
        self.trace.get(self.position)
    }

    /// Advance to the next step, accumulating its counters
    pub fn advance(&mut self) -> Result<(), PlaybackError> {
        match self.trace.get(self.position + 1) {
            Some(step) => {
                self.comparisons += step.compared.len();
                self.swaps += step.swapped.len();
                self.position += 1;
                Ok(())
            }
            None => Err(PlaybackError::AtEnd),
        }
    }

    /// Jump to the final step, accumulating counters over every skipped step
    pub fn seek_end(&mut self) {
        while self.advance().is_ok() {}
    }

    /// Return to the first step and zero the counters; the trace is retained
    pub fn reset(&mut self) {
        self.position = 0;
        self.comparisons = 0;
        self.swaps = 0;
    }

    /// Current position in the trace
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of steps in the trace
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    /// Comparisons accumulated over the steps advanced so far
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// Swaps/moves accumulated over the steps advanced so far
    pub fn swaps(&self) -> usize {
        self.swaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_with(compared: Vec<usize>, swapped: Vec<usize>) -> Step {
        Step {
            array: vec![1, 2],
            compared,
            swapped,
            ..Step::default()
        }
    }

    #[test]
    fn trace_preserves_order() {
        let mut trace = Trace::new();
        trace.push(step_with(vec![0, 1], vec![]));
        trace.push(step_with(vec![], vec![0, 1]));

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.get(0).unwrap().compared, vec![0, 1]);
        assert_eq!(trace.last().unwrap().swapped, vec![0, 1]);
        assert!(trace.get(2).is_none());
    }

    #[test]
    fn playback_counts_advanced_steps_only() {
        let mut trace = Trace::new();
        trace.push(step_with(vec![0, 1], vec![])); // initial step, never counted
        trace.push(step_with(vec![], vec![0, 1]));
        trace.push(step_with(vec![0, 1], vec![]));

        let mut playback = Playback::new(trace);
        assert_eq!(playback.comparisons(), 0);

        playback.advance().unwrap();
        assert_eq!(playback.swaps(), 2);
        playback.advance().unwrap();
        assert_eq!(playback.comparisons(), 2);

        assert_eq!(playback.advance(), Err(PlaybackError::AtEnd));
        assert!(playback.is_at_end());
    }

    #[test]
    fn reset_keeps_trace_and_zeroes_counters() {
        let mut trace = Trace::new();
        trace.push(step_with(vec![], vec![]));
        trace.push(step_with(vec![0, 1], vec![]));

        let mut playback = Playback::new(trace);
        playback.seek_end();
        assert_eq!(playback.comparisons(), 2);

        playback.reset();
        assert!(playback.is_at_start());
        assert_eq!(playback.comparisons(), 0);
        assert_eq!(playback.len(), 2);
    }
}
