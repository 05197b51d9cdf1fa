use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of all decisions made.
    pub decisions: usize,

    /// A count of all values forced by unit propagation.
    pub propagations: usize,

    /// A count of every assignment found to falsify the formula.
    pub conflicts: usize,

    /// The time taken during a search.
    pub time: Duration,
}

impl Counters {
    /// Adds the counts of `other` to the counts of `self`.
    ///
    /// Time is not added, as the time of a parallel search is the time of the search as a whole.
    pub fn absorb(&mut self, other: &Counters) {
        self.decisions += other.decisions;
        self.propagations += other.propagations;
        self.conflicts += other.conflicts;
    }
}
