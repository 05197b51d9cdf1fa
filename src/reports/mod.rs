/*!
Reports from a query.

- A satisfiability query results in a [Solution], which includes a [Report].
- A validity query results in a [Validity].

A formula is valid *if and only if* the negation of the formula is unsatisfiable, and [Validity::of_negation] gives the validity of a formula from a report on the negation of the formula.

Satisfiability of a (propositional) formula is always decidable, and so an unknown report only follows from an [Interrupt] to a search.
*/

use crate::{engine::Counters, structures::assignment::Assignment};

/// High-level reports regarding satisfiability.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula is satisfiable.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula is unknown, for some reason.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// High-level reports regarding validity.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Validity {
    /// The formula is true on every assignment.
    Valid,

    /// The formula is false on some assignment.
    Invalid,

    /// Validity of the formula is unknown, for some reason.
    Unknown,
}

impl Validity {
    /// The validity of a formula, given a report on the satisfiability of the negation of the formula.
    pub fn of_negation(report: Report) -> Self {
        match report {
            Report::Unsatisfiable => Validity::Valid,
            Report::Satisfiable => Validity::Invalid,
            Report::Unknown => Validity::Unknown,
        }
    }
}

impl std::fmt::Display for Validity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => write!(f, "Valid"),
            Self::Invalid => write!(f, "Invalid"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Reasons for a search to stop before satisfiability is determined.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Interrupt {
    /// The search was cancelled through the [cancel handle](crate::engine::QueryEngine::cancel_handle) of the engine.
    Cancelled,

    /// The [decision limit](crate::config::Config::decision_limit) was reached.
    DecisionLimit,

    /// The [time limit](crate::config::Config::time_limit) was reached.
    TimeUp,
}

impl std::fmt::Display for Interrupt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled => write!(f, "Cancelled"),
            Self::DecisionLimit => write!(f, "DecisionLimit"),
            Self::TimeUp => write!(f, "TimeUp"),
        }
    }
}

/// The result of a satisfiability query.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Satisfiability of the formula.
    pub report: Report,

    /// An assignment on which the formula is true, if the formula is satisfiable.
    ///
    /// Variables of the formula without a value may be given any value.
    pub witness: Option<Assignment>,

    /// The reason satisfiability is unknown, if it is unknown.
    pub interrupt: Option<Interrupt>,

    /// Counts from the search.
    pub counters: Counters,
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn duality() {
        assert_eq!(Validity::of_negation(Report::Unsatisfiable), Validity::Valid);
        assert_eq!(Validity::of_negation(Report::Satisfiable), Validity::Invalid);
        assert_eq!(Validity::of_negation(Report::Unknown), Validity::Unknown);
    }
}
