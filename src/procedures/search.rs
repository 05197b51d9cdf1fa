/*!
A search for an assignment on which a formula is true.

# Overview

The search is a backtracking search with unit propagation (a DPLL search), made directly on the graph of a term rather than on some clausal form of the term.

At each node of the search:

1. If the search has been [interrupted](crate::reports::Interrupt), the search stops.
2. Unit propagation is applied until no value is forced, or some conjunct of the formula is false.
   + The conjuncts of a formula are found by descending through conjunctions from the root of the formula.
   + A conjunct which is a literal (a variable, or a negated variable) forces the value of the variable.
   + A conjunct which is a disjunction, with every disjunct false except some single literal, forces the value of the variable of that literal.
3. If the formula is true (or false) on the current assignment, the node is satisfiable (or not).
4. Otherwise, a decision is made on the first variable without a value found on a pre-order traversal from the root of the formula, skipping any subterm whose value is known.
   The variable is first valued true, and on failure valued false, with any value given after the decision forgotten before the second attempt.

```none
           +-----------+
   +------>| propagate |----> unsatisfiable, on a false conjunct
   |       +-----------+
   |             |
   |             ⌄
   |       +-----------+
   |       | evaluate  |----> satisfiable or unsatisfiable, if known
   |       +-----------+
   |             |
   |             ⌄
   |       +-----------+
   +-------|  decide   |----> unsatisfiable, if both values fail
           +-----------+
```

Formulas are evaluated with an [Evaluator](crate::procedures::evaluate::Evaluator), whose memo is cleared each time the assignment changes.

The search always terminates, as each decision values a fresh variable and there are finitely many variables.

# Parallel search

For the first [parallel_depth](crate::config::Config::parallel_depth) levels of decisions, the two values of a decision are explored on separate (scoped) threads, each with a copy of the assignment.
Of the two, the result of the search with the variable valued true is preferred, regardless of which search finishes first, and so the witness of a parallel search is the witness of a sequential search.
If the preferred search is satisfiable, the other search is abandoned.

Terms are only read during a search, and so the [term database](crate::db::term) is shared between threads without locks.
*/

use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use crate::{
    config::Config,
    db::term::TermDB,
    engine::{Counters, QueryEngine},
    misc::log::targets::{self},
    procedures::evaluate::{Evaluator, Truth},
    reports::{Interrupt, Report, Solution},
    structures::{
        assignment::Assignment,
        term::{Kind, Term, TermId},
    },
    types::err::{self, TypeError},
};

/// The outcome of a node of the search.
enum Outcome {
    Satisfiable,
    Unsatisfiable,
    Interrupted(Interrupt),

    /// A search in parallel with a preferred search which did not fail.
    Abandoned,
}

/// The status of unit propagation.
enum Propagation {
    Conflict,
    Fixpoint,
}

/// Limits on a search, taken from a config.
#[derive(Clone, Copy)]
struct Limits {
    decision_limit: Option<usize>,
    time_limit: Option<Duration>,
    parallel_depth: u32,
    propagation: bool,
}

/// Things shared by each thread of a search.
struct Shared {
    start: Instant,
    decisions: AtomicUsize,
    cancel: Arc<AtomicBool>,
}

/// The state of a search.
#[derive(Clone)]
struct Search<'s> {
    terms: &'s TermDB,
    shared: &'s Shared,
    limits: Limits,

    root: TermId,

    /// The variables of the root, in pre-order.
    atoms: Vec<TermId>,

    /// The index of each variable in `atoms`.
    atom_indicies: HashMap<TermId, usize>,

    /// The conjuncts of the root.
    conjuncts: Vec<TermId>,

    /// The value of each variable, indexed as `atoms`.
    valuation: Vec<Option<bool>>,

    /// Indicies of valued variables, in order of valuation.
    trail: Vec<usize>,

    evaluator: Evaluator<'s>,

    /// Flags to abandon the search, one for each parallel split the search is the less preferred branch of.
    abandon: Vec<Arc<AtomicBool>>,

    counters: Counters,
}

impl<'s> Search<'s> {
    fn new(
        terms: &'s TermDB,
        root: TermId,
        shared: &'s Shared,
        config: &Config,
    ) -> Result<Self, err::TermDBError> {
        let atoms = terms.variables(root)?;
        let atom_indicies = atoms
            .iter()
            .enumerate()
            .map(|(index, atom)| (*atom, index))
            .collect();
        let conjuncts = terms.conjuncts(root)?;

        Ok(Search {
            terms,
            shared,
            limits: Limits {
                decision_limit: config.decision_limit(),
                time_limit: config.time_limit(),
                parallel_depth: config.parallel_depth.value,
                propagation: config.propagation.value,
            },
            root,
            valuation: vec![None; atoms.len()],
            atoms,
            atom_indicies,
            conjuncts,
            trail: Vec::default(),
            evaluator: Evaluator::new(terms, config.memoize.value),
            abandon: Vec::default(),
            counters: Counters::default(),
        })
    }

    fn truth_of(&mut self, id: TermId) -> Truth {
        let valuation = &self.valuation;
        let indicies = &self.atom_indicies;
        self.evaluator.truth_of(id, &|variable| {
            indicies
                .get(&variable)
                .and_then(|index| valuation[*index])
        })
    }

    fn assign(&mut self, atom: usize, value: bool) {
        self.valuation[atom] = Some(value);
        self.trail.push(atom);
        self.evaluator.clear();
    }

    /// Clears the value of each variable valued after the trail had length `mark`.
    fn backtrack(&mut self, mark: usize) {
        for atom in self.trail.drain(mark..) {
            self.valuation[atom] = None;
        }
        self.evaluator.clear();
    }

    fn interrupted(&self) -> Option<Outcome> {
        if self.abandon.iter().any(|flag| flag.load(Ordering::Relaxed)) {
            return Some(Outcome::Abandoned);
        }

        if self.shared.cancel.load(Ordering::Relaxed) {
            return Some(Outcome::Interrupted(Interrupt::Cancelled));
        }

        if self
            .limits
            .time_limit
            .is_some_and(|limit| self.shared.start.elapsed() > limit)
        {
            return Some(Outcome::Interrupted(Interrupt::TimeUp));
        }

        None
    }

    /// The index of the variable of `id` paired with the polarity of `id`, if `id` is a literal.
    fn literal_of(&self, id: TermId) -> Option<(usize, bool)> {
        match self.terms.get(id).ok()? {
            Term::Variable { .. } => Some((*self.atom_indicies.get(&id)?, true)),

            Term::Operator {
                kind: Kind::Not,
                operands,
            } => match operands.as_slice() {
                [operand] => match self.terms.get(*operand).ok()? {
                    Term::Variable { .. } => Some((*self.atom_indicies.get(operand)?, false)),
                    _ => None,
                },
                _ => None,
            },

            _ => None,
        }
    }

    /// The literal forced by `conjunct`, if any, where the truth of the conjunct is unknown.
    fn unit_of(&mut self, conjunct: TermId) -> Option<(usize, bool)> {
        if let Some(literal) = self.literal_of(conjunct) {
            return Some(literal);
        }

        let terms = self.terms;
        match terms.get(conjunct) {
            Ok(Term::Operator {
                kind: Kind::Or,
                operands,
            }) => {
                let mut candidate = None;
                for disjunct in operands {
                    match self.truth_of(*disjunct) {
                        Truth::False => {}
                        Truth::True => return None,
                        Truth::Unknown => match candidate {
                            Some(_) => return None,
                            None => candidate = Some(*disjunct),
                        },
                    }
                }
                candidate.and_then(|disjunct| self.literal_of(disjunct))
            }

            _ => None,
        }
    }

    /// Applies unit propagation to the conjuncts of the root, until some conjunct is false or no value is forced.
    fn propagate(&mut self) -> Propagation {
        loop {
            let mut forced = false;

            for index in 0..self.conjuncts.len() {
                let conjunct = self.conjuncts[index];
                match self.truth_of(conjunct) {
                    Truth::True => {}

                    Truth::False => {
                        log::trace!(target: targets::PROPAGATION, "Conflict on {conjunct}");
                        return Propagation::Conflict;
                    }

                    Truth::Unknown => {
                        if let Some((atom, value)) = self.unit_of(conjunct) {
                            log::trace!(target: targets::PROPAGATION, "{} forced to {value} by {conjunct}", self.atoms[atom]);
                            self.assign(atom, value);
                            self.counters.propagations += 1;
                            forced = true;
                        }
                    }
                }
            }

            if !forced {
                return Propagation::Fixpoint;
            }
        }
    }

    /// The first variable without a value on a pre-order traversal from the root, skipping subterms whose value is known.
    fn branch_atom(&mut self) -> Option<usize> {
        let terms = self.terms;
        let mut seen = HashSet::new();
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            if !seen.insert(id) || self.truth_of(id) != Truth::Unknown {
                continue;
            }
            match terms.get(id) {
                Ok(Term::Variable { .. }) => return self.atom_indicies.get(&id).copied(),
                Ok(Term::Operator { operands, .. }) => stack.extend(operands.iter().rev()),
                _ => {}
            }
        }

        None
    }

    /// Propagates and evaluates the root at a node, and if the root is undecided, makes a decision.
    ///
    /// Returns the variable to branch on, or the outcome of the node.
    fn node(&mut self) -> Result<usize, Outcome> {
        if let Some(outcome) = self.interrupted() {
            return Err(outcome);
        }

        if self.limits.propagation {
            if let Propagation::Conflict = self.propagate() {
                self.counters.conflicts += 1;
                return Err(Outcome::Unsatisfiable);
            }
        }

        match self.truth_of(self.root) {
            Truth::True => return Err(Outcome::Satisfiable),

            Truth::False => {
                self.counters.conflicts += 1;
                return Err(Outcome::Unsatisfiable);
            }

            Truth::Unknown => {}
        }

        // An unknown term has some unknown operand, and so on to some variable without a value.
        let Some(atom) = self.branch_atom() else {
            unreachable!("an undecided formula has a variable without a value");
        };

        let decisions = self.shared.decisions.fetch_add(1, Ordering::Relaxed) + 1;
        if self
            .limits
            .decision_limit
            .is_some_and(|limit| decisions > limit)
        {
            return Err(Outcome::Interrupted(Interrupt::DecisionLimit));
        }
        self.counters.decisions += 1;

        Ok(atom)
    }

    /// For documentation see [procedures::search](crate::procedures::search).
    fn dpll(&mut self, depth: u32) -> Outcome {
        if depth >= self.limits.parallel_depth {
            return self.sequential(depth);
        }

        match self.node() {
            Ok(atom) => self.split(atom, depth),
            Err(outcome) => outcome,
        }
    }

    /// A search from the current node on a single thread.
    ///
    /// Decisions are kept on an explicit stack, so the number of variables is not bounded by the depth of the call stack.
    fn sequential(&mut self, depth: u32) -> Outcome {
        // Each decision is the variable, the length of the trail before the variable was valued, and whether the variable is valued false.
        let mut decisions: Vec<(usize, usize, bool)> = Vec::default();

        loop {
            let failed = match self.node() {
                Ok(atom) => {
                    let mark = self.trail.len();
                    log::trace!(target: targets::DECISION, "Decision {} = true at depth {}", self.atoms[atom], depth as usize + decisions.len());
                    decisions.push((atom, mark, false));
                    self.assign(atom, true);
                    false
                }

                Err(Outcome::Unsatisfiable) => true,

                Err(outcome) => return outcome,
            };

            if !failed {
                continue;
            }

            // Backtrack to the most recent decision with the variable valued true, and value the variable false.
            loop {
                match decisions.pop() {
                    None => return Outcome::Unsatisfiable,

                    Some((atom, mark, false)) => {
                        self.backtrack(mark);
                        log::trace!(target: targets::DECISION, "Decision {} = false at depth {}", self.atoms[atom], depth as usize + decisions.len());
                        decisions.push((atom, mark, true));
                        self.assign(atom, false);
                        break;
                    }

                    Some((_, _, true)) => {}
                }
            }
        }
    }

    /// Explores both values of `atom` in parallel, preferring the result of valuing `atom` true.
    fn split(&mut self, atom: usize, depth: u32) -> Outcome {
        log::trace!(target: targets::DECISION, "Split on {} at depth {depth}", self.atoms[atom]);

        let abandon = Arc::new(AtomicBool::new(false));

        let mut positive = self.clone();
        positive.counters = Counters::default();
        positive.assign(atom, true);

        let mut negative = self.clone();
        negative.counters = Counters::default();
        negative.abandon.push(abandon.clone());
        negative.assign(atom, false);

        let scoped = crossbeam::thread::scope(|scope| {
            let handle = scope.spawn(move |_| {
                let outcome = negative.dpll(depth + 1);
                (outcome, negative)
            });

            let positive_outcome = positive.dpll(depth + 1);
            if !matches!(positive_outcome, Outcome::Unsatisfiable) {
                abandon.store(true, Ordering::Relaxed);
            }

            (positive_outcome, handle.join())
        });

        let (positive_outcome, joined) = match scoped {
            Ok(pair) => pair,
            Err(panic) => std::panic::resume_unwind(panic),
        };
        let (negative_outcome, negative) = match joined {
            Ok(pair) => pair,
            Err(panic) => std::panic::resume_unwind(panic),
        };

        self.counters.absorb(&positive.counters);
        self.counters.absorb(&negative.counters);

        match positive_outcome {
            Outcome::Unsatisfiable => {}

            Outcome::Satisfiable => {
                self.valuation = positive.valuation;
                return Outcome::Satisfiable;
            }

            outcome => return outcome,
        }

        if let Outcome::Satisfiable = negative_outcome {
            self.valuation = negative.valuation;
        }
        negative_outcome
    }

    /// The current (partial) valuation, as an assignment.
    fn witness(&self) -> Assignment {
        self.atoms
            .iter()
            .zip(&self.valuation)
            .filter_map(|(atom, value)| value.map(|value| (*atom, value)))
            .collect()
    }
}

impl QueryEngine {
    /// Searches for an assignment on which `root` is true, without any rewrite of `root`.
    ///
    /// [check_sat](QueryEngine::check_sat) normalises a formula before a search, and is likely of more use.
    ///
    /// For documentation see [procedures::search](crate::procedures::search).
    pub fn search(&self, terms: &TermDB, root: TermId) -> Result<Solution, err::ErrorKind> {
        let sort = terms.sort_of(root)?;
        if !sort.is_boolean() {
            return Err(TypeError::QuerySort(sort).into());
        }

        let shared = Shared {
            start: Instant::now(),
            decisions: AtomicUsize::new(0),
            cancel: self.cancel_flag().clone(),
        };

        let mut search = Search::new(terms, root, &shared, &self.config)?;
        log::debug!(target: targets::QUERY, "Search on {root} with {} variables and {} conjuncts", search.atoms.len(), search.conjuncts.len());

        let outcome = search.dpll(0);

        let mut counters = search.counters;
        counters.time = shared.start.elapsed();

        let (report, witness, interrupt) = match outcome {
            Outcome::Satisfiable => (Report::Satisfiable, Some(search.witness()), None),
            Outcome::Unsatisfiable => (Report::Unsatisfiable, None, None),
            Outcome::Interrupted(interrupt) => (Report::Unknown, None, Some(interrupt)),
            // The root search has no flag to abandon the search.
            Outcome::Abandoned => (Report::Unknown, None, None),
        };

        log::info!(target: targets::QUERY, "{report} after {} decisions, {} propagations, and {} conflicts", counters.decisions, counters.propagations, counters.conflicts);

        Ok(Solution {
            report,
            witness,
            interrupt,
            counters,
        })
    }
}
