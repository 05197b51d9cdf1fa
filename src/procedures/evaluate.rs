/*!
Three-valued evaluation of a term on a (partial) assignment.

On a partial assignment a formula may be true, false, or *unknown*, as the value of the formula may depend on the value of some variable without a value.
Evaluation follows the strong Kleene tables, so that:
- A conjunction is false if some conjunct is false, true if every conjunct is true, and unknown otherwise.
- A disjunction is true if some disjunct is true, false if every disjunct is false, and unknown otherwise.
- An implication is evaluated as the disjunction of the negated antecedent and the consequent.
- An equivalence is unknown if either side is unknown.

So, if a formula evaluates to true (or false) on an assignment, the formula is true (or false) on every extension of the assignment.

# Memoisation

An [Evaluator] may memoise the truth of each term evaluated, so a subterm shared by many terms is evaluated once.
The memo is only correct for the assignment the terms were evaluated on, and so must be [cleared](Evaluator::clear) whenever the assignment changes.

# Example

```rust
# use otter_valid::manager::TermManager;
# use otter_valid::structures::assignment::Assignment;
let mut manager = TermManager::default();
let p = manager.boolean_variable("p").unwrap();
let q = manager.boolean_variable("q").unwrap();
let p_or_q = manager.make_or([p, q]).unwrap();

let mut assignment = Assignment::default();
assert_eq!(manager.evaluate(p_or_q, &assignment), Ok(None));

assignment.set(q, true);
assert_eq!(manager.evaluate(p_or_q, &assignment), Ok(Some(true)));
```
*/

use std::collections::HashMap;

use crate::{
    db::term::TermDB,
    manager::TermManager,
    structures::{
        assignment::Assignment,
        term::{Kind, Term, TermId},
    },
    types::err::{self},
};

/// The truth of a term on a partial assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Truth {
    True,
    False,
    Unknown,
}

impl From<bool> for Truth {
    fn from(value: bool) -> Self {
        match value {
            true => Truth::True,
            false => Truth::False,
        }
    }
}

impl From<Option<bool>> for Truth {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Truth::Unknown,
        }
    }
}

impl Truth {
    pub fn negate(self) -> Self {
        match self {
            Truth::True => Truth::False,
            Truth::False => Truth::True,
            Truth::Unknown => Truth::Unknown,
        }
    }

    /// Strong Kleene conjunction.
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Truth::False, _) | (_, Truth::False) => Truth::False,
            (Truth::True, Truth::True) => Truth::True,
            _ => Truth::Unknown,
        }
    }

    /// Strong Kleene disjunction.
    pub fn or(self, other: Self) -> Self {
        self.negate().and(other.negate()).negate()
    }

    pub fn equiv(self, other: Self) -> Self {
        match (self, other) {
            (Truth::Unknown, _) | (_, Truth::Unknown) => Truth::Unknown,
            (left, right) => (left == right).into(),
        }
    }

    /// The truth as a boolean, if known.
    pub fn value(self) -> Option<bool> {
        match self {
            Truth::True => Some(true),
            Truth::False => Some(false),
            Truth::Unknown => None,
        }
    }
}

/// Evaluates terms from a term database, with an optional memo.
#[derive(Clone)]
pub struct Evaluator<'db> {
    terms: &'db TermDB,
    memo: HashMap<TermId, Truth>,
    memoize: bool,
}

impl<'db> Evaluator<'db> {
    pub fn new(terms: &'db TermDB, memoize: bool) -> Self {
        Evaluator {
            terms,
            memo: HashMap::default(),
            memoize,
        }
    }

    /// Clears the memo.
    /// Required after any change to the assignment terms are evaluated on.
    pub fn clear(&mut self) {
        self.memo.clear();
    }

    /// The truth of `id`, where `value_of` gives the value of a variable on the assignment, if any.
    ///
    /// An id not issued by the database is unknown.
    ///
    /// Subterms are evaluated from an explicit stack, operands before operators, so the depth of a term is not bounded by the depth of the call stack.
    /// Without the memo, each subterm is evaluated at most once for each call.
    pub fn truth_of<F>(&mut self, id: TermId, value_of: &F) -> Truth
    where
        F: Fn(TermId) -> Option<bool>,
    {
        if self.memoize {
            if let Some(truth) = self.memo.get(&id) {
                return *truth;
            }
        }

        let terms = self.terms;
        let mut scratch = HashMap::new();
        let known = match self.memoize {
            true => &mut self.memo,
            false => &mut scratch,
        };

        // Each entry is a term paired with whether the operands of the term have been pushed.
        let mut stack = vec![(id, false)];
        while let Some((current, expanded)) = stack.pop() {
            if known.contains_key(&current) {
                continue;
            }

            let truth = match terms.get(current) {
                Err(_) => Truth::Unknown,

                Ok(Term::Variable { .. }) => value_of(current).into(),

                Ok(Term::Constant { value, .. }) => (*value).into(),

                Ok(Term::Operator { operands, .. }) if !expanded => {
                    stack.push((current, true));
                    for operand in operands.iter().rev() {
                        if !known.contains_key(operand) {
                            stack.push((*operand, false));
                        }
                    }
                    continue;
                }

                Ok(Term::Operator { kind, operands }) => {
                    let truth_of = |operand: &TermId| {
                        known.get(operand).copied().unwrap_or(Truth::Unknown)
                    };
                    match (kind, operands.as_slice()) {
                        (Kind::Not, [a]) => truth_of(a).negate(),
                        (Kind::And, _) => operands.iter().map(truth_of).fold(Truth::True, Truth::and),
                        (Kind::Or, _) => operands.iter().map(truth_of).fold(Truth::False, Truth::or),
                        (Kind::Implies, [a, b]) => truth_of(a).negate().or(truth_of(b)),
                        (Kind::Equiv, [a, b]) => truth_of(a).equiv(truth_of(b)),
                        _ => Truth::Unknown,
                    }
                }
            };

            known.insert(current, truth);
        }

        known.get(&id).copied().unwrap_or(Truth::Unknown)
    }
}

impl TermManager {
    /// The value of `term` on `assignment`, if the assignment decides the value of the term.
    ///
    /// For details, see [procedures::evaluate](crate::procedures::evaluate).
    pub fn evaluate(
        &self,
        term: TermId,
        assignment: &Assignment,
    ) -> Result<Option<bool>, err::ErrorKind> {
        self.term_db.get(term)?;
        let mut evaluator = Evaluator::new(&self.term_db, true);
        Ok(evaluator
            .truth_of(term, &|variable| assignment.value_of(variable))
            .value())
    }
}
