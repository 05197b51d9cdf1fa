/*!
Validity queries.

A formula is valid *if and only if* the negation of the formula is unsatisfiable.
So, a validity query on a formula builds the negation of the formula and makes a [satisfiability query](crate::procedures::satisfiability) on the negation.

- If the negation is unsatisfiable, the formula is [valid](Validity::Valid).
- If the negation is satisfiable, the formula is [invalid](Validity::Invalid), and the witness to satisfiability of the negation is a counterexample to the formula.
- Otherwise, the search was interrupted and validity is [unknown](Validity::Unknown).

# Example

```rust
# use otter_valid::engine::QueryEngine;
# use otter_valid::manager::TermManager;
# use otter_valid::reports::Validity;
let mut manager = TermManager::default();
let engine = QueryEngine::default();

let p = manager.boolean_variable("p").unwrap();
let q = manager.boolean_variable("q").unwrap();
let p_and_q = manager.make_and([p, q]).unwrap();
let implication = manager.make_implies(p_and_q, p).unwrap();

assert_eq!(engine.query_validity(&mut manager, implication), Ok(Validity::Valid));
assert_eq!(engine.query_validity(&mut manager, p), Ok(Validity::Invalid));

let (validity, solution) = engine.query(&mut manager, p).unwrap();
assert_eq!(validity, Validity::Invalid);
assert_eq!(solution.witness.unwrap().value_of(p), Some(false));
```
*/

use crate::{
    engine::QueryEngine,
    manager::TermManager,
    misc::log::targets::{self},
    reports::{Solution, Validity},
    structures::term::TermId,
    types::err::{self, TypeError},
};

impl QueryEngine {
    /// Determines whether `term` is true on every assignment.
    ///
    /// For details, see [procedures::validity](crate::procedures::validity).
    pub fn query_validity(
        &self,
        manager: &mut TermManager,
        term: TermId,
    ) -> Result<Validity, err::ErrorKind> {
        let (validity, _) = self.query(manager, term)?;
        Ok(validity)
    }

    /// Determines whether `term` is true on every assignment, together with the solution to the satisfiability query on the negation of `term`.
    ///
    /// If `term` is invalid, the witness of the solution is a counterexample to `term`.
    pub fn query(
        &self,
        manager: &mut TermManager,
        term: TermId,
    ) -> Result<(Validity, Solution), err::ErrorKind> {
        let sort = manager.sort_of(term)?;
        if !sort.is_boolean() {
            log::info!(target: targets::QUERY, "Validity query on {term} of sort {sort}");
            return Err(TypeError::QuerySort(sort).into());
        }

        let negation = manager.make_not(term)?;
        let solution = self.check_sat(manager, negation)?;
        let validity = Validity::of_negation(solution.report);

        log::info!(target: targets::QUERY, "{term} is {validity}");
        Ok((validity, solution))
    }
}
