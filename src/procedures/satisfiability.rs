/*!
Satisfiability queries.

A satisfiability query on a formula:
1. Checks the formula is of the Boolean sort.
2. [Normalises](crate::procedures::normalise) the formula.
3. [Searches](crate::procedures::search) for an assignment on which the normal form is true.

As normalisation preserves the variables of a formula, any witness to the satisfiability of the normal form is a witness to the satisfiability of the formula.

# Example

```rust
# use otter_valid::engine::QueryEngine;
# use otter_valid::manager::TermManager;
# use otter_valid::reports::Report;
let mut manager = TermManager::default();
let engine = QueryEngine::default();

let p = manager.boolean_variable("p").unwrap();
let q = manager.boolean_variable("q").unwrap();
let p_iff_q = manager.make_equiv(p, q).unwrap();
let not_q = manager.make_not(q).unwrap();
let formula = manager.make_and([p_iff_q, not_q]).unwrap();

let solution = engine.check_sat(&mut manager, formula).unwrap();
assert_eq!(solution.report, Report::Satisfiable);

let witness = solution.witness.unwrap();
assert_eq!(witness.value_of(p), Some(false));
assert_eq!(manager.evaluate(formula, &witness), Ok(Some(true)));
```
*/

use crate::{
    engine::QueryEngine,
    manager::TermManager,
    misc::log::targets::{self},
    reports::Solution,
    structures::term::TermId,
    types::err::{self, TypeError},
};

impl QueryEngine {
    /// Determines whether some assignment makes `term` true.
    ///
    /// For details, see [procedures::satisfiability](crate::procedures::satisfiability).
    pub fn check_sat(
        &self,
        manager: &mut TermManager,
        term: TermId,
    ) -> Result<Solution, err::ErrorKind> {
        let sort = manager.sort_of(term)?;
        if !sort.is_boolean() {
            log::info!(target: targets::QUERY, "Satisfiability query on {term} of sort {sort}");
            return Err(TypeError::QuerySort(sort).into());
        }

        let normal = manager.normalise(term)?;
        self.search(&manager.term_db, normal)
    }
}
