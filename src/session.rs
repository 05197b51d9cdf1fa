/*!
A session --- a stack of assertions over a term manager and a query engine.

Formulas are [asserted](Session::assert_formula) to a session, and queries on a session are made relative to the conjunction of every assertion:
- [check_sat](Session::check_sat) determines whether the assertions are jointly satisfiable.
- [query_validity](Session::query_validity) determines whether a formula is true on every assignment which makes the assertions true.
  That is, whether the assertions together with the negation of the formula are unsatisfiable.

A session supports a single level of [push](Session::push) and [pop](Session::pop).
On a pop, each assertion made since the push is forgotten.
Terms built after a push are kept, as terms live as long as the manager.

After a satisfiable [check_sat](Session::check_sat) the [value](Session::value_of) of a variable may be read from the witness of the check, until the assertions change.

# Example

```rust
# use otter_valid::session::Session;
# use otter_valid::reports::{Report, Validity};
# use otter_valid::types::err::{ErrorKind, SessionError};
let mut session = Session::default();

let p = session.boolean_variable("p").unwrap();
let q = session.boolean_variable("q").unwrap();
let p_implies_q = session.manager.make_implies(p, q).unwrap();

session.assert_formula(p_implies_q).unwrap();
assert_eq!(session.query_validity(q), Ok(Validity::Invalid));

session.push().unwrap();
session.assert_formula(p).unwrap();
assert_eq!(session.query_validity(q), Ok(Validity::Valid));
assert_eq!(session.push(), Err(ErrorKind::Session(SessionError::PushDepth)));

session.pop().unwrap();
let not_q = session.manager.make_not(q).unwrap();
session.assert_formula(not_q).unwrap();

assert_eq!(session.check_sat(), Ok(Report::Satisfiable));
assert_eq!(session.value_of(p), Ok(Some(false)));
```
*/

use crate::{
    config::Config,
    engine::QueryEngine,
    manager::TermManager,
    misc::log::targets::{self},
    reports::{Report, Validity},
    structures::{assignment::Assignment, term::TermId},
    types::err::{self, SessionError, TypeError},
};

/// A stack of assertions, together with the manager and engine used to build terms and make queries.
pub struct Session {
    /// The manager of each term of the session.
    pub manager: TermManager,

    /// The engine used for each query of the session.
    pub engine: QueryEngine,

    /// Each assertion, in order of assertion.
    assertions: Vec<TermId>,

    /// The count of assertions at the time of a push, if there is an open level.
    level: Option<usize>,

    /// The witness of the most recent check, if satisfiable and the assertions have not changed.
    model: Option<Assignment>,
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Session {
    /// Creates a session with an engine configured by `config`.
    pub fn from_config(config: Config) -> Self {
        Session {
            manager: TermManager::default(),
            engine: QueryEngine::from_config(config),
            assertions: Vec::default(),
            level: None,
            model: None,
        }
    }

    /// The boolean variable with the given name.
    pub fn boolean_variable(&mut self, name: &str) -> Result<TermId, err::ErrorKind> {
        self.manager.boolean_variable(name)
    }

    /// Adds `formula` to the assertions of the session.
    pub fn assert_formula(&mut self, formula: TermId) -> Result<(), err::ErrorKind> {
        self.require_boolean(formula)?;

        log::debug!(target: targets::SESSION, "Assert {}", self.manager.display(formula));
        self.assertions.push(formula);
        self.model = None;
        Ok(())
    }

    /// Opens a level, so that assertions from now are forgotten on the next [pop](Session::pop).
    pub fn push(&mut self) -> Result<(), err::ErrorKind> {
        match self.level {
            Some(_) => Err(SessionError::PushDepth.into()),
            None => {
                log::debug!(target: targets::SESSION, "Push at {} assertions", self.assertions.len());
                self.level = Some(self.assertions.len());
                Ok(())
            }
        }
    }

    /// Closes the open level, forgetting each assertion made since the level was opened.
    pub fn pop(&mut self) -> Result<(), err::ErrorKind> {
        match self.level.take() {
            None => Err(SessionError::NoLevel.into()),
            Some(count) => {
                log::debug!(target: targets::SESSION, "Pop {} assertions", self.assertions.len() - count);
                self.assertions.truncate(count);
                self.model = None;
                Ok(())
            }
        }
    }

    /// The current assertions, in order of assertion.
    pub fn assertions(&self) -> &[TermId] {
        &self.assertions
    }

    /// The conjunction of the assertions, with true for no assertions.
    fn conjoined_assertions(&mut self) -> Result<TermId, err::ErrorKind> {
        match self.assertions.as_slice() {
            [] => self.manager.make_true(),
            [assertion] => Ok(*assertion),
            _ => self.manager.make_and(self.assertions.clone()),
        }
    }

    /// Determines whether the assertions are jointly satisfiable.
    ///
    /// On a satisfiable report, the witness is kept for [value_of](Session::value_of).
    pub fn check_sat(&mut self) -> Result<Report, err::ErrorKind> {
        let formula = self.conjoined_assertions()?;
        let solution = self.engine.check_sat(&mut self.manager, formula)?;

        log::info!(target: targets::SESSION, "Check on {} assertions: {}", self.assertions.len(), solution.report);
        self.model = solution.witness;
        Ok(solution.report)
    }

    /// Determines whether `formula` is true on every assignment on which the assertions are true.
    pub fn query_validity(&mut self, formula: TermId) -> Result<Validity, err::ErrorKind> {
        self.require_boolean(formula)?;

        let query = match self.assertions.is_empty() {
            true => formula,
            false => {
                let assertions = self.conjoined_assertions()?;
                self.manager.make_implies(assertions, formula)?
            }
        };
        self.engine.query_validity(&mut self.manager, query)
    }

    fn require_boolean(&self, formula: TermId) -> Result<(), err::ErrorKind> {
        let sort = self.manager.sort_of(formula)?;
        match sort.is_boolean() {
            true => Ok(()),
            false => Err(TypeError::QuerySort(sort).into()),
        }
    }

    /// The value of `variable` on the witness of the most recent check.
    ///
    /// A variable of the formula checked may be without a value, in which case any value is fine.
    pub fn value_of(&self, variable: TermId) -> Result<Option<bool>, err::ErrorKind> {
        match &self.model {
            Some(model) => Ok(model.value_of(variable)),
            None => Err(SessionError::NoModel.into()),
        }
    }

    /// The witness of the most recent check, if satisfiable and the assertions have not changed since.
    pub fn model(&self) -> Option<&Assignment> {
        self.model.as_ref()
    }
}
