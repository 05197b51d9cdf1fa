/*!
Tools for building terms.

Each method checks the sorts of the term to be built with the [sort database](crate::db::sort) and, if the term is well sorted, interns the term in the [term database](crate::db::term).
So, building the same term twice gives the same id, and on a [TypeError](crate::types::err::TypeError) nothing is built.

# Basic methods

- [make_variable](TermManager::make_variable) and [boolean_variable](TermManager::boolean_variable), for variables.
- [make_constant](TermManager::make_constant), [make_true](TermManager::make_true), and [make_false](TermManager::make_false), for constants.
- [make_not](TermManager::make_not), [make_and](TermManager::make_and), [make_or](TermManager::make_or), [make_implies](TermManager::make_implies), and [make_equiv](TermManager::make_equiv), for operators.

Each operator method is a shorthand for [make_operator](TermManager::make_operator).

# Examples

```rust
# use otter_valid::manager::TermManager;
let mut manager = TermManager::default();
let p = manager.boolean_variable("p").unwrap();
let q = manager.boolean_variable("q").unwrap();

let p_and_q = manager.make_and([p, q]).unwrap();
let again = manager.make_and([p, q]).unwrap();
assert_eq!(p_and_q, again);

let implication = manager.make_implies(p_and_q, p).unwrap();
assert_eq!(manager.display(implication).to_string(), "(=> (and p q) p)");
```

A conjunction requires at least two operands.

```rust
# use otter_valid::manager::TermManager;
# use otter_valid::types::err::{ErrorKind, TypeError};
let mut manager = TermManager::default();
let p = manager.boolean_variable("p").unwrap();

assert!(matches!(manager.make_and([p]), Err(ErrorKind::Type(TypeError::Arity { .. }))));
```
*/

use crate::{
    manager::TermManager,
    misc::log::targets::{self},
    structures::{
        sort::Sort,
        term::{Kind, Term, TermId},
    },
    types::err::{self},
};

impl TermManager {
    /// The variable with the given name and sort.
    pub fn make_variable(&mut self, name: &str, sort: Sort) -> Result<TermId, err::ErrorKind> {
        self.sort_db.check_sort(sort)?;
        Ok(self.term_db.lookup_variable(name, sort)?)
    }

    /// The boolean variable with the given name.
    pub fn boolean_variable(&mut self, name: &str) -> Result<TermId, err::ErrorKind> {
        self.make_variable(name, Sort::BOOLEAN)
    }

    /// The constant with the given value and sort.
    pub fn make_constant(&mut self, value: bool, sort: Sort) -> Result<TermId, err::ErrorKind> {
        let sort = self.sort_db.check_constant(sort)?;
        Ok(self.term_db.intern(Term::Constant { value, sort })?)
    }

    pub fn make_true(&mut self) -> Result<TermId, err::ErrorKind> {
        self.make_constant(true, Sort::BOOLEAN)
    }

    pub fn make_false(&mut self) -> Result<TermId, err::ErrorKind> {
        self.make_constant(false, Sort::BOOLEAN)
    }

    /// The operator of `kind` applied to `operands`, in order.
    pub fn make_operator(
        &mut self,
        kind: Kind,
        operands: impl IntoIterator<Item = TermId>,
    ) -> Result<TermId, err::ErrorKind> {
        let operands = operands.into_iter().collect::<Vec<_>>();

        let mut sorts = Vec::with_capacity(operands.len());
        for operand in &operands {
            sorts.push(self.term_db.sort_of(*operand)?);
        }

        if let Err(e) = self.sort_db.check_operator(kind, &sorts) {
            log::debug!(target: targets::BUILDER, "Rejected {kind} over {operands:?}: {e}");
            return Err(e.into());
        }

        Ok(self.term_db.intern(Term::Operator { kind, operands })?)
    }

    pub fn make_not(&mut self, term: TermId) -> Result<TermId, err::ErrorKind> {
        self.make_operator(Kind::Not, [term])
    }

    pub fn make_and(
        &mut self,
        terms: impl IntoIterator<Item = TermId>,
    ) -> Result<TermId, err::ErrorKind> {
        self.make_operator(Kind::And, terms)
    }

    pub fn make_or(
        &mut self,
        terms: impl IntoIterator<Item = TermId>,
    ) -> Result<TermId, err::ErrorKind> {
        self.make_operator(Kind::Or, terms)
    }

    pub fn make_implies(
        &mut self,
        antecedent: TermId,
        consequent: TermId,
    ) -> Result<TermId, err::ErrorKind> {
        self.make_operator(Kind::Implies, [antecedent, consequent])
    }

    pub fn make_equiv(&mut self, left: TermId, right: TermId) -> Result<TermId, err::ErrorKind> {
        self.make_operator(Kind::Equiv, [left, right])
    }
}
