/*!
The owner of all sorts and terms.

A [TermManager] owns a [sort database](crate::db::sort) and a [term database](crate::db::term).
Terms are built through methods on the manager (see the [builder](crate::builder)), and are referred to by the [TermId]s the manager returns.
A term lives as long as the manager which built it, and ids from one manager mean nothing to another.

Queries are made by a [query engine](crate::engine::QueryEngine), which borrows a manager for the duration of a query.
As a query may build (the negation of) a term, queries borrow the manager mutably, though any search borrows the term database immutably.

# Example

```rust
# use otter_valid::manager::TermManager;
# use otter_valid::structures::sort::Sort;
let mut manager = TermManager::default();
let p = manager.boolean_variable("p").unwrap();
let not_p = manager.make_not(p).unwrap();

assert_eq!(manager.sort_of(not_p), Ok(Sort::BOOLEAN));
assert_eq!(manager.display(not_p).to_string(), "(not p)");
```
*/

use crate::{
    db::{sort::SortDB, term::TermDB},
    procedures::display::TermDisplay,
    structures::{
        sort::Sort,
        term::{Term, TermId},
    },
    types::err::{self},
};

/// The owner of a sort database and a term database.
#[derive(Default)]
pub struct TermManager {
    /// The sort database.
    /// See [db::sort](crate::db::sort) for details.
    pub sort_db: SortDB,

    /// The term database.
    /// See [db::term](crate::db::term) for details.
    pub term_db: TermDB,
}

impl TermManager {
    /// The sort of a term.
    pub fn sort_of(&self, term: TermId) -> Result<Sort, err::ErrorKind> {
        Ok(self.term_db.sort_of(term)?)
    }

    /// The term with the given id.
    pub fn get(&self, term: TermId) -> Result<&Term, err::ErrorKind> {
        Ok(self.term_db.get(term)?)
    }

    /// A fresh (uninterpreted) sort with the given name.
    pub fn fresh_sort(&mut self, name: &str) -> Result<Sort, err::ErrorKind> {
        Ok(self.sort_db.fresh_sort(name)?)
    }

    /// The variables of a term, in order of first occurrence on a pre-order traversal.
    pub fn variables(&self, term: TermId) -> Result<Vec<TermId>, err::ErrorKind> {
        Ok(self.term_db.variables(term)?)
    }

    /// Something to display a term, in prefix notation.
    pub fn display(&self, term: TermId) -> TermDisplay<'_> {
        TermDisplay::new(&self.term_db, term)
    }
}
