/*!
A database of sorts, which also checks the sorts of terms as they are built.

The database always contains the [boolean](Sort::BOOLEAN) sort.
Further (uninterpreted) sorts may be added with [fresh_sort](SortDB::fresh_sort).
Variables may be of any sort in the database, though constants and operators are boolean only.

# Checks

- [check_operator](SortDB::check_operator) returns the sort of an operator applied to operands of the given sorts, or a [TypeError] if:
  + The count of operands does not fit the [arity](crate::structures::term::Arity) of the operator.
  + Some operand is not boolean.
- [check_constant](SortDB::check_constant) returns a [TypeError] for any sort without constants.

```rust
# use otter_valid::db::sort::SortDB;
# use otter_valid::structures::{sort::Sort, term::Kind};
let mut sort_db = SortDB::default();
let u = sort_db.fresh_sort("U").unwrap();

assert_eq!(sort_db.check_operator(Kind::And, &[Sort::BOOLEAN, Sort::BOOLEAN]), Ok(Sort::BOOLEAN));
assert!(sort_db.check_operator(Kind::And, &[Sort::BOOLEAN]).is_err());
assert!(sort_db.check_operator(Kind::Or, &[Sort::BOOLEAN, u]).is_err());
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{sort::Sort, term::Kind},
    types::err::{SortDBError, TypeError},
};

/// The sort database.
pub struct SortDB {
    /// The name of each sort, indexed by sort.
    names: Vec<String>,

    /// A map from names to sorts.
    index: HashMap<String, Sort>,
}

impl Default for SortDB {
    fn default() -> Self {
        let mut db = SortDB {
            names: Vec::default(),
            index: HashMap::default(),
        };
        db.names.push("Bool".to_string());
        db.index.insert("Bool".to_string(), Sort::BOOLEAN);
        db
    }
}

impl SortDB {
    /// A fresh sort with the given name.
    pub fn fresh_sort(&mut self, name: &str) -> Result<Sort, SortDBError> {
        if self.index.contains_key(name) {
            return Err(SortDBError::Duplicate(name.to_string()));
        }

        let sort = match self.names.len().try_into() {
            Ok(index) => Sort(index),
            Err(_) => return Err(SortDBError::SortsExhausted),
        };

        self.names.push(name.to_string());
        self.index.insert(name.to_string(), sort);
        log::debug!(target: targets::SORT_DB, "Fresh sort {name} as {sort}");

        Ok(sort)
    }

    /// The sort with the given name, if it exists.
    pub fn sort_named(&self, name: &str) -> Option<Sort> {
        self.index.get(name).copied()
    }

    /// The name of `sort`, if `sort` is part of the database.
    pub fn name_of(&self, sort: Sort) -> Option<&str> {
        self.names.get(sort.index()).map(|name| name.as_str())
    }

    pub fn contains(&self, sort: Sort) -> bool {
        sort.index() < self.names.len()
    }

    /// A count of sorts in the database (including the boolean sort).
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Ok if `sort` is part of the database.
    pub fn check_sort(&self, sort: Sort) -> Result<(), TypeError> {
        match self.contains(sort) {
            true => Ok(()),
            false => Err(TypeError::UnknownSort(sort)),
        }
    }

    /// The sort of a constant of `sort`, if such constants exist.
    pub fn check_constant(&self, sort: Sort) -> Result<Sort, TypeError> {
        self.check_sort(sort)?;
        match sort.is_boolean() {
            true => Ok(sort),
            false => Err(TypeError::ConstantSort(sort)),
        }
    }

    /// The sort of an operator of `kind` applied to operands of the given sorts, if the application is well sorted.
    pub fn check_operator(&self, kind: Kind, operand_sorts: &[Sort]) -> Result<Sort, TypeError> {
        let arity = kind.arity();
        if !arity.admits(operand_sorts.len()) {
            return Err(TypeError::Arity {
                kind,
                expected: arity.describe(),
                found: operand_sorts.len(),
            });
        }

        for (position, sort) in operand_sorts.iter().enumerate() {
            self.check_sort(*sort)?;
            if !sort.is_boolean() {
                return Err(TypeError::NonBoolean {
                    kind,
                    position,
                    sort: *sort,
                });
            }
        }

        Ok(Sort::BOOLEAN)
    }
}
