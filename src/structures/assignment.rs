/*!
A (partial) function from variables to truth values.

Assignments are keyed by the [id](crate::structures::term::TermId) of a variable.
No check is made that a key is the id of a variable, though assignments returned by the library only ever assign values to variables.

Variables without a value are 'don't care' variables.
For example, any witness returned by a [search](crate::procedures::search) makes the formula searched true regardless of the value given to any variable without a value.

```rust
# use otter_valid::manager::TermManager;
# use otter_valid::structures::assignment::Assignment;
let mut manager = TermManager::default();
let p = manager.boolean_variable("p").unwrap();
let q = manager.boolean_variable("q").unwrap();

let mut assignment = Assignment::default();
assignment.set(p, false);

assert_eq!(assignment.value_of(p), Some(false));
assert_eq!(assignment.value_of(q), None);
```
*/

use std::collections::BTreeMap;

use super::term::TermId;

/// A partial function from variables to truth values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    values: BTreeMap<TermId, bool>,
}

impl Assignment {
    /// The value of `variable`, if any.
    pub fn value_of(&self, variable: TermId) -> Option<bool> {
        self.values.get(&variable).copied()
    }

    /// Sets the value of `variable`, returning the previous value, if any.
    pub fn set(&mut self, variable: TermId, value: bool) -> Option<bool> {
        self.values.insert(variable, value)
    }

    /// Removes the value of `variable`, returning the previous value, if any.
    pub fn clear(&mut self, variable: TermId) -> Option<bool> {
        self.values.remove(&variable)
    }

    /// An iterator over (variable, value) pairs, in order of variable id.
    pub fn iter(&self) -> impl Iterator<Item = (TermId, bool)> + '_ {
        self.values.iter().map(|(variable, value)| (*variable, *value))
    }

    /// A count of the variables with a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(TermId, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (TermId, bool)>>(iter: I) -> Self {
        Assignment {
            values: iter.into_iter().collect(),
        }
    }
}
