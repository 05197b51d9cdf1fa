/*!
(The internal representation of) a sort.

Each sort is a u32 index to the [sort database](crate::db::sort), which holds the name of the sort.
The sort `0` is fixed as the boolean sort.

```rust
# use otter_valid::structures::sort::Sort;
assert!(Sort::BOOLEAN.is_boolean());
assert_eq!(format!("{}", Sort::BOOLEAN), "Bool");
```
*/

/// The logical type of a term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sort(pub(crate) u32);

impl Sort {
    /// The boolean sort, present in every sort database.
    pub const BOOLEAN: Sort = Sort(0);

    /// The index of the sort in the sort database.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn is_boolean(&self) -> bool {
        *self == Self::BOOLEAN
    }
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.is_boolean() {
            true => write!(f, "Bool"),
            false => write!(f, "Sort{}", self.0),
        }
    }
}
