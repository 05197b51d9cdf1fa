/*!
Terms, and the ids by which terms are referred to.

A [Term] is one of:
- A variable, identified by a name and a sort.
- A constant, e.g. boolean *true* or *false*.
- An operator of some [Kind], applied to an ordered sequence of (ids of) terms.

Terms are immutable, and are owned by the [term database](crate::db::term).
As the database stores at most one instance of each term, two ids are equal *if and only if* the terms the ids refer to are (structurally) equal.

Operators only refer to terms which have already been stored, and so the terms form a directed acyclic graph.

# Kinds

| Kind      | Symbol | Operands     |
|-----------|--------|--------------|
| `Not`     | `not`  | exactly 1    |
| `And`     | `and`  | at least 2   |
| `Or`      | `or`   | at least 2   |
| `Implies` | `=>`   | exactly 2    |
| `Equiv`   | `=`    | exactly 2    |

Each operator takes boolean operands to a boolean result.
*/

use super::sort::Sort;

/// The id of a term in the [term database](crate::db::term).
///
/// Ids are issued in strictly increasing order, and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermId(pub(crate) u32);

impl TermId {
    /// The index of the term in the term database.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// The kind of an operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Not,
    And,
    Or,
    Implies,
    Equiv,
}

/// The number of operands an operator requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    /// True if `count` operands satisfy the arity, false otherwise.
    pub fn admits(&self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == *n,
            Self::AtLeast(n) => count >= *n,
        }
    }

    /// A description of the arity, for use in messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Exactly(1) => "exactly 1",
            Self::Exactly(2) => "exactly 2",
            Self::AtLeast(2) => "at least 2",
            _ => "some other number of",
        }
    }
}

impl Kind {
    pub fn arity(&self) -> Arity {
        match self {
            Self::Not => Arity::Exactly(1),
            Self::And | Self::Or => Arity::AtLeast(2),
            Self::Implies | Self::Equiv => Arity::Exactly(2),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::And => "and",
            Self::Or => "or",
            Self::Implies => "=>",
            Self::Equiv => "=",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A term, with operands given as ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Variable { name: String, sort: Sort },

    Constant { value: bool, sort: Sort },

    Operator { kind: Kind, operands: Vec<TermId> },
}

impl Term {
    /// The sort of the term.
    ///
    /// Every operator has a boolean result, so the sort of an operator term is boolean.
    pub fn sort(&self) -> Sort {
        match self {
            Self::Variable { sort, .. } | Self::Constant { sort, .. } => *sort,
            Self::Operator { .. } => Sort::BOOLEAN,
        }
    }

    /// The operands of the term, empty if the term is not an operator.
    pub fn operands(&self) -> &[TermId] {
        match self {
            Self::Operator { operands, .. } => operands,
            _ => &[],
        }
    }

    /// The kind of the term, if the term is an operator.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Self::Operator { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable { .. })
    }
}
