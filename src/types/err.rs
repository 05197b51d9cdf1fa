//! Error types used in the library.
//!
//! - Type errors are raised when building a term, and are always the result of a request to build an ill-sorted term.
//!   Nothing is built in this case, and the managing structures are left as they were.
//! - Errors from the term and sort databases are raised when a handle given to a database was not issued by that database, or when identifiers are exhausted.
//! - Session errors are raised on requests which do not fit the current state of a [session](crate::session).
//!
//! Exhausting some resource during a search is *not* an error.
//! Instead, a search reports that satisfiability is unknown, together with the relevant [interrupt](crate::reports::Interrupt).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{sort::Sort, term::Kind, term::TermId};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Session(SessionError),
    SortDB(SortDBError),
    TermDB(TermDBError),
    Type(TypeError),
}

/// Errors from setting a configuration option.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value is outside the bounds of the option with the given name.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Requests which do not fit the state of a session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionError {
    /// A push was requested while a level is open.
    /// Sessions support a single level.
    PushDepth,

    /// A pop was requested while no level is open.
    NoLevel,

    /// A value was requested, though the most recent check was not satisfiable (or there has been no check).
    NoModel,
}

impl From<SessionError> for ErrorKind {
    fn from(e: SessionError) -> Self {
        ErrorKind::Session(e)
    }
}

/// Errors in the sort database.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SortDBError {
    /// A sort with the given name already exists.
    Duplicate(String),

    /// There are no more fresh sorts.
    SortsExhausted,
}

impl From<SortDBError> for ErrorKind {
    fn from(e: SortDBError) -> Self {
        ErrorKind::SortDB(e)
    }
}

/// Errors in the term database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TermDBError {
    /// The id was not issued by the database.
    UnknownTerm(TermId),

    /// All possible ids have been issued.
    TermsExhausted,
}

impl From<TermDBError> for ErrorKind {
    fn from(e: TermDBError) -> Self {
        ErrorKind::TermDB(e)
    }
}

/// Noted errors when checking the sorts of a term.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypeError {
    /// An operator was given an unsupported number of operands.
    Arity {
        kind: Kind,
        expected: &'static str,
        found: usize,
    },

    /// The operand at `position` of an operator has a sort other than boolean.
    NonBoolean {
        kind: Kind,
        position: usize,
        sort: Sort,
    },

    /// A constant was requested of a sort without constants.
    ConstantSort(Sort),

    /// A query was made on a term whose sort is not boolean.
    QuerySort(Sort),

    /// The sort is not part of the sort database.
    UnknownSort(Sort),
}

impl From<TypeError> for ErrorKind {
    fn from(e: TypeError) -> Self {
        ErrorKind::Type(e)
    }
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arity {
                kind,
                expected,
                found,
            } => write!(f, "{kind} expects {expected} operands, found {found}"),

            Self::NonBoolean {
                kind,
                position,
                sort,
            } => write!(f, "operand {position} of {kind} has sort {sort}, not Bool"),

            Self::ConstantSort(sort) => write!(f, "no constants of sort {sort}"),

            Self::QuerySort(sort) => write!(f, "queries require a Bool term, found {sort}"),

            Self::UnknownSort(sort) => write!(f, "unknown sort {sort}"),
        }
    }
}
