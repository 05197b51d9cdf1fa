//! Key structures, such as sorts, terms, and assignments.
//!
//! # Terms
//!
//! A term is a node in a directed acyclic graph, whose leaves are variables and constants and whose inner nodes are operators over some ordered sequence of terms.
//! Terms are stored in the [term database](crate::db::term), and outside of the database a term is referred to by the [TermId](term::TermId) issued to the term by the database.
//!
//! ## Formulas
//!
//! A formula is a term of [boolean](sort::Sort::BOOLEAN) sort.
//!
//! - A formula is *satisfiable* if the formula is true on some assignment to the variables of the formula.
//! - A formula is *valid* if the formula is true on every assignment to the variables of the formula.
//!
//! And, a formula is valid *if and only if* the negation of the formula is not satisfiable.
//!
//! # Assignments
//!
//! An [assignment](assignment::Assignment) is a partial function from variables to (boolean) values.

pub mod assignment;
pub mod sort;
pub mod term;
