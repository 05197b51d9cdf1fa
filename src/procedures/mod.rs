//! Procedures on terms, from display to a search for a satisfying assignment.
//!
//! For the most part these are methods accessed via a [TermManager](crate::manager::TermManager) or a [QueryEngine](crate::engine::QueryEngine), and primarily placed here for documentation.
//!
//! Roughly, a query proceeds through:
//! - [validity], which builds the negation of a formula.
//! - [satisfiability], which [normalises](normalise) a formula.
//! - [search], which [evaluates](evaluate) the formula on partial assignments.

pub mod display;
pub mod evaluate;
pub mod normalise;
pub mod satisfiability;
pub mod search;
pub mod validity;
