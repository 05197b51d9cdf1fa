//! A library for building boolean terms with structural sharing, and for deciding the validity of boolean formulas.
//!
//! otter_valid is a small symbolic reasoning core.
//! Terms are built through a [manager](crate::manager::TermManager), which checks the sort of each term and keeps at most one instance of each term.
//! Queries on terms are made through a [query engine](crate::engine::QueryEngine), which decides whether a formula is valid, invalid, or (on an interrupt) unknown.
//!
//! # Orientation
//!
//! At a high level, a validity query on a formula is a satisfiability query on the negation of the formula, and a satisfiability query is a search over the term graph of the (normalised) formula.
//!
//! Useful starting points, then, may be:
//! - The [databases](crate::db) to inspect how sorts and terms are stored.
//! - The [builder](crate::builder) to see how terms are built and checked.
//! - The [search procedure](crate::procedures::search) to inspect the dynamics of a query.
//! - The [configuration](crate::config) to see what features are supported.
//! - A [session](crate::session), for queries relative to a stack of assertions.
//!
//! # Examples
//!
//! + The law of excluded middle is valid, though a variable is not.
//!
//! ```rust
//! # use otter_valid::engine::QueryEngine;
//! # use otter_valid::manager::TermManager;
//! # use otter_valid::reports::Validity;
//! let mut manager = TermManager::default();
//! let engine = QueryEngine::default();
//!
//! let p = manager.boolean_variable("p").unwrap();
//! assert_eq!(engine.query_validity(&mut manager, p), Ok(Validity::Invalid));
//!
//! let not_p = manager.make_not(p).unwrap();
//! let p_or_not_p = manager.make_or([p, not_p]).unwrap();
//! assert_eq!(engine.query_validity(&mut manager, p_or_not_p), Ok(Validity::Valid));
//! ```
//!
//! + Find (a count of) all satisfying assignments of a formula, by blocking each witness found.
//!
//! ```rust
//! # use otter_valid::reports::Report;
//! # use otter_valid::session::Session;
//! let mut session = Session::default();
//! let atoms = ["a", "b", "c"]
//!     .iter()
//!     .map(|name| session.boolean_variable(name).unwrap())
//!     .collect::<Vec<_>>();
//!
//! let mut count = 0;
//! while session.check_sat() == Ok(Report::Satisfiable) {
//!     count += 1;
//!
//!     let mut blocking = Vec::new();
//!     for atom in &atoms {
//!         let literal = match session.value_of(*atom).unwrap() {
//!             Some(true) => session.manager.make_not(*atom).unwrap(),
//!             _ => *atom,
//!         };
//!         blocking.push(literal);
//!     }
//!     let clause = session.manager.make_or(blocking).unwrap();
//!     session.assert_formula(clause).unwrap();
//! }
//!
//! assert_eq!(count, 8);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with a variety of targets defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of decisions can be filtered with `RUST_LOG=decision …` or,
//! - Reports of queries without details of the search can be found with `RUST_LOG=query=info …`

#![allow(clippy::single_match)]
#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod engine;
pub mod manager;
pub mod reports;
pub mod session;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
