/*!
The query engine --- with which satisfiability and validity queries are made.

A [QueryEngine] holds a [configuration](crate::config) and a handle to cancel queries, and nothing else.
In particular, an engine holds no terms and keeps nothing from one query to the next.
Instead, each query borrows the [TermManager](crate::manager::TermManager) which holds the terms of the query.

For the queries, see:
- [check_sat](QueryEngine::check_sat) in [procedures::satisfiability](crate::procedures::satisfiability).
- [query_validity](QueryEngine::query_validity) in [procedures::validity](crate::procedures::validity).

# Cancellation

The [cancel handle](QueryEngine::cancel_handle) of an engine is a shared flag.
Once the flag is set any search by the engine stops at the next node of the search with an [Interrupt::Cancelled](crate::reports::Interrupt::Cancelled) report, and this continues until the flag is [reset](QueryEngine::reset_cancel).

```rust
# use otter_valid::engine::QueryEngine;
# use otter_valid::manager::TermManager;
# use otter_valid::reports::{Interrupt, Report};
# use std::sync::atomic::Ordering;
let mut manager = TermManager::default();
let engine = QueryEngine::default();

let p = manager.boolean_variable("p").unwrap();
let q = manager.boolean_variable("q").unwrap();
let p_or_q = manager.make_or([p, q]).unwrap();

engine.cancel_handle().store(true, Ordering::Relaxed);
let solution = engine.check_sat(&mut manager, p_or_q).unwrap();
assert_eq!(solution.report, Report::Unknown);
assert_eq!(solution.interrupt, Some(Interrupt::Cancelled));

engine.reset_cancel();
let solution = engine.check_sat(&mut manager, p_or_q).unwrap();
assert_eq!(solution.report, Report::Satisfiable);
```
*/

mod counters;
pub use counters::Counters;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::config::Config;

/// An engine for satisfiability and validity queries.
pub struct QueryEngine {
    /// The configuration of the engine.
    pub config: Config,

    /// Stops searches, if true.
    cancel: Arc<AtomicBool>,
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl QueryEngine {
    /// Creates an engine from some given configuration.
    pub fn from_config(config: Config) -> Self {
        QueryEngine {
            config,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A handle to the cancellation flag of the engine, which may be set from any thread.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    /// Clears the cancellation flag of the engine.
    pub fn reset_cancel(&self) {
        self.cancel.store(false, Ordering::Relaxed);
    }

    pub(crate) fn cancel_flag(&self) -> &Arc<AtomicBool> {
        &self.cancel
    }
}
