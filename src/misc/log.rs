/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, each with a target from [targets].
For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) logs of unit propagation alone may be had with `RUST_LOG=propagation=trace …`.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [term database](crate::db::term)
    pub const TERM_DB: &str = "term_db";

    /// Logs related to the [sort database](crate::db::sort)
    pub const SORT_DB: &str = "sort_db";

    /// Logs related to the [builder](crate::builder)
    pub const BUILDER: &str = "builder";

    /// Logs related to [normalisation](crate::procedures::normalise)
    pub const NORMALISE: &str = "normalise";

    /// Logs related to unit propagation during a [search](crate::procedures::search)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to decisions, and backtracking from decisions, during a [search](crate::procedures::search)
    pub const DECISION: &str = "decision";

    /// Logs related to [queries](crate::procedures::validity)
    pub const QUERY: &str = "query";

    /// Logs related to a [session](crate::session)
    pub const SESSION: &str = "session";
}
