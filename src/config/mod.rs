/*!
Configuration of a [query engine](crate::engine::QueryEngine).

All configuration for a search is contained within a [Config].
Each option is a [ConfigOption], which pairs a value with the bounds within which the value may be [set](ConfigOption::set).

```rust
# use otter_valid::config::Config;
let mut config = Config::default();
assert!(config.parallel_depth.set(2).is_ok());
assert!(config.parallel_depth.set(64).is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

use std::time::Duration;

/// The largest number of levels whose branches may be explored in parallel.
pub const PARALLEL_DEPTH_MAX: u32 = 8;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum number of decisions made during a single search, with zero for no limit.
    pub decision_limit: ConfigOption<usize>,

    /// Memoise the value of subterms on the current assignment.
    pub memoize: ConfigOption<bool>,

    /// The number of levels of decisions whose branches are explored in parallel, with zero for a sequential search.
    pub parallel_depth: ConfigOption<u32>,

    /// Permit unit propagation.
    pub propagation: ConfigOption<bool>,

    /// The time limit for a single search, with zero for no limit.
    pub time_limit: ConfigOption<Duration>,
}

impl Default for Config {
    /// The default configuration is a sequential, unlimited, search with propagation and memoisation.
    fn default() -> Self {
        Config {
            decision_limit: ConfigOption {
                name: "decision_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            memoize: ConfigOption {
                name: "memoize",
                min: false,
                max: true,
                value: true,
            },

            parallel_depth: ConfigOption {
                name: "parallel_depth",
                min: 0,
                max: PARALLEL_DEPTH_MAX,
                value: 0,
            },

            propagation: ConfigOption {
                name: "propagation",
                min: false,
                max: true,
                value: true,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },
        }
    }
}

impl Config {
    /// The decision limit, if any.
    pub fn decision_limit(&self) -> Option<usize> {
        match self.decision_limit.value {
            0 => None,
            limit => Some(limit),
        }
    }

    /// The time limit, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }
}
