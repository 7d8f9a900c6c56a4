//! Parse an argument vector once, then answer typed queries against it.
//!
//! Flags look like `-name`, `--name`, `-name=value` or `--name=value`. Both dash
//! styles produce the same key (`-name`). A flag of the form `-noname` also
//! answers for `-name` (as `0`, or as `1` for `-noname=0`) unless `-name` itself
//! was given somewhere on the command line, in which case `-name` always wins.
//!
//! ```
//! use argstore::ArgStore;
//!
//! let args = ArgStore::parse(["-noverbose", "--threads=4", "input.txt"]);
//! assert!(!args.get_bool_arg_or("-verbose", true));
//! assert_eq!(args.get_int_arg("-threads", 1), 4);
//! assert_eq!(args.get_arg("-mode", "fast"), "fast");
//! assert_eq!(args.positionals(), ["input.txt"]);
//! ```
//!
//! Lookups never fail: unknown keys fall back to the caller's default and
//! malformed integers read as `0`. Use [`ArgStore::try_get_int`] when the
//! difference matters.

pub mod coerce;
mod error;
mod shared;
mod store;
pub mod token;

pub use error::{ArgError, ArgResult};
pub use shared::SharedArgs;
pub use store::{ArgStore, ArgsBuilder};
