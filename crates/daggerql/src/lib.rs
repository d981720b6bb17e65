extern crate self as daggerql;

mod logging;
mod serve;

pub use daggerql_core::*;
pub use logging::setup_logger;
pub use serve::serve;

/// Re-exported for generated bindings and `#[derive]`s that name
/// `daggerql::serde` as their serde crate.
pub use serde;

/// Compile-time helpers for exposing Rust types as module functions
/// (see [`object`](crate::macros::object)).
#[cfg(feature = "macros")]
pub mod macros {
    pub use daggerql_macros::*;
}
