#![cfg_attr(not(feature = "std"), no_std)]
//! Derive a new URL from an existing one by applying a declarative set of
//! `remove` / `set` / `toggle` actions to its query string.
//!
//! ```
//! use qsm::{ActionSet, qsm};
//!
//! let url = "https://www.google.cz/search?q=hello+world&num=20&tbm=isch";
//! let next = qsm(url, &ActionSet::new().toggle("tbm", "isch").set("num", 40));
//! assert_eq!(next.as_deref(), Some("https://www.google.cz/search?q=hello+world&num=40"));
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod action;
mod error;
mod manipulator;
mod param;
mod parser;
mod percent_encode;
mod resolver;
mod serializer;
#[cfg(feature = "serde")]
mod wire;

// Public API
pub use action::{
    ActionSet, ParamAction, SetValue, URL_REMOVE, URL_SET, URL_TOGGLE, UnknownAction, Value,
};
pub use error::{Error, Result};
#[cfg(feature = "serde")]
pub use manipulator::qsm_value;
pub use manipulator::{qsm, try_qsm};
pub use param::Param;
pub use parser::{get_url_params, split_url};
pub use resolver::resolve_url_params;
pub use serializer::construct_url_params;
