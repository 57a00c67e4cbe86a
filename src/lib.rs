//! String, byte, and URL utilities built around wildcard pattern matching.
//!
//! The algorithmic core lives in the [`wildmatch`] crate and is re-exported
//! here as [`Pattern`] and [`Wildcards`]; the remaining modules are small,
//! independent helpers with no coupling to the matcher's state.

// public modules
pub mod bytes;
pub mod convert;
pub mod count;
pub mod error;
pub mod hash;
pub mod manipulate;
pub mod path;
pub mod query;
pub mod validate;

// public uses
pub use bytes::Endianness;
pub use convert::Encoding;
pub use error::{Error, Result};
pub use path::Accessor;
pub use validate::CaseMatching;
pub use wildmatch::{Pattern, Wildcards};
