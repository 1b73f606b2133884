//! Argspan - a minimal composable command-line option parser
//!
//! An option is located by a single-letter flag (`-p`), its value span is
//! the run of tokens up to the next flag, and a coercer turns that span
//! into a typed [`Value`]. A [`Schema`] maps option names to parsers, and
//! [`parse`] applies every entry to the full argument sequence.

// Public modules
pub mod error;
pub mod parser;
pub mod value;

// Re-export commonly used types
pub use error::{ParseError, Result};
pub use parser::coerce::{bool, float, int, list, string, Coerce};
pub use parser::flag::{option, Opt};
pub use parser::schema::{parse, Options, Parser, Schema};
pub use value::Value;

/// Current version of argspan
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
