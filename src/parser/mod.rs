//! Option parsing
//!
//! This module contains the flag locator, the value coercers, and the
//! schema-driven parse entry point.

pub mod coerce;
pub mod flag;
pub mod schema;

// Re-export main types
pub use coerce::*;
pub use flag::*;
pub use schema::*;
