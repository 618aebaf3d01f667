//! Built-in function libraries
//!
//! Each library is a plain `FunctionTable` value. Hosts combine them with
//! [`FunctionTable::merge`] and register their own functions next to them.

pub mod fuzzy;
pub mod logic;

pub use fuzzy::fuzzy_logic;
pub use logic::standard_logic;

use crate::FunctionTable;

/// Standard logic and fuzzy logic together
pub fn standard() -> FunctionTable {
    standard_logic().merge(fuzzy_logic())
}
