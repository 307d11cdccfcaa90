//! Formgate format checkers
//!
//! Pure predicates over a single string value. Every checker returns `false`
//! for malformed input instead of failing, so callers can treat the result as
//! a plain yes/no answer.

pub mod card;
pub mod date;
pub mod email;
pub mod json;
pub mod password;
pub mod phone;
pub mod postal;

// Re-export all checkers
pub use card::*;
pub use date::*;
pub use email::*;
pub use json::*;
pub use password::*;
pub use phone::*;
pub use postal::*;

/// Signature shared by every checker, so a registry can hold them as plain
/// function pointers.
pub type Checker = fn(&str) -> bool;
