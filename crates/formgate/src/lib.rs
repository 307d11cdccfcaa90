//! # formgate
//!
//! Rule-driven validation for form submissions.
//!
//! A [`RuleRegistry`] binds each [`RuleId`] to a checker from
//! `formgate-checks` and owns a default [`RuleTable`] (field name ->
//! [`FieldRule`]). A [`Validator`] evaluates an [`InputRecord`] against those
//! defaults, optionally merged with a per-call override table, and collects
//! every failing field into a [`ValidationResult`].
//!
//! ```rust
//! use formgate::{FieldRule, InputRecord, RuleId, RuleTable, Validator};
//!
//! let record = InputRecord::new()
//!     .with("email", "not-an-email")
//!     .with("password", "weak");
//!
//! let result = Validator::builtin().evaluate(&record, None).unwrap();
//! assert!(!result.is_valid());
//! assert_eq!(result.errors().len(), 2);
//!
//! // Make phone mandatory for this call only
//! let overrides = RuleTable::new().with("phone", FieldRule::required(RuleId::Phone));
//! let result = Validator::builtin().evaluate(&record, Some(&overrides)).unwrap();
//! assert_eq!(result.error_for("phone"), Some("Phone is required"));
//! ```

pub mod config;
pub mod error;
pub mod message;
pub mod record;
pub mod registry;
pub mod rule;
pub mod table;
pub mod validator;

pub use config::Config;
pub use error::{ConfigError, InvalidInput, RecordError};
pub use message::{default_message, resolve_message};
pub use record::InputRecord;
pub use registry::RuleRegistry;
pub use rule::{FieldRule, RuleId};
pub use table::RuleTable;
pub use validator::{FieldError, ValidationResult, Validator};

// Checkers are usable on their own
pub use formgate_checks as checks;
