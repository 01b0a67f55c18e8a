//! # valuefmt - display formatting for text and numeric values
//!
//! Turns a value that is either text or a number into a display string:
//! text is uppercased, numbers are rendered in fixed-point notation with
//! two fraction digits. A small record helper extends a person record with
//! a profession.
//!
//! ## Architecture
//!
//! - `value`: the `Value` tagged union and the untyped (JSON/YAML) entry point
//! - `formatter`: uppercase and fixed-point formatting rules
//! - `record`: person records and the profession merge
//! - `samples`: runs configured sample inputs through the formatter
//! - `config`: YAML configuration and validation
//! - `logging`: structured logging and tracing
//! - `error`: error taxonomy
//!
//! ```
//! use valuefmt::{Value, format_value};
//!
//! assert_eq!(format_value(&Value::from("hello")), "HELLO");
//! assert_eq!(format_value(&Value::from(100)), "100.00");
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod record;
pub mod samples;
pub mod value;


// Re-export commonly used types
pub use config::Config;
pub use error::{Result, ValueFmtError};
pub use formatter::{CaseMapping, ValueFormatter, format_value};
pub use record::{Person, Professional, attach_profession};
pub use value::{Value, ValueKind};
