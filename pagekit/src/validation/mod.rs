//! Field validation rules.
//!
//! A field's rules live in an ordered [`Rules`] list. Checking a value walks
//! the list and stops at the first rule that fails, producing a
//! [`FieldResult`] with that rule's message.
//!
//! # Example
//!
//! ```
//! use pagekit::validation::Rules;
//!
//! let email = Rules::<str>::new()
//!     .required("Email is required")
//!     .pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", "Please enter a valid email");
//!
//! assert!(email.check("a@b.com").is_valid());
//! assert_eq!(email.check("nope").message(), Some("Please enter a valid email"));
//! ```

mod result;
mod rules;

pub use result::{FieldError, FieldResult};
pub use rules::Rules;
