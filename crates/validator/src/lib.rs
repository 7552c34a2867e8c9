//! # passform-validator
//!
//! Small, composable string validation rules used by the passform
//! change-password engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use passform_validator::prelude::*;
//!
//! // Compose validators with .and() and attach a user-facing message
//! let password = min_length(6)
//!     .and(max_length(60))
//!     .with_message("Password must be 6 to 60 characters.");
//! assert!(password.validate("secret1").is_ok());
//! assert!(password.validate("abc").is_err());
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for rules that
//! borrow data, such as the cross-field [`EqualsField`](validators::EqualsField).
//!
//! ## Built-in Validators
//!
//! - **Length**: [`NotEmpty`](validators::NotEmpty), [`MinLength`](validators::MinLength),
//!   [`MaxLength`](validators::MaxLength), [`LengthRange`](validators::LengthRange)
//! - **Content**: [`EmailShape`](validators::EmailShape)
//! - **Cross-field**: [`EqualsField`](validators::EqualsField),
//!   [`DiffersFrom`](validators::DiffersFrom)

// ValidationError is the fundamental error type for all validators; boxing it
// would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
