//! Combinators for composing validators
//!
//! - [`And`]: both validators must pass, first failure wins
//! - [`WithMessage`]: replaces the message (and optionally the code) of a failure
//! - [`When`]: runs a validator only when a predicate holds
//!
//! Most callers reach these through [`ValidateExt`](crate::foundation::ValidateExt)
//! rather than constructing them directly.

pub mod and;
pub mod message;
pub mod when;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
pub use when::{When, when};
