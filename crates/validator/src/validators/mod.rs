//! Built-in validators
//!
//! # Categories
//!
//! - **Length**: required-ness and character-count bounds
//! - **Content**: format checks (email shape)
//! - **Equality**: rules that compare a value against a sibling field
//!
//! # Examples
//!
//! ```rust
//! use passform_validator::prelude::*;
//!
//! let email = not_empty().and(email_shape());
//! assert!(email.validate("user@example.com").is_ok());
//!
//! let new_password = "secret2";
//! assert!(EqualsField::new("new_password", new_password).validate("secret2").is_ok());
//! ```

pub mod content;
pub mod equality;
pub mod length;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use length::{
    LengthMode, LengthRange, MaxLength, MinLength, NotEmpty, length_range, max_length, min_length,
    not_empty,
};

pub use content::{EmailShape, email_shape};

pub use equality::{DiffersFrom, EqualsField};
