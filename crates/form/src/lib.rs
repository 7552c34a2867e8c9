//! # passform
//!
//! A headless validation engine for a change-password form with four fields:
//! email, current password, new password, and its confirmation.
//!
//! The crate splits into a pure core and a thin adapter layer:
//!
//! - [`FieldPolicy`](policy::FieldPolicy): rule set for one field
//! - [`ValidationEngine`](engine::ValidationEngine): per-field and whole-form
//!   validation, including the new-password → confirmation cascade
//! - [`FormGate`](gate::FormGate): submit-control enablement from non-emptiness alone
//! - [`SubmissionCoordinator`](submit::SubmissionCoordinator): fresh validation at
//!   submit time, then persist + success display + optional delayed redirect
//! - [`FormSession`](session::FormSession): owns the values and translates host
//!   events into core calls and core results into [`FormView`](view::FormView) updates
//!
//! Behavioural variants (message wording, current-password strictness, redirect
//! after success) are [`PolicyConfig`](config::PolicyConfig) values, not code paths.
//!
//! ## Quick Start
//!
//! ```rust
//! use passform::prelude::*;
//!
//! let config = PolicyConfig::strict();
//! let mut engine = ValidationEngine::new(&config);
//! let values = FieldValues::new("a@b.co", "secret1", "secret2", "secret2");
//!
//! assert!(FormGate::compute_enabled(&values));
//! assert!(engine.validate_all(&values).is_all_valid());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod gate;
pub mod logging;
pub mod policy;
pub mod ports;
pub mod prelude;
pub mod result;
pub mod session;
pub mod submit;
pub mod view;
