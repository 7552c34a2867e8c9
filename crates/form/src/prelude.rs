//! Prelude module for convenient imports.
//!
//! ```rust
//! use passform::prelude::*;
//! ```

pub use crate::config::{PolicyConfig, PolicyPreset, SuccessAction};
pub use crate::engine::ValidationEngine;
pub use crate::error::{ConfigError, SessionError, StoreError};
pub use crate::field::{FieldId, FieldValues};
pub use crate::gate::FormGate;
pub use crate::policy::FieldPolicy;
pub use crate::ports::{
    JsonFileStore, KeyValueStore, LogNavigator, MemoryStore, Navigator, RedirectHandle,
    RedirectScheduler, TokioScheduler, UnavailableStore,
};
pub use crate::result::{FailureKind, FormValidityState, ValidationResult};
pub use crate::session::{FormEvent, FormSession};
pub use crate::submit::{Acceptance, SubmissionCoordinator, SubmissionOutcome};
pub use crate::view::{FormView, RecordingView, ViewCommand};
