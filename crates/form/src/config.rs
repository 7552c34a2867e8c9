//! Policy configuration.
//!
//! A [`PolicyConfig`] captures everything that differs between deployments of
//! the form: message wording, whether the current password has a minimum
//! length, what happens after a successful submission, and the storage key.
//! The length bounds of email and new password are fixed constants.
//!
//! # Loading
//!
//! ```rust
//! use passform::config::{PolicyConfig, SuccessAction};
//!
//! let config = PolicyConfig::from_json_str(
//!     r#"{ "on_success": { "kind": "redirect", "url": "login.html" } }"#,
//! )
//! .unwrap();
//! assert_eq!(config.current_password_min_length, Some(6)); // strict default
//! assert!(matches!(config.on_success, SuccessAction::Redirect { .. }));
//! ```

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Inclusive character bounds for the trimmed email.
pub const EMAIL_MIN_LENGTH: usize = 5;
/// See [`EMAIL_MIN_LENGTH`].
pub const EMAIL_MAX_LENGTH: usize = 50;

/// Inclusive character bounds for the new password.
pub const PASSWORD_MIN_LENGTH: usize = 6;
/// See [`PASSWORD_MIN_LENGTH`].
pub const PASSWORD_MAX_LENGTH: usize = 60;

/// Delay between an accepted submission and the redirect, when one is configured.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Key the trimmed email is persisted under by default.
pub const DEFAULT_STORAGE_KEY: &str = "userEmail";

/// Environment variable naming a JSON policy file.
pub const POLICY_FILE_ENV: &str = "PASSFORM_POLICY_FILE";
/// Environment variable naming a built-in preset.
pub const POLICY_PRESET_ENV: &str = "PASSFORM_POLICY";

// ============================================================================
// MESSAGES
// ============================================================================

/// One user-facing message per failure of every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub email_required: String,
    pub email_format: String,
    pub email_length: String,
    pub current_password_required: String,
    pub current_password_too_short: String,
    pub new_password_required: String,
    pub new_password_too_short: String,
    pub new_password_too_long: String,
    pub new_password_same_as_current: String,
    pub confirm_required: String,
    pub confirm_mismatch: String,
}

impl Messages {
    /// Wording of the strict variant.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            email_required: "Email is required.".into(),
            email_format: "Please enter a valid email address.".into(),
            email_length: "Email must be between 5 and 50 characters.".into(),
            current_password_required: "Current password is required.".into(),
            current_password_too_short: "Password must be at least 6 characters long.".into(),
            new_password_required: "New password is required.".into(),
            new_password_too_short: "Password must be at least 6 characters long.".into(),
            new_password_too_long: "Password must be less than 60 characters.".into(),
            new_password_same_as_current: "New password must be different from current password."
                .into(),
            confirm_required: "Please confirm your new password.".into(),
            confirm_mismatch: "Passwords do not match.".into(),
        }
    }

    /// Wording of the lenient variant.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            email_required: "Please enter your email address.".into(),
            email_format: "That doesn't look like an email address.".into(),
            email_length: "Email address must be 5 to 50 characters.".into(),
            current_password_required: "Please enter your current password.".into(),
            current_password_too_short: "Current password is too short.".into(),
            new_password_required: "Please choose a new password.".into(),
            new_password_too_short: "New password needs at least 6 characters.".into(),
            new_password_too_long: "New password can have at most 60 characters.".into(),
            new_password_same_as_current: "Pick a password you haven't used here before.".into(),
            confirm_required: "Please type your new password again.".into(),
            confirm_mismatch: "The two new passwords don't match.".into(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::strict()
    }
}

// ============================================================================
// SUCCESS ACTION
// ============================================================================

/// What the form does after an accepted submission, beyond showing the success state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuccessAction {
    /// Show the success panel and stay there.
    #[default]
    ShowMessage,
    /// Show the success panel, then navigate to `url` after [`REDIRECT_DELAY`].
    Redirect { url: String },
}

// ============================================================================
// POLICY CONFIG
// ============================================================================

/// Configuration distinguishing the behavioural variants of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Message text for every failure.
    pub messages: Messages,
    /// Minimum length of the current password, if enforced.
    pub current_password_min_length: Option<usize>,
    /// Post-success behaviour.
    pub on_success: SuccessAction,
    /// Key the trimmed email is persisted under.
    pub storage_key: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl PolicyConfig {
    /// Current password must be at least 6 characters; success shows a message.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            messages: Messages::strict(),
            current_password_min_length: Some(PASSWORD_MIN_LENGTH),
            on_success: SuccessAction::ShowMessage,
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }

    /// Any non-empty current password is accepted; success redirects to the login page.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            messages: Messages::lenient(),
            current_password_min_length: None,
            on_success: SuccessAction::Redirect {
                url: "login.html".to_owned(),
            },
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }

    /// Replaces the post-success behaviour with a redirect to `url`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_redirect(mut self, url: impl Into<String>) -> Self {
        self.on_success = SuccessAction::Redirect { url: url.into() };
        self
    }

    /// Removes any redirect; success only shows the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn without_redirect(mut self) -> Self {
        self.on_success = SuccessAction::ShowMessage;
        self
    }

    /// Sets the storage key.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// The redirect target, if this policy redirects after success.
    #[must_use]
    pub fn redirect_url(&self) -> Option<&str> {
        match &self.on_success {
            SuccessAction::Redirect { url } => Some(url),
            SuccessAction::ShowMessage => None,
        }
    }

    /// Checks the constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".into()));
        }
        if let Some(url) = self.redirect_url()
            && url.trim().is_empty()
        {
            return Err(ConfigError::Invalid("redirect url must not be empty".into()));
        }
        if let Some(min) = self.current_password_min_length
            && min > PASSWORD_MAX_LENGTH
        {
            return Err(ConfigError::Invalid(format!(
                "current_password_min_length {min} exceeds the password maximum of {PASSWORD_MAX_LENGTH}"
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON policy. Missing keys take strict defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON policy file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Loads the policy named by the process environment.
    ///
    /// `PASSFORM_POLICY_FILE` wins over `PASSFORM_POLICY`; with neither set the
    /// strict preset is used.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// [`from_env`](Self::from_env) with an injectable variable lookup.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(POLICY_FILE_ENV).filter(|p| !p.is_empty()) {
            tracing::debug!(path = %path, "loading policy file");
            return Self::from_path(path);
        }
        match lookup(POLICY_PRESET_ENV).filter(|p| !p.is_empty()) {
            Some(name) => Ok(name.parse::<PolicyPreset>()?.config()),
            None => Ok(Self::strict()),
        }
    }
}

// ============================================================================
// PRESETS
// ============================================================================

/// Named built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyPreset {
    Strict,
    Lenient,
}

impl PolicyPreset {
    /// Builds the preset's configuration.
    #[must_use]
    pub fn config(self) -> PolicyConfig {
        match self {
            PolicyPreset::Strict => PolicyConfig::strict(),
            PolicyPreset::Lenient => PolicyConfig::lenient(),
        }
    }
}

impl FromStr for PolicyPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(PolicyPreset::Strict),
            "lenient" => Ok(PolicyPreset::Lenient),
            _ => Err(ConfigError::UnknownPreset(s.to_owned())),
        }
    }
}
