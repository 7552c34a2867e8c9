//! Field identifiers and the raw values the user has typed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four user-editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Email,
    CurrentPassword,
    NewPassword,
    ConfirmNewPassword,
}

impl FieldId {
    /// Every field, in form order.
    pub const ALL: [FieldId; 4] = [
        FieldId::Email,
        FieldId::CurrentPassword,
        FieldId::NewPassword,
        FieldId::ConfirmNewPassword,
    ];

    /// Stable snake_case name, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldId::Email => "email",
            FieldId::CurrentPassword => "current_password",
            FieldId::NewPassword => "new_password",
            FieldId::ConfirmNewPassword => "confirm_new_password",
        }
    }

    /// Position in [`FieldId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The sibling field whose value this field's policy compares against.
    #[must_use]
    pub const fn related(self) -> Option<FieldId> {
        match self {
            FieldId::NewPassword => Some(FieldId::CurrentPassword),
            FieldId::ConfirmNewPassword => Some(FieldId::NewPassword),
            FieldId::Email | FieldId::CurrentPassword => None,
        }
    }

    /// The field re-validated after this one validates successfully.
    ///
    /// Only new-password cascades; editing the current password does not
    /// re-check the new password's "same as current" rule.
    #[must_use]
    pub const fn cascades_to(self) -> Option<FieldId> {
        match self {
            FieldId::NewPassword => Some(FieldId::ConfirmNewPassword),
            _ => None,
        }
    }

    /// Whether every keystroke validates this field.
    #[must_use]
    pub const fn validates_on_input(self) -> bool {
        matches!(self, FieldId::NewPassword | FieldId::ConfirmNewPassword)
    }

    /// Whether leaving this field validates it.
    #[must_use]
    pub const fn validates_on_blur(self) -> bool {
        matches!(self, FieldId::Email | FieldId::CurrentPassword)
    }

    /// Whether surrounding whitespace is stripped before validation and persistence.
    #[must_use]
    pub const fn trims_input(self) -> bool {
        matches!(self, FieldId::Email)
    }

    /// Whether the value is a secret and must stay out of logs.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        !matches!(self, FieldId::Email)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current raw text of each field.
///
/// Values are stored exactly as typed; trimming happens at validation time.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: [String; 4],
}

impl FieldValues {
    /// Creates a value set in form order.
    pub fn new(
        email: impl Into<String>,
        current_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_new_password: impl Into<String>,
    ) -> Self {
        Self {
            values: [
                email.into(),
                current_password.into(),
                new_password.into(),
                confirm_new_password.into(),
            ],
        }
    }

    /// Raw value of `field`.
    #[must_use]
    pub fn get(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    /// Replaces the raw value of `field`.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Iterates `(field, raw value)` in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        FieldId::ALL.into_iter().map(|id| (id, self.get(id)))
    }
}

// Password values are redacted; only their length is shown.
impl fmt::Debug for FieldValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (id, value) in self.iter() {
            if id.is_secret() {
                map.entry(&id.as_str(), &format_args!("<{} chars>", value.chars().count()));
            } else {
                map.entry(&id.as_str(), &value);
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, id) in FieldId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for id in FieldId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_only_new_password_cascades() {
        let cascading: Vec<FieldId> = FieldId::ALL
            .into_iter()
            .filter(|id| id.cascades_to().is_some())
            .collect();
        assert_eq!(cascading, vec![FieldId::NewPassword]);
    }

    #[test]
    fn test_set_and_get() {
        let values = FieldValues::default().with(FieldId::NewPassword, "alpha12");
        assert_eq!(values.get(FieldId::NewPassword), "alpha12");
        assert_eq!(values.get(FieldId::Email), "");
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let values = FieldValues::new("a@b.co", "secret1", "secret2", "secret2");
        let rendered = format!("{values:?}");
        assert!(rendered.contains("a@b.co"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<7 chars>"));
    }
}
