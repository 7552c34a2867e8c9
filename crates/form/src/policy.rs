//! Per-field rule sets.
//!
//! Each [`FieldPolicy`] is a `passform-validator` chain with the configured
//! message attached to every rule. Chains short-circuit, so the first failing
//! rule decides both the [`FailureKind`](crate::result::FailureKind) and the message.
//!
//! | Field | Rules, in order |
//! |---|---|
//! | email (trimmed) | required, shape, length 5..=50 |
//! | current password | required, optional minimum length |
//! | new password | required, min 6, max 60, differs from a non-empty current password |
//! | confirmation | required, equals new password |

use std::borrow::Cow;
use std::fmt;

use passform_validator::prelude::*;

use crate::config::{
    EMAIL_MAX_LENGTH, EMAIL_MIN_LENGTH, Messages, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH,
    PolicyConfig,
};
use crate::field::FieldId;
use crate::result::ValidationResult;

type Rule = Box<dyn Validate<Input = str> + Send + Sync>;

/// Comparison against the related field's value, built per evaluation.
#[derive(Debug, Clone)]
enum Relation {
    /// Must differ from the related value when that value is non-empty.
    DiffersWhenPresent { message: Cow<'static, str> },
    /// Must equal the related value exactly.
    Equals { message: Cow<'static, str> },
}

/// Rule set for one field.
pub struct FieldPolicy {
    field: FieldId,
    own: Rule,
    relation: Option<Relation>,
}

impl FieldPolicy {
    /// Builds the policy for `field` from `config`.
    #[must_use]
    pub fn for_field(field: FieldId, config: &PolicyConfig) -> Self {
        let m = &config.messages;
        let (own, relation) = match field {
            FieldId::Email => (email_rules(m), None),
            FieldId::CurrentPassword => (
                current_password_rules(m, config.current_password_min_length),
                None,
            ),
            FieldId::NewPassword => (
                new_password_rules(m),
                Some(Relation::DiffersWhenPresent {
                    message: msg(&m.new_password_same_as_current),
                }),
            ),
            FieldId::ConfirmNewPassword => (
                Box::new(not_empty().with_message(msg(&m.confirm_required))) as Rule,
                Some(Relation::Equals {
                    message: msg(&m.confirm_mismatch),
                }),
            ),
        };
        Self {
            field,
            own,
            relation,
        }
    }

    /// The field this policy validates.
    #[must_use]
    pub fn field(&self) -> FieldId {
        self.field
    }

    /// Evaluates `value`, comparing against `related` where the field has a relation.
    ///
    /// A missing `related` value is treated as empty.
    #[must_use]
    pub fn evaluate(&self, value: &str, related: Option<&str>) -> ValidationResult {
        let value = if self.field.trims_input() {
            value.trim()
        } else {
            value
        };
        let related = related.unwrap_or_default();

        let outcome = self.own.validate(value).and_then(|()| match &self.relation {
            None => Ok(()),
            Some(Relation::DiffersWhenPresent { message }) => DiffersFrom::new(related)
                .when(|_: &str| !related.is_empty())
                .with_message(message.clone())
                .validate(value),
            Some(Relation::Equals { message }) => {
                let other_field = self.field.related().map_or("", FieldId::as_str);
                EqualsField::new(other_field, related)
                    .with_message(message.clone())
                    .validate(value)
            }
        });

        ValidationResult::from_outcome(outcome)
    }
}

impl fmt::Debug for FieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldPolicy")
            .field("field", &self.field)
            .field("relation", &self.relation)
            .finish_non_exhaustive()
    }
}

fn msg(text: &str) -> Cow<'static, str> {
    Cow::Owned(text.to_owned())
}

fn email_rules(m: &Messages) -> Rule {
    let length = LengthRange {
        min: EMAIL_MIN_LENGTH,
        max: EMAIL_MAX_LENGTH,
        mode: LengthMode::Chars,
    };
    Box::new(
        not_empty()
            .with_message(msg(&m.email_required))
            .and(email_shape().with_message(msg(&m.email_format)))
            .and(length.with_message(msg(&m.email_length))),
    )
}

fn current_password_rules(m: &Messages, min_length: Option<usize>) -> Rule {
    let required = not_empty().with_message(msg(&m.current_password_required));
    match min_length {
        Some(min) => Box::new(
            required.and(MinLength::new(min).with_message(msg(&m.current_password_too_short))),
        ),
        None => Box::new(required),
    }
}

fn new_password_rules(m: &Messages) -> Rule {
    Box::new(
        not_empty()
            .with_message(msg(&m.new_password_required))
            .and(min_length(PASSWORD_MIN_LENGTH).with_message(msg(&m.new_password_too_short)))
            .and(max_length(PASSWORD_MAX_LENGTH).with_message(msg(&m.new_password_too_long))),
    )
}
