//! Per-form input, status message, and submission outcome types.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::time::Duration;

use crate::util::copy;

/// Register form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

/// Local validation failures. No request is sent when one occurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{}", copy::REGISTER_FIELDS_REQUIRED)]
    MissingRegisterFields,
    #[error("{}", copy::LOGIN_FIELDS_REQUIRED)]
    MissingLoginFields,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageTone {
    #[default]
    Neutral,
    Error,
    Success,
}

/// Inline status line under a form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub tone: MessageTone,
}

impl FormMessage {
    pub fn neutral(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: MessageTone::Neutral,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: MessageTone::Error,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: MessageTone::Success,
        }
    }

    /// CSS classes for the message element.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.tone {
            MessageTone::Neutral => "form-message",
            MessageTone::Error => "form-message error",
            MessageTone::Success => "form-message success",
        }
    }
}

/// In-flight guard for one form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmitPhase {
    #[must_use]
    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }
}

/// Result of one register submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    Invalid(FormError),
    /// Account created. The page switches to login after `switch_after`.
    Registered {
        message: String,
        switch_after: Duration,
    },
    /// Server said no; `message` is already user-facing.
    Rejected(String),
    /// Transport or decode failure.
    Unreachable,
}

/// Result of one login submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Invalid(FormError),
    /// Logged in. `banner` is the rendered welcome line.
    LoggedIn { name: String, banner: String },
    /// Server said no; `message` is already user-facing.
    Rejected(String),
    /// Transport or decode failure.
    Unreachable,
}
