//! Page-level state for the login/register screen.
//!
//! DESIGN
//! ======
//! Plain data with transition methods, wrapped in an `RwSignal` by the page.
//! Async flows produce outcomes; applying an outcome here is synchronous and
//! therefore unit-testable without a reactive runtime.

#[cfg(test)]
#[path = "auth_page_test.rs"]
mod auth_page_test;

use std::time::Duration;

use super::form::{
    FormMessage, LoginFields, LoginOutcome, RegisterFields, RegisterOutcome, SubmitPhase,
};
use crate::util::copy;

/// Which form is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    /// Value of the tab button's `data-form` attribute.
    #[must_use]
    pub fn form_key(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }
}

/// Inputs, status line, and submit guard of one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSlot<F> {
    pub fields: F,
    pub message: FormMessage,
    pub phase: SubmitPhase,
    /// Tagline picked once per page load.
    pub witty: &'static str,
}

impl<F: Clone + Default> FormSlot<F> {
    fn with_witty(witty: &'static str) -> Self {
        Self {
            fields: F::default(),
            message: FormMessage::default(),
            phase: SubmitPhase::Idle,
            witty,
        }
    }

    fn begin(&mut self, loading: &'static str) -> Option<F> {
        if self.phase.is_submitting() {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        self.message = FormMessage::neutral(loading);
        Some(self.fields.clone())
    }

    fn fail(&mut self, text: impl Into<String>) {
        self.message = FormMessage::error(text);
        self.phase = SubmitPhase::Idle;
    }

    fn succeed(&mut self, text: impl Into<String>) {
        self.fields = F::default();
        self.message = FormMessage::success(text);
        self.phase = SubmitPhase::Idle;
    }
}

/// Deferred work after a successful registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterFollowUp {
    pub delay: Duration,
    pub banner: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthPageState {
    pub active_tab: AuthTab,
    pub login: FormSlot<LoginFields>,
    pub register: FormSlot<RegisterFields>,
}

impl AuthPageState {
    #[must_use]
    pub fn new(login_witty: &'static str, register_witty: &'static str) -> Self {
        Self {
            active_tab: AuthTab::Login,
            login: FormSlot::with_witty(login_witty),
            register: FormSlot::with_witty(register_witty),
        }
    }

    /// Activate `tab` and blank both status lines.
    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.active_tab = tab;
        self.login.message = FormMessage::default();
        self.register.message = FormMessage::default();
    }

    /// Start a login submission. Returns a snapshot of the inputs, or `None`
    /// if one is already in flight.
    pub fn begin_login(&mut self, loading: &'static str) -> Option<LoginFields> {
        self.login.begin(loading)
    }

    /// Start a register submission. Returns a snapshot of the inputs, or
    /// `None` if one is already in flight.
    pub fn begin_register(&mut self, loading: &'static str) -> Option<RegisterFields> {
        self.register.begin(loading)
    }

    /// Render a login outcome. Returns banner text on success.
    pub fn apply_login(&mut self, outcome: LoginOutcome) -> Option<String> {
        match outcome {
            LoginOutcome::Invalid(err) => {
                self.login.fail(err.to_string());
                None
            }
            LoginOutcome::LoggedIn { banner, .. } => {
                self.login.succeed(copy::LOGIN_SUCCESS);
                Some(banner)
            }
            LoginOutcome::Rejected(message) => {
                self.login.fail(message);
                None
            }
            LoginOutcome::Unreachable => {
                self.login.fail(copy::LOGIN_SERVER_DOWN);
                None
            }
        }
    }

    /// Render a register outcome. Returns the follow-up on success.
    pub fn apply_register(&mut self, outcome: RegisterOutcome) -> Option<RegisterFollowUp> {
        match outcome {
            RegisterOutcome::Invalid(err) => {
                self.register.fail(err.to_string());
                None
            }
            RegisterOutcome::Registered { message, switch_after } => {
                self.register.succeed(message);
                Some(RegisterFollowUp {
                    delay: switch_after,
                    banner: copy::REGISTER_BANNER,
                })
            }
            RegisterOutcome::Rejected(message) => {
                self.register.fail(message);
                None
            }
            RegisterOutcome::Unreachable => {
                self.register.fail(copy::REGISTER_SERVER_DOWN);
                None
            }
        }
    }

    /// Second half of a successful registration: move the user to login.
    pub fn complete_register_follow_up(&mut self) {
        self.switch_tab(AuthTab::Login);
    }
}
