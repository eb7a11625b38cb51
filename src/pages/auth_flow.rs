//! Submission flow behind the login and register forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthFlow` validates inputs, waits out the cosmetic pause, calls the
//! backend, and turns the response into an outcome for `AuthPageState`.
//! Collaborators sit behind traits (`AuthApi`, `SessionStore`,
//! `MessageSource`, `AuthView`) and timers are passed in as a `sleep`
//! function, so the whole flow runs natively in tests.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use std::future::Future;
use std::time::Duration;

use crate::config::UiConfig;
use crate::net::api::AuthApi;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::auth_page::RegisterFollowUp;
use crate::state::form::{FormError, LoginFields, LoginOutcome, RegisterFields, RegisterOutcome};
use crate::state::session::{SessionStore, record_login, returning_user};
use crate::util::copy::{self, MessageCategory, fill_name};
use crate::util::picker::MessageSource;

/// Require every register field to be non-empty.
///
/// # Errors
///
/// Returns `FormError::MissingRegisterFields` if any field is empty.
pub fn validate_register(fields: &RegisterFields) -> Result<RegisterRequest, FormError> {
    if fields.name.is_empty() || fields.email.is_empty() || fields.password.is_empty() {
        return Err(FormError::MissingRegisterFields);
    }
    Ok(RegisterRequest {
        name: fields.name.clone(),
        email: fields.email.clone(),
        password: fields.password.clone(),
    })
}

/// Require email and password to be non-empty.
///
/// # Errors
///
/// Returns `FormError::MissingLoginFields` if either field is empty.
pub fn validate_login(fields: &LoginFields) -> Result<LoginRequest, FormError> {
    if fields.email.is_empty() || fields.password.is_empty() {
        return Err(FormError::MissingLoginFields);
    }
    Ok(LoginRequest {
        email: fields.email.clone(),
        password: fields.password.clone(),
    })
}

/// Friendly mapping, then the raw server text, then the generic fallback.
#[must_use]
pub fn resolve_register_failure(server_message: Option<&str>) -> String {
    server_message
        .map(|m| copy::friendly_register_error(m).unwrap_or(m))
        .unwrap_or(copy::REGISTER_FALLBACK)
        .to_owned()
}

/// Friendly mapping, then the raw server text, then the generic fallback.
#[must_use]
pub fn resolve_login_failure(server_message: Option<&str>) -> String {
    server_message
        .map(|m| copy::friendly_login_error(m).unwrap_or(m))
        .unwrap_or(copy::LOGIN_FALLBACK)
        .to_owned()
}

/// Where submission results land. The page implements this over its
/// signals; every method is a synchronous state update.
pub trait AuthView {
    /// Render a login outcome. Returns banner text on success.
    fn apply_login(&self, outcome: LoginOutcome) -> Option<String>;

    /// Render a register outcome. Returns the follow-up on success.
    fn apply_register(&self, outcome: RegisterOutcome) -> Option<RegisterFollowUp>;

    /// Move the user to the login tab after a registration.
    fn complete_register_follow_up(&self);

    /// Raise the global banner.
    fn announce(&self, message: String);
}

pub struct AuthFlow<A, S, M> {
    api: A,
    store: S,
    messages: M,
    loading_delay: Duration,
    switch_after: Duration,
}

impl<A, S, M> AuthFlow<A, S, M>
where
    A: AuthApi,
    S: SessionStore,
    M: MessageSource,
{
    pub fn new(api: A, store: S, messages: M, config: &UiConfig) -> Self {
        Self {
            api,
            store,
            messages,
            loading_delay: config.loading_delay,
            switch_after: config.tab_switch_delay,
        }
    }

    pub fn messages(&self) -> &M {
        &self.messages
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Submit the register form. `pause` is awaited only after validation
    /// passes, right before the request goes out.
    pub async fn register<P>(&self, fields: &RegisterFields, pause: P) -> RegisterOutcome
    where
        P: Future<Output = ()>,
    {
        let request = match validate_register(fields) {
            Ok(request) => request,
            Err(err) => return RegisterOutcome::Invalid(err),
        };
        pause.await;

        match self.api.register(&request).await {
            Ok(resp) => {
                leptos::logging::log!("Register response: {resp:?}");
                if resp.success {
                    RegisterOutcome::Registered {
                        message: resp
                            .message()
                            .unwrap_or(copy::REGISTER_SUCCESS)
                            .to_owned(),
                        switch_after: self.switch_after,
                    }
                } else {
                    RegisterOutcome::Rejected(resolve_register_failure(resp.message()))
                }
            }
            Err(e) => {
                leptos::logging::warn!("Registration error: {e}");
                RegisterOutcome::Unreachable
            }
        }
    }

    /// Submit the login form. On success the session flag is persisted
    /// before the outcome is returned.
    pub async fn login<P>(&self, fields: &LoginFields, pause: P) -> LoginOutcome
    where
        P: Future<Output = ()>,
    {
        let request = match validate_login(fields) {
            Ok(request) => request,
            Err(err) => return LoginOutcome::Invalid(err),
        };
        pause.await;

        match self.api.login(&request).await {
            Ok(resp) => {
                leptos::logging::log!("Login response: {resp:?}");
                if resp.success {
                    let name = resp.display_name().to_owned();
                    let welcome = self.messages.pick(MessageCategory::Welcome);
                    let banner = fill_name(welcome, &name);
                    record_login(&self.store, &name);
                    LoginOutcome::LoggedIn { name, banner }
                } else {
                    LoginOutcome::Rejected(resolve_login_failure(resp.message()))
                }
            }
            Err(e) => {
                leptos::logging::warn!("Login error: {e}");
                LoginOutcome::Unreachable
            }
        }
    }

    /// Run a whole login submission against `view`: pause, call, render,
    /// and raise the welcome banner on success.
    pub async fn submit_login<V, Z, F>(&self, fields: &LoginFields, view: &V, sleep: Z)
    where
        V: AuthView + ?Sized,
        Z: Fn(Duration) -> F,
        F: Future<Output = ()>,
    {
        let pause = async { sleep(self.loading_delay).await };
        let outcome = self.login(fields, pause).await;
        if let Some(banner) = view.apply_login(outcome) {
            view.announce(banner);
        }
    }

    /// Run a whole register submission against `view`. On success the
    /// follow-up waits `switch_after`, moves to the login tab, then raises
    /// the banner.
    pub async fn submit_register<V, Z, F>(&self, fields: &RegisterFields, view: &V, sleep: Z)
    where
        V: AuthView + ?Sized,
        Z: Fn(Duration) -> F,
        F: Future<Output = ()>,
    {
        let pause = async { sleep(self.loading_delay).await };
        let outcome = self.register(fields, pause).await;
        let Some(follow_up) = view.apply_register(outcome) else {
            return;
        };
        sleep(follow_up.delay).await;
        view.complete_register_follow_up();
        view.announce(follow_up.banner.to_owned());
    }

    /// Greeting for a remembered user, if the session flag is set.
    pub fn welcome_back(&self) -> Option<String> {
        let name = returning_user(&self.store)?;
        Some(fill_name(self.messages.pick(MessageCategory::WelcomeBack), &name))
    }
}
