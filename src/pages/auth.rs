//! Combined login/register page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only screen in the app. It picks the per-load taglines, greets a
//! remembered user, and lays out the tab bar, both forms, and the banner.

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;

use super::auth_flow::{AuthFlow, AuthView};
use crate::components::banner::{SuccessBanner, announce};
use crate::components::login_form::LoginForm;
use crate::components::logo::Logo;
use crate::components::register_form::RegisterForm;
use crate::components::tab_bar::TabBar;
use crate::config::UiConfig;
use crate::net::api::HttpAuthApi;
use crate::state::auth_page::{AuthPageState, RegisterFollowUp};
use crate::state::banner::BannerState;
use crate::state::form::{LoginOutcome, RegisterOutcome};
use crate::state::session::LocalStorageStore;
use crate::util::copy::MessageCategory;
use crate::util::picker::{MessageSource, RandomPicker};

/// Flow wired to the browser's `fetch`, `localStorage`, and RNG.
pub type PageFlow = AuthFlow<HttpAuthApi, LocalStorageStore, RandomPicker>;

/// `AuthView` over the page's signals.
#[derive(Clone, Copy)]
pub struct PageView {
    pub page: RwSignal<AuthPageState>,
    pub banner: RwSignal<BannerState>,
    pub banner_duration: Duration,
}

impl PageView {
    /// Pull the page and banner signals from context.
    pub fn from_context() -> Self {
        Self {
            page: expect_context::<RwSignal<AuthPageState>>(),
            banner: expect_context::<RwSignal<BannerState>>(),
            banner_duration: expect_context::<UiConfig>().banner_duration,
        }
    }
}

impl AuthView for PageView {
    fn apply_login(&self, outcome: LoginOutcome) -> Option<String> {
        let mut banner = None;
        self.page.update(|s| banner = s.apply_login(outcome));
        banner
    }

    fn apply_register(&self, outcome: RegisterOutcome) -> Option<RegisterFollowUp> {
        let mut follow_up = None;
        self.page.update(|s| follow_up = s.apply_register(outcome));
        follow_up
    }

    fn complete_register_follow_up(&self) {
        self.page.update(AuthPageState::complete_register_follow_up);
    }

    fn announce(&self, message: String) {
        announce(self.banner, message, self.banner_duration);
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let flow = expect_context::<Arc<PageFlow>>();
    let config = expect_context::<UiConfig>();
    let banner = expect_context::<RwSignal<BannerState>>();

    let messages = flow.messages();
    let page = RwSignal::new(AuthPageState::new(
        messages.pick(MessageCategory::LoginWitty),
        messages.pick(MessageCategory::RegisterWitty),
    ));
    provide_context(page);

    if let Some(greeting) = flow.welcome_back() {
        announce(banner, greeting, config.banner_duration);
    }

    view! {
        <div class="auth-page">
            <Logo/>
            <div class="form-container">
                <TabBar/>
                <LoginForm/>
                <RegisterForm/>
            </div>
            <SuccessBanner/>
        </div>
    }
}
