//! Root application component and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::UiConfig;
use crate::net::api::HttpAuthApi;
use crate::pages::auth::{AuthPage, PageFlow};
use crate::pages::auth_flow::AuthFlow;
use crate::state::banner::BannerState;
use crate::state::session::LocalStorageStore;
use crate::util::picker::RandomPicker;

/// Root application component.
///
/// Builds the browser-backed auth flow once and shares it, the config, and
/// the banner signal with every child through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = UiConfig::from_build_env();
    let flow: Arc<PageFlow> = Arc::new(AuthFlow::new(
        HttpAuthApi::new(&config),
        LocalStorageStore,
        RandomPicker::from_browser_entropy(),
        &config,
    ));

    provide_context(config);
    provide_context(flow);
    provide_context(RwSignal::new(BannerState::default()));

    view! {
        <Title text="Calico"/>
        <AuthPage/>
    }
}
