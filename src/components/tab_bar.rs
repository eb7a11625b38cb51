//! Login / Register tab buttons.

use leptos::prelude::*;

use crate::state::auth_page::{AuthPageState, AuthTab};

#[component]
pub fn TabBar() -> impl IntoView {
    let page = expect_context::<RwSignal<AuthPageState>>();

    let tab_button = move |tab: AuthTab| {
        view! {
            <button
                type="button"
                class="tab-btn"
                class:active=move || page.with(|s| s.active_tab == tab)
                data-form={tab.form_key()}
                on:click=move |_| page.update(|s| s.switch_tab(tab))
            >
                {tab.label()}
            </button>
        }
    };

    view! {
        <div class="tabs">
            {tab_button(AuthTab::Login)}
            {tab_button(AuthTab::Register)}
        </div>
    }
}
