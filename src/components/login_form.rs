//! Login form: inputs, submit handler, and inline status line.

use std::sync::Arc;

use leptos::prelude::*;

use crate::pages::auth::{PageFlow, PageView};
use crate::state::auth_page::{AuthPageState, AuthTab};
use crate::state::form::LoginFields;
use crate::util::copy::MessageCategory;
use crate::util::picker::MessageSource;

#[component]
pub fn LoginForm() -> impl IntoView {
    let page = expect_context::<RwSignal<AuthPageState>>();
    let flow = expect_context::<Arc<PageFlow>>();
    let page_view = PageView::from_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let loading = flow.messages().pick(MessageCategory::Loading);
        let mut started = None;
        page.update(|s| started = s.begin_login(loading));
        let Some(fields) = started else {
            return;
        };
        spawn_login(Arc::clone(&flow), page_view, fields);
    };

    let witty = page.with_untracked(|s| s.login.witty);

    view! {
        <form
            id="loginForm"
            class="auth-form"
            class:active=move || page.with(|s| s.active_tab == AuthTab::Login)
            on:submit=on_submit
        >
            <p class="witty-message">{witty}</p>
            <div class="input-group">
                <input
                    type="email"
                    id="loginEmail"
                    name="loginEmail"
                    placeholder=" "
                    prop:value=move || page.with(|s| s.login.fields.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        page.update(|s| s.login.fields.email = value);
                    }
                />
                <label for="loginEmail">"Email"</label>
            </div>
            <div class="input-group">
                <input
                    type="password"
                    id="loginPassword"
                    name="loginPassword"
                    placeholder=" "
                    prop:value=move || page.with(|s| s.login.fields.password.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        page.update(|s| s.login.fields.password = value);
                    }
                />
                <label for="loginPassword">"Password"</label>
            </div>
            <button
                type="submit"
                class="submit-btn"
                disabled=move || page.with(|s| s.login.phase.is_submitting())
            >
                "Log In"
            </button>
            <div id="loginMessage" class=move || page.with(|s| s.login.message.class())>
                {move || page.with(|s| s.login.message.text.clone())}
            </div>
        </form>
    }
}

/// Run one login submission in the background and render its outcome.
fn spawn_login(flow: Arc<PageFlow>, page_view: PageView, fields: LoginFields) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        flow.submit_login(&fields, &page_view, gloo_timers::future::sleep).await;
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (flow, page_view, fields);
    }
}
