//! Registration form: inputs, submit handler, and inline status line.
//!
//! A successful registration schedules a follow-up that moves the user to
//! the login tab and raises the banner.

use std::sync::Arc;

use leptos::prelude::*;

use crate::pages::auth::{PageFlow, PageView};
use crate::state::auth_page::{AuthPageState, AuthTab};
use crate::state::form::RegisterFields;
use crate::util::copy::MessageCategory;
use crate::util::picker::MessageSource;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let page = expect_context::<RwSignal<AuthPageState>>();
    let flow = expect_context::<Arc<PageFlow>>();
    let page_view = PageView::from_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let loading = flow.messages().pick(MessageCategory::Loading);
        let mut started = None;
        page.update(|s| started = s.begin_register(loading));
        let Some(fields) = started else {
            return;
        };
        spawn_register(Arc::clone(&flow), page_view, fields);
    };

    let witty = page.with_untracked(|s| s.register.witty);

    view! {
        <form
            id="registerForm"
            class="auth-form"
            class:active=move || page.with(|s| s.active_tab == AuthTab::Register)
            on:submit=on_submit
        >
            <p class="witty-message">{witty}</p>
            <div class="input-group">
                <input
                    type="text"
                    id="name"
                    name="name"
                    placeholder=" "
                    prop:value=move || page.with(|s| s.register.fields.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        page.update(|s| s.register.fields.name = value);
                    }
                />
                <label for="name">"Name"</label>
            </div>
            <div class="input-group">
                <input
                    type="email"
                    id="email"
                    name="email"
                    placeholder=" "
                    prop:value=move || page.with(|s| s.register.fields.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        page.update(|s| s.register.fields.email = value);
                    }
                />
                <label for="email">"Email"</label>
            </div>
            <div class="input-group">
                <input
                    type="password"
                    id="password"
                    name="password"
                    placeholder=" "
                    prop:value=move || page.with(|s| s.register.fields.password.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        page.update(|s| s.register.fields.password = value);
                    }
                />
                <label for="password">"Password"</label>
            </div>
            <button
                type="submit"
                class="submit-btn"
                disabled=move || page.with(|s| s.register.phase.is_submitting())
            >
                "Create Account"
            </button>
            <div id="registerMessage" class=move || page.with(|s| s.register.message.class())>
                {move || page.with(|s| s.register.message.text.clone())}
            </div>
        </form>
    }
}

/// Run one register submission in the background and render its outcome.
fn spawn_register(flow: Arc<PageFlow>, page_view: PageView, fields: RegisterFields) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        flow.submit_register(&fields, &page_view, gloo_timers::future::sleep).await;
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (flow, page_view, fields);
    }
}
