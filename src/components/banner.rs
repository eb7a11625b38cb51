//! Global success banner and its auto-hide timer.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::banner::BannerState;

/// Show `message` and hide it after `duration`, unless a newer message has
/// replaced it by then.
pub fn announce(banner: RwSignal<BannerState>, message: String, duration: Duration) {
    let mut ticket = None;
    banner.update(|b| ticket = Some(b.show(message)));

    #[cfg(feature = "csr")]
    {
        if let Some(ticket) = ticket {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(duration).await;
                banner.update(|b| {
                    b.hide(ticket);
                });
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ticket, duration);
    }
}

#[component]
pub fn SuccessBanner() -> impl IntoView {
    let banner = expect_context::<RwSignal<BannerState>>();

    view! {
        <div
            id="successBanner"
            class="success-banner"
            class:hidden=move || !banner.with(|b| b.visible)
        >
            <span id="successMessage">{move || banner.with(|b| b.message.clone())}</span>
        </div>
    }
}
