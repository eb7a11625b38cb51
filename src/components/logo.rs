//! Wordmark whose letters tilt on hover.

#[cfg(test)]
#[path = "logo_test.rs"]
mod logo_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::pages::auth::PageFlow;

pub const WORDMARK: &str = "Calico";
pub const REST_TRANSFORM: &str = "translateY(0) rotate(0)";

/// Map a `[0, 1)` sample onto a tilt in `[-10, 10)` degrees.
#[must_use]
pub fn tilt_degrees(unit: f64) -> f64 {
    unit * 20.0 - 10.0
}

#[must_use]
pub fn tilt_transform(degrees: f64) -> String {
    format!("translateY(-10px) rotate({degrees}deg)")
}

#[component]
pub fn Logo() -> impl IntoView {
    let flow = expect_context::<Arc<PageFlow>>();

    let letters = WORDMARK
        .chars()
        .map(|ch| {
            let transform = RwSignal::new(REST_TRANSFORM.to_owned());
            let flow = Arc::clone(&flow);
            view! {
                <span
                    class="letter"
                    style:transform=move || transform.get()
                    on:mouseover=move |_| {
                        let degrees = tilt_degrees(flow.messages().unit());
                        transform.set(tilt_transform(degrees));
                    }
                    on:mouseout=move |_| transform.set(REST_TRANSFORM.to_owned())
                >
                    {ch.to_string()}
                </span>
            }
        })
        .collect_view();

    view! { <h1 class="logo">{letters}</h1> }
}
