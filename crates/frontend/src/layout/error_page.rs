use crate::layout::global_context::{AppGlobalContext, Page};
use contracts::shared::error::ErrorResponse;
use leptos::prelude::*;
use web_sys::MouseEvent;

/// Status and message, exactly as the server (or the router) produced them.
#[component]
pub fn ErrorPage(error: ErrorResponse) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    log::warn!("error page: {}", error);

    view! {
        <section class="error-page">
            <h1 class="error-page__status">{error.status}</h1>
            <p class="error-page__message">{error.message}</p>
            <a
                class="home-link"
                href="/"
                data-tooltip="Home"
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    ctx.navigate(Page::Artists);
                }
            >
                "Back to artists"
            </a>
        </section>
    }
}
