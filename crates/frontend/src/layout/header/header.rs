use crate::layout::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;
use web_sys::{MouseEvent, SubmitEvent};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let (query, set_query) = signal(String::new());

    let go_home = move |ev: MouseEvent| {
        ev.prevent_default();
        ctx.navigate(Page::Artists);
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.navigate(Page::search(&query.get_untracked()));
    };

    view! {
        <header class="header">
            <a class="home-link" href="/" data-tooltip="Home" on:click=go_home>
                "Groupie Tracker"
            </a>
            <form class="search-form" on:submit=submit>
                <input
                    type="text"
                    name="q"
                    class="search-input"
                    placeholder="Search artists"
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit" class="search-button" data-tooltip="Search">
                    "Search"
                </button>
            </form>
        </header>
    }
}
