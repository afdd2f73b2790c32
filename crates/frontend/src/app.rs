use crate::domain::a001_artist::ui::details::ArtistDetailsPage;
use crate::domain::a001_artist::ui::list::ArtistList;
use crate::domain::a001_artist::ui::search::SearchResults;
use crate::layout::error_page::ErrorPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::header::Header;
use contracts::shared::error::ErrorResponse;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    view! {
        <Header />
        <main class="content">
            {move || match ctx.page.get() {
                Page::Artists => view! { <ArtistList /> }.into_any(),
                Page::Artist(id) => view! { <ArtistDetailsPage id=id /> }.into_any(),
                Page::Search(query) => view! { <SearchResults query=query /> }.into_any(),
                Page::Error(status) => {
                    view! { <ErrorPage error=ErrorResponse::from_status(status) /> }.into_any()
                }
            }}
        </main>
        // общий для всех кнопок tooltip
        <div id="tooltip" class="tooltip" style="display: none"></div>
    }
}
