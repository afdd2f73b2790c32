use crate::domain::a001_artist::api;
use crate::domain::a001_artist::ui::card::ArtistGrid;
use crate::layout::error_page::ErrorPage;
use crate::shared::loadable::Loadable;
use contracts::shared::search::SearchResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SearchResults(query: String) -> impl IntoView {
    let (state, set_state) = signal(Loadable::<SearchResponse>::Loading);

    let q = query.clone();
    spawn_local(async move {
        let _ = set_state.try_set(api::search(&q).await.into());
    });

    view! {
        <section class="search-results">
            <h1 class="search-results__title">{format!("Results for \"{}\"", query)}</h1>
            {move || match state.get() {
                Loadable::Loading => view! { <p class="loading">"Searching..."</p> }.into_any(),
                Loadable::Ready(response) if response.results.is_empty() => {
                    view! {
                        <p class="search-results__message">
                            {response.message.unwrap_or_default()}
                        </p>
                    }
                        .into_any()
                }
                Loadable::Ready(response) => {
                    view! { <ArtistGrid artists=response.results /> }.into_any()
                }
                Loadable::Failed(error) => view! { <ErrorPage error=error /> }.into_any(),
            }}
        </section>
    }
}
