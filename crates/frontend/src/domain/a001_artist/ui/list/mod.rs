use crate::domain::a001_artist::api;
use crate::domain::a001_artist::ui::card::ArtistGrid;
use crate::layout::error_page::ErrorPage;
use crate::shared::loadable::Loadable;
use contracts::domain::a001_artist::Artist;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ArtistList() -> impl IntoView {
    let (state, set_state) = signal(Loadable::<Vec<Artist>>::Loading);

    spawn_local(async move {
        let result = api::fetch_artists().await;
        if let Ok(artists) = &result {
            log::debug!("loaded {} artists", artists.len());
        }
        let _ = set_state.try_set(result.into());
    });

    view! {
        <section class="artists">
            {move || match state.get() {
                Loadable::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Loadable::Ready(artists) => view! { <ArtistGrid artists=artists /> }.into_any(),
                Loadable::Failed(error) => view! { <ErrorPage error=error /> }.into_any(),
            }}
        </section>
    }
}
