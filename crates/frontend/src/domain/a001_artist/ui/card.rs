use crate::layout::global_context::{AppGlobalContext, Page};
use contracts::domain::a001_artist::Artist;
use leptos::prelude::*;

#[component]
pub fn ArtistCard(artist: Artist) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let id = artist.id;

    view! {
        <div class="card">
            <img class="card__image" src=artist.image alt=artist.name.clone() />
            <h2 class="card__title">{artist.name}</h2>
            <p class="card__meta">{format!("Since {}", artist.creation_date)}</p>
            <button
                class="details-button"
                data-tooltip="Details"
                on:click=move |_| ctx.navigate(Page::Artist(id))
            >
                "Details"
            </button>
        </div>
    }
}

#[component]
pub fn ArtistGrid(artists: Vec<Artist>) -> impl IntoView {
    view! {
        <div class="grid">
            {artists
                .into_iter()
                .map(|artist| view! { <ArtistCard artist=artist /> })
                .collect_view()}
        </div>
    }
}
