use crate::domain::a001_artist::api;
use crate::layout::error_page::ErrorPage;
use crate::shared::loadable::Loadable;
use crate::shared::page_interactions::web::open_tab_from_event;
use contracts::domain::a001_artist::ArtistDetails;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;

/// "north_carolina-usa" -> "North Carolina, USA"
pub fn display_location(raw: &str) -> String {
    let title = |part: &str| {
        part.split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    };

    match raw.rsplit_once('-') {
        // коды стран (usa, uk) пишутся заглавными
        Some((place, country)) if country.len() <= 3 => {
            format!("{}, {}", title(place), country.to_uppercase())
        }
        Some((place, country)) => format!("{}, {}", title(place), title(country)),
        None => title(raw),
    }
}

/// Upstream marks some dates with a leading '*'.
pub fn display_date(raw: &str) -> &str {
    raw.trim_start_matches('*')
}

#[component]
pub fn ArtistDetailsPage(id: i64) -> impl IntoView {
    let (state, set_state) = signal(Loadable::<ArtistDetails>::Loading);

    spawn_local(async move {
        let _ = set_state.try_set(api::fetch_details(id).await.into());
    });

    view! {
        {move || match state.get() {
            Loadable::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
            Loadable::Ready(details) => details_view(details).into_any(),
            Loadable::Failed(error) => view! { <ErrorPage error=error /> }.into_any(),
        }}
    }
}

fn details_view(details: ArtistDetails) -> impl IntoView {
    let ArtistDetails {
        artist,
        locations,
        dates,
        concerts,
    } = details;

    view! {
        <section class="artist-details">
            <img class="artist-details__image" src=artist.image alt=artist.name.clone() />
            <div class="artist-details__facts">
                <h1>{artist.name}</h1>
                <p>{format!("Created: {}", artist.creation_date)}</p>
                <p>{format!("First album: {}", artist.first_album)}</p>
                <h3>"Members"</h3>
                <ul class="members">
                    {artist
                        .members
                        .into_iter()
                        .map(|member| view! { <li>{member}</li> })
                        .collect_view()}
                </ul>
            </div>

            <div class="tabs">
                <button
                    class="tab active"
                    on:click=move |ev: MouseEvent| open_tab_from_event(&ev, "locations")
                >
                    "Locations"
                </button>
                <button class="tab" on:click=move |ev: MouseEvent| open_tab_from_event(&ev, "dates")>
                    "Dates"
                </button>
                <button
                    class="tab"
                    on:click=move |ev: MouseEvent| open_tab_from_event(&ev, "concerts")
                >
                    "Concerts"
                </button>
            </div>

            <div id="locations" class="tab-content" style="display: block">
                <ul>
                    {locations
                        .locations
                        .iter()
                        .map(|location| view! { <li>{display_location(location)}</li> })
                        .collect_view()}
                </ul>
            </div>
            <div id="dates" class="tab-content" style="display: none">
                <ul>
                    {dates
                        .dates
                        .iter()
                        .map(|date| view! { <li>{display_date(date).to_string()}</li> })
                        .collect_view()}
                </ul>
            </div>
            <div id="concerts" class="tab-content" style="display: none">
                <ul>
                    {concerts
                        .dates_locations
                        .iter()
                        .map(|(location, dates)| {
                            let dates = dates
                                .iter()
                                .map(|date| display_date(date))
                                .collect::<Vec<_>>()
                                .join(", ");
                            view! {
                                <li>
                                    <strong>{display_location(location)}</strong>
                                    ": "
                                    {dates}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
