use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::shared::page_interactions::web::hide_tooltip;

/// Which page is on screen. Parsed from the location, pushed to history on navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Artists,
    Artist(i64),
    Search(String),
    Error(u16),
}

impl Page {
    /// `/`, `/artists/?id=N`, `/search/?q=...`; anything else is a 404.
    pub fn from_location(path: &str, search: &str) -> Self {
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        match path.trim_end_matches('/') {
            "" | "/index.html" => Page::Artists,
            "/artists" => params
                .get("id")
                .and_then(|id| id.trim().parse::<i64>().ok())
                .filter(|id| *id >= 1)
                .map(Page::Artist)
                .unwrap_or(Page::Error(400)),
            "/search" => Page::search(params.get("q").map(String::as_str).unwrap_or_default()),
            _ => Page::Error(404),
        }
    }

    /// Search page for a typed query; only an empty query is a bad request,
    /// the same rule the server applies.
    pub fn search(query: &str) -> Self {
        if query.is_empty() {
            Page::Error(400)
        } else {
            Page::Search(query.to_string())
        }
    }

    /// Address to push to history. Error pages keep whatever address led to them.
    pub fn to_url(&self) -> Option<String> {
        match self {
            Page::Artists => Some("/".to_string()),
            Page::Artist(id) => Some(format!("/artists/?id={}", id)),
            Page::Search(query) => Some(format!("/search/?q={}", urlencoding::encode(query))),
            Page::Error(_) => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(current_location_page()),
        }
    }

    /// Follows back/forward buttons.
    pub fn init_router_integration(&self) {
        let Some(w) = window() else {
            return;
        };

        let page = self.page;
        let on_pop = Closure::wrap(Box::new(move |_: web_sys::Event| {
            hide_tooltip();
            page.set(current_location_page());
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = w.add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref());
        on_pop.forget();
    }

    pub fn navigate(&self, target: Page) {
        log::debug!("navigate: {:?}", target);
        // кнопка под курсором сейчас исчезнет, mouseout для неё не придёт
        hide_tooltip();
        if let Some(url) = target.to_url() {
            let current = window()
                .map(|w| {
                    let location = w.location();
                    format!(
                        "{}{}",
                        location.pathname().unwrap_or_default(),
                        location.search().unwrap_or_default()
                    )
                })
                .unwrap_or_default();

            if current != url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&url));
                    }
                }
            }
        }
        self.page.set(target);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_location_page() -> Page {
    let Some(w) = window() else {
        return Page::Artists;
    };
    let location = w.location();
    Page::from_location(
        &location.pathname().unwrap_or_else(|_| "/".to_string()),
        &location.search().unwrap_or_default(),
    )
}
