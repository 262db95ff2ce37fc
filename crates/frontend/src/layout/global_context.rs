use crate::routes::page::PageId;
use crate::routes::router::{Navigation, ViewState};
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query parameter holding the active page
const PAGE_PARAM: &str = "page";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub view: RwSignal<ViewState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ViewState::new()),
        }
    }

    pub fn active(&self) -> PageId {
        self.view.with(|state| state.active())
    }

    pub fn chrome_mounted(&self) -> bool {
        self.view.with(|state| state.chrome_mounted())
    }

    pub fn navigate(&self, page: PageId) {
        leptos::logging::log!("🔶 navigate: '{}'", page);
        self.view.update(|state| state.activate(page));
    }

    /// Navigation by raw id; unknown ids leave the view (and its subscribers) untouched.
    pub fn navigate_str(&self, requested: &str) -> Navigation {
        match requested.parse::<PageId>() {
            Ok(page) => {
                self.navigate(page);
                Navigation::Activated {
                    page,
                    chrome_mounted: self.view.with_untracked(|state| state.chrome_mounted()),
                }
            }
            Err(_) => {
                log::warn!("Ignoring navigation to unknown page '{}'", requested);
                Navigation::Ignored {
                    requested: requested.to_string(),
                }
            }
        }
    }

    /// Reads `?page=` once on start, then mirrors the active page into the URL.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(requested) = params.get(PAGE_PARAM) {
            self.navigate_str(requested);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active();
            let query_string = serde_qs::to_string(&HashMap::from([(
                PAGE_PARAM.to_string(),
                active.as_str().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}
