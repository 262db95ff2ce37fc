//! Состояние роутера: какая страница смонтирована и есть ли сайдбар.
//!
//! Без DOM: компонент `AppRoutes` рендерит ровно то, что описывает `ViewState`.

use super::page::PageId;
use std::collections::BTreeSet;

/// Результат навигации по строковому id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Activated { page: PageId, chrome_mounted: bool },
    /// Unknown id: the view is left untouched
    Ignored { requested: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    mounted: BTreeSet<PageId>,
    chrome_mounted: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        let mut state = Self {
            mounted: BTreeSet::new(),
            chrome_mounted: false,
        };
        state.activate(PageId::Landing);
        state
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tear down every page container, sync the chrome, mount `page`.
    pub fn activate(&mut self, page: PageId) {
        for id in PageId::all() {
            self.unmount(id);
        }
        // Landing takes the whole body, including the sidebar
        self.chrome_mounted = page.has_chrome();
        self.mounted.insert(page);
    }

    pub fn navigate_str(&mut self, requested: &str) -> Navigation {
        match requested.parse::<PageId>() {
            Ok(page) => {
                self.activate(page);
                Navigation::Activated {
                    page,
                    chrome_mounted: self.chrome_mounted,
                }
            }
            Err(_) => Navigation::Ignored {
                requested: requested.to_string(),
            },
        }
    }

    fn unmount(&mut self, page: PageId) {
        self.mounted.remove(&page);
    }

    pub fn active(&self) -> PageId {
        self.mounted
            .iter()
            .next()
            .copied()
            .unwrap_or(PageId::Landing)
    }

    pub fn is_mounted(&self, page: PageId) -> bool {
        self.mounted.contains(&page)
    }

    pub fn mounted_count(&self) -> usize {
        self.mounted.len()
    }

    pub fn chrome_mounted(&self) -> bool {
        self.chrome_mounted
    }
}
