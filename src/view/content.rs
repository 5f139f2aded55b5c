use std::sync::Arc;

use crate::source::MealSource;
use crate::types::{sort_by_name, MealSummary};

use super::{DetailView, SummaryView, TITLE_DESSERTS};

/// Root screen. Loads the dessert list once and keeps it sorted by name.
pub struct ContentView {
    source: Arc<dyn MealSource>,
    list: SummaryView,
    loaded: bool,
}

impl ContentView {
    pub fn new(source: Arc<dyn MealSource>) -> Self {
        Self { source, list: SummaryView::default(), loaded: false }
    }

    pub fn list(&self) -> &SummaryView { &self.list }
    pub fn list_mut(&mut self) -> &mut SummaryView { &mut self.list }
    pub fn is_loaded(&self) -> bool { self.loaded }

    pub fn summaries(&self) -> impl Iterator<Item = &MealSummary> + '_ {
        self.list.entries().iter().map(|e| e.summary())
    }

    /// First appearance fetches; later calls do nothing.
    pub async fn appear(&mut self) {
        if !self.loaded {
            self.refresh().await;
        }
    }

    /// Refetches and replaces the list. Any selection is dropped.
    pub async fn refresh(&mut self) {
        let mut summaries = self.source.load_summaries().await;
        sort_by_name(&mut summaries);
        tracing::info!(count = summaries.len(), "dessert list loaded");
        self.list = SummaryView::new(summaries);
        self.loaded = true;
    }

    pub async fn load_thumbnails(&mut self) {
        self.list.load_thumbnails(self.source.as_ref()).await;
    }

    /// Selects the row at `index` and loads its detail.
    pub async fn open(&mut self, index: usize) -> Option<&DetailView> {
        let source = Arc::clone(&self.source);
        let detail = self.list.select(index)?;
        detail.appear(source.as_ref()).await;
        Some(&*detail)
    }

    pub async fn open_id(&mut self, meal_id: &str) -> Option<&DetailView> {
        let index = self.summaries().position(|s| s.id == meal_id)?;
        self.open(index).await
    }

    pub fn render(&self) -> String {
        format!("{}\n\n{}", TITLE_DESSERTS, self.list.render())
    }
}
