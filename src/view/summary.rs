use futures::future::join_all;

use crate::source::MealSource;
use crate::types::MealSummary;

use super::{DessertEntryView, DetailView, SELECT_PROMPT};

/// Two panes: the dessert list and whichever detail is selected.
#[derive(Debug, Clone, Default)]
pub struct SummaryView {
    entries: Vec<DessertEntryView>,
    selected: Option<DetailView>,
}

impl SummaryView {
    pub fn new(summaries: Vec<MealSummary>) -> Self {
        Self { entries: summaries.into_iter().map(DessertEntryView::new).collect(), selected: None }
    }

    pub fn entries(&self) -> &[DessertEntryView] { &self.entries }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn selected(&self) -> Option<&DetailView> { self.selected.as_ref() }

    /// Loads every row's thumbnail concurrently; rows resolve independently.
    pub async fn load_thumbnails(&mut self, source: &dyn MealSource) {
        join_all(self.entries.iter_mut().map(|e| e.appear(source))).await;
    }

    /// Selects the row at `index` (zero-based) and returns its fresh, not yet loaded detail.
    pub fn select(&mut self, index: usize) -> Option<&mut DetailView> {
        let id = self.entries.get(index)?.summary().id.clone();
        self.selected = Some(DetailView::new(id));
        self.selected.as_mut()
    }

    pub fn select_id(&mut self, meal_id: &str) -> Option<&mut DetailView> {
        let index = self.entries.iter().position(|e| e.summary().id == meal_id)?;
        self.select(index)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Numbered list (1-based), a blank line, then the detail pane.
    pub fn render(&self) -> String {
        let mut out: Vec<String> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{:>3}. {}", i + 1, e.render()))
            .collect();
        out.push(String::new());
        match &self.selected {
            Some(detail) => out.push(detail.render()),
            None => out.push(SELECT_PROMPT.to_string()),
        }
        out.join("\n")
    }
}
