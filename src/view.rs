//! Toolkit-neutral view-models for the list -> detail navigation.
//!
//! Each view owns its display state, loads it in `appear`, and renders itself to
//! text. Until a load resolves, fields show their empty defaults and images show
//! the placeholder glyph.

pub mod content;
pub mod detail;
pub mod entry;
pub mod summary;

pub use content::ContentView;
pub use detail::DetailView;
pub use entry::DessertEntryView;
pub use summary::SummaryView;

pub const TITLE_DESSERTS: &str = "Desserts";
pub const TITLE_INGREDIENTS: &str = "Ingredients";
pub const SELECT_PROMPT: &str = "Select a dessert";

#[cfg(test)]
pub(crate) mod fake {
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use url::Url;

    use crate::image::Image;
    use crate::source::MealSource;
    use crate::types::{Ingredient, MealDetail, MealSummary};

    /// In-memory source that records how often it is asked for things.
    #[derive(Default)]
    pub(crate) struct FakeSource {
        pub summaries: Vec<MealSummary>,
        pub details: HashMap<String, MealDetail>,
        pub images: HashMap<String, Image>,
        pub summary_calls: AtomicUsize,
        pub image_calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        pub fn summary_calls(&self) -> usize { self.summary_calls.load(Ordering::SeqCst) }
        pub fn image_calls(&self) -> Vec<String> { self.image_calls.lock().unwrap().clone() }
    }

    pub(crate) fn summary(id: &str, name: &str) -> MealSummary {
        MealSummary {
            id: id.into(),
            name: name.into(),
            image_url: Url::parse(&format!("https://img.test/{id}.jpg")).unwrap(),
        }
    }

    pub(crate) fn detail(name: &str, ingredients: &[(&str, &str)]) -> MealDetail {
        MealDetail {
            name: name.into(),
            ingredients: ingredients
                .iter()
                .enumerate()
                .map(|(i, (n, m))| Ingredient { id: i, name: n.to_string(), measure: m.to_string() })
                .collect(),
            instructions: format!("Make the {name}."),
            image: Url::parse("https://img.test/detail.jpg").unwrap(),
        }
    }

    pub(crate) fn loaded(w: u32, h: u32) -> Image {
        Image::from_bytes(crate::image::tests::tiny_png(w, h))
    }

    #[async_trait]
    impl MealSource for FakeSource {
        async fn load_summaries(&self) -> Vec<MealSummary> {
            self.summary_calls.fetch_add(1, Ordering::SeqCst);
            self.summaries.clone()
        }

        async fn load_detail(&self, meal_id: &str) -> Option<MealDetail> {
            self.details.get(meal_id).cloned()
        }

        async fn load_image(&self, url: &Url) -> Image {
            self.image_calls.lock().unwrap().push(url.to_string());
            self.images.get(url.as_str()).cloned().unwrap_or_default()
        }
    }
}
