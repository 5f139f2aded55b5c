pub mod client;
pub mod config;
pub mod image;
pub mod source;
pub mod types;
pub mod view;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::client::MealClient;
    pub use crate::config::ClientConfig;
    pub use crate::image::Image;
    pub use crate::source::MealSource;
    pub use crate::types::{Ingredient, MealDetail, MealSummary};
    pub use crate::view::{ContentView, DessertEntryView, DetailView, SummaryView};
    pub use crate::Desserts;
}

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use url::Url;

use crate::client::MealClient;
use crate::config::ClientConfig;
use crate::image::Image;
use crate::source::MealSource;
use crate::types::{sort_by_name, MealDetail, MealSummary};
use crate::view::ContentView;

/// Library entry point. Owns the HTTP client; every call is independent.
#[derive(Clone)]
pub struct Desserts {
    client: Arc<MealClient>,
}

impl Desserts {
    /// Loads config (file + env) and builds the client.
    pub fn connect(config_path: Option<&Path>) -> Result<Self> {
        Self::with_config(ClientConfig::load(config_path)?)
    }

    pub fn with_config(cfg: ClientConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self { client: Arc::new(MealClient::new(cfg)?) })
    }

    pub fn client(&self) -> &MealClient { &self.client }

    /// Desserts sorted by name. Empty if the list could not be fetched.
    pub async fn summaries(&self) -> Vec<MealSummary> {
        let mut list = self.client.load_summaries().await;
        sort_by_name(&mut list);
        list
    }

    pub async fn detail(&self, meal_id: &str) -> Option<MealDetail> {
        self.client.load_detail(meal_id).await
    }

    pub async fn image(&self, url: &Url) -> Image {
        self.client.load_image(url).await
    }

    /// A fresh root view backed by this client.
    pub fn content_view(&self) -> ContentView {
        ContentView::new(self.client.clone() as Arc<dyn MealSource>)
    }
}
