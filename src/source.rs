use async_trait::async_trait;
use url::Url;

use crate::image::Image;
use crate::types::{MealDetail, MealSummary};

/// Where the views get their data. Implementations never fail: errors collapse to
/// an empty list, `None`, or the placeholder image.
#[async_trait]
pub trait MealSource: Send + Sync {
    async fn load_summaries(&self) -> Vec<MealSummary>;
    async fn load_detail(&self, meal_id: &str) -> Option<MealDetail>;
    async fn load_image(&self, url: &Url) -> Image;
}
