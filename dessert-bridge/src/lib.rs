//! Mobile UI bridge for the dessert-fetch library.
//! Exposes a thin async wrapper returning plain data a foreign UI can bind to.

use std::path::PathBuf;

use anyhow::Result;
use dessert_fetch::prelude::*;
use serde::Serialize;
use url::Url;

pub struct DessertBridge {
    inner: Desserts,
}

/// One list row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryItem {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub preview_url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IngredientItem {
    pub id: u32,
    pub name: String,
    pub measure: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailItem {
    pub name: String,
    pub ingredients: Vec<IngredientItem>,
    pub instructions: String,
    pub image_url: String,
}

/// Image bytes, or `None` meaning "draw the placeholder glyph".
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImageItem {
    pub bytes: Option<Vec<u8>>,
    pub placeholder: String,
}

impl From<&MealSummary> for SummaryItem {
    fn from(s: &MealSummary) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            thumbnail_url: s.image_url.to_string(),
            preview_url: s.preview_url().to_string(),
        }
    }
}

impl From<MealDetail> for DetailItem {
    fn from(d: MealDetail) -> Self {
        Self {
            name: d.name,
            ingredients: d
                .ingredients
                .into_iter()
                .map(|i| IngredientItem { id: i.id as u32, name: i.name, measure: i.measure })
                .collect(),
            instructions: d.instructions,
            image_url: d.image.to_string(),
        }
    }
}

impl From<Image> for ImageItem {
    fn from(img: Image) -> Self {
        Self {
            bytes: img.bytes().map(<[u8]>::to_vec),
            placeholder: dessert_fetch::image::PLACEHOLDER_GLYPH.to_string(),
        }
    }
}

impl DessertBridge {
    /// Create the library. If config_path is None, use the per-user config or defaults.
    pub fn new(config_path: Option<String>) -> Result<Self> {
        let inner = Desserts::connect(config_path.map(PathBuf::from).as_deref())?;
        Ok(Self { inner })
    }

    pub fn with_config(cfg: ClientConfig) -> Result<Self> {
        Ok(Self { inner: Desserts::with_config(cfg)? })
    }

    /// Sorted by name; empty when the list could not be fetched.
    pub async fn summaries(&self) -> Vec<SummaryItem> {
        self.inner.summaries().await.iter().map(SummaryItem::from).collect()
    }

    pub async fn detail(&self, meal_id: String) -> Option<DetailItem> {
        self.inner.detail(&meal_id).await.map(DetailItem::from)
    }

    /// Unparsable URLs get the placeholder, same as failed fetches.
    pub async fn image(&self, url: String) -> ImageItem {
        match Url::parse(&url) {
            Ok(u) => self.inner.image(&u).await.into(),
            Err(_) => Image::placeholder().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_item_carries_preview_url() {
        let s = MealSummary {
            id: "53049".into(),
            name: "Apam balik".into(),
            image_url: Url::parse("https://www.themealdb.com/images/media/meals/adxcbq1619787919.jpg").unwrap(),
        };
        let item = SummaryItem::from(&s);
        assert_eq!(item.preview_url, "https://www.themealdb.com/images/media/meals/adxcbq1619787919.jpg/preview");
    }

    #[test]
    fn detail_item_serializes_for_the_ui() {
        let detail = MealDetail {
            name: "Apam balik".into(),
            ingredients: vec![Ingredient { id: 0, name: "Milk".into(), measure: "200ml".into() }],
            instructions: "Fry.".into(),
            image: Url::parse("https://img.test/a.jpg").unwrap(),
        };
        let v = serde_json::to_value(DetailItem::from(detail)).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "name": "Apam balik",
                "ingredients": [{"id": 0, "name": "Milk", "measure": "200ml"}],
                "instructions": "Fry.",
                "image_url": "https://img.test/a.jpg"
            })
        );
    }

    #[tokio::test]
    async fn bad_url_is_placeholder() {
        let cfg = ClientConfig { api_base: "http://127.0.0.1:1/api".into(), ..Default::default() };
        let bridge = DessertBridge::with_config(cfg).unwrap();
        let img = bridge.image("not a url".into()).await;
        assert_eq!(img.bytes, None);
        assert_eq!(img.placeholder, "photo");
    }
}
