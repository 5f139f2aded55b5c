use crate::image::Image;
use crate::source::MealSource;
use crate::types::MealSummary;

/// One row of the dessert list: preview thumbnail beside the name.
#[derive(Debug, Clone)]
pub struct DessertEntryView {
    summary: MealSummary,
    thumbnail: Image,
}

impl DessertEntryView {
    pub fn new(summary: MealSummary) -> Self {
        Self { summary, thumbnail: Image::placeholder() }
    }

    pub fn summary(&self) -> &MealSummary { &self.summary }
    pub fn thumbnail(&self) -> &Image { &self.thumbnail }

    /// Fetches the preview image; the placeholder stays if that fails.
    pub async fn appear(&mut self, source: &dyn MealSource) {
        self.thumbnail = source.load_image(&self.summary.preview_url()).await;
    }

    pub fn render(&self) -> String {
        format!("{} {}", self.thumbnail, self.summary.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fake::{loaded, summary, FakeSource};

    #[test]
    fn shows_placeholder_before_appear() {
        let v = DessertEntryView::new(summary("1", "Apam balik"));
        assert!(v.thumbnail().is_placeholder());
        assert_eq!(v.render(), "[photo] Apam balik");
    }

    #[tokio::test]
    async fn appear_loads_preview_not_full_image() {
        let mut src = FakeSource::default();
        src.images.insert("https://img.test/1.jpg/preview".into(), loaded(7, 7));
        let mut v = DessertEntryView::new(summary("1", "Apam balik"));
        v.appear(&src).await;
        assert_eq!(src.image_calls(), vec!["https://img.test/1.jpg/preview".to_string()]);
        assert_eq!(v.render(), "[png 7x7] Apam balik");
    }

    #[tokio::test]
    async fn failed_preview_keeps_placeholder() {
        let src = FakeSource::default();
        let mut v = DessertEntryView::new(summary("2", "Pouding chomeur"));
        v.appear(&src).await;
        assert!(v.thumbnail().is_placeholder());
    }
}
