use crate::image::Image;
use crate::source::MealSource;
use crate::types::{Ingredient, MealDetail};

use super::TITLE_INGREDIENTS;

/// Full recipe for one meal id. Fields read as empty until `appear` resolves.
#[derive(Debug, Clone)]
pub struct DetailView {
    meal_id: String,
    detail: Option<MealDetail>,
    image: Image,
}

impl DetailView {
    pub fn new(meal_id: impl Into<String>) -> Self {
        Self { meal_id: meal_id.into(), detail: None, image: Image::placeholder() }
    }

    pub fn meal_id(&self) -> &str { &self.meal_id }
    pub fn detail(&self) -> Option<&MealDetail> { self.detail.as_ref() }
    pub fn image(&self) -> &Image { &self.image }

    pub fn name(&self) -> &str {
        self.detail.as_ref().map(|d| d.name.as_str()).unwrap_or("")
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        self.detail.as_ref().map(|d| d.ingredients.as_slice()).unwrap_or(&[])
    }

    pub fn instructions(&self) -> &str {
        self.detail.as_ref().map(|d| d.instructions.as_str()).unwrap_or("")
    }

    /// Detail first, then its image.
    pub async fn appear(&mut self, source: &dyn MealSource) {
        self.detail = source.load_detail(&self.meal_id).await;
        if let Some(detail) = &self.detail {
            self.image = source.load_image(&detail.image).await;
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![self.name().to_string(), self.image.to_string(), String::new(), TITLE_INGREDIENTS.to_string()];
        lines.extend(self.ingredients().iter().map(|i| format!("  {} {}", i.measure, i.name)));
        lines.push(String::new());
        lines.push(self.instructions().to_string());
        lines.join("\n")
    }
}
