use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// The API encodes ingredients as `strIngredient1..20` / `strMeasure1..20`.
pub const MAX_INGREDIENTS: usize = 20;

/// A dessert as listed in the category listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub image_url: Url,
}

impl MealSummary {
    /// Smaller rendition served under `<thumb>/preview`.
    pub fn preview_url(&self) -> Url {
        let mut url = self.image_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("preview");
        }
        url
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ingredient {
    /// Zero-based position in the source fields.
    pub id: usize,
    pub name: String,
    pub measure: String,
}

/// Decoded from the API's flat record; there is no write-back shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MealDetail {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
    pub image: Url,
}

impl<'de> Deserialize<'de> for MealDetail {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Proxy {
            #[serde(rename = "strMeal")]
            name: String,
            #[serde(rename = "strInstructions")]
            instructions: String,
            #[serde(rename = "strMealThumb")]
            image: Url,
            #[serde(flatten)]
            rest: Map<String, Value>,
        }

        let proxy = Proxy::deserialize(deserializer)?;
        Ok(MealDetail {
            name: proxy.name,
            ingredients: ingredients_from_fields(&proxy.rest),
            instructions: proxy.instructions,
            image: proxy.image,
        })
    }
}

/// Leading run of non-empty ingredient/measure pairs. A null or missing field counts as empty.
pub fn ingredients_from_fields(fields: &Map<String, Value>) -> Vec<Ingredient> {
    let text = |key: String| fields.get(&key).and_then(Value::as_str).unwrap_or("");
    let mut out = Vec::new();
    for idx in 0..MAX_INGREDIENTS {
        let name = text(format!("strIngredient{}", idx + 1));
        let measure = text(format!("strMeasure{}", idx + 1));
        if name.is_empty() || measure.is_empty() {
            break;
        }
        out.push(Ingredient { id: idx, name: name.to_string(), measure: measure.to_string() });
    }
    out
}

/// The `{"meals": [...]}` wrapper every endpoint answers with. `null` reads as empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Meals<T> {
    #[serde(deserialize_with = "null_as_empty")]
    pub meals: Vec<T>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Case-sensitive lexical order on the display name.
pub fn sort_by_name(summaries: &mut [MealSummary]) {
    summaries.sort_by(|a, b| a.name.cmp(&b.name));
}
