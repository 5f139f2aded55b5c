use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::image::Image;
use crate::source::MealSource;
use crate::types::{MealDetail, MealSummary, Meals};

/// HTTP access to TheMealDB. Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct MealClient {
    http: reqwest::Client,
    cfg: ClientConfig,
}

impl MealClient {
    pub fn new(cfg: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(cfg.user_agent.clone());
        if let Some(t) = cfg.timeout() {
            builder = builder.timeout(t);
        }
        let http = builder.build().context("failed to build HTTP client")?;
        Ok(Self { http, cfg })
    }

    pub fn config(&self) -> &ClientConfig { &self.cfg }

    /// Summaries at `url`, dropping entries with an empty id or name. Empty on any failure.
    pub async fn load_summaries_from(&self, url: &Url) -> Vec<MealSummary> {
        match self.try_load_summaries(url).await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(%url, error = %format!("{e:#}"), "summary fetch failed; showing nothing");
                Vec::new()
            }
        }
    }

    pub async fn try_load_summaries(&self, url: &Url) -> Result<Vec<MealSummary>> {
        let meals: Meals<MealSummary> = self.get_json(url).await?;
        let total = meals.meals.len();
        let kept: Vec<MealSummary> = meals
            .meals
            .into_iter()
            .filter(|s| !s.id.is_empty() && !s.name.is_empty())
            .collect();
        if kept.len() != total {
            tracing::debug!(dropped = total - kept.len(), "skipped summaries without id or name");
        }
        Ok(kept)
    }

    /// First matching record, if any.
    pub async fn try_load_detail(&self, meal_id: &str) -> Result<Option<MealDetail>> {
        let url = self.cfg.detail_url(meal_id)?;
        let meals: Meals<MealDetail> = self.get_json(&url).await?;
        Ok(meals.meals.into_iter().next())
    }

    pub async fn try_load_image(&self, url: &Url) -> Result<Image> {
        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url}"))?;
        let bytes = resp.bytes().await.with_context(|| format!("reading body of {url}"))?;
        Image::decode(bytes.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url}"))?;
        let body = resp.bytes().await.with_context(|| format!("reading body of {url}"))?;
        serde_json::from_slice(&body).with_context(|| format!("decoding response from {url}"))
    }
}

#[async_trait]
impl MealSource for MealClient {
    async fn load_summaries(&self) -> Vec<MealSummary> {
        match self.cfg.summaries_url() {
            Ok(url) => self.load_summaries_from(&url).await,
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "no usable summaries URL");
                Vec::new()
            }
        }
    }

    async fn load_detail(&self, meal_id: &str) -> Option<MealDetail> {
        match self.try_load_detail(meal_id).await {
            Ok(found) => {
                if found.is_none() {
                    tracing::debug!(meal_id, "no meal with this id");
                }
                found
            }
            Err(e) => {
                tracing::warn!(meal_id, error = %format!("{e:#}"), "detail fetch failed");
                None
            }
        }
    }

    async fn load_image(&self, url: &Url) -> Image {
        match self.try_load_image(url).await {
            Ok(img) => img,
            Err(e) => {
                tracing::debug!(%url, error = %format!("{e:#}"), "using placeholder image");
                Image::placeholder()
            }
        }
    }
}
