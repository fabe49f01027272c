//! HTTP client for the `YouTube` Data API v3.
//!
//! Wraps `reqwest` with API key and region handling and typed response
//! deserialization. Non-2xx responses carrying the API's `{"error": ...}`
//! envelope surface as [`YoutubeError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use vidpulse_core::config::DEFAULT_YOUTUBE_BASE_URL;
use vidpulse_core::{AppConfig, Category};

use crate::error::YoutubeError;
use crate::types::{
    CommentThreadItem, ErrorResponse, ListResponse, PopularVideo, TopComment, VideoCategoryItem,
    VideoItem,
};

const DEFAULT_USER_AGENT: &str = "vidpulse/0.1 (trending-videos)";

/// Client for the `YouTube` Data API.
///
/// Use [`YoutubeClient::new`] for production or
/// [`YoutubeClient::with_base_url`] to point at a mock server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    region_code: String,
    base_url: Url,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, region_code: &str, timeout_secs: u64) -> Result<Self, YoutubeError> {
        Self::with_base_url(
            api_key,
            region_code,
            timeout_secs,
            DEFAULT_USER_AGENT,
            DEFAULT_YOUTUBE_BASE_URL,
        )
    }

    /// Creates a new client with a custom base URL and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YoutubeError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute hierarchical URL.
    pub fn with_base_url(
        api_key: &str,
        region_code: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(base_url).map_err(|e| YoutubeError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(YoutubeError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            region_code: region_code.to_owned(),
            base_url: parsed,
        })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, YoutubeError> {
        Self::with_base_url(
            &config.youtube_api_key,
            &config.region_code,
            config.request_timeout_secs,
            &config.user_agent,
            &config.youtube_base_url,
        )
    }

    /// Lists the video categories available in the configured region.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] if the API returns an error envelope.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn list_categories(&self) -> Result<Vec<Category>, YoutubeError> {
        let envelope: ListResponse<VideoCategoryItem> = self
            .get_typed("videoCategories", &[("part", "snippet")])
            .await?;

        Ok(envelope
            .items
            .into_iter()
            .map(|item| Category {
                name: item.snippet.title,
                id: item.id,
            })
            .collect())
    }

    /// Fetches the `mostPopular` chart for a category.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] if the API returns an error envelope (for
    ///   instance when the category has no chart).
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    /// - [`YoutubeError::InvalidField`] if a `viewCount` is not a number.
    pub async fn most_popular(&self, category_id: &str) -> Result<Vec<PopularVideo>, YoutubeError> {
        let envelope: ListResponse<VideoItem> = self
            .get_typed("videos", &Self::most_popular_params(category_id))
            .await?;

        envelope
            .items
            .into_iter()
            .map(|item| -> Result<PopularVideo, YoutubeError> {
                let view_count = item.statistics.view_count.parse::<u64>().map_err(|e| {
                    YoutubeError::InvalidField {
                        context: format!("videos(id={})", item.id),
                        reason: format!("viewCount '{}': {e}", item.statistics.view_count),
                    }
                })?;
                Ok(PopularVideo {
                    id: item.id,
                    title: item.snippet.title,
                    view_count,
                })
            })
            .collect()
    }

    /// Probes whether a category currently has a `mostPopular` chart.
    ///
    /// Some listed categories are rejected by the videos endpoint. A category
    /// is valid when the API answers successfully with an `etag`.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] when the request could not be completed.
    /// Any answer from the API, error or not, yields `Ok`.
    pub async fn has_most_popular(&self, category_id: &str) -> Result<bool, YoutubeError> {
        match self
            .request_json("videos", &Self::most_popular_params(category_id))
            .await
        {
            Ok(body) => Ok(body.get("etag").is_some()),
            Err(e) if e.is_api_response() => {
                tracing::debug!(category_id, error = %e, "category has no mostPopular chart");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Fetches the single most relevant comment thread for a video.
    ///
    /// Returns `None` when the API lists no comments, including when it
    /// answers with an error envelope (e.g. comments disabled).
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::UnexpectedStatus`] on a non-2xx response that is not
    ///   an API error envelope.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn top_comment(&self, video_id: &str) -> Result<Option<TopComment>, YoutubeError> {
        let params = [
            ("part", "snippet"),
            ("order", "relevance"),
            ("maxResults", "1"),
            ("videoId", video_id),
        ];
        let envelope: ListResponse<CommentThreadItem> =
            match self.get_typed("commentThreads", &params).await {
                Ok(envelope) => envelope,
                Err(YoutubeError::Api {
                    status, reason, ..
                }) => {
                    tracing::debug!(video_id, status, ?reason, "no comment threads available");
                    return Ok(None);
                }
                Err(e) => return Err(e),
            };

        Ok(envelope.items.into_iter().next().map(|thread| {
            let snippet = thread.snippet.top_level_comment.snippet;
            TopComment {
                like_count: snippet.like_count,
                text: snippet.text_display,
            }
        }))
    }

    fn most_popular_params(category_id: &str) -> [(&str, &str); 3] {
        [
            ("part", "snippet,statistics"),
            ("chart", "mostPopular"),
            ("videoCategoryId", category_id),
        ]
    }

    /// Builds the full request URL for `resource` with percent-encoded query
    /// parameters. `key` and `regionCode` are always present.
    fn build_url(&self, resource: &str, extra: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in the constructor.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(resource);
        }
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            pairs.append_pair("regionCode", &self.region_code);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    async fn get_typed<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<T, YoutubeError> {
        let body = self.request_json(resource, params).await?;
        serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
            context: resource.to_string(),
            source: e,
        })
    }

    /// Sends a GET request and parses the body as JSON.
    ///
    /// The error context names the resource only; the URL carries the API key
    /// and is never logged or embedded in errors.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Api`] on a non-2xx status with an error envelope.
    /// - [`YoutubeError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`YoutubeError::Deserialize`] if a 2xx body is not valid JSON.
    async fn request_json(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, YoutubeError> {
        let url = self.build_url(resource, params);
        tracing::debug!(resource, ?params, "youtube api request");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(envelope) => YoutubeError::Api {
                    resource: resource.to_string(),
                    status: envelope.error.code.unwrap_or(status.as_u16()),
                    reason: envelope
                        .error
                        .errors
                        .into_iter()
                        .find_map(|detail| detail.reason),
                    message: envelope.error.message,
                },
                Err(_) => YoutubeError::UnexpectedStatus {
                    resource: resource.to_string(),
                    status: status.as_u16(),
                },
            });
        }

        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: resource.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
