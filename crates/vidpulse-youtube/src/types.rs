//! `YouTube` Data API v3 response types.
//!
//! Only the fields the resolver and aggregator read are modelled. List
//! endpoints share the `{"etag": ..., "items": [...]}` envelope captured by
//! [`ListResponse`].

use serde::Deserialize;

/// Envelope shared by every list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub etag: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// `{"error": {"code": 403, "message": "...", "errors": [{"reason": ...}]}}`
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub reason: Option<String>,
}

// ---------------------------------------------------------------------------
// videoCategories
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct VideoCategoryItem {
    pub id: String,
    pub snippet: VideoCategorySnippet,
}

#[derive(Debug, Deserialize)]
pub struct VideoCategorySnippet {
    pub title: String,
}

// ---------------------------------------------------------------------------
// videos
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct VideoItem {
    pub id: String,
    pub snippet: VideoSnippet,
    pub statistics: VideoStatistics,
}

#[derive(Debug, Deserialize)]
pub struct VideoSnippet {
    pub title: String,
}

/// The API encodes 64-bit counters as decimal strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    pub view_count: String,
}

// ---------------------------------------------------------------------------
// commentThreads
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CommentThreadItem {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: Comment,
}

#[derive(Debug, Deserialize)]
pub struct Comment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    #[serde(default)]
    pub like_count: u64,
    pub text_display: String,
}

// ---------------------------------------------------------------------------
// Client-facing values
// ---------------------------------------------------------------------------

/// A video from the `mostPopular` chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularVideo {
    pub id: String,
    pub title: String,
    pub view_count: u64,
}

/// The single most relevant comment on a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopComment {
    pub like_count: u64,
    /// The comment's `textDisplay`, which may contain HTML markup.
    pub text: String,
}
