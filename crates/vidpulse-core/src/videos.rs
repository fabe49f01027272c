use serde::{Deserialize, Serialize};

/// Placeholder shown when a video has no top comment.
pub const NO_COMMENTS_TEXT: &str = "No comments available";

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// A trending video merged with its top comment, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub view_count: u64,
    /// Likes on the top comment; `0` when the video has no comments.
    pub top_comment_like_count: u64,
    /// Display text of the top comment, or [`NO_COMMENTS_TEXT`].
    pub top_comment_text: String,
    pub url: String,
}

impl VideoRecord {
    /// Builds a record with the no-comment defaults filled in.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, view_count: u64) -> Self {
        let id = id.into();
        let url = watch_url(&id);
        Self {
            id,
            title: title.into(),
            view_count,
            top_comment_like_count: 0,
            top_comment_text: NO_COMMENTS_TEXT.to_string(),
            url,
        }
    }

    #[must_use]
    pub fn with_top_comment(mut self, like_count: u64, text: impl Into<String>) -> Self {
        self.top_comment_like_count = like_count;
        self.top_comment_text = text.into();
        self
    }
}

#[must_use]
pub fn watch_url(video_id: &str) -> String {
    format!("{WATCH_URL_PREFIX}{video_id}")
}
