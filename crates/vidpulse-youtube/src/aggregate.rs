//! Merges the `mostPopular` chart of a category with each video's top comment.

use vidpulse_core::VideoRecord;

use crate::client::YoutubeClient;
use crate::error::YoutubeError;

/// Fetches the trending videos of `category_id` and their top comments.
///
/// One chart request is followed by one comment request per video, issued
/// sequentially. Records keep the chart order. Videos without a top comment
/// keep the [`VideoRecord::new`] defaults.
///
/// # Errors
///
/// Returns the first [`YoutubeError`] raised by the chart request or any
/// comment request.
pub async fn aggregate_category(
    client: &YoutubeClient,
    category_id: &str,
) -> Result<Vec<VideoRecord>, YoutubeError> {
    let videos = client.most_popular(category_id).await?;
    tracing::debug!(category_id, video_count = videos.len(), "fetched mostPopular chart");

    let mut records = Vec::with_capacity(videos.len());
    for video in videos {
        let comment = client.top_comment(&video.id).await?;
        let record = VideoRecord::new(video.id, video.title, video.view_count);
        records.push(match comment {
            Some(comment) => record.with_top_comment(comment.like_count, comment.text),
            None => record,
        });
    }

    Ok(records)
}
