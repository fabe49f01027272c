//! Builds the category dropdown: lists every category, keeps the ones the
//! `mostPopular` chart accepts.

use vidpulse_core::CategoryMap;

use crate::client::YoutubeClient;
use crate::error::YoutubeError;

/// Resolves the browsable categories into an ordered name → id map.
///
/// Probes are issued one at a time in listing order. Categories whose probe
/// is answered with an error or without an `etag` are dropped.
///
/// # Errors
///
/// Returns [`YoutubeError`] if the category listing fails or a probe cannot
/// reach the API.
pub async fn resolve_categories(client: &YoutubeClient) -> Result<CategoryMap, YoutubeError> {
    let listed = client.list_categories().await?;
    let listed_count = listed.len();

    let mut map = CategoryMap::new();
    for category in listed {
        if client.has_most_popular(&category.id).await? {
            map.insert(category.name, category.id);
        } else {
            tracing::debug!(
                category_id = %category.id,
                category = %category.name,
                "skipping category without mostPopular chart"
            );
        }
    }

    tracing::info!(
        listed = listed_count,
        accepted = map.len(),
        "resolved video categories"
    );
    Ok(map)
}
