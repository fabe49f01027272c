//! Command handlers for the CLI.

use vidpulse_core::VideoRecord;
use vidpulse_youtube::{aggregate_category, resolve_categories, YoutubeClient};

/// Prints every browsable category as `name<TAB>id`.
pub(crate) async fn run_categories(client: &YoutubeClient) -> anyhow::Result<()> {
    let categories = resolve_categories(client).await?;
    for category in categories.iter() {
        println!("{}\t{}", category.name, category.id);
    }
    Ok(())
}

/// Resolves `name` to a category ID and prints its trending videos.
pub(crate) async fn run_trending(
    client: &YoutubeClient,
    name: &str,
    json: bool,
) -> anyhow::Result<()> {
    let categories = resolve_categories(client).await?;
    let Some(category_id) = categories.id_for(name) else {
        let known: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        anyhow::bail!(
            "unknown category '{name}'; available: {}",
            known.join(", ")
        );
    };

    let records = aggregate_category(client, category_id).await?;
    tracing::info!(category = name, video_count = records.len(), "aggregated trending videos");

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}", format_record(record));
        }
    }
    Ok(())
}

pub(crate) fn format_record(record: &VideoRecord) -> String {
    format!(
        "{}\n  {} views | {}\n  top comment ({} likes): {}\n",
        record.title,
        record.view_count,
        record.url,
        record.top_comment_like_count,
        record.top_comment_text,
    )
}
