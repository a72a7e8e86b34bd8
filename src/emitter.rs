use crate::config::FeedSettings;
use crate::types::{PublishableEntry, Result};
use rss::{Channel, ChannelBuilder, Item, ItemBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Build the RSS channel for one run's accumulated entries.
pub fn build_channel(entries: &[PublishableEntry], settings: &FeedSettings) -> Channel {
    let items: Vec<Item> = entries.iter().map(build_item).collect();

    ChannelBuilder::default()
        .title(settings.title.clone())
        .link(settings.link.clone())
        .description(settings.description.clone())
        .items(items)
        .build()
}

fn build_item(entry: &PublishableEntry) -> Item {
    ItemBuilder::default()
        .title(Some(entry.title.clone()))
        .link(Some(entry.link.clone()))
        .description(Some(render_description(&entry.category, &entry.body)))
        .build()
}

/// Item description: category label first, then the display text with
/// newlines converted to explicit line breaks.
pub fn render_description(category: &str, body: &str) -> String {
    format!(
        "[Category: {}]<br/><br/>{}",
        category,
        body.replace('\n', "<br/>")
    )
}

/// Write the channel to `path`, truncating any previous feed. This runs
/// once per run even with zero items, so the artifact never goes stale.
pub fn write_feed(path: &Path, channel: &Channel) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    channel.pretty_write_to(&mut writer, b' ', 2)?;
    writer.flush()?;
    info!(
        "Wrote feed with {} items to {}",
        channel.items().len(),
        path.display()
    );
    Ok(())
}
