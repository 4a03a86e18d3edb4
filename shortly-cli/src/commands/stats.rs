use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use shortly_shared::models::{SortKey, SortOrder, StatRow, sort_rows};

use crate::{api::ShortlyApi, commands::config::load_config, credentials::FileCredentials};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum SortColumn {
    /// Order by click count
    #[default]
    Clicks,
    /// Order by the position rows arrived in
    Received,
}

impl From<SortColumn> for SortKey {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Clicks => SortKey::ClickCount,
            SortColumn::Received => SortKey::ReceivedOrder,
        }
    }
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Column to sort by
    #[arg(long, value_enum, default_value = "clicks")]
    pub sort: SortColumn,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub ascending: bool,

    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub async fn run(args: StatsArgs) -> Result<()> {
    let config = load_config(args.config)?;
    let credentials = FileCredentials::load_default();
    let api = ShortlyApi::new(config, credentials)?;

    // A failed fetch renders the same empty state as "no data yet"; only
    // the log tells them apart.
    let rows = match api.stats().await {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!(%err, "stats fetch failed");
            Vec::new()
        }
    };

    if rows.is_empty() {
        println!("No shortened URLs yet.");
        return Ok(());
    }

    let order = if args.ascending {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };
    let sorted = sort_rows(&rows, args.sort.into(), order);
    print_table(&sorted);
    Ok(())
}

fn print_table(rows: &[StatRow]) {
    println!("{:<10}  {:<60}  {:>8}", "CODE", "ORIGINAL URL", "CLICKS");
    for row in rows {
        println!(
            "{:<10}  {:<60}  {:>8}",
            row.short_code,
            truncate(&row.original_url, 60),
            row.click_count
        );
    }
    println!();
    println!("{} total", rows.len());
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_maps_to_shared_keys() {
        assert_eq!(SortKey::from(SortColumn::Clicks), SortKey::ClickCount);
        assert_eq!(SortKey::from(SortColumn::Received), SortKey::ReceivedOrder);
    }

    #[test]
    fn test_truncate_keeps_short_urls_intact() {
        assert_eq!(truncate("https://a.io", 60), "https://a.io");
    }

    #[test]
    fn test_truncate_caps_long_urls() {
        let long = "x".repeat(100);
        let shortened = truncate(&long, 60);
        assert_eq!(shortened.chars().count(), 60);
        assert!(shortened.ends_with('…'));
    }
}
