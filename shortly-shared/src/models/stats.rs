use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One shortened URL with its click count, unique by `short_code`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatRow {
    pub short_code: String,
    pub original_url: String,
    #[serde(default)]
    pub click_count: u64,
}

/// The shapes the stats endpoint has been observed to return.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StatsPayload {
    Rows(Vec<StatRow>),
    Wrapped { stats: Vec<StatRow> },
    Keyed(BTreeMap<String, StatRow>),
}

/// Normalize a stats response into a flat row list.
///
/// Accepts a bare array, an object with a `stats` array, or a keyed map of
/// row-like objects. Anything else is an empty list; the backend contract
/// does not guarantee row ordering in any of the shapes.
pub fn normalize_stats(value: serde_json::Value) -> Vec<StatRow> {
    match serde_json::from_value::<StatsPayload>(value) {
        Ok(StatsPayload::Rows(rows)) => rows,
        Ok(StatsPayload::Wrapped { stats }) => stats,
        Ok(StatsPayload::Keyed(map)) => map.into_values().collect(),
        Err(err) => {
            tracing::debug!(%err, "unrecognized stats payload, treating as empty");
            Vec::new()
        }
    }
}

/// What to order the table by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    ClickCount,
    /// The position each row arrived in, as a stand-in for creation time.
    ReceivedOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Descending,
    Ascending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Descending => Self::Ascending,
            Self::Ascending => Self::Descending,
        }
    }
}

/// Pure, client-local ordering over the fetched rows. Never persisted and
/// never sent to the backend.
pub fn sort_rows(rows: &[StatRow], key: SortKey, order: SortOrder) -> Vec<StatRow> {
    let mut indexed: Vec<(usize, StatRow)> = rows.iter().cloned().enumerate().collect();
    indexed.sort_by(|(left_pos, left), (right_pos, right)| {
        let ordering = match key {
            SortKey::ClickCount => left.click_count.cmp(&right.click_count),
            SortKey::ReceivedOrder => left_pos.cmp(right_pos),
        };
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    indexed.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(code: &str, clicks: u64) -> StatRow {
        StatRow {
            short_code: code.to_string(),
            original_url: format!("https://example.com/{code}"),
            click_count: clicks,
        }
    }

    #[test]
    fn test_normalize_bare_array() {
        let rows = normalize_stats(json!([
            {"shortCode": "a", "originalUrl": "u", "clickCount": 3}
        ]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].short_code, "a");
        assert_eq!(rows[0].click_count, 3);
    }

    #[test]
    fn test_normalize_wrapped_array() {
        let rows = normalize_stats(json!({
            "stats": [{"shortCode": "a", "originalUrl": "u", "clickCount": 3}]
        }));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].short_code, "a");
    }

    #[test]
    fn test_normalize_keyed_map() {
        let rows = normalize_stats(json!({
            "0": {"shortCode": "a", "originalUrl": "u", "clickCount": 3}
        }));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].click_count, 3);
    }

    #[test]
    fn test_three_shapes_normalize_identically() {
        let expected = vec![row_from_wire()];
        let bare = normalize_stats(json!([wire_row()]));
        let wrapped = normalize_stats(json!({"stats": [wire_row()]}));
        let keyed = normalize_stats(json!({"0": wire_row()}));

        assert_eq!(bare, expected);
        assert_eq!(wrapped, expected);
        assert_eq!(keyed, expected);
    }

    fn wire_row() -> serde_json::Value {
        json!({"shortCode": "a", "originalUrl": "u", "clickCount": 3})
    }

    fn row_from_wire() -> StatRow {
        StatRow {
            short_code: "a".to_string(),
            original_url: "u".to_string(),
            click_count: 3,
        }
    }

    #[test]
    fn test_unrecognized_shapes_are_empty() {
        assert!(normalize_stats(json!("nope")).is_empty());
        assert!(normalize_stats(json!(42)).is_empty());
        assert!(normalize_stats(json!({"use_mock": true})).is_empty());
        assert!(normalize_stats(json!(null)).is_empty());
    }

    #[test]
    fn test_missing_click_count_defaults_to_zero() {
        let rows = normalize_stats(json!([{"shortCode": "a", "originalUrl": "u"}]));
        assert_eq!(rows[0].click_count, 0);
    }

    #[test]
    fn test_sort_by_clicks() {
        let rows = vec![row("a", 5), row("b", 1), row("c", 9)];

        let descending = sort_rows(&rows, SortKey::ClickCount, SortOrder::Descending);
        let clicks: Vec<u64> = descending.iter().map(|r| r.click_count).collect();
        assert_eq!(clicks, vec![9, 5, 1]);

        let ascending = sort_rows(&rows, SortKey::ClickCount, SortOrder::Ascending);
        let clicks: Vec<u64> = ascending.iter().map(|r| r.click_count).collect();
        assert_eq!(clicks, vec![1, 5, 9]);
    }

    #[test]
    fn test_sort_by_received_order() {
        let rows = vec![row("first", 5), row("second", 1), row("third", 9)];

        let ascending = sort_rows(&rows, SortKey::ReceivedOrder, SortOrder::Ascending);
        let codes: Vec<&str> = ascending.iter().map(|r| r.short_code.as_str()).collect();
        assert_eq!(codes, vec!["first", "second", "third"]);

        let descending = sort_rows(&rows, SortKey::ReceivedOrder, SortOrder::Descending);
        let codes: Vec<&str> = descending.iter().map(|r| r.short_code.as_str()).collect();
        assert_eq!(codes, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let rows = vec![row("a", 5), row("b", 1)];
        let _ = sort_rows(&rows, SortKey::ClickCount, SortOrder::Descending);
        assert_eq!(rows[0].short_code, "a");
    }

    #[test]
    fn test_order_toggle() {
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
    }
}
