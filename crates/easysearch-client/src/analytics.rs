use chrono::NaiveDate;

use easysearch_core::Result;

use crate::client::Client;
use crate::paths;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive day range for the daily reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCount {
    pub day: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCount {
    pub query: String,
    pub count: u64,
}

/// Read-only engine analytics.
#[derive(Debug, Clone)]
pub struct AnalyticsApi {
    client: Client,
    engine_id: String,
}

impl AnalyticsApi {
    pub fn new(client: Client, engine_id: &str) -> Self {
        Self { client, engine_id: engine_id.to_string() }
    }

    /// Searches per day.
    pub fn searches(&self, range: Option<DateRange>) -> Result<Vec<DateCount>> {
        self.daily("searches", range)
    }

    /// Clicks on autocomplete suggestions per day.
    pub fn autoselects(&self, range: Option<DateRange>) -> Result<Vec<DateCount>> {
        self.daily("autoselects", range)
    }

    /// Most frequent queries; `paging` is `(page, per_page)`.
    pub fn top_queries(&self, paging: Option<(u32, u32)>) -> Result<Vec<QueryCount>> {
        let params = match paging {
            Some((page, per_page)) => vec![("page", page.to_string()), ("per_page", per_page.to_string())],
            None => Vec::new(),
        };
        let body = self.client.get(&paths::analytics(&self.engine_id, "top_queries"), &params)?;
        let rows: Vec<(String, u64)> = serde_json::from_str(&body)?;
        Ok(rows.into_iter().map(|(query, count)| QueryCount { query, count }).collect())
    }

    fn daily(&self, report: &str, range: Option<DateRange>) -> Result<Vec<DateCount>> {
        let params = match range {
            Some(DateRange { from, to }) => vec![
                ("start_date", from.format(DATE_FORMAT).to_string()),
                ("end_date", to.format(DATE_FORMAT).to_string()),
            ],
            None => Vec::new(),
        };
        let body = self.client.get(&paths::analytics(&self.engine_id, report), &params)?;
        let rows: Vec<(NaiveDate, u64)> = serde_json::from_str(&body)?;
        Ok(rows.into_iter().map(|(day, count)| DateCount { day, count }).collect())
    }
}
