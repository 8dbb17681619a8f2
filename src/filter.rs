//! Log filtering: a date-range selection composed with a count limit.
//!
//! This is the one piece of the service with actual logic in it. Given a
//! user's log and the optional `from`/`to`/`limit` query parameters, it
//! produces the view the log-retrieval endpoint returns.

use chrono::NaiveDate;

use crate::model::Session;

/// Filter parameters for a log retrieval.
///
/// Bounds are inclusive calendar dates. An absent bound leaves that side
/// of the range open; the date filter as a whole only runs when at least
/// one bound is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl LogQuery {
    fn has_date_filter(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}

/// Applies `query` to a log, returning the filtered and truncated view.
///
/// Filtering happens before truncation: `limit` keeps the first `limit`
/// entries that survive the date filter, in insertion order, not the
/// entries closest to `to`.
pub fn filter_log(log: Vec<Session>, query: &LogQuery) -> Vec<Session> {
    let mut entries = log;

    if query.has_date_filter() {
        let from = query.from.unwrap_or(NaiveDate::MIN);
        let to = query.to.unwrap_or(NaiveDate::MAX);
        entries.retain(|session| session.date >= from && session.date <= to);
    }

    if let Some(limit) = query.limit {
        entries.truncate(limit);
    }

    entries
}
