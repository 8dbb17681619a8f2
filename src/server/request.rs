//! HTTP request types for the tracker API.
//!
//! Form fields and query parameters arrive as raw strings and are
//! validated here, before any store interaction. Empty strings count as
//! absent throughout, matching form-encoded clients that submit blank
//! fields.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::filter::LogQuery;
use crate::model::Session;

/// Form body for user creation.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserForm {
    #[serde(default)]
    pub username: String,
}

impl CreateUserForm {
    /// Returns the username, rejecting an empty or missing field.
    pub fn into_username(self) -> Result<String> {
        if self.username.is_empty() {
            return Err(Error::InvalidInput("username is required".to_string()));
        }
        Ok(self.username)
    }
}

/// Form body for appending an exercise session.
#[derive(Debug, Default, Deserialize)]
pub struct ExerciseForm {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

impl ExerciseForm {
    /// Validates the form and builds the session to append.
    ///
    /// `default_date` fills in for an omitted or empty `date` field.
    pub fn into_session(self, default_date: NaiveDate) -> Result<Session> {
        let description = match self.description {
            Some(description) if !description.is_empty() => description,
            _ => return Err(Error::InvalidInput("description is required".to_string())),
        };

        let duration = match self.duration.as_deref() {
            None | Some("") => {
                return Err(Error::InvalidInput("duration is required".to_string()));
            }
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                Error::InvalidInput(format!("duration must be an integer, got '{}'", raw))
            })?,
        };

        let date = parse_date_param(self.date.as_deref(), "date")?.unwrap_or(default_date);

        Ok(Session {
            description,
            duration,
            date,
        })
    }
}

/// Query parameters for log retrieval.
#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl TryFrom<LogParams> for LogQuery {
    type Error = Error;

    fn try_from(params: LogParams) -> Result<LogQuery> {
        Ok(LogQuery {
            from: parse_date_param(params.from.as_deref(), "from")?,
            to: parse_date_param(params.to.as_deref(), "to")?,
            limit: parse_limit_param(params.limit.as_deref())?,
        })
    }
}

/// Parses an optional `YYYY-MM-DD` parameter.
fn parse_date_param(raw: Option<&str>, name: &str) -> Result<Option<NaiveDate>> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Some).map_err(|_| {
            Error::InvalidInput(format!("{} must be a YYYY-MM-DD date, got '{}'", name, s))
        }),
    }
}

/// Parses an optional entry limit, clamping negative values to zero.
fn parse_limit_param(raw: Option<&str>) -> Result<Option<usize>> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => {
            let value = s
                .parse::<i64>()
                .map_err(|_| Error::InvalidInput(format!("limit must be an integer, got '{}'", s)))?;
            Ok(Some(value.max(0) as usize))
        }
    }
}
