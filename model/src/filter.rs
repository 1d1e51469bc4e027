use crate::error::{self, Result};
use aws_sdk_emr::model::ClusterState;
use aws_smithy_types::DateTime;
use chrono::{NaiveDate, NaiveTime};
use snafu::ResultExt;

/// Server-side filters for cluster listing calls.
#[derive(Clone, Debug, Default)]
pub struct ClusterFilters {
    pub(crate) states: Vec<ClusterState>,
    pub(crate) created_after: Option<DateTime>,
    pub(crate) created_before: Option<DateTime>,
}

impl ClusterFilters {
    /// Build filters from raw inputs. Creation bounds are calendar dates (`YYYY-MM-DD`),
    /// interpreted as midnight UTC.
    pub fn new(
        states: Vec<ClusterState>,
        created_after: Option<&str>,
        created_before: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            states,
            created_after: created_after
                .map(|date| parse_filter_date("created_after", date))
                .transpose()?,
            created_before: created_before
                .map(|date| parse_filter_date("created_before", date))
                .transpose()?,
        })
    }

    /// Filters that restrict listing to clusters in the given states.
    pub fn states(states: Vec<ClusterState>) -> Self {
        Self {
            states,
            ..Self::default()
        }
    }
}

fn parse_filter_date(field: &str, value: &str) -> Result<DateTime> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .context(error::InvalidFilterDateSnafu { field, date: value })?;
    Ok(DateTime::from_secs(date.and_time(NaiveTime::MIN).timestamp()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;

    #[test]
    fn parses_calendar_date() {
        let parsed = parse_filter_date("created_after", "2023-01-01").unwrap();
        assert_eq!(parsed.secs(), 1672531200);
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(parse_filter_date("created_before", "01/02/2023").is_err());
        assert!(parse_filter_date("created_before", "2023-13-01").is_err());
    }

    #[test]
    fn builds_filters_with_bounds() {
        let filters = ClusterFilters::new(
            vec![ClusterState::Running],
            Some("2023-01-01"),
            Some("2023-02-01"),
        )
        .unwrap();
        assert_eq!(filters.states, vec![ClusterState::Running]);
        assert!(filters.created_after.is_some());
        assert!(filters.created_before.is_some());
    }
}
