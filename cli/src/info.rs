use crate::error::{self, Result};
use emrctl_model::filter::ClusterFilters;
use emrctl_model::inventory::{self, SortOrder};
use emrctl_model::{find, ClusterReport, ClusterState};
use serde::Serialize;
use snafu::ResultExt;
use structopt::StructOpt;

/// List clusters, with optional name and lifecycle filtering, newest first by default. The
/// matching clusters' details are printed to stdout as JSON.
#[derive(Debug, StructOpt)]
pub(crate) struct Info {
    /// A regular expression matched against cluster names, anchored at the start.
    #[structopt(long = "name")]
    name: Option<String>,
    /// Only list clusters in this lifecycle state, e.g. RUNNING or WAITING. Repeatable.
    #[structopt(long = "cluster-state", parse(from_str))]
    cluster_states: Vec<ClusterState>,
    /// Only list clusters created after this date (YYYY-MM-DD).
    #[structopt(long = "created-after")]
    created_after: Option<String>,
    /// Only list clusters created before this date (YYYY-MM-DD).
    #[structopt(long = "created-before")]
    created_before: Option<String>,
    /// Order clusters by creation time [ascending|descending].
    #[structopt(long = "sort-order", default_value = "descending")]
    sort_order: SortOrder,
}

#[derive(Debug, Serialize)]
struct ClustersOutput {
    clusters: Vec<ClusterReport>,
}

impl Info {
    pub(crate) async fn run(self, client: emrctl_model::Client) -> Result<()> {
        let filters = ClusterFilters::new(
            self.cluster_states,
            self.created_after.as_deref(),
            self.created_before.as_deref(),
        )
        .context(error::ModelSnafu)?;
        let pattern = self
            .name
            .as_deref()
            .map(find::compile_name_pattern)
            .transpose()
            .context(error::ModelSnafu)?;
        let clusters =
            inventory::list_clusters(&client, &filters, pattern.as_ref(), self.sort_order)
                .await
                .context(error::ModelSnafu)?;
        let output = ClustersOutput {
            clusters: clusters.iter().map(ClusterReport::from).collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context(error::JsonSerializeSnafu)?
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn everything_is_optional() {
        let info = Info::from_iter_safe(["info"]).unwrap();
        assert!(info.name.is_none());
        assert!(info.cluster_states.is_empty());
        assert!(info.created_after.is_none());
        assert!(info.created_before.is_none());
        assert_eq!(info.sort_order, SortOrder::Descending);
    }

    #[test]
    fn cluster_states_accumulate() {
        let info = Info::from_iter_safe([
            "info",
            "--cluster-state",
            "RUNNING",
            "--cluster-state",
            "WAITING",
        ])
        .unwrap();
        assert_eq!(
            info.cluster_states,
            vec![ClusterState::Running, ClusterState::Waiting]
        );
    }

    #[test]
    fn unknown_sort_orders_are_rejected() {
        assert!(Info::from_iter_safe(["info", "--sort-order", "sideways"]).is_err());
    }

    #[test]
    fn date_bounds_stay_raw_until_run() {
        let info = Info::from_iter_safe(["info", "--created-after", "2023-01-01"]).unwrap();
        assert_eq!(info.created_after.as_deref(), Some("2023-01-01"));
    }
}
